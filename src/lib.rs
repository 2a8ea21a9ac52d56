//! Train Board Simulation Library
//!
//! The simulation core of an LED-board train set: trains running over a fixed
//! track graph and platforms that fill with cargo for them to collect.

pub mod simulation;
