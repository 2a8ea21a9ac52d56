//! Train movement logic for the simulation
//!
//! A train is a chain of cars. Only the engine (car 0) looks at the track
//! graph; every other car follows into the cell the car ahead just left.
//! The engine's exit side is re-derived after each move from the cell it
//! arrived at and the cell it came from, so no route is ever stored.

use log::{debug, info, trace, warn};

use super::board::LedSink;
use super::random::RandomSource;
use super::track::TrackGraph;
use super::types::{Branch, Cargo, CellId, Side};

/// Longest chain a train can grow to
pub const MAX_CARS: usize = 5;

/// Speed bounds; the accumulator must reach `MAX_SPEED` for one move
pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 100;

/// Range a freshly initialised train draws its speed from
pub const INITIAL_SPEED_MIN: u8 = 10;
pub const INITIAL_SPEED_MAX: u8 = 30;

/// LED brightness of a car carrying cargo
pub const CAR_FULL_BRIGHTNESS: u8 = 200;
/// LED brightness of an empty car
pub const CAR_EMPTY_BRIGHTNESS: u8 = 50;

/// One car of a train
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Car {
    pub location: CellId,
    pub cargo: Cargo,
}

impl Car {
    pub fn new(location: CellId, cargo: Cargo) -> Self {
        Self { location, cargo }
    }

    pub fn brightness(&self) -> u8 {
        if self.cargo.is_empty() {
            CAR_EMPTY_BRIGHTNESS
        } else {
            CAR_FULL_BRIGHTNESS
        }
    }
}

/// A chain of cars moving over the track graph
#[derive(Debug, Clone)]
pub struct Train {
    /// Front to back; index 0 is the engine
    cars: Vec<Car>,
    /// Side the engine leaves its current cell through
    direction: Side,
    speed: u8,
    /// Sub-cell progress, a move happens each time it reaches `MAX_SPEED`
    speed_counter: u8,
}

impl Default for Train {
    fn default() -> Self {
        Self::new()
    }
}

impl Train {
    /// An empty train; call `init` to place its engine
    pub fn new() -> Self {
        Self {
            cars: Vec::with_capacity(MAX_CARS),
            direction: Side::Anode,
            speed: MIN_SPEED,
            speed_counter: 0,
        }
    }

    /// Reset to a single engine at `location` with a random speed
    pub fn init(
        &mut self,
        location: CellId,
        cargo: Cargo,
        rng: &mut impl RandomSource,
        leds: &mut impl LedSink,
    ) {
        self.speed = rng.random_range(INITIAL_SPEED_MIN as u16, INITIAL_SPEED_MAX as u16) as u8;
        self.speed_counter = 0;
        self.direction = Side::Anode;

        let engine = Car::new(location, cargo);
        self.cars.clear();
        self.cars.push(engine);
        leds.set_led(location, engine.brightness());

        info!("Train initialized at {} with speed {}", location, self.speed);
    }

    /// Accumulate speed and, once a full cell of progress is reached, move
    /// every car one cell. Returns true if the train moved.
    pub fn advance(
        &mut self,
        graph: &TrackGraph,
        rng: &mut impl RandomSource,
        leds: &mut impl LedSink,
    ) -> bool {
        let Some(engine) = self.cars.first().copied() else {
            return false;
        };

        self.speed_counter = self.speed_counter.saturating_add(self.speed);
        if self.speed_counter < MAX_SPEED {
            return false;
        }

        let current = engine.location;
        let Some(mut next) = graph.neighbor(current, self.direction, Branch::Primary) else {
            warn!(
                "Train stopped at dead end {} ({:?} side)",
                current, self.direction
            );
            debug_assert!(false, "train reached a dead end at cell {}", current);
            return false;
        };
        // Progress is only spent on a move that actually happens
        self.speed_counter -= MAX_SPEED;

        // The only place a route is chosen: a fair coin at every fork
        if let Some(fork) = graph.neighbor(current, self.direction, Branch::Secondary) {
            if rng.random_range(0, 2) == 0 {
                next = fork;
            }
        }

        // Followers move from the rear so no location is overwritten unread
        if let Some(caboose) = self.cars.last() {
            leds.set_led(caboose.location, 0);
        }
        for i in (1..self.cars.len()).rev() {
            self.cars[i].location = self.cars[i - 1].location;
            leds.set_led(self.cars[i].location, self.cars[i].brightness());
        }

        self.cars[0].location = next;
        leds.set_led(next, self.cars[0].brightness());

        // Entering through the anode side means leaving through the cathode side
        self.direction = if graph.links_to(next, Side::Anode, current) {
            Side::Cathode
        } else {
            Side::Anode
        };

        trace!("Train advanced {} -> {} ({:?})", current, next, self.direction);
        true
    }

    /// Couple a new caboose behind the current one. The engine counts
    /// towards `MAX_CARS`, so at most `MAX_CARS - 1` cars fit behind it.
    /// Returns false without changing anything when the train is full, has
    /// no cars, or the track ends behind the caboose.
    pub fn add_car(&mut self, cargo: Cargo, graph: &TrackGraph, leds: &mut impl LedSink) -> bool {
        if self.cars.len() >= MAX_CARS {
            return false;
        }
        let Some(caboose) = self.cars.last().copied() else {
            return false;
        };

        let caboose_exit = match self.cars.len() {
            1 => self.direction,
            len => {
                let ahead = self.cars[len - 2].location;
                if graph.links_to(caboose.location, Side::Cathode, ahead) {
                    Side::Cathode
                } else {
                    Side::Anode
                }
            }
        };

        let Some(location) =
            graph.neighbor(caboose.location, caboose_exit.opposite(), Branch::Primary)
        else {
            return false;
        };

        let car = Car::new(location, cargo);
        self.cars.push(car);
        leds.set_led(location, car.brightness());

        debug!("Added car at {}", location);
        true
    }

    /// Uncouple the caboose. The engine is never removed.
    pub fn remove_car(&mut self, leds: &mut impl LedSink) -> bool {
        if self.cars.len() <= 1 {
            return false;
        }
        match self.cars.pop() {
            Some(car) => {
                leds.set_led(car.location, 0);
                debug!("Removed car at {}", car.location);
                true
            }
            None => false,
        }
    }

    /// Take every car off the board
    pub fn clear(&mut self, leds: &mut impl LedSink) {
        for car in self.cars.drain(..) {
            leds.set_led(car.location, 0);
        }
        self.speed_counter = 0;
    }

    /// Location of the engine
    pub fn front(&self) -> Option<CellId> {
        self.cars.first().map(|car| car.location)
    }

    pub fn caboose(&self) -> Option<&Car> {
        self.cars.last()
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn at_location(&self, cell: CellId) -> bool {
        self.cars.iter().any(|car| car.location == cell)
    }

    pub fn direction(&self) -> Side {
        self.direction
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn speed_counter(&self) -> u8 {
        self.speed_counter
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }
}
