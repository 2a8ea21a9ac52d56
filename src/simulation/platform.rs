//! Loading platforms
//!
//! A platform sits beside one track cell and now and then fills up with
//! cargo. A train whose engine stands on that track cell picks it up.

use anyhow::{bail, Context, Result};
use log::debug;

use super::board::LedSink;
use super::random::RandomSource;
use super::track::TrackGraph;
use super::types::CellId;

/// Per-tick odds of cargo appearing are one in this many
pub const DEFAULT_SPAWN_ODDS: u16 = 800;

/// LED brightness of a platform holding cargo
pub const PLATFORM_LADEN_BRIGHTNESS: u8 = 16;

/// A platform bound to the track cell beside it
#[derive(Debug, Clone)]
pub struct Platform {
    platform_cell: CellId,
    track_cell: CellId,
    occupied: bool,
    spawn_odds: u16,
}

impl Platform {
    pub fn new(platform_cell: CellId, track_cell: CellId) -> Self {
        Self {
            platform_cell,
            track_cell,
            occupied: false,
            spawn_odds: DEFAULT_SPAWN_ODDS,
        }
    }

    /// Wire a platform from its own topology entry
    pub fn from_graph(graph: &TrackGraph, platform_cell: CellId) -> Result<Self> {
        let cell = graph
            .cell(platform_cell)
            .with_context(|| format!("Platform cell {} is not on the board", platform_cell))?;
        if !cell.is_platform() {
            bail!("Cell {} is not a platform cell", platform_cell);
        }
        // Platform links are symmetric, the anode one names the track beside it
        let track_cell = cell
            .anode_next
            .with_context(|| format!("Platform {} has no adjacent track", platform_cell))?;
        Ok(Self::new(platform_cell, track_cell))
    }

    pub fn with_spawn_odds(mut self, spawn_odds: u16) -> Self {
        self.spawn_odds = spawn_odds.max(1);
        self
    }

    /// Roll for new cargo if the platform is empty
    pub fn tick(&mut self, rng: &mut impl RandomSource, leds: &mut impl LedSink) {
        if self.occupied {
            return;
        }
        if rng.random_range(0, self.spawn_odds) == 0 {
            self.occupied = true;
            leds.set_led(self.platform_cell, PLATFORM_LADEN_BRIGHTNESS);
            debug!("Cargo waiting at platform {}", self.platform_cell);
        }
    }

    pub fn has_cargo(&self) -> bool {
        self.occupied
    }

    /// Hand the cargo to a train. Rendering is left to the caller.
    pub fn load_cargo(&mut self) {
        self.occupied = false;
    }

    /// Put cargo on the platform without rendering it
    pub fn set_cargo(&mut self) {
        self.occupied = true;
    }

    pub fn platform_cell(&self) -> CellId {
        self.platform_cell
    }

    pub fn track_cell(&self) -> CellId {
        self.track_cell
    }

    pub fn spawn_odds(&self) -> u16 {
        self.spawn_odds
    }
}
