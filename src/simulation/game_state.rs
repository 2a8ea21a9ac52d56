//! Game state tracking for the train board
//!
//! Counters and flags the dispatcher keeps between ticks.

use super::board::DISPLAY_MAX;
use super::types::GameMode;

/// Bookkeeping for one game
#[derive(Debug, Clone)]
pub struct GameState {
    pub mode: GameMode,

    /// Over until the first restart; no rule ends a running game
    pub is_over: bool,

    /// Cargo picked up since the last restart
    pub cargo_loaded: u32,

    /// Ticks run since the last restart
    pub ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A game waiting for its first restart
    pub fn new() -> Self {
        Self {
            mode: GameMode::Animation,
            is_over: true,
            cargo_loaded: 0,
            ticks: 0,
        }
    }

    /// Clear counters and start running
    pub fn start(&mut self) {
        self.cargo_loaded = 0;
        self.ticks = 0;
        self.is_over = false;
    }

    pub fn update(&mut self) {
        self.ticks += 1;
    }

    /// Count one pickup and return the new total
    pub fn record_pickup(&mut self) -> u32 {
        self.cargo_loaded += 1;
        self.cargo_loaded
    }

    /// Value for the three-digit display
    pub fn display_value(&self) -> u16 {
        (self.cargo_loaded % (DISPLAY_MAX as u32 + 1)) as u16
    }

    pub fn summary(&self) -> String {
        format!(
            "Mode: {:?} | Ticks: {} | Cargo loaded: {} | Over: {}",
            self.mode, self.ticks, self.cargo_loaded, self.is_over
        )
    }
}
