//! Train board simulation core
//!
//! Everything the game needs to run without hardware: the track graph,
//! trains, platforms and the dispatcher. LEDs, digits and randomness are
//! reached through the traits in `board` and `random`.

mod board;
mod config;
mod game;
mod game_state;
mod layout;
mod platform;
mod random;
mod track;
mod train;
mod types;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use board::{DigitSink, FrameBuffer, LedSink, BOARD_COLUMNS, DISPLAY_MAX};
pub use config::{GameConfig, TrainConfig};
pub use game::Game;
#[allow(unused_imports)]
pub use game_state::GameState;
#[allow(unused_imports)]
pub use layout::{BOARD_CELLS, PLATFORM_CELLS};
#[allow(unused_imports)]
pub use platform::{Platform, DEFAULT_SPAWN_ODDS, PLATFORM_LADEN_BRIGHTNESS};
pub use random::{RandomSource, SimRng};
#[allow(unused_imports)]
pub use track::{TrackCell, TrackGraph};
#[allow(unused_imports)]
pub use train::{
    Car, Train, CAR_EMPTY_BRIGHTNESS, CAR_FULL_BRIGHTNESS, INITIAL_SPEED_MAX, INITIAL_SPEED_MIN,
    MAX_CARS, MAX_SPEED, MIN_SPEED,
};
#[allow(unused_imports)]
pub use types::{Branch, Cargo, CellId, GameMode, Side, CELL_COUNT, NO_LINK};
