//! Core types for the train simulation
//!
//! These are plain value types shared by the track graph, trains and platforms.

use std::fmt;

/// Raw table value marking an absent connection
pub const NO_LINK: u8 = 0xFF;

/// Number of cells on the physical board (one LED per cell)
pub const CELL_COUNT: usize = 144;

/// Identifier of one cell of the track graph
/// This doubles as the LED index of the cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub u8);

impl CellId {
    /// Decode a raw table byte, mapping the `NO_LINK` sentinel to `None`
    pub const fn from_raw(raw: u8) -> Option<CellId> {
        if raw == NO_LINK {
            None
        } else {
            Some(CellId(raw))
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the two traversal sides of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Exit through the anode-side neighbors
    #[default]
    Anode,
    /// Exit through the cathode-side neighbors
    Cathode,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Anode => Side::Cathode,
            Side::Cathode => Side::Anode,
        }
    }
}

/// Which of the (up to) two neighbors on one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Primary,
    Secondary,
}

/// Opaque cargo marker carried by a car, zero means empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cargo(pub u8);

impl Cargo {
    pub const EMPTY: Cargo = Cargo(0);

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Game modes; only the base movement/cargo loop exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Animation,
}
