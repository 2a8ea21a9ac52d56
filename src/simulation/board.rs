//! Hardware collaborators of the simulation
//!
//! The LED matrix and the digit display are write-only from the point of view
//! of the game. `FrameBuffer` stands in for both when running headless.

use super::types::{CellId, CELL_COUNT};

/// Width of the LED matrix in cells; the board is 16 x 9
pub const BOARD_COLUMNS: usize = 16;

/// Largest value the three-digit display can show
pub const DISPLAY_MAX: u16 = 999;

/// Write-only LED intensity output
pub trait LedSink {
    fn set_led(&mut self, cell: CellId, brightness: u8);
}

/// Write-only numeric display output
pub trait DigitSink {
    fn display_number(&mut self, value: u16);

    fn clear(&mut self);
}

/// In-memory board: one brightness per cell plus the digit display
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    leds: [u8; CELL_COUNT],
    digits: Option<u16>,
    /// Total LED writes, including repeated ones
    pub writes: usize,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            leds: [0; CELL_COUNT],
            digits: None,
            writes: 0,
        }
    }

    /// Last brightness written to `cell` (zero for unknown cells)
    pub fn brightness(&self, cell: CellId) -> u8 {
        self.leds.get(cell.index()).copied().unwrap_or(0)
    }

    pub fn lit_count(&self) -> usize {
        self.leds.iter().filter(|&&b| b > 0).count()
    }

    /// Number currently shown, `None` when blank
    pub fn digits(&self) -> Option<u16> {
        self.digits
    }

    /// Rows of the matrix as text, brightest LEDs drawn heaviest
    pub fn render_rows(&self) -> Vec<String> {
        self.leds
            .chunks(BOARD_COLUMNS)
            .map(|row| row.iter().map(|&b| brightness_glyph(b)).collect())
            .collect()
    }
}

fn brightness_glyph(brightness: u8) -> char {
    match brightness {
        0 => '.',
        1..=31 => 'p',
        32..=99 => 'o',
        _ => '#',
    }
}

impl LedSink for FrameBuffer {
    fn set_led(&mut self, cell: CellId, brightness: u8) {
        self.writes += 1;
        if let Some(led) = self.leds.get_mut(cell.index()) {
            *led = brightness;
        }
    }
}

impl DigitSink for FrameBuffer {
    fn display_number(&mut self, value: u16) {
        self.digits = Some(value.min(DISPLAY_MAX));
    }

    fn clear(&mut self) {
        self.digits = None;
    }
}
