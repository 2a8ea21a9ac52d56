//! Compiled-in layout of the physical board
//!
//! Each row is one cell, indexed by its LED number. Platform cells point all
//! four links at the track cell they sit beside.

use super::track::TrackCell;
use super::types::{CELL_COUNT, NO_LINK};

/// Cells that carry a loading platform
pub const PLATFORM_CELLS: [u8; 27] = [
    0x01, 0x05, 0x06, 0x0F, 0x13, 0x15, 0x1A, 0x1C, 0x23, //
    0x28, 0x2C, 0x31, 0x3A, 0x3C, 0x40, 0x41, 0x43, 0x4B, //
    0x56, 0x58, 0x6C, 0x71, 0x75, 0x79, 0x7C, 0x7E, 0x86,
];

// anode, cathode, anode2, cathode2
pub const BOARD_CELLS: [TrackCell; CELL_COUNT] = [
    TrackCell::raw(0x61, 0x11, NO_LINK, NO_LINK), // 0x00
    TrackCell::platform(0x20), // 0x01
    TrackCell::raw(0x30, 0x03, NO_LINK, NO_LINK), // 0x02
    TrackCell::raw(0x70, 0x02, NO_LINK, NO_LINK), // 0x03
    TrackCell::raw(0x50, 0x82, NO_LINK, NO_LINK), // 0x04
    TrackCell::platform(0x60), // 0x05
    TrackCell::platform(0x70), // 0x06
    TrackCell::raw(0x80, 0x42, NO_LINK, NO_LINK), // 0x07
    TrackCell::raw(0x0D, 0x69, NO_LINK, 0x1D), // 0x08
    TrackCell::raw(0x68, 0x2D, NO_LINK, NO_LINK), // 0x09
    TrackCell::raw(0x48, 0x38, NO_LINK, NO_LINK), // 0x0A
    TrackCell::raw(0x3B, 0x5C, NO_LINK, NO_LINK), // 0x0B
    TrackCell::raw(0x18, 0x39, NO_LINK, NO_LINK), // 0x0C
    TrackCell::raw(0x08, 0x68, NO_LINK, NO_LINK), // 0x0D
    TrackCell::raw(0x4C, 0x4E, NO_LINK, NO_LINK), // 0x0E
    TrackCell::platform(0x88), // 0x0F
    TrackCell::raw(0x49, 0x20, NO_LINK, NO_LINK), // 0x10
    TrackCell::raw(0x00, 0x21, NO_LINK, NO_LINK), // 0x11
    TrackCell::raw(0x29, 0x33, NO_LINK, NO_LINK), // 0x12
    TrackCell::platform(0x53), // 0x13
    TrackCell::raw(0x51, 0x54, NO_LINK, NO_LINK), // 0x14
    TrackCell::platform(0x61), // 0x15
    TrackCell::raw(0x53, 0x51, NO_LINK, NO_LINK), // 0x16
    TrackCell::raw(0x1E, 0x81, NO_LINK, NO_LINK), // 0x17
    TrackCell::raw(0x4F, 0x0C, NO_LINK, NO_LINK), // 0x18
    TrackCell::raw(0x59, 0x4A, NO_LINK, NO_LINK), // 0x19
    TrackCell::platform(0x39), // 0x1A
    TrackCell::raw(0x69, 0x49, NO_LINK, NO_LINK), // 0x1B
    TrackCell::platform(0x59), // 0x1C
    TrackCell::raw(0x08, 0x48, NO_LINK, NO_LINK), // 0x1D
    TrackCell::raw(0x17, 0x1F, NO_LINK, NO_LINK), // 0x1E
    TrackCell::raw(0x1E, 0x5F, NO_LINK, NO_LINK), // 0x1F
    TrackCell::raw(0x60, 0x10, NO_LINK, NO_LINK), // 0x20
    TrackCell::raw(0x32, 0x11, NO_LINK, NO_LINK), // 0x21
    TrackCell::raw(0x62, 0x30, NO_LINK, NO_LINK), // 0x22
    TrackCell::platform(0x73), // 0x23
    TrackCell::raw(0x52, 0x76, NO_LINK, NO_LINK), // 0x24
    TrackCell::raw(0x63, 0x62, NO_LINK, NO_LINK), // 0x25
    TrackCell::raw(0x52, 0x72, NO_LINK, NO_LINK), // 0x26
    TrackCell::raw(0x82, 0x89, 0x42, 0x8C), // 0x27
    TrackCell::platform(0x09), // 0x28
    TrackCell::raw(0x2B, 0x12, NO_LINK, NO_LINK), // 0x29
    TrackCell::raw(0x6A, 0x6B, NO_LINK, NO_LINK), // 0x2A
    TrackCell::raw(0x29, 0x4E, NO_LINK, NO_LINK), // 0x2B
    TrackCell::platform(0x5A), // 0x2C
    TrackCell::raw(0x09, 0x6A, NO_LINK, NO_LINK), // 0x2D
    TrackCell::raw(0x8D, 0x7A, NO_LINK, NO_LINK), // 0x2E
    TrackCell::raw(0x8A, 0x7A, NO_LINK, NO_LINK), // 0x2F
    TrackCell::raw(0x22, 0x02, NO_LINK, NO_LINK), // 0x30
    TrackCell::platform(0x12), // 0x31
    TrackCell::raw(0x21, 0x62, NO_LINK, NO_LINK), // 0x32
    TrackCell::raw(0x83, 0x12, NO_LINK, NO_LINK), // 0x33
    TrackCell::raw(0x53, 0x50, NO_LINK, NO_LINK), // 0x34
    TrackCell::raw(0x63, 0x36, NO_LINK, NO_LINK), // 0x35
    TrackCell::raw(0x73, 0x35, NO_LINK, NO_LINK), // 0x36
    TrackCell::raw(0x84, 0x47, NO_LINK, NO_LINK), // 0x37
    TrackCell::raw(0x39, 0x0A, NO_LINK, NO_LINK), // 0x38
    TrackCell::raw(0x38, 0x0C, NO_LINK, NO_LINK), // 0x39
    TrackCell::platform(0x5B), // 0x3A
    TrackCell::raw(0x0B, 0x4D, NO_LINK, NO_LINK), // 0x3B
    TrackCell::platform(0x5D), // 0x3C
    TrackCell::raw(0x2A, 0x6F, NO_LINK, NO_LINK), // 0x3D
    TrackCell::raw(0x7B, 0x6F, NO_LINK, NO_LINK), // 0x3E
    TrackCell::raw(0x8B, 0x8E, NO_LINK, NO_LINK), // 0x3F
    TrackCell::platform(0x03), // 0x40
    TrackCell::platform(0x16), // 0x41
    TrackCell::raw(0x07, 0x27, NO_LINK, NO_LINK), // 0x42
    TrackCell::platform(0x72), // 0x43
    TrackCell::raw(0x54, 0x55, NO_LINK, NO_LINK), // 0x44
    TrackCell::raw(0x67, 0x64, NO_LINK, NO_LINK), // 0x45
    TrackCell::raw(0x87, 0x74, NO_LINK, NO_LINK), // 0x46
    TrackCell::raw(0x85, 0x37, NO_LINK, 0x83), // 0x47
    TrackCell::raw(0x1D, 0x0A, NO_LINK, NO_LINK), // 0x48
    TrackCell::raw(0x1B, 0x10, NO_LINK, NO_LINK), // 0x49
    TrackCell::raw(0x19, 0x4E, NO_LINK, NO_LINK), // 0x4A
    TrackCell::platform(0x3B), // 0x4B
    TrackCell::raw(0x6E, 0x0E, NO_LINK, NO_LINK), // 0x4C
    TrackCell::raw(0x3B, 0x88, NO_LINK, NO_LINK), // 0x4D
    TrackCell::raw(0x2B, 0x0E, 0x4A, 0x78), // 0x4E
    TrackCell::raw(0x18, 0x8C, NO_LINK, NO_LINK), // 0x4F
    TrackCell::raw(0x04, 0x34, NO_LINK, NO_LINK), // 0x50
    TrackCell::raw(0x16, 0x14, NO_LINK, NO_LINK), // 0x51
    TrackCell::raw(0x24, 0x26, NO_LINK, NO_LINK), // 0x52
    TrackCell::raw(0x34, 0x16, NO_LINK, NO_LINK), // 0x53
    TrackCell::raw(0x14, 0x44, NO_LINK, NO_LINK), // 0x54
    TrackCell::raw(0x44, 0x66, NO_LINK, NO_LINK), // 0x55
    TrackCell::platform(0x87), // 0x56
    TrackCell::raw(0x77, 0x85, NO_LINK, NO_LINK), // 0x57
    TrackCell::platform(0x0C), // 0x58
    TrackCell::raw(0x7F, 0x19, NO_LINK, NO_LINK), // 0x59
    TrackCell::raw(0x5B, 0x8A, NO_LINK, NO_LINK), // 0x5A
    TrackCell::raw(0x5D, 0x5A, NO_LINK, NO_LINK), // 0x5B
    TrackCell::raw(0x78, 0x0B, NO_LINK, NO_LINK), // 0x5C
    TrackCell::raw(0x5B, 0x6D, NO_LINK, NO_LINK), // 0x5D
    TrackCell::raw(0x8D, 0x5F, NO_LINK, NO_LINK), // 0x5E
    TrackCell::raw(0x5E, 0x1F, NO_LINK, NO_LINK), // 0x5F
    TrackCell::raw(0x61, 0x20, NO_LINK, NO_LINK), // 0x60
    TrackCell::raw(0x60, 0x00, NO_LINK, NO_LINK), // 0x61
    TrackCell::raw(0x25, 0x32, NO_LINK, 0x22), // 0x62
    TrackCell::raw(0x25, 0x35, NO_LINK, NO_LINK), // 0x63
    TrackCell::raw(0x45, 0x65, NO_LINK, NO_LINK), // 0x64
    TrackCell::raw(0x66, 0x64, NO_LINK, NO_LINK), // 0x65
    TrackCell::raw(0x65, 0x76, 0x55, NO_LINK), // 0x66
    TrackCell::raw(0x45, 0x74, NO_LINK, NO_LINK), // 0x67
    TrackCell::raw(0x0D, 0x09, NO_LINK, NO_LINK), // 0x68
    TrackCell::raw(0x1B, 0x08, NO_LINK, NO_LINK), // 0x69
    TrackCell::raw(0x2D, 0x2A, NO_LINK, NO_LINK), // 0x6A
    TrackCell::raw(0x8E, 0x2A, NO_LINK, NO_LINK), // 0x6B
    TrackCell::platform(0x4D), // 0x6C
    TrackCell::raw(0x8B, 0x5D, NO_LINK, NO_LINK), // 0x6D
    TrackCell::raw(0x8F, 0x4C, NO_LINK, NO_LINK), // 0x6E
    TrackCell::raw(0x3E, 0x3D, NO_LINK, NO_LINK), // 0x6F
    TrackCell::raw(0x03, 0x80, NO_LINK, NO_LINK), // 0x70
    TrackCell::platform(0x51), // 0x71
    TrackCell::raw(0x73, 0x26, NO_LINK, NO_LINK), // 0x72
    TrackCell::raw(0x72, 0x36, NO_LINK, NO_LINK), // 0x73
    TrackCell::raw(0x46, 0x67, NO_LINK, NO_LINK), // 0x74
    TrackCell::platform(0x46), // 0x75
    TrackCell::raw(0x66, 0x24, NO_LINK, NO_LINK), // 0x76
    TrackCell::raw(0x87, 0x57, NO_LINK, NO_LINK), // 0x77
    TrackCell::raw(0x4E, 0x5C, NO_LINK, NO_LINK), // 0x78
    TrackCell::platform(0x1E), // 0x79
    TrackCell::raw(0x2E, 0x2F, NO_LINK, NO_LINK), // 0x7A
    TrackCell::raw(0x88, 0x3E, NO_LINK, NO_LINK), // 0x7B
    TrackCell::platform(0x17), // 0x7C
    TrackCell::raw(0x7F, 0x8D, NO_LINK, NO_LINK), // 0x7D
    TrackCell::platform(0x6E), // 0x7E
    TrackCell::raw(0x7D, 0x59, NO_LINK, NO_LINK), // 0x7F
    TrackCell::raw(0x70, 0x07, NO_LINK, NO_LINK), // 0x80
    TrackCell::raw(0x84, 0x17, NO_LINK, NO_LINK), // 0x81
    TrackCell::raw(0x04, 0x27, NO_LINK, NO_LINK), // 0x82
    TrackCell::raw(0x47, 0x33, NO_LINK, NO_LINK), // 0x83
    TrackCell::raw(0x81, 0x37, NO_LINK, NO_LINK), // 0x84
    TrackCell::raw(0x57, 0x47, NO_LINK, NO_LINK), // 0x85
    TrackCell::platform(0x74), // 0x86
    TrackCell::raw(0x46, 0x77, NO_LINK, NO_LINK), // 0x87
    TrackCell::raw(0x7B, 0x4D, NO_LINK, NO_LINK), // 0x88
    TrackCell::raw(0x8F, 0x27, NO_LINK, NO_LINK), // 0x89
    TrackCell::raw(0x2F, 0x5A, NO_LINK, NO_LINK), // 0x8A
    TrackCell::raw(0x6D, 0x3F, NO_LINK, NO_LINK), // 0x8B
    TrackCell::raw(0x4F, 0x27, NO_LINK, NO_LINK), // 0x8C
    TrackCell::raw(0x2E, 0x5E, NO_LINK, 0x7D), // 0x8D
    TrackCell::raw(0x6B, 0x3F, NO_LINK, NO_LINK), // 0x8E
    TrackCell::raw(0x89, 0x6E, NO_LINK, NO_LINK), // 0x8F
];
