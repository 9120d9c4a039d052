//! 8x8 glyph bitmaps
//!
//! Each glyph is eight row patterns, top row first. Bit 0 is the leftmost
//! pixel as mounted. The last row is always blank and doubles as the gap
//! between characters.

use countdown_core::digits::MAX_GLYPH;

/// One 8x8 glyph, top row first
pub type Bitmap = [u8; 8];

/// All pixels off
pub const BLANK: Bitmap = [0; 8];

/// Digits 0-9 followed by hex digits a-f, indexed by glyph code
pub const GLYPHS: [Bitmap; 16] = [
    // 0
    [
        0b0001_1000,
        0b0010_0100,
        0b0010_0100,
        0b0010_0100,
        0b0010_0100,
        0b0010_0100,
        0b0001_1000,
        0b0000_0000,
    ],
    // 1
    [
        0b0001_0000,
        0b0001_1000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0011_1000,
        0b0000_0000,
    ],
    // 2
    [
        0b0001_1000,
        0b0010_0100,
        0b0010_0000,
        0b0001_0000,
        0b0000_1000,
        0b0000_0100,
        0b0011_1100,
        0b0000_0000,
    ],
    // 3
    [
        0b0001_1000,
        0b0010_0100,
        0b0010_0000,
        0b0001_1000,
        0b0010_0000,
        0b0010_0100,
        0b0001_1000,
        0b0000_0000,
    ],
    // 4
    [
        0b0001_0000,
        0b0001_1000,
        0b0001_0100,
        0b0011_1100,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0000_0000,
    ],
    // 5
    [
        0b0011_1100,
        0b0000_0100,
        0b0001_1100,
        0b0010_0000,
        0b0010_0000,
        0b0010_0100,
        0b0001_1000,
        0b0000_0000,
    ],
    // 6
    [
        0b0001_1000,
        0b0010_0100,
        0b0000_0100,
        0b0001_1100,
        0b0010_0100,
        0b0010_0100,
        0b0001_1000,
        0b0000_0000,
    ],
    // 7
    [
        0b0011_1100,
        0b0010_0000,
        0b0001_0000,
        0b0000_1000,
        0b0000_1000,
        0b0000_1000,
        0b0000_1000,
        0b0000_0000,
    ],
    // 8
    [
        0b0001_1000,
        0b0010_0100,
        0b0010_0100,
        0b0001_1000,
        0b0010_0100,
        0b0010_0100,
        0b0001_1000,
        0b0000_0000,
    ],
    // 9
    [
        0b0001_1000,
        0b0010_0100,
        0b0010_0100,
        0b0011_1000,
        0b0010_0000,
        0b0010_0100,
        0b0001_1000,
        0b0000_0000,
    ],
    // a
    [
        0b0001_1000,
        0b0010_0100,
        0b0010_0100,
        0b0011_1100,
        0b0010_0100,
        0b0010_0100,
        0b0010_0100,
        0b0000_0000,
    ],
    // b
    [
        0b0001_1100,
        0b0010_0100,
        0b0010_0100,
        0b0001_1100,
        0b0010_0100,
        0b0010_0100,
        0b0001_1100,
        0b0000_0000,
    ],
    // c (top row sits one pixel left, as on the shipped units)
    [
        0b0000_1100,
        0b0010_0100,
        0b0000_0100,
        0b0000_0100,
        0b0000_0100,
        0b0010_0100,
        0b0001_1000,
        0b0000_0000,
    ],
    // d
    [
        0b0000_1100,
        0b0001_0100,
        0b0010_0100,
        0b0010_0100,
        0b0010_0100,
        0b0001_0100,
        0b0000_1100,
        0b0000_0000,
    ],
    // e
    [
        0b0011_1100,
        0b0000_0100,
        0b0000_0100,
        0b0011_1100,
        0b0000_0100,
        0b0000_0100,
        0b0011_1100,
        0b0000_0000,
    ],
    // f
    [
        0b0011_1100,
        0b0000_0100,
        0b0000_0100,
        0b0011_1100,
        0b0000_0100,
        0b0000_0100,
        0b0000_0100,
        0b0000_0000,
    ],
];

/// Letter T
pub const LETTER_T: Bitmap = [
    0b0111_1100,
    0b0001_0000,
    0b0001_0000,
    0b0001_0000,
    0b0001_0000,
    0b0001_0000,
    0b0001_0000,
    0b0000_0000,
];

/// Letter I
pub const LETTER_I: Bitmap = [
    0b0111_1100,
    0b0001_0000,
    0b0001_0000,
    0b0001_0000,
    0b0001_0000,
    0b0001_0000,
    0b0111_1100,
    0b0000_0000,
];

/// Letter M
pub const LETTER_M: Bitmap = [
    0b0100_0100,
    0b0110_1100,
    0b0101_0100,
    0b0100_0100,
    0b0100_0100,
    0b0100_0100,
    0b0100_0100,
    0b0000_0000,
];

/// Letter E (same bitmap as hex `e`)
pub const LETTER_E: Bitmap = GLYPHS[14];

/// Letter U
pub const LETTER_U: Bitmap = [
    0b0010_0100,
    0b0010_0100,
    0b0010_0100,
    0b0010_0100,
    0b0010_0100,
    0b0010_0100,
    0b0001_1000,
    0b0000_0000,
];

/// Letter P
pub const LETTER_P: Bitmap = [
    0b0001_1100,
    0b0010_0100,
    0b0010_0100,
    0b0001_1100,
    0b0000_0100,
    0b0000_0100,
    0b0000_0100,
    0b0000_0000,
];

/// Look up the bitmap for a glyph code (0-15)
///
/// Codes above 15 are a caller bug: debug builds assert, release builds
/// draw a blank module.
pub fn glyph(index: u8) -> &'static Bitmap {
    debug_assert!(index <= MAX_GLYPH, "glyph index out of range");
    GLYPHS.get(index as usize).unwrap_or(&BLANK)
}
