//! Decimal decomposition of the clock into glyph indices
//!
//! The display always shows four positions, left to right:
//! `[field A tens, field A units, field B tens, field B units]`.
//! Leading zeros are kept.

use core::ops::Index;

use crate::config::TopField;

/// Number of matrix modules / digit positions
pub const DIGIT_COUNT: usize = 4;

/// Highest glyph index (hex `f`)
pub const MAX_GLYPH: u8 = 15;

/// Glyph index per display position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digits([u8; DIGIT_COUNT]);

impl Digits {
    /// All positions showing `0`
    pub const ZERO: Self = Self([0; DIGIT_COUNT]);

    /// Build from raw glyph indices
    ///
    /// Indices above 15 are a contract violation; they trip a debug
    /// assertion and render blank in release builds.
    pub fn new(raw: [u8; DIGIT_COUNT]) -> Self {
        debug_assert!(raw.iter().all(|&g| g <= MAX_GLYPH), "glyph index out of range");
        Self(raw)
    }

    /// Split a seconds count into the two display fields, then into digits
    ///
    /// Values past what four digits can show are clamped to 99:59.
    pub fn decompose(seconds: u32, top_field: TopField) -> Self {
        let seconds = seconds.min(top_field.display_limit());
        let field_a = seconds / top_field.unit_seconds();
        let field_b = (seconds % top_field.unit_seconds()) / top_field.sub_unit_seconds();
        Self([
            (field_a / 10) as u8,
            (field_a % 10) as u8,
            (field_b / 10) as u8,
            (field_b % 10) as u8,
        ])
    }

    /// Plain four digit decimal counter (0000-9999)
    pub fn from_counter(count: u32) -> Self {
        let count = count.min(9999);
        Self([
            (count / 1000) as u8,
            (count / 100 % 10) as u8,
            (count / 10 % 10) as u8,
            (count % 10) as u8,
        ])
    }

    /// Seconds value the digits represent under `top_field`
    ///
    /// In HH:MM layout the hidden seconds are lost, so this is the value
    /// rounded down to the minute.
    pub fn value(&self, top_field: TopField) -> u32 {
        let [a_tens, a_units, b_tens, b_units] = self.0.map(u32::from);
        top_field.compose(a_tens * 10 + a_units, b_tens * 10 + b_units)
    }

    /// Raw glyph indices
    pub const fn as_array(&self) -> &[u8; DIGIT_COUNT] {
        &self.0
    }

    /// Iterate positions left to right
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }
}

impl Index<usize> for Digits {
    type Output = u8;

    fn index(&self, position: usize) -> &u8 {
        &self.0[position]
    }
}

impl From<Digits> for [u8; DIGIT_COUNT] {
    fn from(digits: Digits) -> Self {
        digits.0
    }
}
