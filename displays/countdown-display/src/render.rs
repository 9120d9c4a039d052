//! Column-scanned frame renderer
//!
//! A render pass walks the eight driver row registers. For scan step `i`
//! every module gets row `7 - i` of its glyph, so the blank trailing row is
//! written first. The colon is two stacked pixels OR-ed into one module on
//! a fixed subset of scan steps.

use countdown_core::{Digits, DIGIT_COUNT};
use countdown_hal::{ByteTransfer, OutputPin};

use crate::glyph::{self, Bitmap, BLANK};
use crate::max7219::{register, MatrixChain, ROWS};

/// Colon pixels drawn on top of the digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SeparatorOverlay {
    /// Module the colon is drawn on
    pub position: usize,
    /// Bit OR-ed into that module's byte
    pub mask: u8,
    /// Scan steps carrying the colon, one bit per step
    pub columns: u8,
}

impl SeparatorOverlay {
    /// Rightmost pixel column of module 1, scan steps 2, 3, 5 and 6
    pub const DEFAULT: Self = Self {
        position: 1,
        mask: 0b1000_0000,
        columns: 0b0110_1100,
    };

    /// Default overlay moved to another module
    pub const fn at(position: usize) -> Self {
        Self {
            position,
            ..Self::DEFAULT
        }
    }

    /// Check if scan step `column` carries the colon
    pub const fn applies(&self, column: u8) -> bool {
        column < ROWS && self.columns & (1 << column) != 0
    }
}

impl Default for SeparatorOverlay {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Fixed four-letter messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Message {
    /// "TIME"
    Time,
    /// " UP "
    Up,
}

impl Message {
    /// Bitmap per module, left to right
    pub fn bitmaps(self) -> [&'static Bitmap; DIGIT_COUNT] {
        match self {
            Message::Time => [
                &glyph::LETTER_T,
                &glyph::LETTER_I,
                &glyph::LETTER_M,
                &glyph::LETTER_E,
            ],
            Message::Up => [&BLANK, &glyph::LETTER_U, &glyph::LETTER_P, &BLANK],
        }
    }
}

/// Build the bytes for one scan step
///
/// `column` 0 takes the bottom (blank) bitmap row, `column` 7 the top one.
/// Columns past 7 are a caller bug: debug builds assert, release builds
/// clamp to column 7.
pub(crate) fn scan_column<const N: usize>(
    bitmaps: &[&Bitmap; N],
    column: u8,
    separator: Option<&SeparatorOverlay>,
) -> [u8; N] {
    debug_assert!(column < ROWS, "scan column out of range");
    let row = (ROWS - 1).saturating_sub(column) as usize;
    let mut buffer = [0u8; N];
    for (slot, bitmap) in buffer.iter_mut().zip(bitmaps.iter()) {
        *slot = bitmap[row];
    }

    if let Some(overlay) = separator {
        if overlay.applies(column) {
            if let Some(slot) = buffer.get_mut(overlay.position) {
                *slot |= overlay.mask;
            }
        }
    }

    buffer
}

/// Drives a [`MatrixChain`] one scan step at a time
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameRenderer {
    separator: SeparatorOverlay,
}

impl FrameRenderer {
    /// Create a renderer with the given colon overlay
    pub const fn new(separator: SeparatorOverlay) -> Self {
        Self { separator }
    }

    /// Colon overlay in use
    pub fn separator(&self) -> &SeparatorOverlay {
        &self.separator
    }

    /// Render the four clock digits, optionally with the colon
    pub fn render_digits<SPI, CS>(
        &self,
        chain: &mut MatrixChain<SPI, CS, DIGIT_COUNT>,
        digits: &Digits,
        show_separator: bool,
    ) -> Result<(), SPI::Error>
    where
        SPI: ByteTransfer,
        CS: OutputPin,
    {
        let bitmaps = digits.as_array().map(glyph::glyph);
        let separator = show_separator.then_some(&self.separator);
        Self::render_bitmaps(chain, &bitmaps, separator)
    }

    /// Render a fixed message instead of the digits
    pub fn render_message<SPI, CS>(
        &self,
        chain: &mut MatrixChain<SPI, CS, DIGIT_COUNT>,
        message: Message,
    ) -> Result<(), SPI::Error>
    where
        SPI: ByteTransfer,
        CS: OutputPin,
    {
        Self::render_bitmaps(chain, &message.bitmaps(), None)
    }

    /// Light every pixel on every module
    pub fn render_all_lit<SPI, CS, const N: usize>(
        &self,
        chain: &mut MatrixChain<SPI, CS, N>,
    ) -> Result<(), SPI::Error>
    where
        SPI: ByteTransfer,
        CS: OutputPin,
    {
        for column in 0..ROWS {
            chain.send_fill(register::row(column), 0xFF)?;
        }
        Ok(())
    }

    /// One full pass: eight chained writes, row registers 1-8
    pub fn render_bitmaps<SPI, CS, const N: usize>(
        chain: &mut MatrixChain<SPI, CS, N>,
        bitmaps: &[&Bitmap; N],
        separator: Option<&SeparatorOverlay>,
    ) -> Result<(), SPI::Error>
    where
        SPI: ByteTransfer,
        CS: OutputPin,
    {
        for column in 0..ROWS {
            let buffer = scan_column(bitmaps, column, separator);
            chain.send_buffer(register::row(column), &buffer)?;
        }
        Ok(())
    }
}
