//! Matrix display driver for the countdown timer
//!
//! This crate provides:
//! - The 8x8 glyph table (digits, hex digits, a few letters)
//! - `MatrixChain`, the address/data frame protocol for daisy-chained
//!   MAX7219 drivers
//! - `FrameRenderer`, which scans glyph bitmaps out column by column with an
//!   optional colon overlay
//! - `DisplayController`, the single owner of clock state and the chain
//!
//! # Architecture
//!
//! Each module in the chain is one digit position. A render pass sends eight
//! chained writes, one per driver row register; each write carries one byte
//! per module, farthest module first, and is latched with a single LOAD
//! strobe.

#![no_std]
#![deny(unsafe_code)]

pub mod controller;
pub mod glyph;
pub mod max7219;
pub mod render;

#[cfg(test)]
mod mock;

// Re-export key types
pub use controller::DisplayController;
pub use glyph::{glyph, Bitmap, BLANK, GLYPHS};
pub use max7219::MatrixChain;
pub use render::{FrameRenderer, Message, SeparatorOverlay};
