//! Hardware driver implementations
//!
//! This crate provides concrete implementations that sit between the board
//! and the board-agnostic crates:
//!
//! - `embedded-hal` 1.0 SPI bus and output pin adapters for the matrix chain
//! - Resistor-ladder keypad decoding (one ADC channel, five buttons)
//! - Press edge detection for the polling loop

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod keypad;

pub use bus::{EhPin, EhSpi};
pub use keypad::{ButtonEdge, LadderDecoder};
