//! Board-agnostic core logic for the matrix countdown timer
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - The authoritative clock value and its saturating mutators
//! - Decimal decomposition of the clock into display digits
//! - Per-deployment configuration (ceiling, field layout, keypad)
//! - The keypad/countdown state machine driven by the polling loop

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod digits;
pub mod timer;

pub use clock::Clock;
pub use config::{ClockConfig, DisplayConfig, LatchMode, TimerConfig, TopField};
pub use digits::{Digits, DIGIT_COUNT};
