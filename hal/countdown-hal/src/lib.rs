//! Countdown Hardware Abstraction Layer
//!
//! The display core only needs two things from the board: a way to clock a
//! byte out on the shared serial data line, and a chip-select (LOAD) line it
//! can raise and lower. Everything else (clock setup, ADC, buzzer) stays in
//! the firmware crate.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  countdown-display (render + protocol)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  countdown-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ countdown-    │       │  test mocks   │
//! │ drivers (eh1) │       │  (recording)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`spi::ByteTransfer`] - Full-duplex single byte exchange
//! - [`gpio::OutputPin`] - Digital output (chip select)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use spi::ByteTransfer;
