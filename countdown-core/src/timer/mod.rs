//! Countdown state machine
//!
//! The polling loop feeds button edges and periodic ticks in; the machine
//! mutates the clock and reports what the loop should do next (redraw,
//! beep, switch the status LED).

pub mod events;
pub mod machine;

pub use events::{Button, Event, InvalidButton};
pub use machine::{CountdownTimer, Effects, RunState, View};
