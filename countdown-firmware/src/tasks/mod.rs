//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.
//! The controller loop is not a spawned task: it is generic over the
//! display transport and runs on the main task.

pub mod buzzer;
pub mod controller;
pub mod input;

pub use buzzer::buzzer_task;
pub use controller::run_controller;
pub use input::input_task;
