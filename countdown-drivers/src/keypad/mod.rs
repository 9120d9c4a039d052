//! Five-button keypad on a single ADC channel
//!
//! The buttons pull the channel to distinct levels through a resistor
//! ladder. The polling loop samples it, [`LadderDecoder`] turns the sample
//! into a button and [`ButtonEdge`] reports only fresh presses.

mod edge;
mod ladder;

pub use edge::ButtonEdge;
pub use ladder::{LadderDecoder, LadderLevel, ADC_MAX};
