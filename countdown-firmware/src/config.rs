//! Timer configuration
//!
//! timer.toml is validated by the build script and compiled in as
//! [`TIMER_CONFIG`].

use defmt::*;

use countdown_core::config::{ClockConfig, DisplayConfig, LatchMode, TimerConfig, TopField};
use countdown_core::timer::Button;

include!(concat!(env!("OUT_DIR"), "/timer_config.rs"));

/// Log the compiled configuration and hand it out
pub fn load() -> TimerConfig {
    let config = TIMER_CONFIG;
    info!(
        "Clock: ceiling {}s, layout {:?}, step {}s",
        config.clock.max_seconds, config.clock.top_field, config.step_seconds
    );
    info!(
        "Display: intensity {}, latch {:?}, colon on module {}",
        config.display.intensity, config.display.latch, config.display.separator_position
    );
    debug!(
        "Loop: {}ms x {} ticks/s, unlock window {} ticks",
        config.tick_ms, config.ticks_per_second, config.unlock_ticks
    );
    config
}
