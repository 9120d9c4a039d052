//! Authoritative countdown value
//!
//! A single seconds count with saturating mutators. Every mutation
//! recomputes the display digits before returning, so [`Clock::digits`]
//! never lags [`Clock::seconds`].

use crate::config::ClockConfig;
use crate::digits::Digits;

/// Clock state: seconds plus the digits derived from them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clock {
    seconds: u32,
    digits: Digits,
    config: ClockConfig,
}

impl Clock {
    /// Create a clock at 0:00
    pub fn new(config: ClockConfig) -> Self {
        Self {
            seconds: 0,
            digits: Digits::ZERO,
            config,
        }
    }

    /// Set from the two display fields (MM,SS or HH,MM)
    ///
    /// Values above the ceiling are clamped to it.
    pub fn set_time(&mut self, field_a: u32, field_b: u32) {
        let seconds = self.config.top_field.compose(field_a, field_b);
        self.seconds = seconds.min(self.config.ceiling());
        self.refresh();
    }

    /// Add seconds, saturating at the ceiling
    pub fn increment_time(&mut self, delta: u32) {
        self.seconds = self
            .seconds
            .saturating_add(delta)
            .min(self.config.ceiling());
        self.refresh();
    }

    /// Remove seconds, saturating at zero
    pub fn decrement_time(&mut self, delta: u32) {
        self.seconds = self.seconds.saturating_sub(delta);
        self.refresh();
    }

    /// Current value in seconds
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Current display digits
    pub fn digits(&self) -> &Digits {
        &self.digits
    }

    /// Check if the countdown has reached zero
    pub fn is_zero(&self) -> bool {
        self.seconds == 0
    }

    /// Clock configuration
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    fn refresh(&mut self) {
        self.digits = Digits::decompose(self.seconds, self.config.top_field);
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(ClockConfig::default())
    }
}
