//! Configuration types
//!
//! The two shipped boards differ only in data: the clock ceiling, whether the
//! left-hand pair of digits shows hours or minutes, the matrix brightness and
//! the keypad timings. One implementation is parameterized by these values.

use crate::timer::Button;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Length of the keypad passcode
pub const PASSCODE_LEN: usize = 4;

/// Highest value the matrix intensity register accepts
pub const MAX_INTENSITY: u8 = 0x0F;

/// What the left-hand digit pair shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TopField {
    /// HH:MM, seconds are counted but not shown
    Hours,
    /// MM:SS
    #[default]
    Minutes,
}

impl TopField {
    /// Seconds per unit of the left-hand field
    pub const fn unit_seconds(self) -> u32 {
        match self {
            TopField::Hours => 3600,
            TopField::Minutes => 60,
        }
    }

    /// Seconds per unit of the right-hand field
    pub const fn sub_unit_seconds(self) -> u32 {
        match self {
            TopField::Hours => 60,
            TopField::Minutes => 1,
        }
    }

    /// Combine the two display fields into a seconds count (saturating)
    pub const fn compose(self, field_a: u32, field_b: u32) -> u32 {
        field_a
            .saturating_mul(self.unit_seconds())
            .saturating_add(field_b.saturating_mul(self.sub_unit_seconds()))
    }

    /// Largest seconds value that still fits in two decimal digits per field
    ///
    /// 99:59 for MM:SS (5999 s), 99:59:59 for HH:MM (359999 s).
    pub const fn display_limit(self) -> u32 {
        99 * self.unit_seconds() + 60 * self.sub_unit_seconds() - 1
    }
}

/// Clock ceiling and field layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockConfig {
    /// Ceiling for increments (seconds)
    pub max_seconds: u32,
    /// Layout of the four digits
    pub top_field: TopField,
}

impl ClockConfig {
    /// Radio slave board: HH:MM, 65000 s ceiling
    pub const SLAVE: Self = Self {
        max_seconds: 65000,
        top_field: TopField::Hours,
    };

    /// Standalone keypad board: MM:SS, 99:59 ceiling
    pub const STANDALONE: Self = Self {
        max_seconds: 5999,
        top_field: TopField::Minutes,
    };

    /// Ceiling actually enforced: never beyond what four digits can show
    pub const fn ceiling(&self) -> u32 {
        let limit = self.top_field.display_limit();
        if self.max_seconds < limit {
            self.max_seconds
        } else {
            limit
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::STANDALONE
    }
}

/// How a chained write is latched into the matrix drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LatchMode {
    /// Shift every frame through the chain, strobe LOAD once at the end
    #[default]
    Once,
    /// Strobe LOAD after every frame, then flush the chain with no-op frames
    EveryFrame,
}

/// Matrix chain settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Intensity register value (0-15)
    pub intensity: u8,
    /// Chain latch strategy
    pub latch: LatchMode,
    /// Module that carries the colon pixels
    pub separator_position: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            intensity: 0x08,
            latch: LatchMode::Once,
            separator_position: 1,
        }
    }
}

/// Complete timer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimerConfig {
    /// Clock ceiling and layout
    pub clock: ClockConfig,
    /// Matrix chain settings
    pub display: DisplayConfig,
    /// Buttons that unlock the keypad, in order
    pub passcode: [Button; PASSCODE_LEN],
    /// Loop ticks the keypad stays unlocked
    pub unlock_ticks: u16,
    /// Polling loop period in milliseconds
    pub tick_ms: u16,
    /// Loop ticks per counted second
    pub ticks_per_second: u16,
    /// Seconds added or removed by Up/Down
    pub step_seconds: u16,
    /// Alternate "TIME"/"UP" after the countdown expires
    pub show_time_up: bool,
    /// Blink the colon while running
    pub blink_separator: bool,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Intensity above 15
    IntensityOutOfRange,
    /// Separator module index outside the chain
    SeparatorOutOfRange,
    /// A loop needs at least one tick per second
    ZeroTicksPerSecond,
    /// Loop period of zero
    ZeroTickPeriod,
    /// Ceiling larger than four digits can display
    CeilingTooLarge,
    /// Passcode repeats its first button, which always restarts entry
    AmbiguousPasscode,
}

impl TimerConfig {
    /// Standalone keypad board
    pub const fn standalone() -> Self {
        Self {
            clock: ClockConfig::STANDALONE,
            display: DisplayConfig {
                intensity: 0x08,
                latch: LatchMode::Once,
                separator_position: 1,
            },
            passcode: [Button::Start, Button::Reset, Button::Reset, Button::Stop],
            unlock_ticks: 2000,
            tick_ms: 25,
            ticks_per_second: 40,
            step_seconds: 60,
            show_time_up: false,
            blink_separator: false,
        }
    }

    /// Radio slave board
    pub const fn slave() -> Self {
        Self {
            clock: ClockConfig::SLAVE,
            display: DisplayConfig {
                intensity: 0x02,
                latch: LatchMode::Once,
                separator_position: 1,
            },
            show_time_up: true,
            ..Self::standalone()
        }
    }

    /// Check the configuration for values the firmware cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.intensity > MAX_INTENSITY {
            return Err(ConfigError::IntensityOutOfRange);
        }
        if self.display.separator_position as usize >= crate::DIGIT_COUNT {
            return Err(ConfigError::SeparatorOutOfRange);
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTicksPerSecond);
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if self.clock.max_seconds > self.clock.top_field.display_limit() {
            return Err(ConfigError::CeilingTooLarge);
        }
        if self.passcode[1..].contains(&self.passcode[0]) {
            return Err(ConfigError::AmbiguousPasscode);
        }
        Ok(())
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::standalone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert_eq!(TimerConfig::standalone().validate(), Ok(()));
        assert_eq!(TimerConfig::slave().validate(), Ok(()));
    }

    #[test]
    fn test_slave_preset() {
        let config = TimerConfig::slave();
        assert_eq!(config.clock.max_seconds, 65000);
        assert_eq!(config.clock.top_field, TopField::Hours);
        assert_eq!(config.display.intensity, 0x02);
        assert!(config.show_time_up);
        assert_eq!(config.ticks_per_second, 40);
    }

    #[test]
    fn test_display_limits() {
        assert_eq!(TopField::Minutes.display_limit(), 5999);
        assert_eq!(TopField::Hours.display_limit(), 359_999);
    }

    #[test]
    fn test_compose_saturates() {
        assert_eq!(TopField::Minutes.compose(1, 30), 90);
        assert_eq!(TopField::Hours.compose(2, 5), 7500);
        assert_eq!(TopField::Hours.compose(u32::MAX, 1), u32::MAX);
    }

    #[test]
    fn test_ceiling_clamped_to_display() {
        let config = ClockConfig {
            max_seconds: 10_000,
            top_field: TopField::Minutes,
        };
        assert_eq!(config.ceiling(), 5999);
        assert_eq!(ClockConfig::SLAVE.ceiling(), 65000);
    }

    #[test]
    fn test_validate_rejects() {
        let mut config = TimerConfig::standalone();
        config.display.intensity = 16;
        assert_eq!(config.validate(), Err(ConfigError::IntensityOutOfRange));

        let mut config = TimerConfig::standalone();
        config.display.separator_position = 4;
        assert_eq!(config.validate(), Err(ConfigError::SeparatorOutOfRange));

        let mut config = TimerConfig::standalone();
        config.ticks_per_second = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTicksPerSecond));

        let mut config = TimerConfig::standalone();
        config.tick_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickPeriod));

        let mut config = TimerConfig::standalone();
        config.clock.max_seconds = 6000;
        assert_eq!(config.validate(), Err(ConfigError::CeilingTooLarge));

        let mut config = TimerConfig::standalone();
        config.passcode = [Button::Start, Button::Stop, Button::Start, Button::Up];
        assert_eq!(config.validate(), Err(ConfigError::AmbiguousPasscode));

        let mut config = TimerConfig::standalone();
        config.passcode = [Button::Up, Button::Down, Button::Down, Button::Up];
        assert_eq!(config.validate(), Err(ConfigError::AmbiguousPasscode));
    }

    #[test]
    fn test_passcode_may_repeat_later_buttons() {
        let mut config = TimerConfig::standalone();
        config.passcode = [Button::Up, Button::Down, Button::Down, Button::Stop];
        assert_eq!(config.validate(), Ok(()));
    }
}
