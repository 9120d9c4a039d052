//! Resistor ladder decoding
//!
//! Circuit: VCC -- pullup -- ADC_PIN -- ladder -- GND, with each button
//! shorting a different tap to ground. Released reads near full scale.

use countdown_core::timer::Button;

/// Full-scale reading of the 12-bit ADC
pub const ADC_MAX: u16 = 4095;

/// Expected reading for one button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LadderLevel {
    /// Button on this tap
    pub button: Button,
    /// Nominal ADC reading while held
    pub level: u16,
}

/// Default taps, evenly spaced below the released level
const DEFAULT_LEVELS: [LadderLevel; 5] = [
    LadderLevel { button: Button::Start, level: 0 },
    LadderLevel { button: Button::Stop, level: 680 },
    LadderLevel { button: Button::Up, level: 1365 },
    LadderLevel { button: Button::Down, level: 2050 },
    LadderLevel { button: Button::Reset, level: 2730 },
];

/// Half the spacing between default taps
const DEFAULT_TOLERANCE: u16 = 300;

/// Maps ADC samples to buttons
#[derive(Debug, Clone, Copy)]
pub struct LadderDecoder {
    levels: [LadderLevel; 5],
    tolerance: u16,
}

impl LadderDecoder {
    /// Decoder with custom taps
    ///
    /// A sample decodes to the nearest tap no further than `tolerance`
    /// away. Overlapping windows resolve to the nearer tap.
    pub const fn new(levels: [LadderLevel; 5], tolerance: u16) -> Self {
        Self { levels, tolerance }
    }

    /// Button held for `sample`, or `None` when released or in between taps
    pub fn decode(&self, sample: u16) -> Option<Button> {
        self.levels
            .iter()
            .map(|tap| (tap.level.abs_diff(sample), tap.button))
            .filter(|&(distance, _)| distance <= self.tolerance)
            .min_by_key(|&(distance, _)| distance)
            .map(|(_, button)| button)
    }

    /// Configured taps
    pub fn levels(&self) -> &[LadderLevel; 5] {
        &self.levels
    }
}

impl Default for LadderDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_LEVELS, DEFAULT_TOLERANCE)
    }
}
