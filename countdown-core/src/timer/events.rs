//! Events driving the countdown state machine

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Keypad buttons, numbered as on the resistor ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[repr(u8)]
pub enum Button {
    /// Start counting down
    Start = 1,
    /// Pause
    Stop = 2,
    /// Add one step
    Up = 3,
    /// Remove one step
    Down = 4,
    /// Back to 0:00 and stop
    Reset = 5,
}

impl Button {
    /// All buttons in ladder order
    pub const ALL: [Button; 5] = [
        Button::Start,
        Button::Stop,
        Button::Up,
        Button::Down,
        Button::Reset,
    ];

    /// Ladder code (1-5)
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Button from its ladder code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Button::Start),
            2 => Some(Button::Stop),
            3 => Some(Button::Up),
            4 => Some(Button::Down),
            5 => Some(Button::Reset),
            _ => None,
        }
    }
}

/// Ladder code outside 1-5
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidButton(pub u8);

impl fmt::Display for InvalidButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no button with ladder code {}", self.0)
    }
}

impl TryFrom<u8> for Button {
    type Error = InvalidButton;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Button::from_code(code).ok_or(InvalidButton(code))
    }
}

impl From<Button> for u8 {
    fn from(button: Button) -> u8 {
        button.code()
    }
}

/// Input to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A button went from released to pressed
    Pressed(Button),
    /// One polling loop period elapsed
    Tick,
}
