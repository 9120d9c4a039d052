//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use countdown_core::timer::Button;

/// Channel capacity for button presses
const BUTTON_CHANNEL_SIZE: usize = 8;

/// Fresh button presses from the keypad poller
pub static BUTTON_CHANNEL: Channel<CriticalSectionRawMutex, Button, BUTTON_CHANNEL_SIZE> =
    Channel::new();

/// Sound the buzzer once
pub static BEEP: Signal<CriticalSectionRawMutex, ()> = Signal::new();
