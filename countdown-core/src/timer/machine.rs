//! Keypad lock and countdown state machine
//!
//! All behavior is a function of the current state and an event. The
//! machine never touches hardware; the caller acts on the returned
//! [`Effects`] and renders whatever [`CountdownTimer::view`] asks for.

use heapless::Vec;

use super::events::{Button, Event};
use crate::clock::Clock;
use crate::config::{TimerConfig, PASSCODE_LEN};

/// Countdown run state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunState {
    /// Not counting
    Stopped,
    /// Counting down once per second
    Running,
    /// Reached zero, showing the time-up message
    Expired,
}

/// What the display should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum View {
    /// Clock digits, with or without the colon
    Digits { separator: bool },
    /// Time-up message: "TIME" when `time` is set, " UP " otherwise
    Message { time: bool },
}

/// Side effects requested by one event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Effects {
    /// The view changed and must be rendered
    pub redraw: bool,
    /// Sound the buzzer
    pub beep: bool,
    /// Drive the status LED (true = on)
    pub led: Option<bool>,
}

/// Passcode entry and unlock timeout
#[derive(Debug, Clone)]
struct Keypad {
    passcode: [Button; PASSCODE_LEN],
    entered: Vec<Button, PASSCODE_LEN>,
    unlock_ticks: u16,
    remaining: u16,
}

impl Keypad {
    fn new(passcode: [Button; PASSCODE_LEN], unlock_ticks: u16) -> Self {
        Self {
            passcode,
            entered: Vec::new(),
            unlock_ticks,
            remaining: 0,
        }
    }

    fn is_unlocked(&self) -> bool {
        self.remaining > 0
    }

    /// Record a press while locked; true when it completes the passcode
    fn enter(&mut self, button: Button) -> bool {
        // The first passcode button always restarts entry
        if button == self.passcode[0] {
            self.entered.clear();
            let _ = self.entered.push(button);
            return false;
        }

        let _ = self.entered.push(button);
        if !self.entered.is_full() {
            return false;
        }

        let matched = self.entered.as_slice() == self.passcode.as_slice();
        self.entered.clear();
        if matched {
            self.remaining = self.unlock_ticks.max(1);
        }
        matched
    }

    /// Count down the unlock window; true on the tick that relocks
    fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.entered.clear();
            return true;
        }
        false
    }
}

/// Countdown timer driven by the polling loop
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    keypad: Keypad,
    state: RunState,
    /// Loop ticks counted towards the next second
    sub_ticks: u16,
    /// Loop ticks into the current time-up message phase
    phase_ticks: u16,
    /// Time-up message currently shows "TIME"
    show_time: bool,
    ticks_per_second: u16,
    step_seconds: u32,
    show_time_up: bool,
    blink_separator: bool,
}

impl CountdownTimer {
    /// Create a stopped, locked timer
    pub fn new(config: &TimerConfig) -> Self {
        Self {
            keypad: Keypad::new(config.passcode, config.unlock_ticks),
            state: RunState::Stopped,
            sub_ticks: 0,
            phase_ticks: 0,
            show_time: true,
            ticks_per_second: config.ticks_per_second.max(1),
            step_seconds: config.step_seconds as u32,
            show_time_up: config.show_time_up,
            blink_separator: config.blink_separator,
        }
    }

    /// Current run state
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Check if the keypad accepts commands
    pub fn is_unlocked(&self) -> bool {
        self.keypad.is_unlocked()
    }

    /// Check if the countdown is running
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// What the display should currently show
    pub fn view(&self) -> View {
        match self.state {
            RunState::Expired => View::Message {
                time: self.show_time,
            },
            RunState::Running if self.blink_separator => View::Digits {
                separator: self.sub_ticks < self.half_second(),
            },
            _ => View::Digits { separator: true },
        }
    }

    /// Process an event against `clock`
    pub fn handle(&mut self, event: Event, clock: &mut Clock) -> Effects {
        match event {
            Event::Pressed(button) => self.on_press(button, clock),
            Event::Tick => self.on_tick(clock),
        }
    }

    fn on_press(&mut self, button: Button, clock: &mut Clock) -> Effects {
        let mut effects = Effects::default();

        // Any press dismisses the time-up message
        if self.state == RunState::Expired {
            self.state = RunState::Stopped;
            effects.redraw = true;
        }

        if !self.keypad.is_unlocked() {
            if self.keypad.enter(button) {
                effects.beep = true;
                effects.led = Some(true);
            }
            return effects;
        }

        match button {
            Button::Start => {
                if !clock.is_zero() {
                    self.state = RunState::Running;
                }
            }
            Button::Stop => {
                self.state = RunState::Stopped;
            }
            Button::Up => {
                clock.increment_time(self.step_seconds);
                effects.redraw = true;
            }
            Button::Down => {
                clock.decrement_time(self.step_seconds);
                effects.redraw = true;
            }
            Button::Reset => {
                clock.set_time(0, 0);
                self.state = RunState::Stopped;
                effects.redraw = true;
            }
        }

        effects
    }

    fn on_tick(&mut self, clock: &mut Clock) -> Effects {
        let mut effects = Effects::default();

        if self.keypad.tick() {
            effects.led = Some(false);
        }

        match self.state {
            RunState::Running => {
                self.sub_ticks += 1;
                if self.sub_ticks >= self.ticks_per_second {
                    self.sub_ticks = 0;
                    clock.decrement_time(1);
                    effects.redraw = true;
                    if clock.is_zero() {
                        effects.beep = true;
                        self.expire();
                    }
                } else if self.blink_separator && self.sub_ticks == self.half_second() {
                    effects.redraw = true;
                }
            }
            RunState::Expired => {
                self.phase_ticks += 1;
                if self.phase_ticks >= self.ticks_per_second {
                    self.phase_ticks = 0;
                    self.show_time = !self.show_time;
                    effects.redraw = true;
                }
            }
            RunState::Stopped => {}
        }

        effects
    }

    /// Ticks the blinking colon stays lit, rounded up
    fn half_second(&self) -> u16 {
        self.ticks_per_second.div_ceil(2)
    }

    fn expire(&mut self) {
        if self.show_time_up {
            self.state = RunState::Expired;
            self.phase_ticks = 0;
            self.show_time = true;
        } else {
            self.state = RunState::Stopped;
        }
    }
}
