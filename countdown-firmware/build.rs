//! Build script for countdown-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates timer.toml and compiles it into a `TIMER_CONFIG` constant

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use countdown_core::config::{LatchMode, TimerConfig, TopField, PASSCODE_LEN};
use countdown_core::timer::Button;
use serde::Deserialize;

fn main() {
    setup_linker();
    let config = load_config();
    write_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// `[clock]`
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct ClockSection {
    max_seconds: Option<u32>,
    top_field: Option<TopField>,
}

/// `[display]`
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct DisplaySection {
    intensity: Option<u8>,
    latch: Option<LatchMode>,
    separator_position: Option<u8>,
}

/// `[keypad]`
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct KeypadSection {
    passcode: Option<[Button; PASSCODE_LEN]>,
    unlock_ticks: Option<u16>,
}

/// `[timing]`
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TimingSection {
    tick_ms: Option<u16>,
    ticks_per_second: Option<u16>,
    step_seconds: Option<u16>,
}

/// `[behavior]`
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct BehaviorSection {
    show_time_up: Option<bool>,
    blink_separator: Option<bool>,
}

/// Whole timer.toml
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TimerFile {
    clock: ClockSection,
    display: DisplaySection,
    keypad: KeypadSection,
    timing: TimingSection,
    behavior: BehaviorSection,
}

impl TimerFile {
    /// Apply the file on top of the standalone preset
    fn into_config(self) -> TimerConfig {
        let mut config = TimerConfig::standalone();

        if let Some(v) = self.clock.max_seconds {
            config.clock.max_seconds = v;
        }
        if let Some(v) = self.clock.top_field {
            config.clock.top_field = v;
        }
        if let Some(v) = self.display.intensity {
            config.display.intensity = v;
        }
        if let Some(v) = self.display.latch {
            config.display.latch = v;
        }
        if let Some(v) = self.display.separator_position {
            config.display.separator_position = v;
        }
        if let Some(v) = self.keypad.passcode {
            config.passcode = v;
        }
        if let Some(v) = self.keypad.unlock_ticks {
            config.unlock_ticks = v;
        }
        if let Some(v) = self.timing.tick_ms {
            config.tick_ms = v;
        }
        if let Some(v) = self.timing.ticks_per_second {
            config.ticks_per_second = v;
        }
        if let Some(v) = self.timing.step_seconds {
            config.step_seconds = v;
        }
        if let Some(v) = self.behavior.show_time_up {
            config.show_time_up = v;
        }
        if let Some(v) = self.behavior.blink_separator {
            config.blink_separator = v;
        }

        config
    }
}

/// Read, parse and validate timer.toml
fn load_config() -> TimerConfig {
    println!("cargo:rerun-if-changed=timer.toml");

    let config_path = Path::new("timer.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: timer.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a timer.toml configuration file.          ║\n\
            ║  Please create one in the countdown-firmware directory.          ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read timer.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let file: TimerFile = match toml::from_str(&config_content) {
        Ok(file) => file,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid timer.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let config = file.into_config();
    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: timer.toml failed validation                             ║\n\
            ║                                                                  ║\n\
            ║  {:<64} ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format!("{:?}", e)
        );
    }

    println!("cargo:warning=timer.toml validated successfully");
    config
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Emit `timer_config.rs` into OUT_DIR
fn write_config(config: &TimerConfig) {
    let passcode = config
        .passcode
        .iter()
        .map(|button| format!("Button::{:?}", button))
        .collect::<Vec<_>>()
        .join(", ");

    let source = format!(
        "/// Configuration compiled from timer.toml\n\
         pub const TIMER_CONFIG: TimerConfig = TimerConfig {{\n    \
             clock: ClockConfig {{ max_seconds: {max_seconds}, top_field: TopField::{top_field:?} }},\n    \
             display: DisplayConfig {{ intensity: {intensity}, latch: LatchMode::{latch:?}, separator_position: {separator} }},\n    \
             passcode: [{passcode}],\n    \
             unlock_ticks: {unlock_ticks},\n    \
             tick_ms: {tick_ms},\n    \
             ticks_per_second: {ticks_per_second},\n    \
             step_seconds: {step_seconds},\n    \
             show_time_up: {show_time_up},\n    \
             blink_separator: {blink_separator},\n\
         }};\n",
        max_seconds = config.clock.max_seconds,
        top_field = config.clock.top_field,
        intensity = config.display.intensity,
        latch = config.display.latch,
        separator = config.display.separator_position,
        passcode = passcode,
        unlock_ticks = config.unlock_ticks,
        tick_ms = config.tick_ms,
        ticks_per_second = config.ticks_per_second,
        step_seconds = config.step_seconds,
        show_time_up = config.show_time_up,
        blink_separator = config.blink_separator,
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("timer_config.rs"), source).unwrap();
}
