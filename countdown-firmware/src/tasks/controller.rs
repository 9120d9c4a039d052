//! Main controller loop
//!
//! Sole owner of the [`DisplayController`]. Button presses and loop ticks
//! are turned into state machine events here, one at a time, so a clock
//! mutation and the render that follows it never interleave with another.

use core::fmt::Debug;

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

use countdown_core::timer::{CountdownTimer, Event};
use countdown_core::TimerConfig;
use countdown_display::DisplayController;
use countdown_hal::{ByteTransfer, OutputPin};

use crate::channels::{BEEP, BUTTON_CHANNEL};

/// Status LED is wired to the supply, lit when driven low
const LED_ACTIVE_LOW: bool = true;

/// Controller loop - runs forever on the calling task
pub async fn run_controller<SPI, CS>(
    mut display: DisplayController<SPI, CS>,
    mut led: Output<'static>,
    config: TimerConfig,
) -> !
where
    SPI: ByteTransfer,
    SPI::Error: Debug,
    CS: OutputPin,
{
    info!("Controller started");

    let mut timer = CountdownTimer::new(&config);
    let mut ticker = Ticker::every(Duration::from_millis(config.tick_ms as u64));
    set_led(&mut led, false);

    loop {
        let event = match select(BUTTON_CHANNEL.receive(), ticker.next()).await {
            Either::First(button) => Event::Pressed(button),
            Either::Second(()) => Event::Tick,
        };

        let previous = timer.state();
        let effects = timer.handle(event, display.clock_mut());

        if timer.state() != previous {
            info!(
                "{:?} -> {:?} at {}s",
                previous,
                timer.state(),
                display.seconds()
            );
        }

        if effects.beep {
            BEEP.signal(());
        }

        if let Some(on) = effects.led {
            debug!("Keypad {}", if on { "unlocked" } else { "locked" });
            set_led(&mut led, on);
        }

        if effects.redraw {
            if let Err(e) = display.render_view(timer.view()) {
                warn!("Display write failed: {:?}", Debug2Format(&e));
            }
        }
    }
}

fn set_led(led: &mut Output<'static>, on: bool) {
    if on != LED_ACTIVE_LOW {
        led.set_high();
    } else {
        led.set_low();
    }
}
