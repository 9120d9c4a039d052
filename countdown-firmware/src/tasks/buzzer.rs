//! Buzzer task
//!
//! Drives an active buzzer for a fixed time whenever [`BEEP`] fires.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::Timer;

use crate::channels::BEEP;

/// Length of one beep
const BEEP_MS: u64 = 100;

/// Buzzer task - one beep per signal
#[embassy_executor::task]
pub async fn buzzer_task(mut pin: Output<'static>) {
    info!("Buzzer task started");
    pin.set_low();

    loop {
        BEEP.wait().await;
        pin.set_high();
        Timer::after_millis(BEEP_MS).await;
        pin.set_low();
    }
}
