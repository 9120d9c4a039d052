//! Keypad polling task
//!
//! Samples the resistor ladder once per loop period and forwards fresh
//! presses to the controller.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_time::{Duration, Ticker};

use countdown_drivers::{ButtonEdge, LadderDecoder};

use crate::channels::BUTTON_CHANNEL;

/// Input task - ADC ladder to button presses
#[embassy_executor::task]
pub async fn input_task(mut adc: Adc<'static, Async>, mut ladder: Channel<'static>, tick_ms: u16) {
    info!("Input task started ({}ms poll)", tick_ms);

    let decoder = LadderDecoder::default();
    let mut edge = ButtonEdge::new();
    let mut ticker = Ticker::every(Duration::from_millis(tick_ms as u64));

    loop {
        match adc.read(&mut ladder).await {
            Ok(sample) => {
                if let Some(button) = edge.update(decoder.decode(sample)) {
                    debug!("Button {:?} (adc {})", button, sample);
                    BUTTON_CHANNEL.send(button).await;
                }
            }
            Err(e) => {
                warn!("Keypad ADC read failed: {:?}", Debug2Format(&e));
            }
        }

        ticker.next().await;
    }
}
