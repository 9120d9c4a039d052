//! Countdown - Matrix Countdown Timer Firmware
//!
//! Main firmware binary for RP2040-based countdown boards: four chained
//! MAX7219 8x8 modules showing MM:SS (or HH:MM), a five-button keypad on a
//! resistor ladder, a buzzer and a status LED.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use countdown_core::Clock;
use countdown_display::{DisplayController, FrameRenderer, MatrixChain, SeparatorOverlay};
use countdown_drivers::{EhPin, EhSpi};

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Chain clock; the far module sits at the end of a long ribbon
const SPI_FREQUENCY_HZ: u32 = 1_000_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Countdown firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // Matrix chain on SPI0
    // Pin assignment is board-specific (SCK: GPIO18, DIN: GPIO19, LOAD: GPIO17)
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = SPI_FREQUENCY_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let load = Output::new(p.PIN_17, Level::High);

    let chain = MatrixChain::new(EhSpi::new(spi), EhPin::new(load, true), config.display.latch);
    let renderer = FrameRenderer::new(SeparatorOverlay::at(
        config.display.separator_position as usize,
    ));
    let mut display = DisplayController::new(Clock::new(config.clock), chain, renderer);

    // Starts at 0:00 with the colon on
    if let Err(e) = display.init(config.display.intensity) {
        error!("Display init failed: {:?}", Debug2Format(&e));
    }
    Timer::after_millis(100).await;
    info!("Display initialized");

    // Keypad ladder on ADC0 (GPIO26)
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let ladder = Channel::new_pin(p.PIN_26, Pull::None);

    // Buzzer on GPIO15, status LED on GPIO25 (off = high)
    let buzzer = Output::new(p.PIN_15, Level::Low);
    let led = Output::new(p.PIN_25, Level::High);

    unwrap!(spawner.spawn(tasks::input_task(adc, ladder, config.tick_ms)));
    unwrap!(spawner.spawn(tasks::buzzer_task(buzzer)));

    info!("All tasks spawned, entering controller loop");

    tasks::run_controller(display, led, config).await
}
