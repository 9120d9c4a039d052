//! Display controller
//!
//! Owns the clock, the matrix chain and the renderer. Every mutation goes
//! through here, so the digits are always recomputed before anything reads
//! or renders them.

use countdown_core::timer::View;
use countdown_core::{Clock, Digits, DIGIT_COUNT};
use countdown_hal::{ByteTransfer, OutputPin};

use crate::max7219::MatrixChain;
use crate::render::{FrameRenderer, Message};

/// Single owner of clock state and display hardware
pub struct DisplayController<SPI, CS> {
    clock: Clock,
    chain: MatrixChain<SPI, CS, DIGIT_COUNT>,
    renderer: FrameRenderer,
}

impl<SPI, CS> DisplayController<SPI, CS>
where
    SPI: ByteTransfer,
    CS: OutputPin,
{
    /// Create a controller; the chain is not touched until [`Self::init`]
    pub fn new(clock: Clock, chain: MatrixChain<SPI, CS, DIGIT_COUNT>, renderer: FrameRenderer) -> Self {
        Self {
            clock,
            chain,
            renderer,
        }
    }

    /// Power up the chain and show the current clock with the colon
    pub fn init(&mut self, intensity: u8) -> Result<(), SPI::Error> {
        self.chain.init(intensity)?;
        self.render(true)
    }

    /// Set the clock from its two display fields
    pub fn set_time(&mut self, field_a: u32, field_b: u32) {
        self.clock.set_time(field_a, field_b);
    }

    /// Add seconds, saturating at the ceiling
    pub fn increment_time(&mut self, delta: u32) {
        self.clock.increment_time(delta);
    }

    /// Remove seconds, saturating at zero
    pub fn decrement_time(&mut self, delta: u32) {
        self.clock.decrement_time(delta);
    }

    /// Current value in seconds
    pub fn seconds(&self) -> u32 {
        self.clock.seconds()
    }

    /// Digits the next render will show
    pub fn digits(&self) -> &Digits {
        self.clock.digits()
    }

    /// Clock, for the state machine
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// Draw the clock digits
    pub fn render(&mut self, show_separator: bool) -> Result<(), SPI::Error> {
        self.renderer
            .render_digits(&mut self.chain, self.clock.digits(), show_separator)
    }

    /// Draw "TIME" when `is_time_up` is set, " UP " otherwise
    pub fn render_special_message(&mut self, is_time_up: bool) -> Result<(), SPI::Error> {
        let message = if is_time_up { Message::Time } else { Message::Up };
        self.renderer.render_message(&mut self.chain, message)
    }

    /// Draw a plain decimal counter without changing the clock
    pub fn render_counter(&mut self, count: u32, show_separator: bool) -> Result<(), SPI::Error> {
        let digits = Digits::from_counter(count);
        self.renderer
            .render_digits(&mut self.chain, &digits, show_separator)
    }

    /// Draw whatever the state machine asks for
    pub fn render_view(&mut self, view: View) -> Result<(), SPI::Error> {
        match view {
            View::Digits { separator } => self.render(separator),
            View::Message { time } => self.render_special_message(time),
        }
    }

    /// Light every pixel
    pub fn lamp_test(&mut self) -> Result<(), SPI::Error> {
        self.renderer.render_all_lit(&mut self.chain)
    }

    /// Change brightness
    pub fn set_intensity(&mut self, intensity: u8) -> Result<(), SPI::Error> {
        self.chain.set_intensity(intensity)
    }

    /// Tear down, giving the bus back
    pub fn release(self) -> (Clock, SPI, CS) {
        let (spi, cs) = self.chain.release();
        (self.clock, spi, cs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{self, GLYPHS};
    use crate::mock::{frames, new_log, Log, RecordingPin, RecordingSpi};
    use countdown_core::{ClockConfig, LatchMode};

    fn controller(log: &Log, config: ClockConfig) -> DisplayController<RecordingSpi<'_>, RecordingPin<'_>> {
        let chain = MatrixChain::new(RecordingSpi::new(log), RecordingPin::new(log), LatchMode::Once);
        log.borrow_mut().clear();
        DisplayController::new(Clock::new(config), chain, FrameRenderer::default())
    }

    /// Row-register data per module from the last render pass
    fn rendered(log: &Log) -> [[u8; 8]; DIGIT_COUNT] {
        let frames = frames(log);
        let pass = &frames[frames.len() - 8 * DIGIT_COUNT..];
        let mut out = [[0u8; 8]; DIGIT_COUNT];
        for (i, &(address, data, _)) in pass.iter().enumerate() {
            let column = (address - 1) as usize;
            let position = DIGIT_COUNT - 1 - i % DIGIT_COUNT;
            out[position][column] = data;
        }
        out
    }

    fn column_bytes(bitmap: &[u8; 8]) -> [u8; 8] {
        let mut out = [0u8; 8];
        for (column, byte) in out.iter_mut().enumerate() {
            *byte = bitmap[7 - column];
        }
        out
    }

    #[test]
    fn test_mutation_recomputes_before_render() {
        let log = new_log();
        let mut display = controller(&log, ClockConfig::STANDALONE);

        display.set_time(12, 34);
        assert_eq!(display.digits().as_array(), &[1, 2, 3, 4]);
        display.render(false).unwrap();

        let modules = rendered(&log);
        for (position, code) in [1u8, 2, 3, 4].iter().enumerate() {
            assert_eq!(modules[position], column_bytes(&GLYPHS[*code as usize]));
        }
    }

    #[test]
    fn test_increment_and_decrement() {
        let log = new_log();
        let mut display = controller(&log, ClockConfig::STANDALONE);

        display.increment_time(90);
        assert_eq!(display.seconds(), 90);
        assert_eq!(display.digits().as_array(), &[0, 1, 3, 0]);

        display.increment_time(100_000);
        assert_eq!(display.seconds(), 5999);
        assert_eq!(display.digits().as_array(), &[9, 9, 5, 9]);

        display.decrement_time(100_000);
        assert_eq!(display.seconds(), 0);
        assert_eq!(display.digits().as_array(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_hours_layout() {
        let log = new_log();
        let mut display = controller(&log, ClockConfig::SLAVE);

        display.increment_time(3 * 3600 + 25 * 60 + 59);
        assert_eq!(display.digits().as_array(), &[0, 3, 2, 5]);
    }

    #[test]
    fn test_special_message() {
        let log = new_log();
        let mut display = controller(&log, ClockConfig::STANDALONE);

        display.render_special_message(true).unwrap();
        let modules = rendered(&log);
        assert_eq!(modules[0], column_bytes(&glyph::LETTER_T));
        assert_eq!(modules[3], column_bytes(&glyph::LETTER_E));

        display.render_special_message(false).unwrap();
        let modules = rendered(&log);
        assert_eq!(modules[0], [0; 8]);
        assert_eq!(modules[1], column_bytes(&glyph::LETTER_U));
        assert_eq!(modules[2], column_bytes(&glyph::LETTER_P));
        assert_eq!(modules[3], [0; 8]);
    }

    #[test]
    fn test_counter_leaves_clock_alone() {
        let log = new_log();
        let mut display = controller(&log, ClockConfig::STANDALONE);
        display.set_time(1, 0);

        display.render_counter(4711, false).unwrap();
        let modules = rendered(&log);
        assert_eq!(modules[0], column_bytes(&GLYPHS[4]));
        assert_eq!(modules[3], column_bytes(&GLYPHS[1]));
        assert_eq!(display.seconds(), 60);
    }

    #[test]
    fn test_render_view() {
        let log = new_log();
        let mut display = controller(&log, ClockConfig::STANDALONE);

        display.render_view(View::Digits { separator: true }).unwrap();
        let modules = rendered(&log);
        assert_eq!(modules[1][2] & 0x80, 0x80);

        display.render_view(View::Message { time: false }).unwrap();
        let modules = rendered(&log);
        assert_eq!(modules[1], column_bytes(&glyph::LETTER_U));
    }

    #[test]
    fn test_init_ends_with_first_frame() {
        let log = new_log();
        let mut display = controller(&log, ClockConfig::STANDALONE);

        display.init(0x08).unwrap();
        let modules = rendered(&log);
        for module in modules.iter() {
            assert_eq!(module[0], 0);
        }
        // Colon is on after power-up
        assert_eq!(modules[1][3] & 0x80, 0x80);
    }

    #[test]
    fn test_lamp_test() {
        let log = new_log();
        let mut display = controller(&log, ClockConfig::STANDALONE);
        display.lamp_test().unwrap();
        assert_eq!(rendered(&log), [[0xFF; 8]; DIGIT_COUNT]);
    }

    #[test]
    fn test_release() {
        let log = new_log();
        let mut display = controller(&log, ClockConfig::STANDALONE);
        display.set_time(0, 42);
        let (clock, _spi, _cs) = display.release();
        assert_eq!(clock.seconds(), 42);
    }
}
