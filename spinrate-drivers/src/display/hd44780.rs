//! HD44780-compatible character LCD on a 4-bit bus
//!
//! Every byte goes out as two nibbles, high nibble first, each latched by a
//! pulse on the enable line. RS low selects the instruction register
//! (commands and cursor-positioning codes), RS high the data register.
//!
//! Raw writes take the position in either the one-byte (`0xhh`) or the
//! two-byte (`0x00 0xhh`) form, followed by a NUL-terminated payload.
//!
//! # Usage
//!
//! ```ignore
//! let mut lcd = Hd44780::new(rs, en, [d4, d5, d6, d7], Delay);
//! lcd.init().await?;
//! lcd.write_line(&ReadoutLine::new(CursorPosition::at(1, 0), " 0.10")).await?;
//! ```

use embedded_hal_async::delay::DelayNs;
use spinrate_core::readout::{CursorPosition, ReadoutLine, DISPLAY_COLUMNS};
use spinrate_core::traits::{CharacterDisplay, DisplayError};
use spinrate_hal::OutputPin;

/// Power-on initialization bytes: 4-bit mode, 2 lines, display on,
/// cursor off, clear, left-to-right entry
pub const INIT_SEQUENCE: [u8; 6] = [0x33, 0x32, 0x28, 0x01, 0x0C, 0x06];

/// Visible characters per row
pub const ROW_LENGTH: usize = DISPLAY_COLUMNS as usize;

/// Wait after power-up before the first command
const POWER_ON_MS: u32 = 100;

/// Settle time for init commands
const SLOW_COMMAND_MS: u32 = 10;

/// Settle time for positioning codes and characters
const FAST_SETTLE_US: u32 = 40;

/// 4-bit parallel character LCD
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    /// D4..D7
    data: [P; 4],
    delay: D,
    initialized: bool,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    /// Create the driver; call [`CharacterDisplay::init`] before writing
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self {
            rs,
            en,
            data,
            delay,
            initialized: false,
        }
    }

    /// Check if the init sequence has been sent
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Write a payload at a raw position code
    ///
    /// `position` is `[0xhh]` or `[0x00, 0xhh]` with bit 7 set. The payload
    /// ends at its first NUL byte or at the end of the slice.
    pub async fn write_raw(&mut self, position: &[u8], payload: &[u8]) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        let position = CursorPosition::from_bytes(position).ok_or(DisplayError::InvalidPosition)?;
        let len = payload.iter().position(|&b| b == 0).unwrap_or(payload.len());

        let (_, col) = position.row_col();
        if col as usize + len > ROW_LENGTH {
            return Err(DisplayError::BufferOverflow);
        }

        self.command(position.code()).await;
        self.delay.delay_us(FAST_SETTLE_US).await;

        for &byte in &payload[..len] {
            self.character(byte).await;
        }
        Ok(())
    }

    async fn write_nibble(&mut self, nibble: u8) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_state((nibble >> bit) & 1 != 0);
        }
        self.en.set_high();
        self.delay.delay_us(1).await;
        self.en.set_low();
    }

    async fn write_byte(&mut self, byte: u8) {
        self.write_nibble(byte >> 4).await;
        self.write_nibble(byte & 0x0F).await;
    }

    async fn command(&mut self, byte: u8) {
        self.rs.set_low();
        self.write_byte(byte).await;
    }

    async fn character(&mut self, byte: u8) {
        self.rs.set_high();
        self.write_byte(byte).await;
        self.delay.delay_us(FAST_SETTLE_US).await;
    }
}

impl<P: OutputPin, D: DelayNs> CharacterDisplay for Hd44780<P, D> {
    async fn init(&mut self) -> Result<(), DisplayError> {
        self.delay.delay_ms(POWER_ON_MS).await;
        for byte in INIT_SEQUENCE {
            self.command(byte).await;
            self.delay.delay_ms(SLOW_COMMAND_MS).await;
        }
        self.initialized = true;
        Ok(())
    }

    async fn write_line(&mut self, line: &ReadoutLine<'_>) -> Result<(), DisplayError> {
        self.write_raw(&[line.position.code()], line.text.as_bytes()).await
    }
}
