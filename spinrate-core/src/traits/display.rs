//! Character display trait

use crate::readout::ReadoutLine;

/// Errors that can occur while driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Display not initialized
    NotInitialized,
    /// Text does not fit on the addressed row
    BufferOverflow,
    /// Bytes are not a cursor-positioning code
    InvalidPosition,
}

/// Text display addressed by cursor-positioning codes
///
/// Writes must finish within the readout refresh interval.
#[allow(async_fn_in_trait)]
pub trait CharacterDisplay {
    /// Run the power-on initialization sequence
    async fn init(&mut self) -> Result<(), DisplayError>;

    /// Write text starting at a cursor position
    async fn write_line(&mut self, line: &ReadoutLine<'_>) -> Result<(), DisplayError>;
}
