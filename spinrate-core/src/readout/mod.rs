//! Readout formatting
//!
//! Builds the text shown on the character display. The display itself is
//! driven through [`crate::traits::CharacterDisplay`].

pub mod format;
pub mod layout;
pub mod position;

pub use format::{format_rate, OVERFLOW_MARKER, READOUT_CAPACITY};
pub use layout::{DISPLAY_COLUMNS, MAX_READOUT_WIDTH};
pub use position::{CursorPosition, ReadoutLine};
