//! Screen layout for a 16x2 character display
//!
//! ```text
//! row 0:     SPINRATE
//! row 1: <value> RPS
//! ```
//!
//! The value starts at column 0 and is followed by one blank column and the
//! unit label, so the widest value that still leaves room for the label is
//! [`MAX_READOUT_WIDTH`].

use super::position::{CursorPosition, ReadoutLine};

/// Visible characters per row
pub const DISPLAY_COLUMNS: u8 = 16;

/// Title on the first row
pub const TITLE: &str = "SPINRATE";

/// Column the title starts at
pub const TITLE_COLUMN: u8 = 4;

/// Unit label after the value
pub const UNIT_LABEL: &str = "RPS";

/// Widest value field that keeps the unit label on screen
pub const MAX_READOUT_WIDTH: u8 = DISPLAY_COLUMNS - 1 - UNIT_LABEL.len() as u8;

/// Title line
pub const fn title_line() -> ReadoutLine<'static> {
    ReadoutLine::new(CursorPosition::at(0, TITLE_COLUMN), TITLE)
}

/// Unit label placed after a value field of `width` characters
pub const fn unit_line(width: u8) -> ReadoutLine<'static> {
    ReadoutLine::new(CursorPosition::at(1, width + 1), UNIT_LABEL)
}

/// Value field at the start of the second row
pub const fn value_line(text: &str) -> ReadoutLine<'_> {
    ReadoutLine::new(CursorPosition::ROW1, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end_column(line: &ReadoutLine<'_>) -> usize {
        let (_, col) = line.position.row_col();
        col as usize + line.text.len()
    }

    #[test]
    fn test_widest_value_keeps_label_on_row() {
        assert_eq!(MAX_READOUT_WIDTH, 12);
        assert_eq!(end_column(&unit_line(MAX_READOUT_WIDTH)), DISPLAY_COLUMNS as usize);
        assert!(end_column(&unit_line(MAX_READOUT_WIDTH + 1)) > DISPLAY_COLUMNS as usize);
    }

    #[test]
    fn test_default_layout_positions() {
        assert_eq!(title_line().position.code(), 0x84);
        assert_eq!(unit_line(5).position.code(), 0xC6);
        assert_eq!(value_line(" 0.10").position, CursorPosition::ROW1);
        assert!(end_column(&title_line()) <= DISPLAY_COLUMNS as usize);
    }
}
