//! Display addressing
//!
//! The character display takes a cursor-positioning code followed by the
//! text to show from that position. Codes are `0x80 | address`, where row 0
//! starts at address `0x00` and row 1 at `0x40`. Some layouts send the code
//! in a two-byte form `0x00, code`; both forms are accepted.

/// Cursor-positioning code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorPosition(u8);

impl CursorPosition {
    /// Start of row 0
    pub const ROW0: CursorPosition = CursorPosition(0x80);
    /// Start of row 1
    pub const ROW1: CursorPosition = CursorPosition(0xC0);

    /// Position from row (0-1) and column (0-39)
    pub const fn at(row: u8, col: u8) -> Self {
        let base = if row == 0 { 0x00 } else { 0x40 };
        CursorPosition(0x80 | (base + (col & 0x3F)))
    }

    /// Parse a one-byte (`0xhh`) or two-byte (`0x00 0xhh`) code
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let code = match bytes {
            [code] => *code,
            [0x00, code] => *code,
            _ => return None,
        };
        if code & 0x80 == 0 {
            return None;
        }
        Some(CursorPosition(code))
    }

    /// Raw code byte
    pub const fn code(self) -> u8 {
        self.0
    }

    /// (row, column) addressed by this code
    pub const fn row_col(self) -> (u8, u8) {
        let addr = self.0 & 0x7F;
        if addr >= 0x40 {
            (1, addr - 0x40)
        } else {
            (0, addr)
        }
    }
}

/// Text shown from a given position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReadoutLine<'a> {
    pub position: CursorPosition,
    pub text: &'a str,
}

impl<'a> ReadoutLine<'a> {
    pub const fn new(position: CursorPosition, text: &'a str) -> Self {
        Self { position, text }
    }
}
