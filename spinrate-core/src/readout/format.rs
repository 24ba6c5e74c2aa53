//! Fixed-width rate formatting
//!
//! Values are right-aligned in a field of `width` characters. Decimals are
//! dropped one at a time until the value fits. When even the integer part is
//! too wide, the field is filled with nines and ends in [`OVERFLOW_MARKER`].

use core::fmt::Write;

use heapless::String;

use crate::speed::Rate;

/// Largest readout field, in characters
pub const READOUT_CAPACITY: usize = 16;

/// Last character of a field whose value did not fit
pub const OVERFLOW_MARKER: char = '!';

/// Format a rate into a fixed-width field
///
/// `width` is clamped to `1..=READOUT_CAPACITY`.
pub fn format_rate(rate: Rate, width: u8, decimals: u8) -> String<READOUT_CAPACITY> {
    let width = (width as usize).clamp(1, READOUT_CAPACITY);
    let value = rate.as_rps();

    if value.is_finite() {
        for prec in (0..=decimals as usize).rev() {
            let mut out = String::new();
            // A write error means the text outgrew the buffer
            if write!(out, "{:>width$.prec$}", value, width = width, prec = prec).is_ok()
                && out.len() == width
            {
                return out;
            }
        }
    }

    overflow(width)
}

fn overflow(width: usize) -> String<READOUT_CAPACITY> {
    let mut out = String::new();
    for _ in 1..width {
        let _ = out.push('9');
    }
    let _ = out.push(OVERFLOW_MARKER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rps(value: f64) -> Rate {
        Rate::from_rps(value)
    }

    #[test]
    fn test_pads_to_width() {
        assert_eq!(format_rate(rps(0.1), 5, 2).as_str(), " 0.10");
        assert_eq!(format_rate(Rate::ZERO, 5, 2).as_str(), " 0.00");
    }

    #[test]
    fn test_drops_decimals_to_fit() {
        assert_eq!(format_rate(rps(123.456), 5, 2).as_str(), "123.5");
        assert_eq!(format_rate(rps(1234.4), 5, 2).as_str(), " 1234");
    }

    #[test]
    fn test_rounding_carry_still_fits() {
        assert_eq!(format_rate(rps(9.999), 4, 2).as_str(), "10.0");
    }

    #[test]
    fn test_overflow_marker() {
        let out = format_rate(rps(123_456.0), 5, 2);
        assert_eq!(out.as_str(), "9999!");
        assert!(out.ends_with(OVERFLOW_MARKER));
    }

    #[test]
    fn test_width_is_clamped() {
        assert_eq!(format_rate(rps(5.0), 0, 0).as_str(), "5");
        assert_eq!(format_rate(rps(50.0), 1, 0).as_str(), "!");

        let wide = format_rate(rps(1.5), 200, 1);
        assert_eq!(wide.len(), READOUT_CAPACITY);
    }

    #[test]
    fn test_non_finite_is_flagged() {
        assert_eq!(format_rate(rps(f64::INFINITY), 3, 1).as_str(), "99!");
        assert_eq!(format_rate(rps(f64::NAN), 3, 1).as_str(), "99!");
    }
}
