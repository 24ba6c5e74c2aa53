//! Transition classification
//!
//! The encoder lines form a 2-bit Gray code. Walking the code one way is
//! clockwise, the other way counter-clockwise:
//!
//! ```text
//! code (AB):   00 -> 10 -> 11 -> 01 -> 00   clockwise
//!              00 -> 01 -> 11 -> 10 -> 00   counter-clockwise
//! ```
//!
//! A change of both bits between two samples cannot happen on a healthy
//! encoder and is reported as [`Rotation::Invalid`].

/// Both encoder channels sampled at the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalPair {
    /// Channel A level
    pub a: bool,
    /// Channel B level
    pub b: bool,
}

impl SignalPair {
    /// Create a pair from the two channel levels
    pub const fn new(a: bool, b: bool) -> Self {
        Self { a, b }
    }

    /// Build a pair from a 2-bit state code (A is bit 1, B is bit 0)
    ///
    /// Bits above bit 1 are ignored.
    pub const fn from_code(code: u8) -> Self {
        Self {
            a: code & 0b10 != 0,
            b: code & 0b01 != 0,
        }
    }

    /// The 2-bit state code, `A * 2 + B` (range 0-3)
    pub const fn code(self) -> u8 {
        ((self.a as u8) << 1) | self.b as u8
    }
}

impl From<(bool, bool)> for SignalPair {
    fn from((a, b): (bool, bool)) -> Self {
        Self { a, b }
    }
}

/// Classification of a single transition between two samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(i8)]
pub enum Rotation {
    /// One step counter-clockwise
    CounterClockwise = -1,
    /// Lines unchanged
    #[default]
    None = 0,
    /// One step clockwise
    Clockwise = 1,
    /// Both lines changed at once (bounce or a missed edge)
    Invalid = 2,
}

impl Rotation {
    /// Signed table value: -1, 0, 1, or the invalid sentinel 2
    pub const fn as_i8(self) -> i8 {
        self as i8
    }

    /// Check if this is the invalid-transition sentinel
    pub const fn is_invalid(self) -> bool {
        matches!(self, Rotation::Invalid)
    }
}

use Rotation::{Clockwise as CW, CounterClockwise as CCW, Invalid as BAD, None as NO};

/// Quadrature transition table, indexed by `previous * 4 + new`
pub const TRANSITION_TABLE: [Rotation; 16] = [
    NO, CCW, CW, BAD, // from 00
    CW, NO, BAD, CCW, // from 01
    CCW, BAD, NO, CW, // from 10
    BAD, CW, CCW, NO, // from 11
];

/// Classify the transition from `previous` to `new`
#[inline]
pub fn classify(previous: SignalPair, new: SignalPair) -> Rotation {
    TRANSITION_TABLE[(previous.code() * 4 + new.code()) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_table_matches_reference_constants() {
        let expected: [i8; 16] = [0, -1, 1, 2, 1, 0, 2, -1, -1, 2, 0, 1, 2, 1, -1, 0];
        for (entry, value) in TRANSITION_TABLE.iter().zip(expected) {
            assert_eq!(entry.as_i8(), value);
        }
    }

    #[test]
    fn test_code_round_trip() {
        for code in 0..4u8 {
            assert_eq!(SignalPair::from_code(code).code(), code);
        }
        assert_eq!(SignalPair::new(true, false).code(), 2);
        assert_eq!(SignalPair::from_code(0b111), SignalPair::new(true, true));
    }

    #[test]
    fn test_00_to_01_is_counter_clockwise() {
        let rot = classify(SignalPair::from_code(0), SignalPair::from_code(1));
        assert_eq!(rot, Rotation::CounterClockwise);
        assert_eq!(rot.as_i8(), -1);
    }

    #[test]
    fn test_00_to_11_is_invalid() {
        let rot = classify(SignalPair::from_code(0), SignalPair::from_code(3));
        assert_eq!(rot, Rotation::Invalid);
        assert_eq!(rot.as_i8(), 2);
    }

    #[test]
    fn test_full_cycle_clockwise() {
        // 00 -> 10 -> 11 -> 01 -> 00
        let cycle = [0u8, 2, 3, 1, 0];
        for pair in cycle.windows(2) {
            let rot = classify(SignalPair::from_code(pair[0]), SignalPair::from_code(pair[1]));
            assert_eq!(rot, Rotation::Clockwise);
        }
    }

    proptest! {
        #[test]
        fn prop_same_state_is_no_rotation(p in 0u8..4) {
            let s = SignalPair::from_code(p);
            prop_assert_eq!(classify(s, s), Rotation::None);
        }

        #[test]
        fn prop_entry_kind_follows_bit_distance(p in 0u8..4, n in 0u8..4) {
            let rot = classify(SignalPair::from_code(p), SignalPair::from_code(n));
            match (p ^ n).count_ones() {
                0 => prop_assert_eq!(rot, Rotation::None),
                1 => prop_assert!(matches!(rot, Rotation::Clockwise | Rotation::CounterClockwise)),
                _ => prop_assert_eq!(rot, Rotation::Invalid),
            }
        }

        #[test]
        fn prop_reverse_step_flips_sign(p in 0u8..4, bit in 0u8..2) {
            let n = p ^ (1 << bit);
            let fwd = classify(SignalPair::from_code(p), SignalPair::from_code(n));
            let back = classify(SignalPair::from_code(n), SignalPair::from_code(p));
            prop_assert_eq!(fwd.as_i8(), -back.as_i8());
        }
    }
}
