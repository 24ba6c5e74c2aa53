//! Direction indicator outputs

use crate::quadrature::Direction;

/// One-hot pattern for the three indicator outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorPattern {
    pub cw: bool,
    pub ccw: bool,
    pub stopped: bool,
}

impl IndicatorPattern {
    /// All outputs off
    pub const OFF: IndicatorPattern = IndicatorPattern {
        cw: false,
        ccw: false,
        stopped: false,
    };

    /// Pattern for a decided direction (exactly one output on)
    pub const fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Clockwise => IndicatorPattern {
                cw: true,
                ..Self::OFF
            },
            Direction::CounterClockwise => IndicatorPattern {
                ccw: true,
                ..Self::OFF
            },
            Direction::Stopped => IndicatorPattern {
                stopped: true,
                ..Self::OFF
            },
        }
    }
}

/// Outputs reflecting the current decided direction
pub trait IndicatorDriver {
    /// Show a decided direction
    fn show(&mut self, direction: Direction) {
        self.apply(IndicatorPattern::for_direction(direction));
    }

    /// Drive the outputs to an explicit pattern
    fn apply(&mut self, pattern: IndicatorPattern);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_are_one_hot() {
        for dir in [
            Direction::Clockwise,
            Direction::CounterClockwise,
            Direction::Stopped,
        ] {
            let p = IndicatorPattern::for_direction(dir);
            let lit = [p.cw, p.ccw, p.stopped].iter().filter(|on| **on).count();
            assert_eq!(lit, 1);
        }
    }

    #[test]
    fn test_clockwise_pattern() {
        let p = IndicatorPattern::for_direction(Direction::Clockwise);
        assert!(p.cw);
        assert!(!p.ccw);
        assert!(!p.stopped);
    }
}
