//! Raw pulse counting
//!
//! Counts rising edges on channel A only. Direction is not tracked, so this
//! cannot tell clockwise from counter-clockwise rotation.

use crate::quadrature::SignalPair;

/// Rising-edge counter on channel A
#[derive(Debug, Clone)]
pub struct PulseCounter {
    pulses: u32,
    last_a: bool,
}

impl PulseCounter {
    /// Create a counter seeded with the current channel levels
    pub const fn new(initial: SignalPair) -> Self {
        Self {
            pulses: 0,
            last_a: initial.a,
        }
    }

    /// Record a sample; returns `true` if it was a rising edge on A
    pub fn on_sample(&mut self, sample: SignalPair) -> bool {
        let rising = sample.a && !self.last_a;
        self.last_a = sample.a;
        if rising {
            self.pulses = self.pulses.saturating_add(1);
        }
        rising
    }

    /// Pulses counted since the last [`take`](Self::take)
    pub fn pulses(&self) -> u32 {
        self.pulses
    }

    /// Return the pulse count and restart counting
    pub fn take(&mut self) -> u32 {
        core::mem::take(&mut self.pulses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_rising_edges_on_a() {
        let mut counter = PulseCounter::new(SignalPair::from_code(0));

        assert!(counter.on_sample(SignalPair::from_code(2))); // A rises
        assert!(!counter.on_sample(SignalPair::from_code(3))); // B rises
        assert!(!counter.on_sample(SignalPair::from_code(1))); // A falls
        assert!(counter.on_sample(SignalPair::from_code(3))); // A rises

        assert_eq!(counter.take(), 2);
        assert_eq!(counter.pulses(), 0);
    }

    #[test]
    fn test_ignores_direction() {
        let mut cw = PulseCounter::new(SignalPair::from_code(0));
        let mut ccw = PulseCounter::new(SignalPair::from_code(0));

        for code in [2u8, 3, 1, 0, 2, 3, 1, 0] {
            cw.on_sample(SignalPair::from_code(code));
        }
        for code in [1u8, 3, 2, 0, 1, 3, 2, 0] {
            ccw.on_sample(SignalPair::from_code(code));
        }

        assert_eq!(cw.pulses(), 2);
        assert_eq!(ccw.pulses(), 2);
    }
}
