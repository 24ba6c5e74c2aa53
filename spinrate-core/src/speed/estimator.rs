//! Revolutions-per-second estimation
//!
//! ```ignore
//! // On every timer expiry:
//! let rate = estimator.sample_rotation(&mut accumulator);
//! ```

use libm::fabs;

/// Rotational speed in revolutions per second
///
/// Always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rate(f64);

impl Rate {
    /// Standstill
    pub const ZERO: Rate = Rate(0.0);

    /// Rate from revolutions per second
    pub const fn from_rps(rps: f64) -> Self {
        Rate(rps)
    }

    /// Revolutions per second
    pub fn as_rps(self) -> f64 {
        self.0
    }

    /// Revolutions per minute
    pub fn as_rpm(self) -> f64 {
        self.0 * 60.0
    }

    /// Raw bit pattern, for publishing through an atomic
    pub fn to_bits(self) -> u64 {
        self.0.to_bits()
    }

    /// Rebuild a rate from [`to_bits`](Self::to_bits)
    pub fn from_bits(bits: u64) -> Self {
        Rate(f64::from_bits(bits))
    }
}

/// Signed fractional revolutions since the last sample
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RotationAccumulator {
    revolutions: f64,
}

impl RotationAccumulator {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self { revolutions: 0.0 }
    }

    /// Add a signed number of revolutions
    pub fn add(&mut self, revolutions: f64) {
        self.revolutions += revolutions;
    }

    /// Current accumulated revolutions
    pub fn revolutions(&self) -> f64 {
        self.revolutions
    }

    /// Return the accumulated revolutions and reset to zero
    pub fn take(&mut self) -> f64 {
        core::mem::take(&mut self.revolutions)
    }
}

/// Converts accumulated motion into a [`Rate`] once per sample time
#[derive(Debug, Clone)]
pub struct SpeedEstimator {
    sample_time_s: f64,
    counts_per_rev: u16,
    rate: Rate,
}

impl SpeedEstimator {
    /// Create an estimator for a fixed sample time
    ///
    /// `sample_time_s` must be positive and `counts_per_rev` non-zero;
    /// configuration validation enforces both.
    pub const fn new(sample_time_s: f64, counts_per_rev: u16) -> Self {
        Self {
            sample_time_s,
            counts_per_rev,
            rate: Rate::ZERO,
        }
    }

    /// Sample from a rotation accumulator
    ///
    /// Computes `|revolutions| / sample_time` and clears the accumulator.
    pub fn sample_rotation(&mut self, accumulator: &mut RotationAccumulator) -> Rate {
        let revolutions = accumulator.take();
        self.rate = Rate(fabs(revolutions) / self.sample_time_s);
        self.rate
    }

    /// Sample from a raw pulse count
    ///
    /// Computes `pulses / counts_per_rev / sample_time`.
    pub fn sample_pulses(&mut self, pulses: u32) -> Rate {
        let revolutions = pulses as f64 / self.counts_per_rev as f64;
        self.rate = Rate(revolutions / self.sample_time_s);
        self.rate
    }

    /// Most recently computed rate
    pub fn rate(&self) -> Rate {
        self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        fabs(a - b) < 1e-9
    }

    #[test]
    fn test_rate_from_accumulated_rotation() {
        let mut estimator = SpeedEstimator::new(1.0, 1024);
        let mut acc = RotationAccumulator::new();
        acc.add(0.1);

        let rate = estimator.sample_rotation(&mut acc);
        assert!(close(rate.as_rps(), 0.1));
        assert_eq!(acc.revolutions(), 0.0);
    }

    #[test]
    fn test_negative_rotation_gives_positive_rate() {
        let mut estimator = SpeedEstimator::new(0.026, 1024);
        let mut acc = RotationAccumulator::new();
        acc.add(-50.0 / 1024.0);

        let rate = estimator.sample_rotation(&mut acc);
        assert!(close(rate.as_rps(), 50.0 / 1024.0 / 0.026));
    }

    #[test]
    fn test_rate_from_pulses() {
        let mut estimator = SpeedEstimator::new(0.5, 500);
        let rate = estimator.sample_pulses(250);
        assert!(close(rate.as_rps(), 1.0));
        assert!(close(rate.as_rpm(), 60.0));
        assert_eq!(estimator.rate(), rate);
    }

    #[test]
    fn test_idle_sample_is_zero() {
        let mut estimator = SpeedEstimator::new(1.0, 1024);
        let mut acc = RotationAccumulator::new();
        assert_eq!(estimator.sample_rotation(&mut acc), Rate::ZERO);
    }

    #[test]
    fn test_bits_round_trip() {
        let rate = Rate::from_rps(12.75);
        assert_eq!(Rate::from_bits(rate.to_bits()), rate);
    }

    proptest! {
        #[test]
        fn prop_rate_is_non_negative(
            revs in -1000.0f64..1000.0,
            sample_time in 0.001f64..10.0,
        ) {
            let mut estimator = SpeedEstimator::new(sample_time, 1024);
            let mut acc = RotationAccumulator::new();
            acc.add(revs);
            prop_assert!(estimator.sample_rotation(&mut acc).as_rps() >= 0.0);
        }
    }
}
