//! Configuration type definitions
//!
//! Every value here is fixed once the firmware is built. `validate()` is
//! called by the firmware build script so a bad configuration fails the
//! build instead of misbehaving on the bench.

use crate::readout::MAX_READOUT_WIDTH;
use crate::speed::{SampleTimer, SpeedEstimator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Most decimals the readout will try to show
pub const MAX_DECIMALS: u8 = 6;

/// How encoder edges are turned into speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DecodeMode {
    /// Bounce filter plus majority vote over a poll window
    #[default]
    Voting,
    /// Bounce filter only; every trusted step counts immediately
    Direct,
    /// Rising edges on channel A only
    ///
    /// Cannot detect counter-clockwise rotation. Kept for compatibility with
    /// boards that only wire one channel.
    PulseCount,
}

/// Encoder geometry and decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncoderConfig {
    /// Counts per full revolution (from the encoder datasheet)
    pub counts_per_rev: u16,
    /// Trusted decisions per direction vote
    pub poll_window: u16,
    /// Decoding mode
    pub mode: DecodeMode,
}

impl EncoderConfig {
    /// Revolutions represented by one full poll window
    pub fn window_revolutions(&self) -> f64 {
        self.poll_window as f64 / self.counts_per_rev as f64
    }

    /// Revolutions represented by a single count
    pub fn count_revolutions(&self) -> f64 {
        1.0 / self.counts_per_rev as f64
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            counts_per_rev: 1024,
            poll_window: 50,
            mode: DecodeMode::Voting,
        }
    }
}

/// Speed sampling timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplerConfig {
    /// Timer period in microseconds
    pub timer_period_us: u32,
    /// Timer periods per speed sample
    pub periods_per_sample: u16,
}

impl SamplerConfig {
    /// Total sample time in seconds
    pub fn sample_time_s(&self) -> f64 {
        self.timer_period_us as f64 * self.periods_per_sample as f64 / 1_000_000.0
    }

    /// Build the countdown timer for this configuration
    pub fn timer(&self) -> SampleTimer {
        SampleTimer::new(self.periods_per_sample)
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            timer_period_us: 26_000,
            periods_per_sample: 1,
        }
    }
}

/// Numeric readout on the character display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReadoutConfig {
    /// Display refresh interval in milliseconds
    pub refresh_ms: u32,
    /// Field width in characters
    pub width: u8,
    /// Preferred number of decimals
    pub decimals: u8,
}

impl Default for ReadoutConfig {
    fn default() -> Self {
        Self {
            refresh_ms: 10,
            width: 5,
            decimals: 2,
        }
    }
}

/// Fixed-duty motor output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotorConfig {
    /// Drive the motor at all
    pub enabled: bool,
    /// Static duty cycle (0-100%)
    pub duty_percent: u8,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            duty_percent: 50,
        }
    }
}

/// Complete firmware configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FirmwareConfig {
    pub encoder: EncoderConfig,
    pub sampler: SamplerConfig,
    pub readout: ReadoutConfig,
    pub motor: MotorConfig,
}

impl FirmwareConfig {
    /// Check every value the runtime relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.encoder.counts_per_rev == 0 {
            return Err(ConfigError::ZeroCountsPerRev);
        }
        if self.encoder.poll_window == 0 {
            return Err(ConfigError::ZeroPollWindow);
        }
        if self.sampler.timer_period_us == 0 || self.sampler.periods_per_sample == 0 {
            return Err(ConfigError::ZeroSamplePeriod);
        }
        if self.readout.refresh_ms == 0 {
            return Err(ConfigError::ZeroRefreshInterval);
        }
        if self.readout.width == 0 || self.readout.width > MAX_READOUT_WIDTH {
            return Err(ConfigError::ReadoutWidthOutOfRange);
        }
        if self.readout.decimals > MAX_DECIMALS {
            return Err(ConfigError::TooManyDecimals);
        }
        if self.motor.duty_percent > 100 {
            return Err(ConfigError::DutyOutOfRange);
        }
        Ok(())
    }

    /// Build the speed estimator for this configuration
    pub fn estimator(&self) -> SpeedEstimator {
        SpeedEstimator::new(self.sampler.sample_time_s(), self.encoder.counts_per_rev)
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `counts_per_rev` is zero
    ZeroCountsPerRev,
    /// `poll_window` is zero
    ZeroPollWindow,
    /// Timer period or periods per sample is zero
    ZeroSamplePeriod,
    /// Readout refresh interval is zero
    ZeroRefreshInterval,
    /// Readout width is zero or leaves no room for the unit label
    ReadoutWidthOutOfRange,
    /// More decimals than the readout supports
    TooManyDecimals,
    /// Motor duty above 100%
    DutyOutOfRange,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ConfigError::ZeroCountsPerRev => "encoder.counts_per_rev must be at least 1",
            ConfigError::ZeroPollWindow => "encoder.poll_window must be at least 1",
            ConfigError::ZeroSamplePeriod => {
                "sampler.timer_period_us and sampler.periods_per_sample must be at least 1"
            }
            ConfigError::ZeroRefreshInterval => "readout.refresh_ms must be at least 1",
            ConfigError::ReadoutWidthOutOfRange => "readout.width must be between 1 and 12",
            ConfigError::TooManyDecimals => "readout.decimals must be at most 6",
            ConfigError::DutyOutOfRange => "motor.duty_percent must be at most 100",
        };
        f.write_str(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(FirmwareConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_counts() {
        let mut config = FirmwareConfig::default();
        config.encoder.counts_per_rev = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroCountsPerRev));
    }

    #[test]
    fn test_rejects_zero_window() {
        let mut config = FirmwareConfig::default();
        config.encoder.poll_window = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroPollWindow));
    }

    #[test]
    fn test_rejects_zero_sample_time() {
        let mut config = FirmwareConfig::default();
        config.sampler.periods_per_sample = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroSamplePeriod));
    }

    #[test]
    fn test_rejects_bad_readout() {
        let mut config = FirmwareConfig::default();
        config.readout.width = 0;
        assert_eq!(config.validate(), Err(ConfigError::ReadoutWidthOutOfRange));

        let mut config = FirmwareConfig::default();
        config.readout.decimals = MAX_DECIMALS + 1;
        assert_eq!(config.validate(), Err(ConfigError::TooManyDecimals));
    }

    #[test]
    fn test_rejects_width_that_pushes_unit_label_off_row() {
        let mut config = FirmwareConfig::default();
        config.readout.width = MAX_READOUT_WIDTH;
        assert_eq!(config.validate(), Ok(()));

        for width in MAX_READOUT_WIDTH + 1..=16 {
            config.readout.width = width;
            assert_eq!(config.validate(), Err(ConfigError::ReadoutWidthOutOfRange));
        }
    }

    #[test]
    fn test_sample_time() {
        let sampler = SamplerConfig::default();
        assert!(libm::fabs(sampler.sample_time_s() - 0.026) < 1e-12);

        let sampler = SamplerConfig {
            timer_period_us: 10_000,
            periods_per_sample: 100,
        };
        assert!(libm::fabs(sampler.sample_time_s() - 1.0) < 1e-12);
        assert_eq!(sampler.timer().remaining(), 100);
    }

    #[test]
    fn test_rejects_duty_over_100() {
        let mut config = FirmwareConfig::default();
        config.motor.duty_percent = 101;
        assert_eq!(config.validate(), Err(ConfigError::DutyOutOfRange));
    }

    #[test]
    fn test_window_revolutions() {
        let encoder = EncoderConfig::default();
        assert_eq!(encoder.window_revolutions(), 50.0 / 1024.0);
        assert_eq!(encoder.count_revolutions(), 1.0 / 1024.0);
    }
}
