//! Sample timer countdown
//!
//! Models a hardware timer that overflows once per configured period. A
//! speed sample is taken after a fixed number of overflows; the timer
//! reloads itself in the same call that reports expiry, so there is no
//! separate re-arm path.

/// Countdown over repeated timer periods
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleTimer {
    periods_per_sample: u16,
    remaining: u16,
}

impl SampleTimer {
    /// Create a loaded timer
    ///
    /// `periods_per_sample` must be non-zero; configuration validation
    /// enforces this.
    pub const fn new(periods_per_sample: u16) -> Self {
        Self {
            periods_per_sample,
            remaining: periods_per_sample,
        }
    }

    /// Account for one elapsed timer period
    ///
    /// Returns `true` when the sample time has elapsed. The countdown is
    /// reloaded before returning.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.remaining = self.periods_per_sample;
            true
        } else {
            false
        }
    }

    /// Periods left until the next sample
    pub fn remaining(&self) -> u16 {
        self.remaining
    }
}
