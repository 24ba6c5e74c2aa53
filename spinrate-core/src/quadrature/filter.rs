//! Bounce rejection and majority voting
//!
//! Raw classifications are turned into trusted decisions by the
//! [`BounceFilter`]: an invalid transition is replaced by the last trusted
//! decision and the decoder keeps comparing against the last good sample.
//! Trusted decisions are then tallied in a [`PollWindow`], which resolves the
//! dominant direction each time the window fills.
//!
//! A run of invalid samples keeps repeating the last trusted decision, so the
//! tally keeps growing in the same bucket. Bounce on a turning encoder
//! therefore reinforces the direction it was already turning in.

use super::table::{classify, Rotation, SignalPair};

/// Direction decided at the end of a poll window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// No dominant direction (tie, or nothing decided yet)
    #[default]
    Stopped,
    /// Clockwise won the vote
    Clockwise,
    /// Counter-clockwise won the vote
    CounterClockwise,
}

impl Direction {
    /// Direction implied by a single trusted decision
    pub const fn from_rotation(rotation: Rotation) -> Self {
        match rotation {
            Rotation::Clockwise => Direction::Clockwise,
            Rotation::CounterClockwise => Direction::CounterClockwise,
            Rotation::None | Rotation::Invalid => Direction::Stopped,
        }
    }
}

/// Result of a resolved poll window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WindowVerdict {
    /// Winning direction
    pub direction: Direction,
    /// Clockwise tally at resolution
    pub cw: u16,
    /// Counter-clockwise tally at resolution
    pub ccw: u16,
}

/// Clockwise / counter-clockwise tallies over a fixed-size window
///
/// Invariant: `cw + ccw` never exceeds `size`; both tallies return to zero
/// in the same call that fills the window.
#[derive(Debug, Clone)]
pub struct PollWindow {
    cw: u16,
    ccw: u16,
    size: u16,
}

impl PollWindow {
    /// Create an empty window
    ///
    /// `size` must be at least 1; configuration validation enforces this.
    pub const fn new(size: u16) -> Self {
        Self { cw: 0, ccw: 0, size }
    }

    /// Tally one trusted decision
    ///
    /// Returns the verdict when this decision fills the window. No-rotation
    /// decisions are not counted.
    pub fn record(&mut self, decision: Rotation) -> Option<WindowVerdict> {
        match decision {
            Rotation::Clockwise => self.cw += 1,
            Rotation::CounterClockwise => self.ccw += 1,
            Rotation::None | Rotation::Invalid => return None,
        }

        if self.cw + self.ccw < self.size {
            return None;
        }

        let direction = if self.cw > self.ccw {
            Direction::Clockwise
        } else if self.ccw > self.cw {
            Direction::CounterClockwise
        } else {
            Direction::Stopped
        };

        let verdict = WindowVerdict {
            direction,
            cw: self.cw,
            ccw: self.ccw,
        };
        self.reset();
        Some(verdict)
    }

    /// Clear both tallies
    pub fn reset(&mut self) {
        self.cw = 0;
        self.ccw = 0;
    }

    /// Current (cw, ccw) tallies
    pub fn tallies(&self) -> (u16, u16) {
        (self.cw, self.ccw)
    }

    /// Configured window size
    pub fn size(&self) -> u16 {
        self.size
    }
}

/// Outcome of filtering one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FilterOutcome {
    /// Raw table classification
    pub classification: Rotation,
    /// Trusted decision (never [`Rotation::Invalid`])
    pub decision: Rotation,
    /// Whether the sample was accepted into the decoder state
    pub accepted: bool,
}

/// Decoder state with invalid-transition substitution
#[derive(Debug, Clone)]
pub struct BounceFilter {
    /// Last accepted channel levels
    last: SignalPair,
    /// Last trusted decision
    last_decision: Rotation,
}

impl BounceFilter {
    /// Create a filter seeded with the current channel levels
    pub const fn new(initial: SignalPair) -> Self {
        Self {
            last: initial,
            last_decision: Rotation::None,
        }
    }

    /// Classify and filter a new sample
    pub fn on_sample(&mut self, sample: SignalPair) -> FilterOutcome {
        let classification = classify(self.last, sample);

        let (decision, accepted) = if classification.is_invalid() {
            // Keep comparing against the last good sample
            (self.last_decision, false)
        } else {
            self.last = sample;
            (classification, true)
        };

        self.last_decision = decision;

        FilterOutcome {
            classification,
            decision,
            accepted,
        }
    }

    /// Last accepted channel levels
    pub fn state(&self) -> SignalPair {
        self.last
    }

    /// Last trusted decision
    pub fn last_decision(&self) -> Rotation {
        self.last_decision
    }
}
