//! Encoder context
//!
//! [`EncoderContext`] owns every piece of decoder state: the bounce filter,
//! the poll window, the rotation accumulator and the sample timer. It is
//! built once at startup from the configuration and the current channel
//! levels and then lives for as long as the firmware runs.
//!
//! Two handlers mutate it:
//! - [`EncoderContext::on_edge`] for every change on either encoder line
//! - [`EncoderContext::on_timer_tick`] for every sample timer period
//!
//! Each call is a multi-field update, so callers sharing a context between
//! tasks or interrupts must hold a lock for the whole call.

use crate::config::{DecodeMode, EncoderConfig, FirmwareConfig};
use crate::quadrature::{BounceFilter, Direction, PollWindow, Rotation, SignalPair};
use crate::speed::{PulseCounter, Rate, RotationAccumulator, SampleTimer, SpeedEstimator};

/// Result of processing one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeOutcome {
    /// Raw table classification
    pub classification: Rotation,
    /// Trusted decision after bounce substitution
    pub decision: Rotation,
    /// Whether the sample replaced the decoder state
    pub accepted: bool,
    /// Direction to show on the indicators, when one was decided
    pub resolved: Option<Direction>,
}

/// Running counters for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecoderStats {
    /// Edges processed
    pub edges: u32,
    /// Invalid transitions replaced by the last trusted decision
    pub rejected: u32,
    /// Poll windows resolved
    pub windows: u32,
}

/// All decoder and speed state
#[derive(Debug, Clone)]
pub struct EncoderContext {
    encoder: EncoderConfig,
    filter: BounceFilter,
    window: PollWindow,
    pulses: PulseCounter,
    accumulator: RotationAccumulator,
    timer: SampleTimer,
    estimator: SpeedEstimator,
    direction: Direction,
    stats: DecoderStats,
}

impl EncoderContext {
    /// Create the context from a validated configuration and the current
    /// channel levels
    pub fn new(config: &FirmwareConfig, initial: SignalPair) -> Self {
        Self {
            encoder: config.encoder,
            filter: BounceFilter::new(initial),
            window: PollWindow::new(config.encoder.poll_window),
            pulses: PulseCounter::new(initial),
            accumulator: RotationAccumulator::new(),
            timer: config.sampler.timer(),
            estimator: config.estimator(),
            direction: Direction::Stopped,
            stats: DecoderStats::default(),
        }
    }

    /// Process a change on either encoder line
    pub fn on_edge(&mut self, sample: SignalPair) -> EdgeOutcome {
        self.stats.edges = self.stats.edges.saturating_add(1);

        let filtered = self.filter.on_sample(sample);
        if !filtered.accepted {
            self.stats.rejected = self.stats.rejected.saturating_add(1);
        }

        let resolved = match self.encoder.mode {
            DecodeMode::Voting => self.vote(filtered.decision),
            DecodeMode::Direct => Some(self.step(filtered.decision)),
            DecodeMode::PulseCount => {
                self.pulses.on_sample(sample);
                None
            }
        };

        if let Some(direction) = resolved {
            self.direction = direction;
        }

        EdgeOutcome {
            classification: filtered.classification,
            decision: filtered.decision,
            accepted: filtered.accepted,
            resolved,
        }
    }

    /// Tally a decision; adjust the accumulator when the window resolves
    fn vote(&mut self, decision: Rotation) -> Option<Direction> {
        let verdict = self.window.record(decision)?;
        self.stats.windows = self.stats.windows.saturating_add(1);

        let revolutions = self.encoder.window_revolutions();
        match verdict.direction {
            Direction::Clockwise => self.accumulator.add(-revolutions),
            Direction::CounterClockwise => self.accumulator.add(revolutions),
            Direction::Stopped => {}
        }
        Some(verdict.direction)
    }

    /// Apply a single decision straight to the accumulator
    fn step(&mut self, decision: Rotation) -> Direction {
        let revolutions = self.encoder.count_revolutions();
        match decision {
            Rotation::Clockwise => self.accumulator.add(-revolutions),
            Rotation::CounterClockwise => self.accumulator.add(revolutions),
            Rotation::None | Rotation::Invalid => {}
        }
        Direction::from_rotation(decision)
    }

    /// Account for one sample timer period
    ///
    /// Returns the new rate when the sample time has elapsed.
    pub fn on_timer_tick(&mut self) -> Option<Rate> {
        if !self.timer.tick() {
            return None;
        }

        let rate = match self.encoder.mode {
            DecodeMode::PulseCount => self.estimator.sample_pulses(self.pulses.take()),
            DecodeMode::Voting | DecodeMode::Direct => {
                self.estimator.sample_rotation(&mut self.accumulator)
            }
        };
        Some(rate)
    }

    /// Most recent rate
    pub fn rate(&self) -> Rate {
        self.estimator.rate()
    }

    /// Most recently decided direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Decoding mode in use
    pub fn mode(&self) -> DecodeMode {
        self.encoder.mode
    }

    /// Last accepted channel levels
    pub fn decoder_state(&self) -> SignalPair {
        self.filter.state()
    }

    /// Last trusted decision
    pub fn last_decision(&self) -> Rotation {
        self.filter.last_decision()
    }

    /// Current (cw, ccw) poll window tallies
    pub fn tallies(&self) -> (u16, u16) {
        self.window.tallies()
    }

    /// Revolutions accumulated since the last sample
    pub fn accumulated_revolutions(&self) -> f64 {
        self.accumulator.revolutions()
    }

    /// Pulses counted since the last sample (pulse-count mode)
    pub fn pending_pulses(&self) -> u32 {
        self.pulses.pulses()
    }

    /// Diagnostic counters
    pub fn stats(&self) -> DecoderStats {
        self.stats
    }
}
