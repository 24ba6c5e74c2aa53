//! Speed estimation
//!
//! Rotation is accumulated between timer boundaries and converted to
//! revolutions per second each time the [`SampleTimer`] expires.

pub mod estimator;
pub mod pulse;
pub mod timer;

pub use estimator::{Rate, RotationAccumulator, SpeedEstimator};
pub use pulse::PulseCounter;
pub use timer::SampleTimer;
