//! Quadrature decoding
//!
//! Turns raw samples of the two encoder channels into trusted rotation
//! decisions:
//!
//! - [`table`]: the fixed transition table and the pure classifier
//! - [`filter`]: bounce rejection and majority voting over a poll window

pub mod filter;
pub mod table;

pub use filter::{BounceFilter, Direction, FilterOutcome, PollWindow, WindowVerdict};
pub use table::{classify, Rotation, SignalPair, TRANSITION_TABLE};
