//! Direction indicator implementations

pub mod leds;

pub use leds::LedIndicator;
