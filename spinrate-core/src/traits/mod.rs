//! Collaborator traits
//!
//! These traits define the interface between the decoding logic and the
//! hardware-specific outputs.

pub mod display;
pub mod indicator;
pub mod motor;

pub use display::{CharacterDisplay, DisplayError};
pub use indicator::{IndicatorDriver, IndicatorPattern};
pub use motor::{MotorError, PwmMotor};
