//! Motor driver implementations

pub mod pwm;

pub use pwm::FixedDutyMotor;
