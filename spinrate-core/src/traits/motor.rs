//! Motor output trait
//!
//! The motor is driven at a single duty cycle chosen at build time. There is
//! no speed loop.

/// Errors that can occur with motor operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// Duty cycle above 100%
    InvalidDuty,
    /// PWM peripheral rejected the duty cycle
    Pwm,
}

/// PWM-driven motor with a static duty cycle
pub trait PwmMotor {
    /// Apply the configured duty cycle
    fn start(&mut self) -> Result<(), MotorError>;

    /// Drive the output to 0%
    fn stop(&mut self) -> Result<(), MotorError>;

    /// Check if the motor output is active
    fn is_running(&self) -> bool;

    /// Configured duty cycle (0-100%)
    fn duty_percent(&self) -> u8;
}
