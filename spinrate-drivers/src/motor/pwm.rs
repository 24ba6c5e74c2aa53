//! Fixed-duty PWM motor
//!
//! Drives a motor through any `embedded-hal` PWM channel at one duty cycle
//! chosen at build time. Speed is observed through the encoder, never
//! regulated.

use embedded_hal::pwm::SetDutyCycle;
use spinrate_core::traits::{MotorError, PwmMotor};

/// Motor on a single PWM channel
pub struct FixedDutyMotor<P> {
    pwm: P,
    duty_percent: u8,
    running: bool,
}

impl<P: SetDutyCycle> FixedDutyMotor<P> {
    /// Create a stopped motor
    ///
    /// Drives the channel fully off so the motor cannot twitch at boot.
    pub fn new(mut pwm: P, duty_percent: u8) -> Result<Self, MotorError> {
        if duty_percent > 100 {
            return Err(MotorError::InvalidDuty);
        }
        pwm.set_duty_cycle_fully_off().map_err(|_| MotorError::Pwm)?;
        Ok(Self {
            pwm,
            duty_percent,
            running: false,
        })
    }
}

impl<P: SetDutyCycle> PwmMotor for FixedDutyMotor<P> {
    fn start(&mut self) -> Result<(), MotorError> {
        self.pwm
            .set_duty_cycle_percent(self.duty_percent)
            .map_err(|_| MotorError::Pwm)?;
        self.running = self.duty_percent > 0;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), MotorError> {
        self.pwm
            .set_duty_cycle_fully_off()
            .map_err(|_| MotorError::Pwm)?;
        self.running = false;
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn duty_percent(&self) -> u8 {
        self.duty_percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::pwm::ErrorType;

    struct MockPwm {
        duty: u16,
    }

    impl ErrorType for MockPwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for MockPwm {
        fn max_duty_cycle(&self) -> u16 {
            1000
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn test_new_forces_output_off() {
        let motor = FixedDutyMotor::new(MockPwm { duty: 700 }, 40).unwrap();
        assert_eq!(motor.pwm.duty, 0);
        assert!(!motor.is_running());
    }

    #[test]
    fn test_start_applies_configured_duty() {
        let mut motor = FixedDutyMotor::new(MockPwm { duty: 0 }, 40).unwrap();
        motor.start().unwrap();
        assert_eq!(motor.pwm.duty, 400);
        assert!(motor.is_running());

        motor.stop().unwrap();
        assert_eq!(motor.pwm.duty, 0);
        assert!(!motor.is_running());
    }

    #[test]
    fn test_zero_duty_never_runs() {
        let mut motor = FixedDutyMotor::new(MockPwm { duty: 0 }, 0).unwrap();
        motor.start().unwrap();
        assert!(!motor.is_running());
    }

    #[test]
    fn test_rejects_duty_over_100() {
        assert!(matches!(
            FixedDutyMotor::new(MockPwm { duty: 0 }, 101),
            Err(MotorError::InvalidDuty)
        ));
    }
}
