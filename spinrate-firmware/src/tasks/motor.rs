//! Motor task
//!
//! Spins the test motor at a fixed duty for as long as the firmware runs.

use defmt::*;
use embassy_rp::pwm::PwmOutput;

use spinrate_core::config::MotorConfig;
use spinrate_core::traits::PwmMotor;
use spinrate_drivers::motor::FixedDutyMotor;

/// Start the motor and hold it at the configured duty
#[embassy_executor::task]
pub async fn motor_task(pwm: PwmOutput<'static>, config: MotorConfig) {
    info!("Motor task started ({}% duty)", config.duty_percent);

    let mut motor = match FixedDutyMotor::new(pwm, config.duty_percent) {
        Ok(motor) => motor,
        Err(e) => {
            error!("Motor setup failed: {}", e);
            return;
        }
    };

    if let Err(e) = motor.start() {
        error!("Motor start failed: {}", e);
        return;
    }

    // The driver must stay alive to keep the output running
    core::future::pending::<()>().await;
}
