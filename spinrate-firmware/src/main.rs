//! Spinrate - Quadrature Encoder Tachometer Firmware
//!
//! Main firmware binary for RP2040-based boards. Decodes a quadrature
//! encoder with bounce rejection and majority voting, shows the rotation
//! direction on three LEDs and the speed in revolutions per second on a
//! 16x2 character LCD.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use spinrate_core::quadrature::SignalPair;
use spinrate_core::traits::IndicatorDriver;
use spinrate_core::EncoderContext;
use spinrate_drivers::display::Hd44780;
use spinrate_drivers::indicator::LedIndicator;
use spinrate_hal_rp2040::gpio::{QuadraturePins, RpOutput};
use spinrate_hal_rp2040::QuadratureInput;

use crate::config::CONFIG;

mod channels;
mod config;
mod tasks;

/// Time each indicator LED stays lit during the power-on sweep
const SWEEP_STEP_MS: u32 = 500;

/// PWM counter wrap value for the motor output
const MOTOR_PWM_TOP: u16 = 1000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Spinrate firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    info!(
        "Encoder: {} counts/rev, window {}, mode {}",
        CONFIG.encoder.counts_per_rev, CONFIG.encoder.poll_window, CONFIG.encoder.mode
    );

    // Encoder supply rail (GPIO6), held high for the lifetime of the firmware
    let _encoder_power = Output::new(p.PIN_6, Level::High);

    // Direction indicators: CW on GPIO13, CCW on GPIO14, stopped on GPIO15
    let mut indicator = LedIndicator::new(
        RpOutput::new(Output::new(p.PIN_13, Level::Low)),
        RpOutput::new(Output::new(p.PIN_14, Level::Low)),
        RpOutput::new(Output::new(p.PIN_15, Level::Low)),
    );
    indicator.sweep(&mut Delay, SWEEP_STEP_MS).await;
    info!("Indicator sweep done");

    // HD44780 in 4-bit mode: RS=GPIO16, E=GPIO17, D4..D7=GPIO18..21
    let lcd = Hd44780::new(
        RpOutput::new(Output::new(p.PIN_16, Level::Low)),
        RpOutput::new(Output::new(p.PIN_17, Level::Low)),
        [
            RpOutput::new(Output::new(p.PIN_18, Level::Low)),
            RpOutput::new(Output::new(p.PIN_19, Level::Low)),
            RpOutput::new(Output::new(p.PIN_20, Level::Low)),
            RpOutput::new(Output::new(p.PIN_21, Level::Low)),
        ],
        Delay,
    );

    // Encoder channels: A on GPIO4, B on GPIO5 (open collector, pulled up)
    let pins = QuadraturePins::new(Input::new(p.PIN_4, Pull::Up), Input::new(p.PIN_5, Pull::Up));
    let initial = SignalPair::from(pins.sample());
    let context = EncoderContext::new(&CONFIG, initial);

    // Nothing is decided yet, so the stopped LED is lit until a direction
    // resolves. Pulse-count mode never resolves one and keeps it lit.
    indicator.show(context.direction());

    channels::init_context(context);
    info!("Encoder context installed (initial state {})", initial.code());

    // Spawn tasks
    spawner.spawn(tasks::edge_task(pins, indicator)).unwrap();
    spawner
        .spawn(tasks::sampler_task(CONFIG.sampler.timer_period_us))
        .unwrap();
    spawner
        .spawn(tasks::readout_task(lcd, CONFIG.readout))
        .unwrap();

    if CONFIG.motor.enabled {
        // Motor PWM on GPIO0 (slice 0, channel A)
        let mut pwm_config = PwmConfig::default();
        pwm_config.top = MOTOR_PWM_TOP;
        let pwm = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_0, pwm_config);
        match pwm.split().0 {
            Some(output) => spawner.spawn(tasks::motor_task(output, CONFIG.motor)).unwrap(),
            None => warn!("Motor PWM channel unavailable"),
        }
    } else {
        info!("Motor output disabled");
    }

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
