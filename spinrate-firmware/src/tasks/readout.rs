//! Readout task
//!
//! Owns the character display. Draws the static labels once and then
//! rewrites the numeric field at the configured refresh interval.

use defmt::*;
use embassy_time::{Delay, Duration, Ticker};

use spinrate_core::config::ReadoutConfig;
use spinrate_core::readout::format_rate;
use spinrate_core::readout::layout::{title_line, unit_line, value_line};
use spinrate_core::traits::CharacterDisplay;
use spinrate_drivers::display::Hd44780;
use spinrate_hal_rp2040::gpio::RpOutput;

use crate::channels::latest_rate;

/// Show the latest rate on the LCD
#[embassy_executor::task]
pub async fn readout_task(mut lcd: Hd44780<RpOutput<'static>, Delay>, config: ReadoutConfig) {
    info!("Readout task started");

    if let Err(e) = lcd.init().await {
        error!("LCD init failed: {}", e);
        return;
    }

    for line in [title_line(), unit_line(config.width)] {
        if let Err(e) = lcd.write_line(&line).await {
            warn!("LCD label write failed: {}", e);
        }
    }

    let mut ticker = Ticker::every(Duration::from_millis(config.refresh_ms as u64));

    loop {
        ticker.next().await;

        let text = format_rate(latest_rate(), config.width, config.decimals);
        if let Err(e) = lcd.write_line(&value_line(&text)).await {
            warn!("LCD write failed: {}", e);
        }
    }
}
