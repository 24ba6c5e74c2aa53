//! Sample timer task
//!
//! Ticks once per timer period. The encoder context counts the periods and
//! produces a new rate when the sample time has elapsed.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::channels::{publish_rate, with_context};

/// Log decoder statistics every this many samples
const STATS_INTERVAL: u32 = 64;

/// Drive the sample timer and publish each new rate
#[embassy_executor::task]
pub async fn sampler_task(period_us: u32) {
    info!("Sampler task started ({} us period)", period_us);

    let mut ticker = Ticker::every(Duration::from_micros(period_us as u64));
    let mut samples: u32 = 0;

    loop {
        ticker.next().await;

        let Some(Some((rate, stats))) =
            with_context(|ctx| ctx.on_timer_tick().map(|rate| (rate, ctx.stats())))
        else {
            continue;
        };

        publish_rate(rate);
        samples = samples.wrapping_add(1);

        if samples % STATS_INTERVAL == 0 {
            debug!(
                "{} rps, edges={} rejected={} windows={}",
                rate.as_rps(),
                stats.edges,
                stats.rejected,
                stats.windows
            );
        }
    }
}
