//! Encoder edge task
//!
//! Replaces the pin-change interrupt: waits for either channel to toggle,
//! samples both lines and feeds the pair to the encoder context. Resolved
//! directions are pushed to the indicator LEDs.

use defmt::*;

use spinrate_core::quadrature::{Rotation, SignalPair};
use spinrate_core::traits::IndicatorDriver;
use spinrate_drivers::indicator::LedIndicator;
use spinrate_hal_rp2040::gpio::{QuadraturePins, RpOutput};
use spinrate_hal_rp2040::QuadratureInput;

use crate::channels::with_context;

/// Decode encoder edges and drive the direction indicators
#[embassy_executor::task]
pub async fn edge_task(
    mut pins: QuadraturePins<'static>,
    mut indicator: LedIndicator<RpOutput<'static>>,
) {
    info!("Edge task started");

    loop {
        pins.wait_for_edge().await;

        let sample = SignalPair::from(pins.sample());
        let Some(outcome) = with_context(|ctx| ctx.on_edge(sample)) else {
            warn!("Edge before encoder context was installed");
            continue;
        };

        if outcome.classification == Rotation::Invalid {
            trace!(
                "Invalid transition to {}, reusing {}",
                sample.code(),
                outcome.decision
            );
        }

        if let Some(direction) = outcome.resolved {
            debug!("Direction resolved: {}", direction);
            indicator.show(direction);
        }
    }
}
