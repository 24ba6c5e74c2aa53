//! GPIO wrappers for embassy-rp pins

use embassy_futures::select::select;
use embassy_rp::gpio::{Input, Output};
use spinrate_hal::{OutputPin, QuadratureInput};

/// Push-pull output implementing [`OutputPin`]
pub struct RpOutput<'d>(Output<'d>);

impl<'d> RpOutput<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Encoder channel pair
///
/// Stands in for the pin-change interrupt: [`wait_for_edge`](Self::wait_for_edge)
/// completes when either line toggles. Edges that arrive while the caller is
/// still processing the previous one are coalesced, as with a single
/// interrupt flag.
pub struct QuadraturePins<'d> {
    a: Input<'d>,
    b: Input<'d>,
}

impl<'d> QuadraturePins<'d> {
    pub fn new(a: Input<'d>, b: Input<'d>) -> Self {
        Self { a, b }
    }

    /// Wait until channel A or channel B changes level
    pub async fn wait_for_edge(&mut self) {
        select(self.a.wait_for_any_edge(), self.b.wait_for_any_edge()).await;
    }
}

impl QuadratureInput for QuadraturePins<'_> {
    fn sample(&self) -> (bool, bool) {
        (self.a.is_high(), self.b.is_high())
    }
}
