//! Three-LED direction indicator
//!
//! One LED each for clockwise, counter-clockwise and stopped. Exactly one is
//! lit once a direction has been decided.

use embedded_hal_async::delay::DelayNs;
use spinrate_core::traits::{IndicatorDriver, IndicatorPattern};
use spinrate_hal::OutputPin;

/// Active-high indicator LEDs
pub struct LedIndicator<P> {
    cw: P,
    ccw: P,
    stopped: P,
}

impl<P: OutputPin> LedIndicator<P> {
    /// Create the indicator with all LEDs off
    pub fn new(cw: P, ccw: P, stopped: P) -> Self {
        let mut indicator = Self { cw, ccw, stopped };
        indicator.apply(IndicatorPattern::OFF);
        indicator
    }

    /// Boot self-test: light each LED in turn, then turn all off
    pub async fn sweep<D: DelayNs>(&mut self, delay: &mut D, step_ms: u32) {
        let steps = [
            IndicatorPattern {
                cw: true,
                ..IndicatorPattern::OFF
            },
            IndicatorPattern {
                ccw: true,
                ..IndicatorPattern::OFF
            },
            IndicatorPattern {
                stopped: true,
                ..IndicatorPattern::OFF
            },
        ];

        for pattern in steps {
            self.apply(pattern);
            delay.delay_ms(step_ms).await;
        }
        self.apply(IndicatorPattern::OFF);
    }

    /// Pattern currently driven on the pins
    pub fn pattern(&self) -> IndicatorPattern {
        IndicatorPattern {
            cw: self.cw.is_set_high(),
            ccw: self.ccw.is_set_high(),
            stopped: self.stopped.is_set_high(),
        }
    }
}

impl<P: OutputPin> IndicatorDriver for LedIndicator<P> {
    fn apply(&mut self, pattern: IndicatorPattern) {
        self.cw.set_state(pattern.cw);
        self.ccw.set_state(pattern.ccw);
        self.stopped.set_state(pattern.stopped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use spinrate_core::quadrature::Direction;

    struct Led(bool);

    impl OutputPin for Led {
        fn set_high(&mut self) {
            self.0 = true;
        }

        fn set_low(&mut self) {
            self.0 = false;
        }

        fn is_set_high(&self) -> bool {
            self.0
        }
    }

    #[derive(Default)]
    struct CountingDelay {
        total_ms: u32,
    }

    impl DelayNs for CountingDelay {
        async fn delay_ns(&mut self, ns: u32) {
            self.total_ms += ns / 1_000_000;
        }

        async fn delay_ms(&mut self, ms: u32) {
            self.total_ms += ms;
        }
    }

    #[test]
    fn test_starts_dark() {
        let leds = LedIndicator::new(Led(true), Led(true), Led(true));
        assert_eq!(leds.pattern(), IndicatorPattern::OFF);
    }

    #[test]
    fn test_show_direction_is_one_hot() {
        let mut leds = LedIndicator::new(Led(false), Led(false), Led(false));

        leds.show(Direction::CounterClockwise);
        assert_eq!(
            leds.pattern(),
            IndicatorPattern::for_direction(Direction::CounterClockwise)
        );

        leds.show(Direction::Stopped);
        assert!(leds.pattern().stopped);
        assert!(!leds.pattern().ccw);
    }

    #[test]
    fn test_sweep_ends_dark() {
        let mut leds = LedIndicator::new(Led(false), Led(false), Led(false));
        let mut delay = CountingDelay::default();

        block_on(leds.sweep(&mut delay, 500));

        assert_eq!(delay.total_ms, 1500);
        assert_eq!(leds.pattern(), IndicatorPattern::OFF);
    }

    #[test]
    fn test_stopped_lit_after_boot_in_pulse_mode() {
        use spinrate_core::config::{DecodeMode, FirmwareConfig};
        use spinrate_core::quadrature::SignalPair;
        use spinrate_core::EncoderContext;

        let mut config = FirmwareConfig::default();
        config.encoder.mode = DecodeMode::PulseCount;
        let mut ctx = EncoderContext::new(&config, SignalPair::default());

        let mut leds = LedIndicator::new(Led(false), Led(false), Led(false));
        block_on(leds.sweep(&mut CountingDelay::default(), 500));
        leds.show(ctx.direction());

        // Pulse counting never resolves a direction, so nothing repaints
        for code in [2u8, 3, 1, 0] {
            let out = ctx.on_edge(SignalPair::from_code(code));
            if let Some(direction) = out.resolved {
                leds.show(direction);
            }
        }

        assert_eq!(leds.pattern(), IndicatorPattern::for_direction(Direction::Stopped));
        assert!(leds.pattern().stopped);
    }
}
