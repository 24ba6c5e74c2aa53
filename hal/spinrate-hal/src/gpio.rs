//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs.

/// Digital output pin
///
/// Used for the direction indicators, the LCD bus and the encoder supply.
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// The two channels of a quadrature encoder
///
/// Both lines must be read back to back so the pair describes a single
/// instant of the encoder disc.
pub trait QuadratureInput {
    /// Sample channel A and channel B, in that order
    fn sample(&self) -> (bool, bool);
}

impl<A: InputPin, B: InputPin> QuadratureInput for (A, B) {
    fn sample(&self) -> (bool, bool) {
        (self.0.is_high(), self.1.is_high())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct FixedInput(Cell<bool>);

    impl InputPin for FixedInput {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    struct Latch(bool);

    impl OutputPin for Latch {
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

    #[test]
    fn test_pair_samples_a_then_b() {
        let pins = (FixedInput(Cell::new(true)), FixedInput(Cell::new(false)));
        assert_eq!(pins.sample(), (true, false));

        (pins.1).0.set(true);
        assert_eq!(pins.sample(), (true, true));
    }

    #[test]
    fn test_set_state() {
        let mut pin = Latch(false);
        pin.set_state(true);
        assert!(pin.is_set_high());
        pin.set_state(false);
        assert!(!pin.is_set_high());
    }
}
