//! Shared state between tasks
//!
//! The encoder context is touched by both the edge task and the sampler
//! task. Every handler call is a multi-field update, so it runs inside a
//! critical section. The latest rate is published separately as raw bits so
//! the readout task never has to take the lock.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use portable_atomic::{AtomicU64, Ordering};

use spinrate_core::speed::Rate;
use spinrate_core::EncoderContext;

/// Decoder state, installed once at startup
static ENCODER: Mutex<CriticalSectionRawMutex, RefCell<Option<EncoderContext>>> =
    Mutex::new(RefCell::new(None));

/// Bits of the most recently published rate
static RATE_BITS: AtomicU64 = AtomicU64::new(0);

/// Install the encoder context
pub fn init_context(context: EncoderContext) {
    ENCODER.lock(|cell| {
        cell.replace(Some(context));
    });
}

/// Run `f` with exclusive access to the encoder context
///
/// Returns `None` if the context has not been installed yet.
pub fn with_context<R>(f: impl FnOnce(&mut EncoderContext) -> R) -> Option<R> {
    ENCODER.lock(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Publish a new rate for the readout
pub fn publish_rate(rate: Rate) {
    RATE_BITS.store(rate.to_bits(), Ordering::Relaxed);
}

/// Latest published rate
pub fn latest_rate() -> Rate {
    Rate::from_bits(RATE_BITS.load(Ordering::Relaxed))
}
