//! RP2040-specific HAL for the Spinrate firmware
//!
//! This crate provides RP2040 implementations of the shared `spinrate-hal`
//! traits on top of `embassy-rp`:
//!
//! - Output pin wrapper for indicators, LCD bus and encoder supply
//! - Quadrature input pair with async edge waiting

#![no_std]

pub mod gpio;

// Re-export shared traits from spinrate-hal for convenience
pub use spinrate_hal::{InputPin, OutputPin, QuadratureInput};
