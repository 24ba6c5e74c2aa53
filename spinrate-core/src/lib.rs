//! Board-agnostic core logic for the Spinrate tachometer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Quadrature transition classification (fixed 16-entry table)
//! - Bounce rejection and majority voting over a poll window
//! - Speed estimation over a fixed sample time
//! - The [`EncoderContext`] that owns all decoder state
//! - Configuration type definitions and validation
//! - Fixed-width readout formatting
//! - Collaborator traits (indicators, character display, motor)

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod context;
pub mod quadrature;
pub mod readout;
pub mod speed;
pub mod traits;

pub use context::{EdgeOutcome, EncoderContext};
