//! Spinrate Hardware Abstraction Layer
//!
//! This crate defines the digital I/O traits shared by the board-agnostic
//! drivers and the chip-specific HALs. Drivers in `spinrate-drivers` are
//! written against these traits only, so they can be exercised on the host
//! with mock pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (spinrate-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  spinrate-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!            ┌─────────────────┐
//!            │ spinrate-hal-   │
//!            │    rp2040       │
//!            └─────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`gpio::QuadratureInput`] - The two encoder channels sampled together

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::{InputPin, OutputPin, QuadratureInput};
