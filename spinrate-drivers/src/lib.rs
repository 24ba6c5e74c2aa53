//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the collaborator traits
//! defined in spinrate-core:
//!
//! - Direction indicator LEDs (one-hot, with boot sweep)
//! - HD44780-style character LCD on a 4-bit bus
//! - Fixed-duty PWM motor

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod indicator;
pub mod motor;
