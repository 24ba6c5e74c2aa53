//! Build-time configuration
//!
//! `build.rs` validates `encoder.toml` and writes it out as a constant, so
//! the firmware never parses TOML on the target.

use spinrate_core::config::{
    DecodeMode, EncoderConfig, FirmwareConfig, MotorConfig, ReadoutConfig, SamplerConfig,
};

include!(concat!(env!("OUT_DIR"), "/config.rs"));
