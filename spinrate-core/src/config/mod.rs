//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware reads them from a
//! TOML file at build time and compiles the validated values in as constants.

pub mod types;

pub use types::*;
