//! Embassy async tasks
//!
//! Each task runs independently and shares decoder state through
//! [`crate::channels`].

pub mod edge;
pub mod motor;
pub mod readout;
pub mod sampler;

pub use edge::edge_task;
pub use motor::motor_task;
pub use readout::readout_task;
pub use sampler::sampler_task;
