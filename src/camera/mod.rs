//! Camera system for first-person scene viewing.
//!
//! Provides a yaw/pitch camera whose view and projection matrices are
//! recomputed on demand, and a walking controller that turns per-frame
//! input into camera motion.

/// Walking first-person controller with pitch clamping and jumps.
pub mod controller;
/// Core camera struct, projection parameters and GPU uniform type.
pub mod core;

pub use self::controller::{FlyController, FlySettings};
pub use self::core::{Camera, CameraUniform, Projection, WORLD_UP};
