//! Shared utilities for the scene engine.

/// Frame pacing and delta-time measurement.
pub mod frame_timing;
