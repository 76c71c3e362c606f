//! Crate-level error types.

use std::fmt;

/// Errors produced by the litscene crate.
#[derive(Debug)]
pub enum SceneError {
    /// Rejected configuration value (frustum parameters, speeds, window
    /// size, stale camera reads).
    InvalidConfiguration(String),
    /// Geometry with no well-defined result: zero-length rotation axis,
    /// coincident eye/target, or a view direction parallel to the up hint.
    DegenerateGeometry(String),
    /// Camera pitch reached the ±90° singularity.
    OutOfRangeOrientation {
        /// Offending pitch in radians.
        pitch: f32,
        /// Largest pitch magnitude the basis computation accepts.
        limit: f32,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop or window failure.
    Viewer(String),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => {
                write!(f, "invalid configuration: {msg}")
            }
            Self::DegenerateGeometry(msg) => {
                write!(f, "degenerate geometry: {msg}")
            }
            Self::OutOfRangeOrientation { pitch, limit } => write!(
                f,
                "pitch {pitch} rad is outside (-{limit}, {limit})"
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
