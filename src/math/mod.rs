//! Matrix construction for model, view and projection transforms.
//!
//! All builders return column-major [`glam::Mat4`] values laid out the way
//! graphics APIs expect for uniform upload. Builders that can be handed
//! degenerate input return [`SceneError`](crate::error::SceneError)
//! instead of a matrix full of NaNs.

/// Look-at view and symmetric perspective projection builders.
pub mod projection;
/// Translation, scale and axis-angle rotation builders.
pub mod transform;

pub use projection::{look_at, perspective};
pub use transform::{model_matrix, radians, rotate, scale, translate};

/// Cross products shorter than this are treated as parallel inputs.
pub const PARALLEL_EPSILON: f32 = 1e-6;
