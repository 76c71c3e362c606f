use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, placement and fly-control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(title = "Near Plane", range(min = 0.01))]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(title = "Far Plane")]
    pub zfar: f32,
    /// Initial eye position.
    #[schemars(skip)]
    pub eye: [f32; 3],
    /// Initial look target.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// Walk speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub move_speed: f32,
    /// Radians of turn per pixel of pointer motion.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.0001, max = 0.01), extend("step" = 0.0001))]
    pub mouse_sensitivity: f32,
    /// Largest look-up/look-down angle in degrees, at most 89.9.
    #[schemars(title = "Pitch Limit", range(min = 1.0, max = 89.9), extend("step" = 0.5))]
    pub pitch_limit: f32,
    /// Jump apex height above the ground.
    #[schemars(title = "Jump Height", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub jump_height: f32,
    /// Seconds from take-off to landing.
    #[schemars(title = "Jump Duration", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub jump_duration: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.2,
            zfar: 100.0,
            eye: [0.0, 0.0, 5.0],
            target: [0.0, 0.0, 0.0],
            move_speed: 5.0,
            mouse_sensitivity: 0.0005,
            pitch_limit: 89.0,
            jump_height: 2.0,
            jump_duration: 1.0,
        }
    }
}
