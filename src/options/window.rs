use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Window", inline)]
#[serde(default)]
/// Viewer window parameters.
pub struct WindowOptions {
    /// Title bar text.
    #[schemars(skip)]
    pub title: String,
    /// Initial inner width in physical pixels.
    #[schemars(title = "Width", range(min = 1))]
    pub width: u32,
    /// Initial inner height in physical pixels.
    #[schemars(title = "Height", range(min = 1))]
    pub height: u32,
    /// Frame cap (0 = unlimited).
    #[schemars(title = "Target FPS", range(min = 0, max = 240))]
    pub target_fps: u32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "litscene".into(),
            width: 1024,
            height: 768,
            target_fps: 60,
        }
    }
}

impl WindowOptions {
    /// Width / height of the initial window.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}
