use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Model animation parameters.
pub struct AnimationOptions {
    /// Teapot spin rate in radians per second while the spin key is held.
    #[schemars(title = "Spin Speed", range(min = 0.0, max = 20.0), extend("step" = 0.5))]
    pub spin_speed: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self { spin_speed: 5.0 }
    }
}
