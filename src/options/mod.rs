//! Scene and viewer options with TOML file support.
//!
//! Every tweakable setting (window, camera, animation, keybindings) lives
//! here. Options serialize to/from TOML so a scene can be launched with a
//! preset file: `litscene my_room.toml`.

mod animation;
mod camera;
mod keybindings;
mod window;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::camera::{FlySettings, Projection};
use crate::error::SceneError;
use crate::math;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Viewer window parameters.
    pub window: WindowOptions,
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Model animation parameters.
    pub animation: AnimationOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// The result is not validated; call [`Options::validate`] before use.
    ///
    /// # Errors
    ///
    /// [`SceneError::Io`] if the file cannot be read,
    /// [`SceneError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path).map_err(SceneError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`SceneError::OptionsParse`] on malformed TOML or mistyped fields.
    pub fn from_toml(content: &str) -> Result<Self, SceneError> {
        toml::from_str(content)
            .map_err(|e| SceneError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`SceneError::OptionsParse`] if serialization fails,
    /// [`SceneError::Io`] if the file or its parent directory cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), SceneError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SceneError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SceneError::Io)?;
        }
        std::fs::write(path, content).map_err(SceneError::Io)
    }

    /// Check every value the scene would reject at construction.
    ///
    /// Duplicate key bindings are allowed but logged.
    ///
    /// # Errors
    ///
    /// [`SceneError::InvalidConfiguration`] for a zero-sized window, a
    /// degenerate frustum, an unusable fly setting or a negative spin
    /// speed.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(SceneError::InvalidConfiguration(format!(
                "window size {}x{} must be non-zero",
                self.window.width, self.window.height
            )));
        }
        let _ = self.projection()?;
        let _ = FlySettings::from_options(&self.camera)?;

        let spin = self.animation.spin_speed;
        if !spin.is_finite() || spin < 0.0 {
            return Err(SceneError::InvalidConfiguration(format!(
                "spin speed {spin} must be a non-negative number"
            )));
        }

        for key in self.keybindings.conflicts() {
            log::warn!("key {key} is bound to more than one action");
        }
        Ok(())
    }

    /// Projection for the configured window and `[camera]` frustum.
    ///
    /// # Errors
    ///
    /// [`SceneError::InvalidConfiguration`] for a degenerate frustum.
    pub fn projection(&self) -> Result<Projection, SceneError> {
        Projection::new(
            math::radians(self.camera.fovy),
            self.window.aspect(),
            self.camera.znear,
            self.camera.zfar,
        )
    }
}
