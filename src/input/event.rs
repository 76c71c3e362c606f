use serde::{Deserialize, Serialize};

/// Platform-agnostic pointer and focus events.
///
/// Keyboard input goes through
/// [`InputProcessor::handle_key`](super::InputProcessor::handle_key) with
/// a key string instead, so bindings stay data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute window position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, growing downward.
        y: f32,
    },
    /// Raw relative pointer motion, unaffected by cursor grabbing.
    MouseMotion {
        /// Horizontal delta in pixels.
        dx: f32,
        /// Vertical delta in pixels, positive downward.
        dy: f32,
    },
    /// Window lost keyboard focus; every held key is released.
    FocusLost,
}

/// Scene actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// jump = "Space"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Walk along the view direction.
    MoveForward,
    /// Walk against the view direction.
    MoveBackward,
    /// Step left.
    StrafeLeft,
    /// Step right.
    StrafeRight,
    /// Start a jump.
    Jump,
    /// Spin the teapots while held.
    SpinModels,
    /// Close the viewer.
    Quit,
}

impl Action {
    /// Whether the action fires once on press rather than acting while held.
    #[must_use]
    pub fn is_discrete(self) -> bool {
        matches!(self, Self::Quit)
    }
}
