//! Converts raw platform events into per-frame camera input.
//!
//! The `InputProcessor` owns all transient input state (held keys, cursor
//! tracking, accumulated pointer motion) and the key-binding map. The
//! scene never sees window events, only the [`FrameInput`] snapshot taken
//! once per frame.

use std::collections::HashSet;

use glam::Vec2;

use super::event::{Action, InputEvent};
use crate::options::KeybindingOptions;

/// Input gathered over one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// `+1` forward, `-1` backward, `0` when both or neither are held.
    pub forward: f32,
    /// `+1` right, `-1` left, `0` when both or neither are held.
    pub strafe: f32,
    /// Pointer motion in pixels since the previous snapshot (y downward).
    pub look_delta: Vec2,
    /// Jump key held.
    pub jump: bool,
    /// Model spin key held.
    pub spin_models: bool,
}

/// Folds key and pointer events into [`FrameInput`] snapshots.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(Action::Quit) = input.handle_key("Escape", true) {
///     event_loop.exit();
/// }
/// input.handle_event(InputEvent::MouseMotion { dx, dy });
///
/// // Once per frame:
/// let frame_input = input.take_frame_input();
/// ```
pub struct InputProcessor {
    /// Key string → action mapping.
    bindings: KeybindingOptions,
    /// Continuous actions whose key is currently down.
    held: HashSet<Action>,
    /// Last absolute cursor position, for deriving deltas.
    last_cursor: Option<Vec2>,
    /// Pointer motion accumulated since the last snapshot.
    look_delta: Vec2,
    /// Raw motion events seen; cursor positions no longer feed the delta.
    raw_motion: bool,
}

impl InputProcessor {
    /// Create a processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(bindings: KeybindingOptions) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
            last_cursor: None,
            look_delta: Vec2::ZERO,
            raw_motion: false,
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.bindings
    }

    /// Whether the action's key is currently held.
    #[must_use]
    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Record a key press or release.
    ///
    /// Returns the bound action when a discrete action (such as
    /// [`Action::Quit`]) is pressed; continuous actions are tracked and
    /// show up in the next [`FrameInput`].
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> Option<Action> {
        let action = self.bindings.lookup(key)?;
        if action.is_discrete() {
            return pressed.then_some(action);
        }
        if pressed {
            let _ = self.held.insert(action);
        } else {
            let _ = self.held.remove(&action);
        }
        None
    }

    /// Process a pointer or focus event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let pos = Vec2::new(x, y);
                if let Some(last) = self.last_cursor {
                    if !self.raw_motion {
                        self.look_delta += pos - last;
                    }
                }
                self.last_cursor = Some(pos);
            }
            InputEvent::MouseMotion { dx, dy } => {
                self.raw_motion = true;
                self.look_delta += Vec2::new(dx, dy);
            }
            InputEvent::FocusLost => {
                log::debug!(
                    "focus lost, releasing {} held keys",
                    self.held.len()
                );
                self.held.clear();
                self.last_cursor = None;
                self.look_delta = Vec2::ZERO;
            }
        }
    }

    /// Snapshot the current frame's input and reset the pointer delta.
    pub fn take_frame_input(&mut self) -> FrameInput {
        let input = FrameInput {
            forward: self.axis(Action::MoveForward, Action::MoveBackward),
            strafe: self.axis(Action::StrafeRight, Action::StrafeLeft),
            look_delta: self.look_delta,
            jump: self.is_held(Action::Jump),
            spin_models: self.is_held(Action::SpinModels),
        };
        self.look_delta = Vec2::ZERO;
        input
    }

    fn axis(&self, positive: Action, negative: Action) -> f32 {
        match (self.is_held(positive), self.is_held(negative)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
