//! Input handling: event types and the processor that folds raw window
//! events into one [`FrameInput`] snapshot per frame.

/// Platform-agnostic input events and bindable actions.
pub mod event;
/// Converts raw events into per-frame movement and look input.
pub mod processor;

pub use event::{Action, InputEvent};
pub use processor::{FrameInput, InputProcessor};
