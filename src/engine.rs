//! Frame driver tying input, timing and the scene together.
//!
//! Hosts forward platform events to a [`SceneEngine`] and call
//! [`SceneEngine::tick`] once per redraw. Each tick snapshots input,
//! advances the scene, builds the frame uniforms and hands them to a
//! [`FrameSink`].

use crate::error::SceneError;
use crate::input::{Action, InputEvent, InputProcessor};
use crate::options::Options;
use crate::scene::{FrameData, Scene};
use crate::util::frame_timing::FrameTiming;

/// Draw-dispatch collaborator receiving each finished frame.
///
/// Closures taking `&FrameData` implement this directly:
///
/// ```ignore
/// engine.tick(&mut |frame: &FrameData| -> Result<(), SceneError> {
///     renderer.upload(frame);
///     Ok(())
/// })?;
/// ```
pub trait FrameSink {
    /// Upload and draw one frame.
    ///
    /// # Errors
    ///
    /// Implementation-defined; the engine logs and propagates it.
    fn submit(&mut self, frame: &FrameData) -> Result<(), SceneError>;
}

impl<F> FrameSink for F
where
    F: FnMut(&FrameData) -> Result<(), SceneError>,
{
    fn submit(&mut self, frame: &FrameData) -> Result<(), SceneError> {
        self(frame)
    }
}

/// Owns the scene context and everything that feeds it.
pub struct SceneEngine {
    scene: Scene,
    input: InputProcessor,
    frame_timing: FrameTiming,
    quit_requested: bool,
}

impl SceneEngine {
    /// Build the default room described by `options`.
    ///
    /// # Errors
    ///
    /// Propagates [`Scene::from_options`] failures.
    pub fn new(options: &Options) -> Result<Self, SceneError> {
        let scene = Scene::from_options(options)?;
        log::info!(
            "scene ready: {} objects, {} lights",
            scene.objects().len(),
            scene.lights().len()
        );
        Ok(Self {
            scene,
            input: InputProcessor::with_key_bindings(
                options.keybindings.clone(),
            ),
            frame_timing: FrameTiming::new(options.window.target_fps),
            quit_requested: false,
        })
    }

    /// Forward a pointer or focus event.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.input.handle_event(event);
    }

    /// Forward a key press or release. Returns the discrete action it
    /// triggered, if any.
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> Option<Action> {
        let action = self.input.handle_key(key, pressed);
        if action == Some(Action::Quit) {
            log::info!("quit requested");
            self.quit_requested = true;
        }
        action
    }

    /// Whether a frame is due under the configured FPS cap.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.frame_timing.should_render()
    }

    /// Advance by the wall-clock time since the last tick and submit the
    /// frame.
    ///
    /// # Errors
    ///
    /// Scene update, frame building and sink failures.
    pub fn tick(
        &mut self,
        sink: &mut impl FrameSink,
    ) -> Result<(), SceneError> {
        let dt = self.frame_timing.end_frame();
        self.step(dt, sink)
    }

    /// Advance by `dt` seconds and submit the frame.
    ///
    /// # Errors
    ///
    /// Same as [`SceneEngine::tick`].
    pub fn step(
        &mut self,
        dt: f32,
        sink: &mut impl FrameSink,
    ) -> Result<(), SceneError> {
        let input = self.input.take_frame_input();
        self.scene.update(&input, dt)?;
        let frame = self.scene.build_frame()?;
        sink.submit(&frame).inspect_err(|e| {
            log::error!("frame submission failed: {e}");
        })
    }

    /// Apply a new window size. Zero-sized windows (minimized) are
    /// ignored with a warning and the previous aspect ratio is kept.
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Err(e) = self.scene.resize(width, height) {
            log::warn!("ignoring resize to {width}x{height}: {e}");
        }
    }

    /// Whether the quit action fired.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    /// The scene context.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn engine() -> SceneEngine {
        SceneEngine::new(&Options::default()).unwrap()
    }

    fn discard(_: &FrameData) -> Result<(), SceneError> {
        Ok(())
    }

    #[test]
    fn step_submits_one_frame() {
        let mut engine = engine();
        let mut frames = Vec::new();
        engine
            .step(0.016, &mut |frame: &FrameData| {
                frames.push(frame.clone());
                Ok::<(), SceneError>(())
            })
            .unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].objects.len(), 13);
    }

    #[test]
    fn held_keys_move_the_camera_each_step() {
        let mut engine = engine();
        let _ = engine.handle_key("KeyW", true);
        let mut sink = discard;
        engine.step(0.1, &mut sink).unwrap();
        engine.step(0.1, &mut sink).unwrap();
        let position = engine.scene().camera().position();
        assert!(position.abs_diff_eq(Vec3::new(0.0, 0.0, 4.0), 1e-4));

        let _ = engine.handle_key("KeyW", false);
        engine.step(0.1, &mut sink).unwrap();
        assert!(engine.scene().camera().position().abs_diff_eq(position, 1e-6));
    }

    #[test]
    fn pointer_motion_is_consumed_once() {
        let mut engine = engine();
        engine.handle_event(InputEvent::MouseMotion { dx: 200.0, dy: 0.0 });
        let mut sink = discard;
        engine.step(0.016, &mut sink).unwrap();
        let yaw = engine.scene().camera().yaw();
        engine.step(0.016, &mut sink).unwrap();
        assert_eq!(engine.scene().camera().yaw(), yaw);
    }

    #[test]
    fn escape_requests_quit() {
        let mut engine = engine();
        assert!(!engine.should_quit());
        assert_eq!(engine.handle_key("Escape", true), Some(Action::Quit));
        assert!(engine.should_quit());
    }

    #[test]
    fn sink_errors_propagate() {
        let mut engine = engine();
        let mut failing = |_: &FrameData| -> Result<(), SceneError> {
            Err(SceneError::Viewer("surface lost".into()))
        };
        let result = engine.step(0.016, &mut failing);
        assert!(matches!(result, Err(SceneError::Viewer(_))));
    }

    #[test]
    fn zero_sized_resize_is_ignored() {
        let mut engine = engine();
        engine.resize(0, 0);
        let aspect = engine.scene().camera().projection_params().aspect();
        assert!((aspect - 1024.0 / 768.0).abs() < 1e-6);
        engine.resize(500, 500);
        let aspect = engine.scene().camera().projection_params().aspect();
        assert!((aspect - 1.0).abs() < 1e-6);
    }
}
