//! Standalone window backed by winit.
//!
//! The viewer grabs and hides the cursor, turns window and device events
//! into [`SceneEngine`] input, and ticks the engine once per redraw. Drawing
//! is delegated to the [`FrameSink`] passed to [`Viewer::run`].
//!
//! ```no_run
//! # use litscene::{FrameData, SceneError, Viewer};
//! Viewer::builder()
//!     .with_title("room")
//!     .build()
//!     .run(|frame: &FrameData| -> Result<(), SceneError> {
//!         log::trace!("{} draws", frame.objects.len());
//!         Ok(())
//!     })
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{DeviceEvent, DeviceId, ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window, WindowId},
};

use crate::engine::{FrameSink, SceneEngine};
use crate::error::SceneError;
use crate::input::InputEvent;
use crate::options::Options;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: None,
            title: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title, overriding `[window] title`.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let options = self.options.unwrap_or_default();
        let title = self.title.unwrap_or_else(|| options.window.title.clone());
        Viewer { options, title }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window showing the room through the fly camera.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or the quit key is pressed.
    ///
    /// # Errors
    ///
    /// [`SceneError::Viewer`] if the event loop cannot start, or the first
    /// error raised while building the scene or window.
    pub fn run(self, sink: impl FrameSink) -> Result<(), SceneError> {
        let event_loop =
            EventLoop::new().map_err(|e| SceneError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            options: self.options,
            title: self.title,
            sink,
            failure: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| SceneError::Viewer(e.to_string()))?;
        app.failure.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp<S> {
    window: Option<Arc<Window>>,
    engine: Option<SceneEngine>,
    options: Options,
    title: String,
    sink: S,
    /// First fatal error; ends the event loop.
    failure: Option<SceneError>,
}

impl<S: FrameSink> ViewerApp<S> {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: SceneError) {
        log::error!("{error}");
        if self.failure.is_none() {
            self.failure = Some(error);
        }
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(engine) = &mut self.engine else {
            return;
        };
        if engine.should_render() {
            if let Err(e) = engine.tick(&mut self.sink) {
                self.fail(event_loop, e);
                return;
            }
        }
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }
}

/// Lock the cursor in place (falling back to confining it) and hide it.
fn grab_cursor(window: &Window) {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    if let Err(e) = grabbed {
        log::warn!("cursor grab unavailable: {e}");
    }
    window.set_cursor_visible(false);
}

impl<S: FrameSink> ApplicationHandler for ViewerApp<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let engine = match SceneEngine::new(&self.options) {
            Ok(e) => e,
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        };

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(PhysicalSize::new(
                self.options.window.width,
                self.options.window.height,
            ));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(event_loop, SceneError::Viewer(e.to_string()));
                return;
            }
        };
        grab_cursor(&window);
        log::info!("window created: {}", self.title);

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            log::info!("window closed");
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(engine) = &mut self.engine {
                    engine.resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            WindowEvent::Focused(focused) => {
                if focused {
                    if let Some(w) = &self.window {
                        grab_cursor(w);
                    }
                } else if let Some(engine) = &mut self.engine {
                    engine.handle_event(InputEvent::FocusLost);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(engine) = &mut self.engine {
                    engine.handle_event(InputEvent::CursorMoved {
                        x: position.x as f32,
                        y: position.y as f32,
                    });
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let pressed = event.state == ElementState::Pressed;
                let key_str = format!("{code:?}");
                if let Some(engine) = &mut self.engine {
                    let _ = engine.handle_key(&key_str, pressed);
                    if engine.should_quit() {
                        log::info!("exiting");
                        event_loop.exit();
                    }
                }
            }

            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            if let Some(engine) = &mut self.engine {
                engine.handle_event(InputEvent::MouseMotion {
                    dx: dx as f32,
                    dy: dy as f32,
                });
            }
        }
    }
}
