//! Scene context: camera, controller, objects and lights, advanced once
//! per frame.
//!
//! [`Scene::update`] applies one frame of input and recomputes the camera;
//! [`Scene::build_frame`] then turns the current state into uploadable
//! uniforms. Nothing here touches the GPU.

mod frame;
mod layout;
mod light;
mod material;
mod object;

pub use frame::{DrawCall, FrameData, MarkerUniform, ObjectUniform};
use glam::Vec3;
pub use light::{Light, LightKind, LightUniform, MARKER_SCALE};
pub use material::{Material, MaterialUniform};
pub use object::{ModelKind, SceneObject};

use crate::camera::{Camera, FlyController, FlySettings};
use crate::error::SceneError;
use crate::input::FrameInput;
use crate::options::Options;

/// Explicit scene context replacing per-process globals.
pub struct Scene {
    camera: Camera,
    controller: FlyController,
    objects: Vec<SceneObject>,
    lights: Vec<Light>,
    spin_speed: f32,
}

impl Scene {
    /// Build the default room from options.
    ///
    /// # Errors
    ///
    /// [`SceneError::InvalidConfiguration`] for rejected options,
    /// [`SceneError::DegenerateGeometry`] if the configured eye and target
    /// coincide or are vertically aligned.
    pub fn from_options(options: &Options) -> Result<Self, SceneError> {
        options.validate()?;
        let eye = Vec3::from_array(options.camera.eye);
        let target = Vec3::from_array(options.camera.target);
        let camera =
            Camera::with_projection(eye, target, options.projection()?)?;
        let settings = FlySettings::from_options(&options.camera)?;
        log::debug!(
            "camera at {eye} facing {} (yaw {:.3}, pitch {:.3})",
            camera.front(),
            camera.yaw(),
            camera.pitch()
        );

        Ok(Self::new(
            camera,
            FlyController::new(settings, eye.y),
            layout::default_objects(),
            layout::default_lights(),
            options.animation.spin_speed,
        ))
    }

    /// Scene from explicit parts.
    #[must_use]
    pub fn new(
        camera: Camera,
        controller: FlyController,
        objects: Vec<SceneObject>,
        lights: Vec<Light>,
        spin_speed: f32,
    ) -> Self {
        Self {
            camera,
            controller,
            objects,
            lights,
            spin_speed,
        }
    }

    /// Advance one frame: move and turn the camera, spin the teapots while
    /// the spin action is held, then recompute the camera.
    ///
    /// # Errors
    ///
    /// Propagates [`Camera::recompute`] failures; the camera stays stale
    /// and [`Scene::build_frame`] refuses to run until a later update
    /// succeeds.
    pub fn update(
        &mut self,
        input: &FrameInput,
        dt: f32,
    ) -> Result<(), SceneError> {
        self.controller.apply(&mut self.camera, input, dt);

        if input.spin_models {
            let delta = self.spin_speed * dt;
            for object in self.objects.iter_mut().filter(|o| o.model.spins()) {
                object.spin(delta);
            }
        }

        self.camera.recompute()
    }

    /// Uniforms for the current state.
    ///
    /// # Errors
    ///
    /// [`SceneError::InvalidConfiguration`] if the camera changed since the
    /// last recompute; object transform failures are propagated.
    pub fn build_frame(&self) -> Result<FrameData, SceneError> {
        if self.camera.is_stale() {
            return Err(SceneError::InvalidConfiguration(
                "camera matrices are stale; recompute before building a frame"
                    .into(),
            ));
        }
        let view = self.camera.view();
        let projection = self.camera.projection();
        let view_projection = self.camera.view_projection();

        let objects = self
            .objects
            .iter()
            .map(|object| {
                let mv = view * object.model_matrix()?;
                Ok(DrawCall {
                    model: object.model,
                    transform: ObjectUniform::new(mv, projection),
                    material: object.model.material().uniform(),
                })
            })
            .collect::<Result<Vec<_>, SceneError>>()?;

        let lights =
            self.lights.iter().map(|light| light.uniform(view)).collect();
        let markers = self
            .lights
            .iter()
            .map(|light| MarkerUniform {
                mvp: (view_projection * light.marker_model())
                    .to_cols_array_2d(),
                colour: light.colour.to_array(),
                _pad: 0.0,
            })
            .collect();

        log::trace!(
            "frame: {} objects, {} lights, eye {}",
            self.objects.len(),
            self.lights.len(),
            self.camera.position()
        );

        Ok(FrameData {
            camera: self.camera.uniform(),
            lights,
            objects,
            markers,
        })
    }

    /// Apply a new viewport size to the projection.
    ///
    /// # Errors
    ///
    /// [`SceneError::InvalidConfiguration`] for a zero-sized viewport, or
    /// the recompute failure. The camera is left untouched on error.
    pub fn resize(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<(), SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidConfiguration(format!(
                "viewport {width}x{height} has no area"
            )));
        }
        let mut camera = self.camera.clone();
        camera.set_aspect(width as f32 / height as f32)?;
        camera.recompute()?;
        self.camera = camera;
        Ok(())
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access. Call [`Camera::recompute`] before the next
    /// [`Scene::build_frame`].
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The fly controller.
    #[must_use]
    pub fn controller(&self) -> &FlyController {
        &self.controller
    }

    /// Objects in draw order.
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Lights in upload order.
    #[must_use]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }
}
