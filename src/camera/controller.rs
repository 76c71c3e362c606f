use std::f32::consts::PI;

use crate::camera::core::Camera;
use crate::error::SceneError;
use crate::input::FrameInput;
use crate::math;
use crate::options::CameraOptions;

/// Largest accepted pitch limit in degrees. Steeper limits bring `front`
/// within [`math::PARALLEL_EPSILON`] of world up.
pub const MAX_PITCH_LIMIT_DEGREES: f32 = 89.9;

/// Tuning for [`FlyController`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlySettings {
    /// Walk speed in world units per second.
    pub move_speed: f32,
    /// Radians of yaw/pitch per pixel of pointer motion.
    pub mouse_sensitivity: f32,
    /// Largest pitch magnitude in radians, at most
    /// [`MAX_PITCH_LIMIT_DEGREES`].
    pub pitch_limit: f32,
    /// Apex height of a jump above the ground.
    pub jump_height: f32,
    /// Seconds from take-off to landing.
    pub jump_duration: f32,
}

impl Default for FlySettings {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            mouse_sensitivity: 0.0005,
            pitch_limit: math::radians(89.0),
            jump_height: 2.0,
            jump_duration: 1.0,
        }
    }
}

impl FlySettings {
    /// Settings from the `[camera]` options section.
    ///
    /// # Errors
    ///
    /// [`SceneError::InvalidConfiguration`] for a pitch limit outside
    /// `(0°, 89.9°]`, a non-positive jump duration, or negative speeds.
    pub fn from_options(options: &CameraOptions) -> Result<Self, SceneError> {
        let settings = Self {
            move_speed: options.move_speed,
            mouse_sensitivity: options.mouse_sensitivity,
            pitch_limit: math::radians(options.pitch_limit),
            jump_height: options.jump_height,
            jump_duration: options.jump_duration,
        };
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SceneError> {
        let max_pitch = math::radians(MAX_PITCH_LIMIT_DEGREES);
        if self.pitch_limit.is_nan()
            || self.pitch_limit <= 0.0
            || self.pitch_limit > max_pitch
        {
            return Err(SceneError::InvalidConfiguration(format!(
                "pitch limit {} rad must lie in (0, {max_pitch}]",
                self.pitch_limit
            )));
        }
        if !self.jump_duration.is_finite() || self.jump_duration <= 0.0 {
            return Err(SceneError::InvalidConfiguration(format!(
                "jump duration {} s must be positive",
                self.jump_duration
            )));
        }
        let non_negative = [
            ("move speed", self.move_speed),
            ("mouse sensitivity", self.mouse_sensitivity),
            ("jump height", self.jump_height),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SceneError::InvalidConfiguration(format!(
                    "{name} {value} must be a non-negative number"
                )));
            }
        }
        Ok(())
    }
}

/// Walking first-person controller.
///
/// Applies a frame's input to a [`Camera`]: WASD motion along the camera's
/// front/right vectors, pointer look with pitch clamped inside the
/// singularity-free range, and a sine-arc jump. Eye height is pinned to the
/// ground whenever no jump is in flight.
#[derive(Debug, Clone)]
pub struct FlyController {
    settings: FlySettings,
    ground_height: f32,
    jump_elapsed: Option<f32>,
}

impl FlyController {
    /// Controller whose ground is at `ground_height` (usually the initial
    /// eye height).
    #[must_use]
    pub fn new(settings: FlySettings, ground_height: f32) -> Self {
        Self {
            settings,
            ground_height,
            jump_elapsed: None,
        }
    }

    /// Active tuning.
    #[must_use]
    pub fn settings(&self) -> &FlySettings {
        &self.settings
    }

    /// Whether a jump is in flight.
    #[must_use]
    pub fn is_jumping(&self) -> bool {
        self.jump_elapsed.is_some()
    }

    /// Mutate position and orientation for one frame. The camera is left
    /// stale; the caller recomputes it.
    pub fn apply(&mut self, camera: &mut Camera, input: &FrameInput, dt: f32) {
        // Motion uses the basis from the previous recompute.
        let step = self.settings.move_speed * dt;
        let planar = camera.front() * input.forward * step
            + camera.right() * input.strafe * step;
        let mut position = camera.position() + planar;

        if input.jump && self.jump_elapsed.is_none() {
            log::debug!("jump started at {position}");
            self.jump_elapsed = Some(0.0);
        }
        position.y = self.ground_height + self.advance_jump(dt);
        camera.set_position(position);

        let sensitivity = self.settings.mouse_sensitivity;
        camera.set_yaw(camera.yaw() + sensitivity * input.look_delta.x);
        // Screen y grows downward. Clamped every frame so a steep initial
        // orientation is pulled back inside the limit.
        let pitch = camera.pitch() - sensitivity * input.look_delta.y;
        camera.set_pitch(self.clamp_pitch(pitch));
    }

    /// Clamp `pitch` to `[-pitch_limit, pitch_limit]`.
    #[must_use]
    pub fn clamp_pitch(&self, pitch: f32) -> f32 {
        pitch.clamp(-self.settings.pitch_limit, self.settings.pitch_limit)
    }

    /// Advance the jump clock and return the height above ground.
    fn advance_jump(&mut self, dt: f32) -> f32 {
        let Some(elapsed) = self.jump_elapsed.as_mut() else {
            return 0.0;
        };
        *elapsed += dt;
        let t = *elapsed / self.settings.jump_duration;
        if t >= 1.0 {
            self.jump_elapsed = None;
            log::debug!("jump landed");
            return 0.0;
        }
        self.settings.jump_height * (PI * t).sin()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use glam::{Vec2, Vec3};

    use super::*;

    const EPS: f32 = 1e-4;

    fn setup() -> (Camera, FlyController) {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO).unwrap();
        (camera, FlyController::new(FlySettings::default(), 0.0))
    }

    fn look(dx: f32, dy: f32) -> FrameInput {
        FrameInput {
            look_delta: Vec2::new(dx, dy),
            ..FrameInput::default()
        }
    }

    #[test]
    fn forward_walks_along_front() {
        let (mut camera, mut controller) = setup();
        let input = FrameInput {
            forward: 1.0,
            ..FrameInput::default()
        };
        controller.apply(&mut camera, &input, 0.5);
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 2.5), EPS));
        assert!(camera.is_stale());
    }

    #[test]
    fn strafe_walks_along_right() {
        let (mut camera, mut controller) = setup();
        let input = FrameInput {
            strafe: -1.0,
            ..FrameInput::default()
        };
        controller.apply(&mut camera, &input, 1.0);
        assert!(camera.position().abs_diff_eq(Vec3::new(-5.0, 0.0, 5.0), EPS));
    }

    #[test]
    fn walking_while_looking_up_stays_on_the_ground() {
        let (mut camera, mut controller) = setup();
        camera.set_pitch(0.6);
        camera.recompute().unwrap();
        let input = FrameInput {
            forward: 1.0,
            ..FrameInput::default()
        };
        controller.apply(&mut camera, &input, 1.0);
        assert!(camera.position().y.abs() < EPS);
    }

    #[test]
    fn pointer_motion_turns_the_camera() {
        let (mut camera, mut controller) = setup();
        let yaw = camera.yaw();
        controller.apply(&mut camera, &look(200.0, -100.0), 0.016);
        assert!((camera.yaw() - (yaw + 0.1)).abs() < EPS);
        // Moving the cursor up looks up.
        assert!((camera.pitch() - 0.05).abs() < EPS);
    }

    #[test]
    fn pitch_stays_inside_the_singularity_free_range() {
        let (mut camera, mut controller) = setup();
        let limit = controller.settings().pitch_limit;
        let epsilon = FRAC_PI_2 - limit;
        assert!(epsilon > 0.0);

        for _ in 0..100 {
            controller.apply(&mut camera, &look(0.0, -10_000.0), 0.016);
            assert!(camera.pitch() < FRAC_PI_2 - epsilon + EPS);
            camera.recompute().unwrap();
        }
        assert!((camera.pitch() - limit).abs() < EPS);

        for _ in 0..100 {
            controller.apply(&mut camera, &look(0.0, 10_000.0), 0.016);
            assert!(camera.pitch() > -FRAC_PI_2 + epsilon - EPS);
            camera.recompute().unwrap();
        }
        assert!((camera.pitch() + limit).abs() < EPS);
    }

    #[test]
    fn jump_follows_a_sine_arc_and_lands() {
        let (mut camera, mut controller) = setup();
        let jump = FrameInput {
            jump: true,
            ..FrameInput::default()
        };
        controller.apply(&mut camera, &jump, 0.0);
        assert!(controller.is_jumping());

        let idle = FrameInput::default();
        controller.apply(&mut camera, &idle, 0.5);
        assert!((camera.position().y - 2.0).abs() < EPS);

        controller.apply(&mut camera, &idle, 0.25);
        let expected = 2.0 * (PI * 0.75).sin();
        assert!((camera.position().y - expected).abs() < EPS);

        controller.apply(&mut camera, &idle, 0.5);
        assert!(!controller.is_jumping());
        assert_eq!(camera.position().y, 0.0);
    }

    #[test]
    fn jump_is_not_restarted_mid_air() {
        let (mut camera, mut controller) = setup();
        let jump = FrameInput {
            jump: true,
            ..FrameInput::default()
        };
        controller.apply(&mut camera, &jump, 0.0);
        controller.apply(&mut camera, &jump, 0.9);
        controller.apply(&mut camera, &jump, 0.2);
        // Landed at t = 1.1; a held jump starts the next one on a later frame.
        assert!(!controller.is_jumping());
        controller.apply(&mut camera, &jump, 0.1);
        assert!(controller.is_jumping());
    }

    #[test]
    fn settings_reject_unsafe_pitch_limits() {
        let mut options = CameraOptions::default();
        options.pitch_limit = 90.0;
        assert!(FlySettings::from_options(&options).is_err());
        options.pitch_limit = 0.0;
        assert!(FlySettings::from_options(&options).is_err());
        options.pitch_limit = 89.99999;
        assert!(FlySettings::from_options(&options).is_err());
        options.pitch_limit = 85.0;
        assert!(FlySettings::from_options(&options).is_ok());
    }

    #[test]
    fn steepest_accepted_limit_still_recomputes() {
        let mut options = CameraOptions::default();
        options.pitch_limit = MAX_PITCH_LIMIT_DEGREES;
        let settings = FlySettings::from_options(&options).unwrap();
        let mut camera =
            Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO).unwrap();
        let mut controller = FlyController::new(settings, 0.0);

        controller.apply(&mut camera, &look(0.0, -1e6), 0.016);
        camera.recompute().unwrap();
        assert!((camera.pitch() - settings.pitch_limit).abs() < EPS);

        controller.apply(&mut camera, &look(0.0, 1e6), 0.016);
        camera.recompute().unwrap();
        assert!((camera.pitch() + settings.pitch_limit).abs() < EPS);
    }

    #[test]
    fn steep_initial_pitch_is_clamped_without_pointer_motion() {
        let mut camera =
            Camera::new(Vec3::ZERO, Vec3::new(0.1, 10.0, 0.0)).unwrap();
        let mut controller =
            FlyController::new(FlySettings::default(), 0.0);
        let limit = controller.settings().pitch_limit;
        assert!(camera.pitch() > limit);

        controller.apply(&mut camera, &FrameInput::default(), 0.016);
        assert!((camera.pitch() - limit).abs() < EPS);
        camera.recompute().unwrap();
    }

    #[test]
    fn settings_reject_bad_jumps_and_speeds() {
        let mut options = CameraOptions::default();
        options.jump_duration = 0.0;
        assert!(FlySettings::from_options(&options).is_err());

        let mut options = CameraOptions::default();
        options.move_speed = -1.0;
        assert!(FlySettings::from_options(&options).is_err());
    }
}
