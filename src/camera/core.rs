use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};

use crate::error::SceneError;
use crate::math::projection::{perspective_unchecked, validate_frustum};
use crate::math::{self, PARALLEL_EPSILON};

/// Global up reference shared by every camera.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Validated perspective parameters.
///
/// Construction rejects anything [`math::perspective`] would turn into a
/// singular matrix, so [`Projection::matrix`] never fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Projection {
    /// Vertical field of view (radians), aspect ratio (width / height),
    /// and near/far clipping distances.
    ///
    /// # Errors
    ///
    /// [`SceneError::InvalidConfiguration`] for a degenerate frustum.
    pub fn new(
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Result<Self, SceneError> {
        validate_frustum(fov_y, aspect, near, far)?;
        Ok(Self {
            fov_y,
            aspect,
            near,
            far,
        })
    }

    /// Vertical field of view in radians.
    #[must_use]
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Near clipping plane distance.
    #[must_use]
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clipping plane distance.
    #[must_use]
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Same frustum with a new aspect ratio.
    ///
    /// # Errors
    ///
    /// [`SceneError::InvalidConfiguration`] if `aspect` is not positive.
    pub fn with_aspect(self, aspect: f32) -> Result<Self, SceneError> {
        Self::new(self.fov_y, aspect, self.near, self.far)
    }

    /// Build the projection matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        perspective_unchecked(self.fov_y, self.aspect, self.near, self.far)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: math::radians(45.0),
            aspect: 1024.0 / 768.0,
            near: 0.2,
            far: 100.0,
        }
    }
}

/// First-person perspective camera driven by yaw and pitch.
///
/// Orientation is the single source of truth: the look target is always
/// `position + front`. Derived vectors and matrices are pulled, not pushed;
/// every setter marks the camera stale and [`Camera::recompute`] must run
/// before [`Camera::view`] or [`Camera::projection`] are read for the frame.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    projection_params: Projection,

    front: Vec3,
    right: Vec3,
    up: Vec3,
    view: Mat4,
    projection: Mat4,

    stale: bool,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block holding the camera matrices and eye position.
pub struct CameraUniform {
    /// World-to-view matrix, column-major.
    pub view: [[f32; 4]; 4],
    /// View-to-clip matrix, column-major.
    pub projection: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Camera {
    /// Camera at `eye` looking toward `target`, with default projection.
    ///
    /// The initial yaw and pitch are derived from the eye-to-target
    /// direction, and the matrices are computed before returning.
    ///
    /// # Errors
    ///
    /// [`SceneError::DegenerateGeometry`] if `eye == target` or the
    /// direction is vertical.
    pub fn new(eye: Vec3, target: Vec3) -> Result<Self, SceneError> {
        Self::with_projection(eye, target, Projection::default())
    }

    /// Camera at `eye` looking toward `target` with the given projection.
    ///
    /// # Errors
    ///
    /// Same as [`Camera::new`].
    pub fn with_projection(
        eye: Vec3,
        target: Vec3,
        projection: Projection,
    ) -> Result<Self, SceneError> {
        let (yaw, pitch) = orientation_towards(eye, target)?;
        let mut camera = Self {
            position: eye,
            yaw,
            pitch,
            projection_params: projection,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            stale: true,
        };
        camera.recompute()?;
        Ok(camera)
    }

    /// Recompute `front`, `right` and `up` from yaw and pitch.
    ///
    /// The core does not clamp pitch; keeping it inside `(-π/2, π/2)` is
    /// the input handler's job.
    ///
    /// # Errors
    ///
    /// [`SceneError::OutOfRangeOrientation`] at or beyond ±90° pitch,
    /// [`SceneError::DegenerateGeometry`] if `front` is numerically parallel
    /// to [`WORLD_UP`].
    pub fn recompute_basis(&mut self) -> Result<(), SceneError> {
        (self.front, self.right, self.up) = self.basis()?;
        Ok(())
    }

    /// Recompute the basis, then the view and projection matrices.
    ///
    /// Must run once per frame after any position/orientation change and
    /// before the matrices are read. Idempotent when nothing changed.
    ///
    /// # Errors
    ///
    /// Propagates [`Camera::recompute_basis`] and [`math::look_at`]
    /// failures; the previous basis and matrices stay in place and the
    /// camera stays stale.
    pub fn recompute(&mut self) -> Result<(), SceneError> {
        let (front, right, up) = self.basis()?;
        let view =
            math::look_at(self.position, self.position + front, WORLD_UP)?;
        (self.front, self.right, self.up) = (front, right, up);
        self.view = view;
        self.projection = self.projection_params.matrix();
        self.stale = false;
        Ok(())
    }

    /// `(front, right, up)` for the current yaw and pitch.
    fn basis(&self) -> Result<(Vec3, Vec3, Vec3), SceneError> {
        if !self.pitch.is_finite() || self.pitch.abs() >= FRAC_PI_2 {
            return Err(SceneError::OutOfRangeOrientation {
                pitch: self.pitch,
                limit: FRAC_PI_2,
            });
        }

        let front = front_from_angles(self.yaw, self.pitch);
        let side = front.cross(WORLD_UP);
        if side.is_nan() || side.length() < PARALLEL_EPSILON {
            return Err(SceneError::DegenerateGeometry(format!(
                "front {front} is parallel to world up"
            )));
        }

        let right = side.normalize();
        Ok((front, right, right.cross(front)))
    }

    /// World-space eye position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Move the eye to `position`.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.stale = true;
    }

    /// Offset the eye by `delta`.
    pub fn translate(&mut self, delta: Vec3) {
        self.set_position(self.position + delta);
    }

    /// Horizontal angle in radians; `-π/2` faces `-Z`.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Set the horizontal angle in radians.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.stale = true;
    }

    /// Vertical angle in radians; positive looks up.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set the vertical angle in radians. Not clamped.
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch;
        self.stale = true;
    }

    /// Turn the camera toward a world-space point, keeping the eye fixed.
    ///
    /// # Errors
    ///
    /// [`SceneError::DegenerateGeometry`] if `target` is the eye or lies
    /// straight above or below it. The orientation is left untouched.
    pub fn look_at_point(&mut self, target: Vec3) -> Result<(), SceneError> {
        let (yaw, pitch) = orientation_towards(self.position, target)?;
        self.yaw = yaw;
        self.pitch = pitch;
        self.stale = true;
        Ok(())
    }

    /// Projection parameters.
    #[must_use]
    pub fn projection_params(&self) -> Projection {
        self.projection_params
    }

    /// Replace the projection parameters.
    pub fn set_projection_params(&mut self, projection: Projection) {
        self.projection_params = projection;
        self.stale = true;
    }

    /// Update the aspect ratio after a viewport resize.
    ///
    /// # Errors
    ///
    /// [`SceneError::InvalidConfiguration`] if `aspect` is not positive;
    /// the previous projection is kept.
    pub fn set_aspect(&mut self, aspect: f32) -> Result<(), SceneError> {
        self.projection_params = self.projection_params.with_aspect(aspect)?;
        self.stale = true;
        Ok(())
    }

    /// Unit view direction as of the last recompute.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit right vector as of the last recompute.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit camera-up vector as of the last recompute.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Look target, one unit ahead of the eye.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.position + self.front
    }

    /// World-to-view matrix as of the last recompute.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        self.view
    }

    /// View-to-clip matrix as of the last recompute.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// `projection · view`.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Whether state changed since the last successful recompute.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Snapshot the matrices for upload.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view.to_cols_array_2d(),
            projection: self.projection.to_cols_array_2d(),
            position: self.position.to_array(),
            _pad: 0.0,
        }
    }
}

/// Spherical-to-Cartesian view direction.
#[must_use]
pub fn front_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();
    Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch)
}

/// Yaw and pitch that point `front_from_angles` from `eye` at `target`.
fn orientation_towards(
    eye: Vec3,
    target: Vec3,
) -> Result<(f32, f32), SceneError> {
    let Some(dir) = (target - eye).try_normalize() else {
        return Err(SceneError::DegenerateGeometry(format!(
            "eye {eye} and target {target} coincide"
        )));
    };
    if dir.cross(WORLD_UP).length() < PARALLEL_EPSILON {
        return Err(SceneError::DegenerateGeometry(format!(
            "direction {dir} from eye to target is vertical"
        )));
    }
    Ok((dir.z.atan2(dir.x), dir.y.clamp(-1.0, 1.0).asin()))
}
