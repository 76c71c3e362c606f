use glam::{Mat4, Vec3};

use super::material::Material;
use crate::error::SceneError;
use crate::math;

/// Mesh a [`SceneObject`] is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Textured teapot; spins with the spin action.
    Teapot,
    /// Unit cube with a crate texture.
    Crate,
    /// Unit plane with a stone texture.
    Floor,
    /// Unit plane with a brick texture.
    Wall,
}

impl ModelKind {
    /// Phong coefficients used for this mesh.
    #[must_use]
    pub fn material(self) -> Material {
        match self {
            Self::Teapot | Self::Crate => Material::new(0.2, 0.7, 1.0, 20.0),
            Self::Floor => Material::new(0.2, 1.0, 1.0, 20.0),
            Self::Wall => Material::new(0.2, 1.0, 1.0, 3.0),
        }
    }

    /// Whether the spin action animates this mesh.
    #[must_use]
    pub fn spins(self) -> bool {
        matches!(self, Self::Teapot)
    }
}

/// One placed instance of a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Mesh to draw.
    pub model: ModelKind,
    /// World-space translation.
    pub position: Vec3,
    /// Rotation axis; normalized when the model matrix is built.
    pub rotation_axis: Vec3,
    /// Rotation angle in radians.
    pub angle: f32,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl SceneObject {
    /// Unrotated, unit-scale object at `position`.
    #[must_use]
    pub fn new(model: ModelKind, position: Vec3) -> Self {
        Self {
            model,
            position,
            rotation_axis: Vec3::Y,
            angle: 0.0,
            scale: Vec3::ONE,
        }
    }

    /// Set the rotation.
    #[must_use]
    pub fn with_rotation(mut self, axis: Vec3, angle: f32) -> Self {
        self.rotation_axis = axis;
        self.angle = angle;
        self
    }

    /// Set a uniform scale.
    #[must_use]
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    /// Object-to-world transform `T · R · S`.
    ///
    /// # Errors
    ///
    /// [`SceneError::DegenerateGeometry`] for a zero rotation axis,
    /// [`SceneError::InvalidConfiguration`] for a non-finite angle.
    pub fn model_matrix(&self) -> Result<Mat4, SceneError> {
        math::model_matrix(
            self.position,
            self.angle,
            self.rotation_axis,
            self.scale,
        )
    }

    /// Spin about world +Y, replacing the placement axis.
    pub(crate) fn spin(&mut self, delta: f32) {
        self.rotation_axis = Vec3::Y;
        self.angle += delta;
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn model_matrix_scales_then_rotates_then_translates() {
        let object =
            SceneObject::new(ModelKind::Wall, Vec3::new(0.0, 8.0, -10.0))
                .with_rotation(Vec3::X, FRAC_PI_2)
                .with_uniform_scale(10.0);
        let m = object.model_matrix().unwrap();
        // Plane normal +Y turns to +Z, then the wall is lifted into place.
        let p = m.transform_point3(Vec3::new(0.0, 0.0, 1.0));
        assert!(p.abs_diff_eq(Vec3::new(0.0, -2.0, -10.0), 1e-4));
    }

    #[test]
    fn zero_axis_is_rejected() {
        let object = SceneObject::new(ModelKind::Crate, Vec3::ZERO)
            .with_rotation(Vec3::ZERO, 1.0);
        assert!(matches!(
            object.model_matrix(),
            Err(SceneError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn spin_switches_to_vertical_axis() {
        let mut object = SceneObject::new(ModelKind::Teapot, Vec3::ZERO)
            .with_rotation(Vec3::ONE, 0.0);
        object.spin(0.5);
        object.spin(0.25);
        assert_eq!(object.rotation_axis, Vec3::Y);
        assert!((object.angle - 0.75).abs() < 1e-6);
    }

    #[test]
    fn materials_follow_model_kind() {
        assert_eq!(ModelKind::Teapot.material(), ModelKind::Crate.material());
        assert_eq!(ModelKind::Wall.material().shininess, 3.0);
        assert_eq!(ModelKind::Floor.material().diffuse, 1.0);
        assert!(ModelKind::Teapot.spins());
        assert!(!ModelKind::Crate.spins());
    }
}
