use glam::{Mat4, Vec3};

use crate::math;

/// Uniform scale of the sphere drawn at each light.
pub const MARKER_SCALE: f32 = 0.1;

/// Light model; the discriminant is the type code the shader switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum LightKind {
    /// Omnidirectional light with distance attenuation.
    Point = 1,
    /// Cone-limited point light.
    Spot = 2,
    /// Parallel rays along `direction`; position only places the marker.
    Directional = 3,
}

/// A light source in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Light model.
    pub kind: LightKind,
    /// World-space position.
    pub position: Vec3,
    /// RGB colour.
    pub colour: Vec3,
    /// Constant attenuation term.
    pub constant: f32,
    /// Linear attenuation term.
    pub linear: f32,
    /// Quadratic attenuation term.
    pub quadratic: f32,
    /// World-space direction for spot and directional lights.
    pub direction: Vec3,
    /// Cosine of the spot cone half-angle.
    pub cos_phi: f32,
}

impl Light {
    /// Point light; intensity falls off as
    /// `1 / (constant + linear·d + quadratic·d²)`.
    #[must_use]
    pub fn point(
        position: Vec3,
        colour: Vec3,
        constant: f32,
        linear: f32,
        quadratic: f32,
    ) -> Self {
        Self {
            kind: LightKind::Point,
            position,
            colour,
            constant,
            linear,
            quadratic,
            direction: Vec3::NEG_Y,
            cos_phi: 1.0,
        }
    }

    /// Spot light with a cone of half-angle `cone_degrees`, keeping the
    /// attenuation of `self`.
    #[must_use]
    pub fn into_spot(
        self,
        position: Vec3,
        direction: Vec3,
        colour: Vec3,
        cone_degrees: f32,
    ) -> Self {
        Self {
            kind: LightKind::Spot,
            position,
            colour,
            direction,
            cos_phi: math::radians(cone_degrees).cos(),
            ..self
        }
    }

    /// Directional light shining along `direction`. The marker stays at the
    /// current position.
    #[must_use]
    pub fn into_directional(self, direction: Vec3, colour: Vec3) -> Self {
        Self {
            kind: LightKind::Directional,
            colour,
            direction,
            ..self
        }
    }

    /// Shader-facing layout with position and direction moved into view
    /// space. Positions transform as points, directions as vectors.
    #[must_use]
    pub fn uniform(&self, view: Mat4) -> LightUniform {
        LightUniform {
            position: view.transform_point3(self.position).to_array(),
            kind: self.kind as u32,
            colour: self.colour.to_array(),
            constant: self.constant,
            direction: view.transform_vector3(self.direction).to_array(),
            linear: self.linear,
            quadratic: self.quadratic,
            cos_phi: self.cos_phi,
            _pad: [0.0; 2],
        }
    }

    /// Object-to-world transform of the marker sphere.
    #[must_use]
    pub fn marker_model(&self) -> Mat4 {
        math::translate(self.position) * math::scale(Vec3::splat(MARKER_SCALE))
    }
}

/// One light as uploaded to the fragment shader (64 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    /// View-space position.
    pub position: [f32; 3],
    /// [`LightKind`] code.
    pub kind: u32,
    /// RGB colour.
    pub colour: [f32; 3],
    /// Constant attenuation term.
    pub constant: f32,
    /// View-space direction.
    pub direction: [f32; 3],
    /// Linear attenuation term.
    pub linear: f32,
    /// Quadratic attenuation term.
    pub quadratic: f32,
    /// Cosine of the spot cone half-angle.
    pub cos_phi: f32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 2],
}
