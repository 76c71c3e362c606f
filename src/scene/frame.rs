use glam::Mat4;

use super::light::LightUniform;
use super::material::MaterialUniform;
use super::object::ModelKind;
use crate::camera::CameraUniform;

/// Per-object transform block (128 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    /// `projection · view · model`, column-major.
    pub mvp: [[f32; 4]; 4],
    /// `view · model`, column-major.
    pub mv: [[f32; 4]; 4],
}

impl ObjectUniform {
    /// Pack the model-view and projection matrices.
    #[must_use]
    pub fn new(mv: Mat4, projection: Mat4) -> Self {
        Self {
            mvp: (projection * mv).to_cols_array_2d(),
            mv: mv.to_cols_array_2d(),
        }
    }
}

/// Light marker block for the unlit sphere shader (80 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MarkerUniform {
    /// `projection · view · T(light) · S(0.1)`, column-major.
    pub mvp: [[f32; 4]; 4],
    /// Light colour.
    pub colour: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

/// One object draw: which mesh, with which transforms and material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    /// Mesh to bind.
    pub model: ModelKind,
    /// Transform uniforms.
    pub transform: ObjectUniform,
    /// Material uniforms.
    pub material: MaterialUniform,
}

/// Everything the draw-dispatch collaborator needs for one frame.
///
/// Built by [`Scene::build_frame`](super::Scene::build_frame) after the
/// camera has been recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    /// Camera matrices and eye position.
    pub camera: CameraUniform,
    /// Lights in view space, in scene order.
    pub lights: Vec<LightUniform>,
    /// Object draws, in scene order.
    pub objects: Vec<DrawCall>,
    /// Light marker draws, parallel to `lights`.
    pub markers: Vec<MarkerUniform>,
}

impl FrameData {
    /// Light array as raw bytes for a uniform buffer write.
    #[must_use]
    pub fn light_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lights)
    }
}
