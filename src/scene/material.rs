/// Phong reflection coefficients for one mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Ambient reflection coefficient (ka).
    pub ambient: f32,
    /// Diffuse reflection coefficient (kd).
    pub diffuse: f32,
    /// Specular reflection coefficient (ks).
    pub specular: f32,
    /// Specular exponent (Ns).
    pub shininess: f32,
}

impl Material {
    /// Material from its four coefficients.
    #[must_use]
    pub const fn new(
        ambient: f32,
        diffuse: f32,
        specular: f32,
        shininess: f32,
    ) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// GPU layout of this material.
    #[must_use]
    pub fn uniform(&self) -> MaterialUniform {
        MaterialUniform {
            ka: self.ambient,
            kd: self.diffuse,
            ks: self.specular,
            ns: self.shininess,
        }
    }
}

/// Material coefficients as uploaded to the fragment shader (16 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    /// Ambient coefficient.
    pub ka: f32,
    /// Diffuse coefficient.
    pub kd: f32,
    /// Specular coefficient.
    pub ks: f32,
    /// Specular exponent.
    pub ns: f32,
}
