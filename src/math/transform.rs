use glam::{Mat4, Vec3, Vec4};

use crate::error::SceneError;

/// Identity with the translation column set to `v`.
///
/// Points (w = 1) are offset by `v`; directions (w = 0) pass through
/// unchanged.
#[must_use]
pub fn translate(v: Vec3) -> Mat4 {
    Mat4::from_cols(Vec4::X, Vec4::Y, Vec4::Z, v.extend(1.0))
}

/// Diagonal scale matrix `(v.x, v.y, v.z, 1)`.
///
/// Zero and negative components are accepted; a collapsed or mirrored
/// model is the caller's business.
#[must_use]
pub fn scale(v: Vec3) -> Mat4 {
    Mat4::from_diagonal(v.extend(1.0))
}

/// Degrees to radians.
#[inline]
#[must_use]
pub fn radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Axis-angle rotation (Rodrigues) embedded in a 4x4 identity.
///
/// `axis` is normalized first, so only its direction matters. A positive
/// `angle` (radians) turns counter-clockwise when looking down the axis
/// toward the origin.
///
/// # Errors
///
/// [`SceneError::DegenerateGeometry`] if `axis` is zero-length or not
/// finite, [`SceneError::InvalidConfiguration`] if `angle` is not finite.
pub fn rotate(angle: f32, axis: Vec3) -> Result<Mat4, SceneError> {
    if !angle.is_finite() {
        return Err(SceneError::InvalidConfiguration(format!(
            "rotation angle must be finite, got {angle}"
        )));
    }
    // Divide by the largest component first so huge axes do not overflow
    // the squared length. Zero and non-finite axes come out as NaN.
    let Some(v) = (axis / axis.abs().max_element()).try_normalize() else {
        return Err(SceneError::DegenerateGeometry(format!(
            "rotation axis {axis} has no direction"
        )));
    };

    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;
    let (xy, xz, yz) = (v.x * v.y, v.x * v.z, v.y * v.z);
    let (xs, ys, zs) = (v.x * s, v.y * s, v.z * s);

    Ok(Mat4::from_cols(
        Vec4::new(t * v.x * v.x + c, t * xy + zs, t * xz - ys, 0.0),
        Vec4::new(t * xy - zs, t * v.y * v.y + c, t * yz + xs, 0.0),
        Vec4::new(t * xz + ys, t * yz - xs, t * v.z * v.z + c, 0.0),
        Vec4::W,
    ))
}

/// Model matrix `T · R · S`: scale first, then rotate, then translate.
///
/// # Errors
///
/// Propagates [`rotate`] failures for a degenerate axis or angle.
pub fn model_matrix(
    position: Vec3,
    angle: f32,
    axis: Vec3,
    scaling: Vec3,
) -> Result<Mat4, SceneError> {
    Ok(translate(position) * rotate(angle, axis)? * scale(scaling))
}
