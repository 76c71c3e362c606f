use std::f32::consts::PI;

use glam::{Mat4, Vec3, Vec4};

use super::PARALLEL_EPSILON;
use crate::error::SceneError;

/// Right-handed look-at view matrix.
///
/// The rotation block holds `right`, `true_up` and `-forward` as rows; the
/// translation column moves the eye to the view-space origin. The forward
/// translation term is `+dot(forward, eye)` because the third row stores
/// `-forward`.
///
/// # Errors
///
/// [`SceneError::DegenerateGeometry`] when any input is not finite, when
/// `eye == target`, when `up` is zero, or when the view direction is
/// parallel to `up`.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Result<Mat4, SceneError> {
    if !(eye.is_finite() && target.is_finite() && up.is_finite()) {
        return Err(SceneError::DegenerateGeometry(format!(
            "look-at inputs must be finite: eye {eye}, target {target}, \
             up {up}"
        )));
    }
    let Some(forward) = (target - eye).try_normalize() else {
        return Err(SceneError::DegenerateGeometry(format!(
            "eye {eye} and target {target} coincide"
        )));
    };
    // Only the direction of `up` matters; scaling keeps the cross product
    // finite for large hints. A zero hint turns into NaN here.
    let side = forward.cross(up / up.abs().max_element());
    let right = match side.try_normalize() {
        Some(right) if side.length() >= PARALLEL_EPSILON => right,
        _ => {
            return Err(SceneError::DegenerateGeometry(format!(
                "view direction {forward} is parallel to up hint {up}"
            )));
        }
    };
    let true_up = right.cross(forward);

    Ok(Mat4::from_cols(
        Vec4::new(right.x, true_up.x, -forward.x, 0.0),
        Vec4::new(right.y, true_up.y, -forward.y, 0.0),
        Vec4::new(right.z, true_up.z, -forward.z, 0.0),
        Vec4::new(
            -right.dot(eye),
            -true_up.dot(eye),
            forward.dot(eye),
            1.0,
        ),
    ))
}

/// Symmetric-frustum perspective projection with OpenGL depth: view-space
/// `z = -near` lands on NDC `-1` and `z = -far` on `+1`.
///
/// # Errors
///
/// [`SceneError::InvalidConfiguration`] unless every input is finite,
/// `fov_y` lies in `(0, π)`, `aspect > 0`, `near > 0`, `far > near` and
/// every matrix entry comes out finite.
pub fn perspective(
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
) -> Result<Mat4, SceneError> {
    validate_frustum(fov_y, aspect, near, far)?;
    Ok(perspective_unchecked(fov_y, aspect, near, far))
}

/// Matrix body of [`perspective`] for parameters already validated.
pub(crate) fn perspective_unchecked(
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
) -> Mat4 {
    let focal_length = 1.0 / (fov_y * 0.5).tan();
    let depth = far - near;

    Mat4::from_cols(
        Vec4::new(focal_length / aspect, 0.0, 0.0, 0.0),
        Vec4::new(0.0, focal_length, 0.0, 0.0),
        Vec4::new(0.0, 0.0, -(far + near) / depth, -1.0),
        Vec4::new(0.0, 0.0, -(2.0 * far * near) / depth, 0.0),
    )
}

/// Reject frustum parameters that would yield a singular or non-finite
/// projection.
pub(crate) fn validate_frustum(
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
) -> Result<(), SceneError> {
    if fov_y.is_nan() || fov_y <= 0.0 || fov_y >= PI {
        return Err(invalid(format!(
            "vertical field of view {fov_y} rad must lie in (0, π)"
        )));
    }
    if !aspect.is_finite() || aspect <= 0.0 {
        return Err(invalid(format!("aspect ratio {aspect} must be positive")));
    }
    if !near.is_finite() || near <= 0.0 {
        return Err(invalid(format!("near plane {near} must be positive")));
    }
    if !far.is_finite() || far <= near {
        return Err(invalid(format!(
            "far plane {far} must lie beyond near plane {near}"
        )));
    }
    // In-range inputs can still overflow: a tiny fov or aspect, or a
    // near·far product beyond f32.
    if !perspective_unchecked(fov_y, aspect, near, far).is_finite() {
        return Err(invalid(format!(
            "frustum fov {fov_y} aspect {aspect} near {near} far {far} \
             overflows the projection"
        )));
    }
    Ok(())
}

fn invalid(msg: String) -> SceneError {
    SceneError::InvalidConfiguration(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::radians;

    const EPS: f32 = 1e-4;

    fn ndc_depth(proj: Mat4, view_z: f32) -> f32 {
        let clip = proj * Vec4::new(0.0, 0.0, view_z, 1.0);
        clip.z / clip.w
    }

    #[test]
    fn look_at_maps_eye_to_origin() {
        let eyes = [
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(3.0, -2.0, 7.5),
            Vec3::new(-10.0, 4.0, -1.0),
        ];
        for eye in eyes {
            let view = look_at(eye, eye + Vec3::new(0.3, -0.1, -1.0), Vec3::Y)
                .unwrap();
            let origin = view * eye.extend(1.0);
            assert!(origin.abs_diff_eq(Vec4::W, EPS), "eye {eye}: {origin}");
        }
    }

    #[test]
    fn look_at_puts_target_down_negative_z() {
        let view =
            look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y).unwrap();
        let target = view.transform_point3(Vec3::ZERO);
        assert!(target.abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), EPS));
    }

    #[test]
    fn look_at_matches_glam() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        let target = Vec3::new(-4.0, 0.5, -2.0);
        let ours = look_at(eye, target, Vec3::Y).unwrap();
        let reference = Mat4::look_at_rh(eye, target, Vec3::Y);
        assert!(ours.abs_diff_eq(reference, EPS));
    }

    #[test]
    fn look_at_rotation_block_is_orthonormal() {
        let view = look_at(
            Vec3::new(2.0, 1.0, 2.0),
            Vec3::new(-1.0, 0.0, 0.5),
            Vec3::Y,
        )
        .unwrap();
        let rot = glam::Mat3::from_mat4(view);
        assert!((rot.transpose() * rot).abs_diff_eq(glam::Mat3::IDENTITY, EPS));
    }

    #[test]
    fn look_at_rejects_parallel_up() {
        let err = look_at(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0), Vec3::Y);
        assert!(matches!(err, Err(SceneError::DegenerateGeometry(_))));

        let err = look_at(Vec3::ZERO, Vec3::new(0.0, -3.0, 0.0), Vec3::Y);
        assert!(matches!(err, Err(SceneError::DegenerateGeometry(_))));
    }

    #[test]
    fn look_at_rejects_coincident_eye_and_target() {
        let p = Vec3::new(1.0, 1.0, 1.0);
        assert!(matches!(
            look_at(p, p, Vec3::Y),
            Err(SceneError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn look_at_rejects_zero_up() {
        assert!(matches!(
            look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::ZERO),
            Err(SceneError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn look_at_rejects_non_finite_inputs() {
        let inf = f32::INFINITY;
        let cases = [
            (Vec3::ZERO, Vec3::ONE, Vec3::new(inf, 0.0, 0.0)),
            (Vec3::new(0.0, inf, 0.0), Vec3::ONE, Vec3::Y),
            (Vec3::ZERO, Vec3::new(f32::NAN, 0.0, -1.0), Vec3::Y),
        ];
        for (eye, target, up) in cases {
            assert!(
                matches!(
                    look_at(eye, target, up),
                    Err(SceneError::DegenerateGeometry(_))
                ),
                "accepted eye={eye} target={target} up={up}"
            );
        }
    }

    #[test]
    fn look_at_survives_huge_up_hints() {
        let up = Vec3::new(0.0, 3e38, 0.0);
        let view = look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, up).unwrap();
        assert!(view.is_finite());
        let reference =
            look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y).unwrap();
        assert!(view.abs_diff_eq(reference, EPS));
    }

    #[test]
    fn perspective_maps_clip_planes_to_ndc_bounds() {
        let proj = perspective(radians(60.0), 16.0 / 9.0, 0.5, 250.0).unwrap();
        assert!((ndc_depth(proj, -0.5) + 1.0).abs() < EPS);
        assert!((ndc_depth(proj, -250.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn perspective_default_camera_entries() {
        let aspect = 1024.0 / 768.0;
        let proj = perspective(radians(45.0), aspect, 0.2, 100.0).unwrap();
        let expected = 1.0 / radians(22.5).tan() / aspect;
        assert!((proj.col(0).x - expected).abs() < EPS);
        assert!((proj.col(1).y - 1.0 / radians(22.5).tan()).abs() < EPS);
        assert_eq!(proj.col(2).w, -1.0);
        assert!((proj.col(3).z - (-(2.0 * 100.0 * 0.2) / 99.8)).abs() < EPS);
        assert_eq!(proj.col(3).w, 0.0);
    }

    #[test]
    fn perspective_matches_glam_gl_convention() {
        let ours = perspective(1.1, 1.5, 0.1, 50.0).unwrap();
        let reference = Mat4::perspective_rh_gl(1.1, 1.5, 0.1, 50.0);
        assert!(ours.abs_diff_eq(reference, EPS));
    }

    #[test]
    fn perspective_rejects_degenerate_frustums() {
        let bad = [
            (0.0, 1.0, 0.1, 10.0),
            (PI, 1.0, 0.1, 10.0),
            (-1.0, 1.0, 0.1, 10.0),
            (1.0, 0.0, 0.1, 10.0),
            (1.0, -2.0, 0.1, 10.0),
            (1.0, 1.0, 0.0, 10.0),
            (1.0, 1.0, -0.1, 10.0),
            (1.0, 1.0, 10.0, 10.0),
            (1.0, 1.0, 10.0, 5.0),
            (1.0, 1.0, 0.1, f32::INFINITY),
            (f32::NAN, 1.0, 0.1, 10.0),
            (1.0, 1.0, 1e20, 1e25),
            (1e-40, 1.0, 0.1, 10.0),
            (1.0, 1e-40, 0.1, 10.0),
        ];
        for (fov, aspect, near, far) in bad {
            assert!(
                matches!(
                    perspective(fov, aspect, near, far),
                    Err(SceneError::InvalidConfiguration(_))
                ),
                "accepted fov={fov} aspect={aspect} near={near} far={far}"
            );
        }
    }
}
