//! The default room: four teapots on crates, walls, a floor and three
//! lights.

use glam::Vec3;

use super::light::Light;
use super::object::{ModelKind, SceneObject};
use crate::math;

const TEAPOT_POSITIONS: [Vec3; 4] = [
    Vec3::new(-6.0, 0.0, 0.0),
    Vec3::new(5.0, 0.0, 0.0),
    Vec3::new(-5.0, 0.0, -5.0),
    Vec3::new(5.0, 0.0, -5.0),
];

/// Crates sit under the teapots.
const CRATE_DROP: f32 = 1.25;

/// (position, axis, angle in degrees) per wall.
const WALLS: [(Vec3, Vec3, f32); 4] = [
    (Vec3::new(0.0, 8.0, -10.0), Vec3::X, 90.0),
    (Vec3::new(0.0, 8.0, 10.0), Vec3::X, -90.0),
    (Vec3::new(10.0, 8.0, 10.0), Vec3::Z, 90.0),
    (Vec3::new(-10.0, 8.0, 10.0), Vec3::Z, -90.0),
];

const PROP_SCALE: f32 = 0.75;
const WALL_SCALE: f32 = 10.0;
const FLOOR_HEIGHT: f32 = -2.0;

/// Objects in draw order: teapots, crates, walls, floor.
pub(crate) fn default_objects() -> Vec<SceneObject> {
    let props = [ModelKind::Teapot, ModelKind::Crate];
    let mut objects = Vec::with_capacity(13);
    for model in props {
        let drop = if model == ModelKind::Crate { CRATE_DROP } else { 0.0 };
        objects.extend(TEAPOT_POSITIONS.iter().map(|&position| {
            SceneObject::new(model, position - Vec3::Y * drop)
                .with_rotation(Vec3::ONE, 0.0)
                .with_uniform_scale(PROP_SCALE)
        }));
    }
    objects.extend(WALLS.iter().map(|&(position, axis, degrees)| {
        SceneObject::new(ModelKind::Wall, position)
            .with_rotation(axis, math::radians(degrees))
            .with_uniform_scale(WALL_SCALE)
    }));
    objects.push(SceneObject::new(
        ModelKind::Floor,
        Vec3::new(0.0, FLOOR_HEIGHT, 0.0),
    ));
    objects
}

/// Blue point light, red downward spot, white directional.
///
/// The spot and directional lights reuse the point light's attenuation,
/// and the directional marker sits where the spot is.
pub(crate) fn default_lights() -> Vec<Light> {
    let point =
        Light::point(Vec3::new(-5.0, 2.0, 5.0), Vec3::Z, 1.0, 0.1, 0.02);
    let spot = point.into_spot(
        Vec3::new(5.0, 3.0, 0.0),
        Vec3::NEG_Y,
        Vec3::X,
        45.0,
    );
    let directional =
        spot.into_directional(Vec3::new(1.0, -1.0, 0.0), Vec3::ONE);
    vec![point, spot, directional]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::LightKind;

    #[test]
    fn room_has_every_object() {
        let objects = default_objects();
        let count = |kind| objects.iter().filter(|o| o.model == kind).count();
        assert_eq!(count(ModelKind::Teapot), 4);
        assert_eq!(count(ModelKind::Crate), 4);
        assert_eq!(count(ModelKind::Wall), 4);
        assert_eq!(count(ModelKind::Floor), 1);
    }

    #[test]
    fn crates_sit_under_teapots() {
        let objects = default_objects();
        let teapots = objects.iter().filter(|o| o.model == ModelKind::Teapot);
        let crates = objects.iter().filter(|o| o.model == ModelKind::Crate);
        for (teapot, crate_) in teapots.zip(crates) {
            assert_eq!(teapot.position.x, crate_.position.x);
            assert_eq!(teapot.position.z, crate_.position.z);
            assert_eq!(crate_.position.y, -1.25);
        }
    }

    #[test]
    fn every_object_has_a_valid_model_matrix() {
        for object in default_objects() {
            assert!(object.model_matrix().unwrap().is_finite());
        }
    }

    #[test]
    fn lights_are_point_spot_directional() {
        let lights = default_lights();
        let kinds: Vec<_> = lights.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            [LightKind::Point, LightKind::Spot, LightKind::Directional]
        );
        assert_eq!(lights[2].position, Vec3::new(5.0, 3.0, 0.0));
        assert_eq!(lights[2].quadratic, 0.02);
    }
}
