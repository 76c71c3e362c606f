#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use litscene::math::{look_at, model_matrix, perspective, rotate};
use litscene::{FrameInput, Options, Scene};

fn matrix_builder_benchmark(c: &mut Criterion) {
    c.bench_function("rotate_axis_angle", |b| {
        b.iter(|| rotate(black_box(0.7), black_box(Vec3::new(1.0, 1.0, 1.0))))
    });
    c.bench_function("model_matrix", |b| {
        b.iter(|| {
            model_matrix(
                black_box(Vec3::new(-6.0, 0.0, 0.0)),
                black_box(1.3),
                black_box(Vec3::Y),
                black_box(Vec3::splat(0.75)),
            )
        })
    });
}

fn view_projection_benchmark(c: &mut Criterion) {
    c.bench_function("look_at", |b| {
        b.iter(|| {
            look_at(
                black_box(Vec3::new(0.0, 0.0, 5.0)),
                black_box(Vec3::new(0.3, -0.2, 4.0)),
                black_box(Vec3::Y),
            )
        })
    });
    c.bench_function("perspective", |b| {
        b.iter(|| perspective(black_box(0.785), black_box(1.333), 0.2, 100.0))
    });
}

fn scene_frame_benchmark(c: &mut Criterion) {
    let Ok(mut scene) = Scene::from_options(&Options::default()) else {
        return;
    };
    let input = FrameInput {
        forward: 1.0,
        spin_models: true,
        ..FrameInput::default()
    };

    let mut group = c.benchmark_group("scene");
    group.bench_function("update", |b| {
        b.iter(|| scene.update(black_box(&input), black_box(0.001)))
    });
    group.bench_function("build_frame", |b| {
        b.iter(|| black_box(scene.build_frame()))
    });
    group.finish();
}

criterion_group!(
    benches,
    matrix_builder_benchmark,
    view_projection_benchmark,
    scene_frame_benchmark
);
criterion_main!(benches);
