use std::sync::Arc;

use contour_morph_core::{
    config::Config,
    data::{Keyframe, LoopMode, Timeline},
    evaluate,
    interp::Curve,
    mesh::MeshBuilder,
    resample,
    shape::Shape,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn star(points: usize, inner: f32) -> Vec<[f32; 2]> {
    (0..points * 2)
        .map(|i| {
            let r = if i % 2 == 0 { 1.0 } else { inner };
            let a = i as f32 / (points * 2) as f32 * std::f32::consts::TAU;
            [r * a.cos(), r * a.sin()]
        })
        .collect()
}

fn build_timeline(resolution: usize) -> Timeline {
    let a = Arc::new(Shape::bake(&star(5, 0.4), resolution).expect("bake star"));
    let b = Arc::new(Shape::bake(&star(3, 0.9), resolution).expect("bake star"));
    Timeline::new(LoopMode::Loop)
        .with_duration(3.0)
        .with_keyframes(vec![
            Keyframe::new(0.0, Some(a.clone())).with_curve(Curve::EaseInOut),
            Keyframe::new(1.0, Some(b)).with_align_offset(resolution as i32 / 4),
            Keyframe::new(2.0, Some(a)).with_scale(0.5),
        ])
}

fn bench_resample(c: &mut Criterion) {
    let key_points = star(12, 0.5);
    c.bench_function("resample_star_256", |b| {
        b.iter(|| resample(black_box(&key_points), black_box(256)))
    });
}

fn bench_tick(c: &mut Criterion) {
    let timeline = build_timeline(256);
    let mut builder = MeshBuilder::new(&Config::default());
    let mut t = 0.0f32;
    c.bench_function("evaluate_and_build_256", |b| {
        b.iter(|| {
            t += 1.0 / 60.0;
            let (state, _) = evaluate(black_box(&timeline), t);
            builder.build(&state).vertex_count()
        })
    });
}

criterion_group!(benches, bench_resample, bench_tick);
criterion_main!(benches);
