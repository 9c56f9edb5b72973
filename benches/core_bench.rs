use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;
use std::sync::Arc;
use triangle_angle_overlay::app::build_render_scene;
use triangle_angle_overlay::{angle_at_vertex, render, AppState, BackgroundImage};

fn build_query_triangles(count: usize) -> Vec<[Vec2; 3]> {
    (0..count)
        .map(|i| {
            let x = (i % 1000) as f32 + 0.37;
            let y = ((i * 7) % 1000) as f32 + 0.63;
            [
                Vec2::new(x, y),
                Vec2::new(x + 120.0, y + 35.0),
                Vec2::new(x + 40.0, y - 90.0),
            ]
        })
        .collect()
}

fn bench_angles(c: &mut Criterion) {
    let mut group = c.benchmark_group("angles");

    for &count in &[1_000usize, 100_000usize] {
        let triangles = build_query_triangles(count);
        group.bench_with_input(
            BenchmarkId::new("angle_at_vertex_batch", count),
            &triangles,
            |b, triangles| {
                b.iter(|| {
                    let mut sum = 0.0;
                    for [a, v, b2] in triangles {
                        sum += angle_at_vertex(*v, *a, *b2).unwrap_or_default();
                    }
                    black_box(sum)
                })
            },
        );
    }

    group.finish();
}

fn bench_render_frame(c: &mut Criterion) {
    let mut state = AppState::new();
    state.view.surface_size = [1920.0, 1080.0];
    let scene = build_render_scene(&state);

    c.bench_function("render_frame_without_background", |b| {
        b.iter(|| black_box(render(black_box(&scene)).commands.len()))
    });

    let mut with_background = scene.clone();
    with_background.background = Some(Arc::new(BackgroundImage::from_image(
        image::DynamicImage::new_rgba8(64, 64),
        "bench",
    )));

    c.bench_function("render_frame_with_background", |b| {
        b.iter(|| black_box(render(black_box(&with_background)).commands.len()))
    });
}

criterion_group!(core_benches, bench_angles, bench_render_frame);
criterion_main!(core_benches);
