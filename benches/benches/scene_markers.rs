// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use crossline_geometry::intersect_lines;
use crossline_scene::Scene;
use kurbo::{Line, Point};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
    fn point(&mut self, w: f64, h: f64) -> Point {
        Point::new(self.next_f64() * w, self.next_f64() * h)
    }
}

fn gen_random_segments(count: usize, w: f64, h: f64) -> Vec<Line> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Line::new(rng.point(w, h), rng.point(w, h)))
        .collect()
}

/// Horizontal rules, so a vertical sweep crosses every one of them.
fn gen_rules(count: usize, w: f64, spacing: f64) -> Vec<Line> {
    (0..count)
        .map(|i| {
            let y = i as f64 * spacing;
            Line::new((0.0, y), (w, y))
        })
        .collect()
}

fn scene_from(segments: &[Line]) -> Scene {
    let mut scene = Scene::new();
    for seg in segments {
        scene.arm(seg.p0).unwrap();
        scene.update_live_end(seg.p1).unwrap();
        scene.commit().unwrap();
    }
    scene
}

fn bench_intersect(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersect");
    let segments = gen_random_segments(1024, 800.0, 600.0);
    group.throughput(Throughput::Elements(segments.len() as u64));
    group.bench_function("pairs_random_1024", |b| {
        b.iter(|| {
            let probe = Line::new((0.0, 0.0), (800.0, 600.0));
            let hits = segments
                .iter()
                .filter(|s| intersect_lines(probe, **s).is_some())
                .count();
            black_box(hits)
        })
    });
    group.finish();
}

fn bench_update_live_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_live_end");
    for &n in &[16usize, 128, 1024] {
        let segments = gen_random_segments(n, 800.0, 600.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random_n{}", n), |b| {
            b.iter_batched(
                || {
                    let mut scene = scene_from(&segments);
                    scene.arm(Point::new(400.0, 0.0)).unwrap();
                    scene
                },
                |mut scene| {
                    // One drag across the canvas.
                    for step in 0..60 {
                        let t = step as f64 / 59.0;
                        scene
                            .update_live_end(Point::new(800.0 * t, 600.0))
                            .unwrap();
                    }
                    black_box(scene.markers().len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    // Worst case: every committed segment is crossed on every move.
    let rules = gen_rules(512, 800.0, 1.0);
    group.bench_function("all_crossing_n512", |b| {
        b.iter_batched(
            || {
                let mut scene = scene_from(&rules);
                scene.arm(Point::new(0.0, -1.0)).unwrap();
                scene
            },
            |mut scene| {
                for step in 0..60 {
                    let x = step as f64 * 10.0;
                    scene.update_live_end(Point::new(x, 600.0)).unwrap();
                }
                black_box(scene.markers().len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_intersect, bench_update_live_end);
criterion_main!(benches);
