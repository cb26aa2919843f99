// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use crossline_collapse::{Collapser, FrameOutcome};
use crossline_scene::{Color, DrawCommand, Recording, Scene, StrokeStyle, Surface};
use kurbo::{Circle, Line, Rect};

/// Surface that drops everything, so the bench measures the animator alone.
struct Sink(usize);

impl Surface for Sink {
    fn clear_rect(&mut self, _rect: Rect) {
        self.0 += 1;
    }
    fn stroke_line(&mut self, _line: Line, _style: &StrokeStyle) {
        self.0 += 1;
    }
    fn fill_stroke_circle(&mut self, _circle: Circle, _fill: Color, _stroke: Color) {
        self.0 += 1;
    }
}

fn gen_fan(count: usize) -> Vec<Line> {
    (0..count)
        .map(|i| {
            let x = (i % 800) as f64;
            Line::new((x, 0.0), (800.0 - x, 600.0))
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

fn run(collapser: &mut Collapser, scene: &mut Scene, surface: &mut impl Surface) -> usize {
    let Some(mut token) = collapser.start(scene).unwrap() else {
        return 0;
    };
    let mut now = 0.0;
    let mut frames = 0;
    loop {
        now += collapser.params().frame_duration;
        frames += 1;
        match collapser.on_frame(token, now, scene, surface) {
            FrameOutcome::Continue(next) => token = next,
            FrameOutcome::Completed | FrameOutcome::Stale => return frames,
        }
    }
}

fn bench_collapse(c: &mut Criterion) {
    let mut group = c.benchmark_group("collapse");
    for &n in &[1usize, 64, 512] {
        let segments = gen_fan(n);
        // Two units per segment.
        group.throughput(Throughput::Elements((2 * n) as u64));
        group.bench_function(format!("full_n{}", n), |b| {
            b.iter_batched(
                || (Collapser::default(), scene_from(&segments)),
                |(mut collapser, mut scene)| {
                    let mut sink = Sink(0);
                    let frames = run(&mut collapser, &mut scene, &mut sink);
                    black_box((frames, sink.0));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_collapse_recorded(c: &mut Criterion) {
    let mut group = c.benchmark_group("collapse_recorded");
    let segments = gen_fan(64);
    group.bench_function("full_n64", |b| {
        b.iter_batched(
            || (Collapser::default(), scene_from(&segments)),
            |(mut collapser, mut scene)| {
                let mut surface = Recording::new();
                run(&mut collapser, &mut scene, &mut surface);
                let strokes = surface
                    .commands
                    .iter()
                    .filter(|c| matches!(c, DrawCommand::Line { .. }))
                    .count();
                black_box(strokes);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_collapse, bench_collapse_recorded);
criterion_main!(benches);
