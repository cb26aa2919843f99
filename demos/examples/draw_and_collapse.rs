// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw a few segments through the canvas, then collapse them.
//!
//! Drives [`Canvas`] with scripted pointer events, records what it draws, and runs the
//! collapse at a simulated 60 Hz frame clock.
//!
//! Run:
//! - `cargo run -p crossline_demos --example draw_and_collapse`
//! - `RUST_LOG=debug cargo run -p crossline_demos --example draw_and_collapse` for the
//!   scene and animator events.

use crossline_canvas::{Canvas, CanvasError, PointerButton, PointerEvent};
use crossline_collapse::{FRAME_DURATION_MS, FrameOutcome};
use crossline_scene::{Color, DrawCommand, Recording};
use kurbo::Point;

fn stroke(
    canvas: &mut Canvas,
    surface: &mut Recording,
    from: (f64, f64),
    to: (f64, f64),
) -> Result<(), CanvasError> {
    let release = |p: (f64, f64)| PointerEvent::up(PointerButton::Primary, Point::from(p));
    canvas.handle_pointer(release(from), surface)?;
    // A short drag from start to end.
    for i in 1..=4 {
        let t = f64::from(i) / 4.0;
        let p = Point::from(from).lerp(Point::from(to), t);
        canvas.handle_pointer(PointerEvent::moved(p), surface)?;
    }
    canvas.handle_pointer(release(to), surface)?;
    Ok(())
}

fn main() -> Result<(), CanvasError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut canvas: Canvas = Canvas::default();
    let mut surface = Recording::new();

    // A star of three segments through the middle, then one across all of them.
    stroke(&mut canvas, &mut surface, (100.0, 300.0), (700.0, 300.0))?;
    stroke(&mut canvas, &mut surface, (400.0, 50.0), (400.0, 550.0))?;
    stroke(&mut canvas, &mut surface, (150.0, 100.0), (650.0, 500.0))?;
    stroke(&mut canvas, &mut surface, (150.0, 450.0), (650.0, 450.0))?;

    println!("== Scene ==");
    for (i, seg) in canvas.scene().segments().iter().enumerate() {
        println!("  segment {i}: {:?} -> {:?}", seg.p0, seg.p1);
    }
    for m in canvas.scene().pinned_markers() {
        println!("  marker at ({:.1}, {:.1}) on {:?}", m.at.x, m.at.y, m.segment);
    }
    println!("  {} draw commands while drawing", surface.take().len());

    // Pointer input is ignored from here until the collapse finishes.
    let cmd = canvas.collapse()?;
    let Some(mut token) = cmd.schedule else {
        println!("nothing to collapse");
        return Ok(());
    };

    println!("== Collapse ==");
    let mut now = 0.0;
    let mut frames = 0;
    loop {
        now += FRAME_DURATION_MS;
        frames += 1;
        match canvas.on_frame(token, now, &mut surface) {
            FrameOutcome::Continue(next) => token = next,
            FrameOutcome::Completed => break,
            FrameOutcome::Stale => unreachable!("only the latest token is fired"),
        }
        if frames % 25 == 0 {
            let erased = surface.lines_with(Color::WHITE).count();
            println!("  frame {frames:>3}: {erased} eraser strokes so far");
        }
    }
    let last = surface.commands.last();
    println!(
        "  completed after {frames} frames; final render clears the canvas: {}",
        matches!(last, Some(DrawCommand::Clear(_)))
    );
    println!("  segments left: {}", canvas.scene().segments().len());
    Ok(())
}
