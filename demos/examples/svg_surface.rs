// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A custom [`Surface`] that writes SVG.
//!
//! Draws a small scene with a segment in progress and prints the SVG for the last
//! rendered frame, with its live intersection markers.
//!
//! Run:
//! - `cargo run -p crossline_demos --example svg_surface > frame.svg`

use core::fmt::Write as _;

use crossline_scene::{Color, Scene, SceneError, SceneStyle, StrokeStyle, Surface};
use kurbo::{Cap, Circle, Line, Rect};

#[derive(Default)]
struct Svg {
    body: String,
    width: f64,
    height: f64,
}

fn css(c: Color) -> String {
    format!("rgba({},{},{},{:.3})", c.r, c.g, c.b, f64::from(c.a) / 255.0)
}

impl Surface for Svg {
    fn clear_rect(&mut self, rect: Rect) {
        // The SVG only ever holds one frame.
        self.body.clear();
        self.width = rect.width();
        self.height = rect.height();
    }

    fn stroke_line(&mut self, line: Line, style: &StrokeStyle) {
        let cap = match style.cap {
            Cap::Butt => "butt",
            Cap::Round => "round",
            Cap::Square => "square",
        };
        let _ = writeln!(
            self.body,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="{cap}"/>"#,
            line.p0.x,
            line.p0.y,
            line.p1.x,
            line.p1.y,
            css(style.color),
            style.width
        );
    }

    fn fill_stroke_circle(&mut self, circle: Circle, fill: Color, stroke: Color) {
        let _ = writeln!(
            self.body,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}"/>"#,
            circle.center.x,
            circle.center.y,
            circle.radius,
            css(fill),
            css(stroke)
        );
    }
}

fn main() -> Result<(), SceneError> {
    let mut scene = Scene::new();
    for (a, b) in [
        ((100.0, 100.0), (700.0, 500.0)),
        ((100.0, 500.0), (700.0, 100.0)),
    ] {
        scene.arm(a.into())?;
        scene.update_live_end(b.into())?;
        scene.commit()?;
    }
    // Live segment crossing both diagonals.
    scene.arm((400.0, 50.0).into())?;
    scene.update_live_end((400.0, 550.0).into())?;

    let mut svg = Svg::default();
    scene.render(&mut svg, Rect::new(0.0, 0.0, 800.0, 600.0), &SceneStyle::default());

    println!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        svg.width, svg.height
    );
    print!("{}", svg.body);
    println!("</svg>");
    Ok(())
}
