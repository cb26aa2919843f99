// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The output boundary: an immediate-mode 2D surface.
//!
//! ## Overview
//!
//! The scene and the collapse animator only ever issue three primitive calls.
//! Hosts implement [`Surface`] over whatever they draw with (an HTML canvas context,
//! a vello scene, a software rasterizer) and keep ownership of sizing and lifetime.
//!
//! [`Recording`] stores the calls instead of drawing them; tests and demos use it to
//! inspect exactly what was issued.

use alloc::vec::Vec;

use kurbo::{Cap, Circle, Line, Rect};

/// An 8-bit RGBA colour.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha; 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// An opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// How a line is stroked.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke width in canvas units.
    pub width: f64,
    /// Stroke colour.
    pub color: Color,
    /// End cap.
    pub cap: Cap,
}

impl StrokeStyle {
    /// A butt-capped stroke.
    pub const fn new(width: f64, color: Color) -> Self {
        Self {
            width,
            color,
            cap: Cap::Butt,
        }
    }

    /// Replace the end cap.
    #[must_use]
    pub const fn with_cap(mut self, cap: Cap) -> Self {
        self.cap = cap;
        self
    }
}

/// Immediate-mode drawing target.
pub trait Surface {
    /// Clear `rect` to the background.
    fn clear_rect(&mut self, rect: Rect);
    /// Stroke a straight line.
    fn stroke_line(&mut self, line: Line, style: &StrokeStyle);
    /// Fill a circle, then stroke its outline.
    fn fill_stroke_circle(&mut self, circle: Circle, fill: Color, stroke: Color);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear_rect(&mut self, rect: Rect) {
        (**self).clear_rect(rect);
    }

    fn stroke_line(&mut self, line: Line, style: &StrokeStyle) {
        (**self).stroke_line(line, style);
    }

    fn fill_stroke_circle(&mut self, circle: Circle, fill: Color, stroke: Color) {
        (**self).fill_stroke_circle(circle, fill, stroke);
    }
}

/// A primitive call captured by [`Recording`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`Surface::clear_rect`]
    Clear(Rect),
    /// [`Surface::stroke_line`]
    Line {
        /// The stroked line.
        line: Line,
        /// Its style.
        style: StrokeStyle,
    },
    /// [`Surface::fill_stroke_circle`]
    Circle {
        /// The circle.
        circle: Circle,
        /// Fill colour.
        fill: Color,
        /// Outline colour.
        stroke: Color,
    },
}

/// A [`Surface`] that records every call.
#[derive(Clone, Debug, Default)]
pub struct Recording {
    /// Calls in issue order.
    pub commands: Vec<DrawCommand>,
}

impl Recording {
    /// Create an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded calls, leaving the recording empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        core::mem::take(&mut self.commands)
    }

    /// Lines stroked with the given colour, in issue order.
    pub fn lines_with(&self, color: Color) -> impl Iterator<Item = Line> + '_ {
        self.commands.iter().filter_map(move |c| match c {
            DrawCommand::Line { line, style } if style.color == color => Some(*line),
            _ => None,
        })
    }

    /// Circles drawn, in issue order.
    pub fn circles(&self) -> impl Iterator<Item = Circle> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle { circle, .. } => Some(*circle),
            _ => None,
        })
    }
}

impl Surface for Recording {
    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn stroke_line(&mut self, line: Line, style: &StrokeStyle) {
        self.commands.push(DrawCommand::Line {
            line,
            style: *style,
        });
    }

    fn fill_stroke_circle(&mut self, circle: Circle, fill: Color, stroke: Color) {
        self.commands
            .push(DrawCommand::Circle { circle, fill, stroke });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_through<S: Surface>(mut s: S) {
        s.clear_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        s.stroke_line(Line::new((0.0, 0.0), (1.0, 1.0)), &StrokeStyle::new(1.0, Color::BLACK));
        s.fill_stroke_circle(Circle::new((5.0, 5.0), 2.0), Color::RED, Color::BLACK);
    }

    #[test]
    fn recording_keeps_issue_order() {
        let mut rec = Recording::new();
        draw_through(&mut rec);
        assert!(matches!(rec.commands[0], DrawCommand::Clear(_)));
        assert!(matches!(rec.commands[1], DrawCommand::Line { .. }));
        assert!(matches!(rec.commands[2], DrawCommand::Circle { .. }));
        assert_eq!(rec.take().len(), 3);
        assert!(rec.commands.is_empty(), "take leaves the recording empty");
    }

    #[test]
    fn lines_filter_by_colour() {
        let mut rec = Recording::new();
        let white = StrokeStyle::new(11.0, Color::WHITE).with_cap(Cap::Round);
        rec.stroke_line(Line::new((0.0, 0.0), (1.0, 0.0)), &white);
        rec.stroke_line(Line::new((0.0, 1.0), (1.0, 1.0)), &StrokeStyle::new(1.0, Color::BLACK));
        assert_eq!(rec.lines_with(Color::WHITE).count(), 1);
        assert_eq!(rec.lines_with(Color::RED).count(), 0);
        assert_eq!(rec.circles().count(), 0);
    }

    #[test]
    fn with_cap_replaces_only_the_cap() {
        let s = StrokeStyle::new(3.0, Color::RED).with_cap(Cap::Square);
        assert_eq!(s.width, 3.0);
        assert_eq!(s.color, Color::RED);
        assert_eq!(s.cap, Cap::Square);
    }
}
