// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual configuration for the render pass.

use crate::surface::{Color, StrokeStyle};

/// How the scene is drawn.
///
/// The defaults give thin black segments and small red markers with a black outline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneStyle {
    /// Stroke for committed segments.
    pub segment: StrokeStyle,
    /// Stroke for the segment being drawn.
    pub live_segment: StrokeStyle,
    /// Marker radius in canvas units.
    pub marker_radius: f64,
    /// Marker fill.
    pub marker_fill: Color,
    /// Marker outline.
    pub marker_stroke: Color,
}

impl Default for SceneStyle {
    fn default() -> Self {
        let line = StrokeStyle::new(1.0, Color::BLACK);
        Self {
            segment: line,
            live_segment: line,
            marker_radius: 5.0,
            marker_fill: Color::RED,
            marker_stroke: Color::BLACK,
        }
    }
}
