// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation parameters.

use crossline_scene::{Color, StrokeStyle};
use kurbo::Cap;

/// Reference frame duration in milliseconds (60 frames per second).
pub const FRAME_DURATION_MS: f64 = 1000.0 / 60.0;

/// Tuning for the collapse animation.
///
/// Timestamps handed to the animator are in milliseconds, like `performance.now()`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollapseParams {
    /// Fraction of a leg erased per reference frame.
    ///
    /// The default of `0.01` erases a half-segment in 100 reference frames,
    /// independent of its length.
    pub step_fraction: f64,
    /// Reference frame duration in milliseconds.
    ///
    /// Elapsed time between steps is divided by this to get the step multiplier,
    /// so the animation runs at the same speed at any frame rate.
    pub frame_duration: f64,
    /// Stroke used to erase. Should match the canvas background and be wider than the
    /// drawn segments.
    pub eraser: StrokeStyle,
}

impl Default for CollapseParams {
    fn default() -> Self {
        Self {
            step_fraction: 0.01,
            frame_duration: FRAME_DURATION_MS,
            eraser: StrokeStyle::new(11.0, Color::WHITE).with_cap(Cap::Round),
        }
    }
}

impl CollapseParams {
    /// Step multiplier for `elapsed` milliseconds.
    ///
    /// Negative elapsed time (a clock that stepped backward) is clamped to zero.
    pub fn multiplier(&self, elapsed: f64) -> f64 {
        (elapsed / self.frame_duration).max(0.0)
    }
}
