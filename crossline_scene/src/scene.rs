// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core scene implementation: drawing state, markers, and the render pass.

use alloc::vec::Vec;

use crossline_geometry::{intersect_lines, is_degenerate};
use kurbo::{Circle, Line, Point, Rect};

use crate::error::SceneError;
use crate::style::SceneStyle;
use crate::surface::Surface;
use crate::types::{DrawingState, Marker, Operation, SegmentId};

/// Committed segments, intersection markers, and the segment being drawn.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    segments: Vec<Line>,
    // Recomputed wholesale on every live-end update.
    markers: Vec<Marker>,
    // Copied from `markers` on commit; live until reset.
    pinned: Vec<Marker>,
    state: DrawingState,
    collapsing: bool,
}

impl Scene {
    /// Create an empty, idle scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed segments in draw order.
    pub fn segments(&self) -> &[Line] {
        &self.segments
    }

    /// Look up a committed segment.
    pub fn segment(&self, id: SegmentId) -> Option<Line> {
        self.segments.get(id.index()).copied()
    }

    /// Markers for the live segment against every committed segment.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Markers kept from earlier commits.
    pub fn pinned_markers(&self) -> &[Marker] {
        &self.pinned
    }

    /// Current drawing state.
    pub fn state(&self) -> DrawingState {
        self.state
    }

    /// The in-progress segment, if armed.
    pub fn live_segment(&self) -> Option<Line> {
        self.state.live_segment()
    }

    /// True while a collapse animation owns the scene.
    pub fn is_collapsing(&self) -> bool {
        self.collapsing
    }

    /// True if there is nothing committed.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Start a segment at `at`. The live end starts at the same point.
    pub fn arm(&mut self, at: Point) -> Result<(), SceneError> {
        if self.frozen(Operation::Arm) {
            return Ok(());
        }
        self.expect_idle(Operation::Arm)?;
        self.state = DrawingState::Armed { start: at, end: at };
        self.markers.clear();
        tracing::trace!(?at, "armed");
        Ok(())
    }

    /// Move the live end to `to` and recompute the markers.
    pub fn update_live_end(&mut self, to: Point) -> Result<(), SceneError> {
        if self.frozen(Operation::UpdateLiveEnd) {
            return Ok(());
        }
        let start = self.expect_armed(Operation::UpdateLiveEnd)?.p0;
        self.state = DrawingState::Armed { start, end: to };
        self.recompute_markers(Line::new(start, to));
        Ok(())
    }

    /// Append the live segment and return to idle.
    ///
    /// The current markers are pinned and stay visible until [`Scene::reset`].
    /// A zero-length segment is dropped: the scene returns to idle and `None` is returned.
    pub fn commit(&mut self) -> Result<Option<SegmentId>, SceneError> {
        if self.frozen(Operation::Commit) {
            return Ok(None);
        }
        let line = self.expect_armed(Operation::Commit)?;
        self.state = DrawingState::Idle;
        if is_degenerate(line) {
            self.markers.clear();
            tracing::debug!(at = ?line.p0, "dropped zero-length segment");
            return Ok(None);
        }
        let id = SegmentId::new(self.segments.len());
        self.segments.push(line);
        self.pinned.append(&mut self.markers);
        tracing::debug!(?id, ?line, pinned = self.pinned.len(), "committed segment");
        Ok(Some(id))
    }

    /// Abandon the live segment and return to idle.
    pub fn discard(&mut self) -> Result<(), SceneError> {
        if self.frozen(Operation::Discard) {
            return Ok(());
        }
        self.expect_armed(Operation::Discard)?;
        self.state = DrawingState::Idle;
        self.markers.clear();
        tracing::debug!("discarded live segment");
        Ok(())
    }

    /// Mark the scene as owned by a collapse animation.
    ///
    /// Until [`Scene::reset`], every mutation is ignored.
    pub fn freeze(&mut self) {
        self.collapsing = true;
    }

    /// Clear segments and markers, and end any collapse.
    ///
    /// Only the collapse animator calls this, once, when every unit has finished.
    pub fn reset(&mut self) {
        self.segments.clear();
        self.markers.clear();
        self.pinned.clear();
        self.state = DrawingState::Idle;
        self.collapsing = false;
    }

    /// Draw the scene.
    ///
    /// Clears `viewport`, strokes committed segments, draws pinned markers, then the
    /// live segment and its markers if armed. Draws nothing while collapsing, since the
    /// animator is erasing the previous frame's pixels.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, viewport: Rect, style: &SceneStyle) {
        if self.collapsing {
            return;
        }
        surface.clear_rect(viewport);
        for line in &self.segments {
            surface.stroke_line(*line, &style.segment);
        }
        draw_markers(surface, &self.pinned, style);
        if let Some(live) = self.live_segment() {
            surface.stroke_line(live, &style.live_segment);
            draw_markers(surface, &self.markers, style);
        }
    }

    fn recompute_markers(&mut self, live: Line) {
        self.markers.clear();
        self.markers.extend(
            self.segments
                .iter()
                .enumerate()
                .filter_map(|(idx, seg)| {
                    intersect_lines(live, *seg).map(|at| Marker {
                        at,
                        segment: SegmentId::new(idx),
                    })
                }),
        );
    }

    fn frozen(&self, op: Operation) -> bool {
        if self.collapsing {
            tracing::trace!(%op, "ignored while collapsing");
        }
        self.collapsing
    }

    fn expect_idle(&self, op: Operation) -> Result<(), SceneError> {
        match self.state {
            DrawingState::Idle => Ok(()),
            DrawingState::Armed { .. } => Err(self.invalid(op)),
        }
    }

    fn expect_armed(&self, op: Operation) -> Result<Line, SceneError> {
        self.live_segment().ok_or_else(|| self.invalid(op))
    }

    fn invalid(&self, op: Operation) -> SceneError {
        SceneError::InvalidTransition {
            op,
            state: self.state.phase(),
        }
    }
}

fn draw_markers<S: Surface + ?Sized>(surface: &mut S, markers: &[Marker], style: &SceneStyle) {
    for m in markers {
        surface.fill_stroke_circle(
            Circle::new(m.at, style.marker_radius),
            style.marker_fill,
            style.marker_stroke,
        );
    }
}
