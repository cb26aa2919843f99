// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapse driver: splits the scene into units and steps them frame by frame.

use alloc::vec::Vec;

use crossline_geometry::split_at_midpoint;
use crossline_scene::{Scene, Surface};

use crate::controller::{AnimationController, FrameToken};
use crate::params::CollapseParams;
use crate::path::ErasePath;

/// Errors raised when a collapse cannot start.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CollapseError {
    /// A segment is being drawn; discard or commit it first.
    #[error("cannot collapse while a segment is being drawn")]
    Armed,
    /// A collapse is running; use [`Collapser::restart`] to start over.
    #[error("a collapse is already running")]
    AlreadyCollapsing,
}

/// Result of handing a fired frame to [`Collapser::on_frame`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FrameOutcome {
    /// The token was cancelled or superseded; nothing happened.
    Stale,
    /// Units are still erasing; schedule this token for the next frame.
    Continue(FrameToken),
    /// Every unit finished and the scene was reset.
    Completed,
}

/// Frames to cancel and schedule after [`Collapser::restart`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Restart {
    /// The previous collapse's outstanding frame, which the host should cancel.
    pub cancelled: Option<FrameToken>,
    /// The first frame of the new collapse, if there was anything to collapse.
    pub frame: Option<FrameToken>,
}

/// Counts finished units against the exact number started.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CompletionTally {
    expected: usize,
    finished: usize,
}

impl CompletionTally {
    /// A tally expecting `expected` completions.
    pub const fn new(expected: usize) -> Self {
        Self {
            expected,
            finished: 0,
        }
    }

    /// Record one completion. Returns `true` when this was the last one.
    pub fn record(&mut self) -> bool {
        self.finished += 1;
        self.finished == self.expected
    }

    /// Completions so far.
    pub fn finished(&self) -> usize {
        self.finished
    }

    /// Completions required.
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// True once every expected unit has finished.
    pub fn is_complete(&self) -> bool {
        self.finished >= self.expected
    }
}

#[derive(Clone, Debug)]
struct Run {
    units: Vec<ErasePath>,
    tally: CompletionTally,
}

/// Drives a collapse: two erase units per committed segment, stepped once per frame.
///
/// ## Usage
///
/// 1) [`Collapser::start`] freezes the scene and returns the first [`FrameToken`].
/// 2) The host schedules a frame for the token and, when it fires, calls
///    [`Collapser::on_frame`] with the current time.
/// 3) On [`FrameOutcome::Continue`], schedule the returned token. On
///    [`FrameOutcome::Completed`], the scene has been reset and nothing more is scheduled.
#[derive(Clone, Debug, Default)]
pub struct Collapser {
    params: CollapseParams,
    controller: AnimationController,
    run: Option<Run>,
}

impl Collapser {
    /// Create a collapser with the given parameters.
    pub fn new(params: CollapseParams) -> Self {
        Self {
            params,
            controller: AnimationController::new(),
            run: None,
        }
    }

    /// Animation parameters.
    pub fn params(&self) -> &CollapseParams {
        &self.params
    }

    /// True while a collapse is in progress.
    pub fn is_collapsing(&self) -> bool {
        self.run.is_some()
    }

    /// The erase units of the running collapse, two per segment in scene order.
    pub fn units(&self) -> &[ErasePath] {
        self.run.as_ref().map_or(&[][..], |r| r.units.as_slice())
    }

    /// The completion tally of the running collapse.
    pub fn tally(&self) -> Option<CompletionTally> {
        self.run.as_ref().map(|r| r.tally)
    }

    /// The frame waiting to fire, if any.
    pub fn outstanding(&self) -> Option<FrameToken> {
        self.controller.outstanding()
    }

    /// Begin collapsing `scene`.
    ///
    /// Returns `Ok(None)` without touching anything if the scene is empty.
    pub fn start(&mut self, scene: &mut Scene) -> Result<Option<FrameToken>, CollapseError> {
        if self.run.is_some() || scene.is_collapsing() {
            return Err(CollapseError::AlreadyCollapsing);
        }
        self.begin(scene)
    }

    /// Cancel any running collapse and start a fresh one from the scene as it is now.
    ///
    /// Segments are only removed by the final reset, so a restart erases the whole
    /// scene again from the midpoints.
    pub fn restart(&mut self, scene: &mut Scene) -> Result<Restart, CollapseError> {
        if scene.state().is_armed() {
            return Err(CollapseError::Armed);
        }
        let cancelled = self.controller.cancel();
        if self.run.take().is_some() {
            tracing::debug!(?cancelled, "restarting collapse");
        }
        let frame = self.begin(scene)?;
        Ok(Restart { cancelled, frame })
    }

    /// Step every unfinished unit for a frame fired at `now` (milliseconds).
    ///
    /// Each step strokes the erased stretch with the eraser style. When the last unit
    /// finishes, `scene` is reset exactly once and no further frame is scheduled.
    pub fn on_frame<S: Surface + ?Sized>(
        &mut self,
        token: FrameToken,
        now: f64,
        scene: &mut Scene,
        surface: &mut S,
    ) -> FrameOutcome {
        if !self.controller.accept(token) {
            tracing::trace!(?token, "stale animation frame");
            return FrameOutcome::Stale;
        }
        let Some(run) = self.run.as_mut() else {
            tracing::trace!(?token, "frame fired with no collapse running");
            return FrameOutcome::Stale;
        };
        for unit in run.units.iter_mut().filter(|u| !u.is_finished()) {
            let Some(stroke) = unit.step(now, &self.params) else {
                continue;
            };
            surface.stroke_line(stroke, &self.params.eraser);
            if unit.is_finished() {
                run.tally.record();
            }
        }
        if run.tally.is_complete() {
            let units = run.tally.finished();
            self.run = None;
            self.controller.cancel();
            scene.reset();
            tracing::debug!(units, "collapse complete");
            FrameOutcome::Completed
        } else {
            FrameOutcome::Continue(self.controller.schedule())
        }
    }

    fn begin(&mut self, scene: &mut Scene) -> Result<Option<FrameToken>, CollapseError> {
        if scene.state().is_armed() {
            return Err(CollapseError::Armed);
        }
        if scene.is_empty() {
            tracing::trace!("nothing to collapse");
            return Ok(None);
        }
        let units: Vec<ErasePath> = scene
            .segments()
            .iter()
            .flat_map(|seg| split_at_midpoint(*seg))
            .map(ErasePath::line)
            .collect();
        tracing::debug!(segments = scene.segments().len(), units = units.len(), "collapse started");
        self.run = Some(Run {
            tally: CompletionTally::new(units.len()),
            units,
        });
        scene.freeze();
        Ok(Some(self.controller.schedule()))
    }
}
