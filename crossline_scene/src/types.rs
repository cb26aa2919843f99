// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: segment identifiers, markers, and drawing state.

use core::fmt;

use kurbo::{Line, Point};

/// Identifier of a committed segment.
///
/// Segments are never removed individually, so the identifier is simply the
/// insertion index. It stays valid until the next [`Scene::reset`](crate::Scene::reset).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SegmentId(pub(crate) u32);

impl SegmentId {
    pub(crate) fn new(idx: usize) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "SegmentId uses 32-bit indices by design."
        )]
        Self(idx as u32)
    }

    /// Insertion index of the segment.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// An intersection between the live segment and one committed segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Marker {
    /// Where the two segments meet, in canvas space.
    pub at: Point,
    /// The committed segment that was crossed.
    pub segment: SegmentId,
}

/// Where the pointer-driven drawing is.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum DrawingState {
    /// No segment is being drawn.
    #[default]
    Idle,
    /// A segment is being drawn from `start`; `end` follows the pointer.
    Armed {
        /// Fixed start point chosen when arming.
        start: Point,
        /// Live end point, updated every pointer move.
        end: Point,
    },
}

impl DrawingState {
    /// The in-progress segment, if armed.
    pub fn live_segment(&self) -> Option<Line> {
        match *self {
            Self::Idle => None,
            Self::Armed { start, end } => Some(Line::new(start, end)),
        }
    }

    /// True if a segment is being drawn.
    pub fn is_armed(&self) -> bool {
        matches!(self, Self::Armed { .. })
    }

    /// Coarse phase without coordinates, used in error reports.
    pub fn phase(&self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::Armed { .. } => Phase::Armed,
        }
    }
}

/// Drawing phase without coordinates.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// See [`DrawingState::Idle`].
    Idle,
    /// See [`DrawingState::Armed`].
    Armed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Armed => "armed",
        })
    }
}

/// Scene operations gated by the drawing state.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Operation {
    /// [`Scene::arm`](crate::Scene::arm)
    Arm,
    /// [`Scene::update_live_end`](crate::Scene::update_live_end)
    UpdateLiveEnd,
    /// [`Scene::commit`](crate::Scene::commit)
    Commit,
    /// [`Scene::discard`](crate::Scene::discard)
    Discard,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Arm => "arm",
            Self::UpdateLiveEnd => "update the live end",
            Self::Commit => "commit",
            Self::Discard => "discard",
        })
    }
}
