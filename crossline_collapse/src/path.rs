// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Erase paths: the per-unit state machine of the collapse animation.
//!
//! ## Stepping
//!
//! Each call to [`ErasePath::step`] moves the erase head along the current leg by
//! `leg vector × step fraction × multiplier`, where the multiplier is the elapsed time
//! since the previous step divided by the reference frame duration. The very first
//! step uses a multiplier of one.
//!
//! When the head reaches or passes the end of a leg it is clamped to the leg's end
//! and the overshoot is measured. If another leg follows, the overshoot is carried:
//! the next leg's first step additionally advances by that distance, so a polyline is
//! erased at a continuous speed across its corners.

use alloc::vec::Vec;

use kurbo::{Line, Point};

use crate::params::CollapseParams;

/// Lifecycle of an erase path.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum UnitState {
    /// Not stepped yet.
    Pending,
    /// Stepped at least once, not at the end.
    Advancing,
    /// Reached the last vertex.
    Finished {
        /// Distance the final step would have travelled past the last vertex.
        overshoot: f64,
    },
}

/// A polyline erased progressively from its first vertex to its last.
#[derive(Clone, Debug)]
pub struct ErasePath {
    vertices: Vec<Point>,
    leg: usize,
    head: Point,
    carry: f64,
    last_step: Option<f64>,
    state: UnitState,
}

impl ErasePath {
    /// Erase a single segment from `line.p0` to `line.p1`.
    pub fn line(line: Line) -> Self {
        Self::polyline([line.p0, line.p1])
    }

    /// Erase a polyline through `vertices` in order.
    ///
    /// With fewer than two vertices there is nothing to erase and the path starts finished.
    pub fn polyline(vertices: impl IntoIterator<Item = Point>) -> Self {
        let vertices: Vec<Point> = vertices.into_iter().collect();
        let head = vertices.first().copied().unwrap_or(Point::ORIGIN);
        let state = if vertices.len() < 2 {
            UnitState::Finished { overshoot: 0.0 }
        } else {
            UnitState::Pending
        };
        Self {
            vertices,
            leg: 0,
            head,
            carry: 0.0,
            last_step: None,
            state,
        }
    }

    /// Continue a previous path: the first step additionally advances by `starting_length`.
    #[must_use]
    pub fn with_starting_length(mut self, starting_length: f64) -> Self {
        self.carry = starting_length.max(0.0);
        self
    }

    /// Current state.
    pub fn state(&self) -> UnitState {
        self.state
    }

    /// True once the head has reached the last vertex.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, UnitState::Finished { .. })
    }

    /// Where erasing has reached.
    pub fn head(&self) -> Point {
        self.head
    }

    /// Vertices of the path.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Distance still to erase.
    pub fn remaining(&self) -> f64 {
        if self.is_finished() {
            return 0.0;
        }
        let rest: f64 = self.vertices[self.leg + 1..]
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum();
        self.head.distance(self.vertices[self.leg + 1]) + rest
    }

    /// Advance the head for a step taken at time `now` (milliseconds).
    ///
    /// Returns the stretch erased by this step, from the previous head to the new head,
    /// or `None` if the path had already finished.
    pub fn step(&mut self, now: f64, params: &CollapseParams) -> Option<Line> {
        if self.is_finished() {
            return None;
        }
        let multiplier = match self.last_step {
            None => 1.0,
            Some(last) => params.multiplier(now - last),
        };
        if now.is_finite() {
            self.last_step = Some(now);
        }

        let from = self.vertices[self.leg];
        let to = self.vertices[self.leg + 1];
        let vector = to - from;
        let length = from.distance(to);

        let prev = self.head;
        if !multiplier.is_finite() {
            // Unbounded elapsed time: the rest of the leg is erased at once.
            self.carry = 0.0;
            self.head = to;
            self.end_leg(0.0);
            return Some(Line::new(prev, to));
        }

        let mut delta = vector * (params.step_fraction * multiplier);
        if self.carry > 0.0 && length > 0.0 {
            delta += vector * (self.carry / length);
        }
        self.carry = 0.0;

        let mut next = prev + delta;
        let travelled = from.distance(next);
        if travelled >= length {
            next = to;
            self.end_leg(travelled - length);
        } else {
            self.state = UnitState::Advancing;
        }
        self.head = next;
        Some(Line::new(prev, next))
    }

    fn end_leg(&mut self, overshoot: f64) {
        if self.leg + 2 < self.vertices.len() {
            self.leg += 1;
            self.carry = overshoot;
            self.state = UnitState::Advancing;
        } else {
            self.state = UnitState::Finished { overshoot };
        }
    }
}
