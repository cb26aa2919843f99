// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crossline Collapse: an animated, frame-driven erase of a segment scene.
//!
//! ## Overview
//!
//! A collapse splits every committed segment at its midpoint into two halves and erases
//! each half from the midpoint outward, by stroking the background colour over it a
//! little more every frame. When every half has been erased the scene is reset.
//!
//! - [`ErasePath`]: one animation unit, an explicit state machine (pending → advancing →
//!   finished) stepped by the driver rather than rescheduling itself.
//! - [`Collapser`]: the driver. Builds the units, freezes the scene, steps all units once
//!   per frame, and performs the single terminal [`Scene::reset`](crossline_scene::Scene::reset).
//! - [`AnimationController`] and [`FrameToken`]: generation-checked frame handles, so a
//!   cancelled or superseded frame that still fires is ignored.
//! - [`CollapseParams`]: step size, reference frame duration, and eraser stroke.
//!
//! ## Timing
//!
//! Steps are frame-rate independent. The elapsed time since a unit's previous step is
//! divided by the reference frame duration (1/60 s) and scales the step. With the
//! default parameters each half takes 100 reference frames, whatever its length.
//!
//! ## Scheduling
//!
//! Nothing here waits or spawns. The host schedules a platform frame for every
//! [`FrameToken`] it is given and hands it back to [`Collapser::on_frame`] when it fires.
//!
//! # Example
//!
//! ```rust
//! use crossline_collapse::{Collapser, FrameOutcome};
//! use crossline_scene::{Recording, Scene};
//! use kurbo::Point;
//!
//! let mut scene = Scene::new();
//! scene.arm(Point::new(0.0, 0.0)).unwrap();
//! scene.update_live_end(Point::new(100.0, 0.0)).unwrap();
//! scene.commit().unwrap();
//!
//! let mut collapser = Collapser::default();
//! let mut surface = Recording::new();
//! let mut token = collapser.start(&mut scene).unwrap().expect("scene is not empty");
//! assert!(scene.is_collapsing());
//!
//! let mut now = 0.0;
//! loop {
//!     now += 1000.0 / 60.0;
//!     match collapser.on_frame(token, now, &mut scene, &mut surface) {
//!         FrameOutcome::Continue(next) => token = next,
//!         FrameOutcome::Completed => break,
//!         FrameOutcome::Stale => unreachable!(),
//!     }
//! }
//! assert!(scene.is_empty());
//! assert!(!scene.is_collapsing());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod collapser;
mod controller;
mod params;
mod path;

pub use collapser::{CollapseError, Collapser, CompletionTally, FrameOutcome, Restart};
pub use controller::{AnimationController, FrameToken};
pub use params::{CollapseParams, FRAME_DURATION_MS};
pub use path::{ErasePath, UnitState};
