// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crossline Scene: committed segments, live intersection markers, and a render pass.
//!
//! The scene is the stateful middle layer of Crossline.
//!
//! - Holds committed segments in draw order.
//! - Tracks the segment being drawn (armed start point plus a live end point).
//! - Recomputes intersection markers between the live segment and every committed
//!   segment each time the live end moves.
//! - Renders itself through the [`Surface`] trait, an abstract immediate-mode target.
//!
//! It does not own a window, a canvas element, or an event loop; a host feeds it
//! canvas-space points and supplies the surface.
//!
//! ## Drawing state
//!
//! ```text
//!            arm(p)                 commit() / discard()
//!   Idle ───────────────▶ Armed ─────────────────────────▶ Idle
//!                          │  ▲
//!                          └──┘ update_live_end(q)
//! ```
//!
//! Calling an operation from the wrong state returns [`SceneError::InvalidTransition`].
//! While a collapse animation owns the scene ([`Scene::freeze`] until [`Scene::reset`]),
//! all of these operations are ignored instead.
//!
//! ## API overview
//!
//! - [`Scene`]: the model and its render pass.
//! - [`Marker`]: an intersection point tagged with the committed [`SegmentId`] it crosses.
//! - [`DrawingState`]: idle or armed.
//! - [`Surface`], [`StrokeStyle`], [`Color`]: the output boundary.
//! - [`Recording`]: a surface that records calls, for tests and demos.
//! - [`SceneStyle`]: visual configuration.
//!
//! # Example
//!
//! ```rust
//! use crossline_scene::{Recording, Scene, SceneStyle};
//! use kurbo::{Point, Rect};
//!
//! let mut scene = Scene::new();
//!
//! // Draw a horizontal segment.
//! scene.arm(Point::new(0.0, 0.0)).unwrap();
//! scene.update_live_end(Point::new(10.0, 0.0)).unwrap();
//! scene.commit().unwrap();
//!
//! // Start a vertical one and drag it across.
//! scene.arm(Point::new(5.0, -5.0)).unwrap();
//! scene.update_live_end(Point::new(5.0, 5.0)).unwrap();
//! assert_eq!(scene.markers().len(), 1);
//! assert_eq!(scene.markers()[0].at, Point::new(5.0, 0.0));
//!
//! // Paint it.
//! let mut surface = Recording::new();
//! scene.render(&mut surface, Rect::new(0.0, 0.0, 800.0, 600.0), &SceneStyle::default());
//! assert_eq!(surface.circles().count(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod scene;
mod style;
mod surface;
mod types;

pub use error::SceneError;
pub use scene::Scene;
pub use style::SceneStyle;
pub use surface::{Color, DrawCommand, Recording, StrokeStyle, Surface};
pub use types::{DrawingState, Marker, Operation, Phase, SegmentId};
