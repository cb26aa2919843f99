// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crossline Canvas: an interactive drawing surface for line segments.
//!
//! ## Overview
//!
//! The user draws straight segments with the pointer. While a segment is being drawn,
//! every point where it crosses an existing segment is marked live. A collapse control
//! erases the whole drawing with an animation, from each segment's midpoint outward.
//!
//! This crate is the host-facing layer. It knows nothing about windows, the DOM, or
//! the frame clock:
//!
//! - Pointer events come in as [`PointerEvent`]s in client coordinates, mapped into
//!   canvas space by an injected [`CoordinateMap`].
//! - Drawing goes out through the [`Surface`](crossline_scene::Surface) trait.
//! - Animation frames are requested by returning
//!   [`FrameToken`](crossline_collapse::FrameToken)s that the host fires back into
//!   [`Canvas::on_frame`].
//!
//! The underlying layers are usable on their own: [`crossline_geometry`] for segment
//! intersection, [`crossline_scene`] for the drawing state machine, and
//! [`crossline_collapse`] for the erase animation.
//!
//! ## Wiring a host
//!
//! - pointer release/move → [`Canvas::handle_pointer`]; suppress the platform default
//!   on [`Outcome::PreventDefault`].
//! - collapse button → [`Canvas::collapse`]; cancel `cancel`, schedule `schedule`.
//! - frame callback → [`Canvas::on_frame`]; schedule again on
//!   [`FrameOutcome::Continue`](crossline_collapse::FrameOutcome::Continue).
//!
//! # Example
//!
//! ```rust
//! use crossline_canvas::{Canvas, Outcome, PointerButton, PointerEvent};
//! use crossline_collapse::FrameOutcome;
//! use crossline_scene::Recording;
//! use kurbo::Point;
//!
//! let mut canvas: Canvas = Canvas::default();
//! let mut surface = Recording::new();
//! let release = |x, y| PointerEvent::up(PointerButton::Primary, Point::new(x, y));
//!
//! // Horizontal segment.
//! canvas.handle_pointer(release(0.0, 0.0), &mut surface).unwrap();
//! canvas.handle_pointer(PointerEvent::moved(Point::new(10.0, 0.0)), &mut surface).unwrap();
//! canvas.handle_pointer(release(10.0, 0.0), &mut surface).unwrap();
//!
//! // A vertical segment in progress crosses it once.
//! canvas.handle_pointer(release(5.0, -5.0), &mut surface).unwrap();
//! let out = canvas
//!     .handle_pointer(PointerEvent::moved(Point::new(5.0, 5.0)), &mut surface)
//!     .unwrap();
//! assert_eq!(out, Outcome::Handled);
//! assert_eq!(canvas.scene().markers()[0].at, Point::new(5.0, 0.0));
//! canvas.handle_pointer(release(5.0, 5.0), &mut surface).unwrap();
//!
//! // Erase everything.
//! let mut token = canvas.collapse().unwrap().schedule.expect("scene is not empty");
//! let mut now = 0.0;
//! while let FrameOutcome::Continue(next) = canvas.on_frame(token, now, &mut surface) {
//!     token = next;
//!     now += 1000.0 / 60.0;
//! }
//! assert!(canvas.scene().is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod canvas;
mod error;
mod transform;
mod types;

pub use canvas::{Canvas, CanvasConfig};
pub use error::CanvasError;
pub use transform::{ClientRect, CoordinateMap, Identity};
pub use types::{CollapseCommand, Outcome, PointerButton, PointerEvent, PointerKind};
