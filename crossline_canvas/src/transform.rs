// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Client-to-canvas coordinate mapping.
//!
//! ## Overview
//!
//! Hosts deliver pointer positions in their own pixel space. The canvas works in the
//! drawing buffer's space. The mapping between the two depends on live layout (element
//! position, CSS scaling), so it is injected as a [`CoordinateMap`] rather than measured
//! here.

use kurbo::{Point, Rect, Size};

/// Map a client-space point into canvas space.
pub trait CoordinateMap {
    /// Canvas-space position of `client`.
    fn to_canvas(&self, client: Point) -> Point;
}

/// Client space is canvas space.
#[derive(Copy, Clone, Debug, Default)]
pub struct Identity;

impl CoordinateMap for Identity {
    #[inline]
    fn to_canvas(&self, client: Point) -> Point {
        client
    }
}

/// Map through an element's on-screen rectangle into its drawing buffer.
///
/// `rect` is the element's bounding client rectangle, `canvas` the drawing buffer's
/// width and height. When the element is displayed at a different size than its buffer
/// (CSS scaling), positions are scaled accordingly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClientRect {
    /// Bounding rectangle of the element in client coordinates.
    pub rect: Rect,
    /// Size of the drawing buffer.
    pub canvas: Size,
}

impl ClientRect {
    /// Create a mapping from a bounding rectangle and a buffer size.
    pub fn new(rect: Rect, canvas: Size) -> Self {
        Self { rect, canvas }
    }
}

impl CoordinateMap for ClientRect {
    fn to_canvas(&self, client: Point) -> Point {
        let w = self.rect.width();
        let h = self.rect.height();
        // A collapsed element has no meaningful mapping; pin to its origin.
        if w == 0.0 || h == 0.0 {
            return Point::ORIGIN;
        }
        Point::new(
            (client.x - self.rect.x0) / w * self.canvas.width,
            (client.y - self.rect.y0) / h * self.canvas.height,
        )
    }
}

impl<F: Fn(Point) -> Point> CoordinateMap for F {
    #[inline]
    fn to_canvas(&self, client: Point) -> Point {
        self(client)
    }
}
