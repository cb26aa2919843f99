// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment helpers: degeneracy, bounds, and midpoint splitting.

use kurbo::{Line, Point, Rect};

/// True if both endpoints of `line` are equal.
#[inline]
pub fn is_degenerate(line: Line) -> bool {
    line.p0 == line.p1
}

/// Axis-aligned bounds of a segment, inclusive of both endpoints.
#[inline]
pub fn bounding_box(line: Line) -> Rect {
    Rect::from_points(line.p0, line.p1)
}

/// Split a segment at its midpoint into two halves that both start at the midpoint.
///
/// The first half runs toward `line.p0`, the second toward `line.p1`.
/// Together they cover the original segment exactly once.
///
/// ```
/// use crossline_geometry::split_at_midpoint;
/// use kurbo::{Line, Point};
///
/// let [a, b] = split_at_midpoint(Line::new((0.0, 0.0), (10.0, 4.0)));
/// assert_eq!(a.p0, Point::new(5.0, 2.0));
/// assert_eq!(a.p1, Point::new(0.0, 0.0));
/// assert_eq!(b.p0, Point::new(5.0, 2.0));
/// assert_eq!(b.p1, Point::new(10.0, 4.0));
/// ```
pub fn split_at_midpoint(line: Line) -> [Line; 2] {
    let mid = line.p0.midpoint(line.p1);
    [Line::new(mid, line.p0), Line::new(mid, line.p1)]
}

/// Inclusive containment test with a small tolerance for accumulated rounding.
///
/// [`Rect::contains`] is half-open, which rejects points on the right and bottom edges;
/// a segment's own endpoint must count as inside its bounds.
pub fn bounds_contain(bounds: Rect, pt: Point, tolerance: f64) -> bool {
    pt.x >= bounds.x0 - tolerance
        && pt.x <= bounds.x1 + tolerance
        && pt.y >= bounds.y0 - tolerance
        && pt.y <= bounds.y1 + tolerance
}
