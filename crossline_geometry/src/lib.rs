// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crossline Geometry: finite segment intersection over Kurbo types.
//!
//! This crate is the stateless geometry layer of Crossline.
//!
//! - [`intersect`] / [`intersect_lines`] find where two finite segments meet.
//! - [`segment_params`] exposes the parametric positions of that meeting point.
//! - [`split_at_midpoint`] halves a segment into two midpoint-anchored pieces, which is how
//!   the collapse animation decomposes the scene.
//!
//! Everything here is pure and `O(1)`; callers that need many intersections loop over
//! their own segment lists.
//!
//! ## Conventions
//!
//! - Segments are [`kurbo::Line`] values; `p0` is the start, `p1` the end.
//! - Touching at an endpoint counts as an intersection (the parameter range is closed).
//! - Parallel and collinear inputs report no intersection, even when they overlap.
//!
//! # Example
//!
//! ```rust
//! use crossline_geometry::intersect_lines;
//! use kurbo::{Line, Point};
//!
//! let drawn = Line::new((0.0, 0.0), (10.0, 0.0));
//! let live = Line::new((5.0, -5.0), (5.0, 5.0));
//! assert_eq!(intersect_lines(live, drawn), Some(Point::new(5.0, 0.0)));
//!
//! let short = Line::new((5.0, 1.0), (5.0, 5.0));
//! assert_eq!(intersect_lines(short, drawn), None);
//! ```
//!
//! ### Float semantics
//!
//! Inputs are assumed finite. The zero-determinant test is exact, so nearly parallel
//! segments may still produce a (distant) intersection if it lies inside both.
//!
//! This crate is `no_std`.

#![no_std]

pub mod intersect;
pub mod segment;

pub use intersect::{intersect, intersect_lines, segment_params};
pub use segment::{bounding_box, bounds_contain, is_degenerate, split_at_midpoint};

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Line, Point};

    #[test]
    fn halves_of_a_crossed_segment_split_the_marker_between_them() {
        let drawn = Line::new((0.0, 0.0), (10.0, 0.0));
        let live = Line::new((2.0, -3.0), (2.0, 3.0));
        let [toward_start, toward_end] = split_at_midpoint(drawn);
        assert_eq!(intersect_lines(live, toward_start), Some(Point::new(2.0, 0.0)));
        assert_eq!(intersect_lines(live, toward_end), None);
    }

    #[test]
    fn intersection_lies_within_both_bounds() {
        let a = Line::new((1.0, 1.0), (9.0, 4.0));
        let b = Line::new((3.0, 6.0), (6.0, -1.0));
        let hit = intersect_lines(a, b).unwrap();
        assert!(bounds_contain(bounding_box(a), hit, 1e-9));
        assert!(bounds_contain(bounding_box(b), hit, 1e-9));
    }
}
