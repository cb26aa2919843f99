// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Finite segment intersection.
//!
//! ## Method
//!
//! Both segments are written parametrically, `A(λ) = a0 + λ·da` and `B(γ) = b0 + γ·db`,
//! and the 2×2 system `λ·da − γ·db = b0 − a0` is solved with Cramer's rule.
//! The determinant is the cross product `da × db`.
//!
//! ## Limitations
//!
//! - A determinant of exactly zero (parallel or collinear segments) is reported as no
//!   intersection, including collinear segments that overlap.
//! - No epsilon is applied to the parameter range; near-miss results follow `f64` rounding.
//!   Segments that share an endpoint are matched exactly, so the shared point is always
//!   reported as is.

use kurbo::{Line, Point};

/// Parametric positions of an accepted intersection.
///
/// Returns `(λ, γ)` where `λ` is the position along `a` and `γ` the position along `b`,
/// both in the closed interval `[0, 1]`.
/// Returns `None` when the direction vectors are parallel or either parameter falls
/// outside the segment.
pub fn segment_params(a: Line, b: Line) -> Option<(f64, f64)> {
    let da = a.p1 - a.p0;
    let db = b.p1 - b.p0;
    let det = da.cross(db);
    if det == 0.0 {
        return None;
    }
    if let Some(params) = shared_endpoint_params(a, b) {
        return Some(params);
    }
    let r = b.p0 - a.p0;
    let lambda = r.cross(db) / det;
    let gamma = r.cross(da) / det;
    if !(0.0..=1.0).contains(&lambda) || !(0.0..=1.0).contains(&gamma) {
        return None;
    }
    Some((lambda, gamma))
}

/// Exact parameters when the segments share an endpoint.
fn shared_endpoint_params(a: Line, b: Line) -> Option<(f64, f64)> {
    let at = |p: Point| {
        if p == b.p0 {
            Some(0.0)
        } else if p == b.p1 {
            Some(1.0)
        } else {
            None
        }
    };
    at(a.p0)
        .map(|gamma| (0.0, gamma))
        .or_else(|| at(a.p1).map(|gamma| (1.0, gamma)))
}

/// Intersection point of two finite segments given as `kurbo` lines.
///
/// The point is evaluated at `λ` along `a`. Evaluating at `γ` along `b` agrees up to
/// rounding.
pub fn intersect_lines(a: Line, b: Line) -> Option<Point> {
    let (lambda, _) = segment_params(a, b)?;
    // `lerp` at 1 can land an ulp off the end.
    if lambda == 1.0 {
        return Some(a.p1);
    }
    Some(a.p0.lerp(a.p1, lambda))
}

/// Intersection point of segment `a_from → a_to` with segment `b_from → b_to`.
///
/// Touching at an endpoint counts as an intersection.
///
/// ```
/// use crossline_geometry::intersect;
/// use kurbo::Point;
///
/// let hit = intersect(
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(5.0, -5.0),
///     Point::new(5.0, 5.0),
/// );
/// assert_eq!(hit, Some(Point::new(5.0, 0.0)));
/// ```
pub fn intersect(a_from: Point, a_to: Point, b_from: Point, b_to: Point) -> Option<Point> {
    intersect_lines(Line::new(a_from, a_to), Line::new(b_from, b_to))
}
