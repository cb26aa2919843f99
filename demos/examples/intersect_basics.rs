// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment intersection basics.
//!
//! Prints the crossing point (or its absence) for a handful of segment pairs,
//! including the parallel and shared-endpoint cases.
//!
//! Run:
//! - `cargo run -p crossline_demos --example intersect_basics`

use crossline_geometry::{intersect, segment_params};
use kurbo::{Line, Point};

fn main() {
    let cases = [
        ("crossing", ((0.0, 0.0), (10.0, 0.0)), ((5.0, -5.0), (5.0, 5.0))),
        ("too short", ((0.0, 0.0), (10.0, 0.0)), ((5.0, 1.0), (5.0, 5.0))),
        ("parallel", ((0.0, 0.0), (10.0, 0.0)), ((0.0, 1.0), (10.0, 1.0))),
        ("shared end", ((0.0, 0.0), (10.0, 0.0)), ((10.0, 0.0), (10.0, 10.0))),
        ("diagonal", ((0.0, 0.0), (10.0, 10.0)), ((0.0, 10.0), (10.0, 0.0))),
    ];

    println!("== intersect ==");
    for (name, (a0, a1), (b0, b1)) in cases {
        let (a0, a1, b0, b1) = (Point::from(a0), Point::from(a1), Point::from(b0), Point::from(b1));
        match intersect(a0, a1, b0, b1) {
            Some(p) => {
                let (lambda, gamma) = segment_params(Line::new(a0, a1), Line::new(b0, b1))
                    .unwrap_or_default();
                println!(
                    "  {name:<10} -> ({:.2}, {:.2})  lambda={lambda:.2} gamma={gamma:.2}",
                    p.x, p.y
                );
            }
            None => println!("  {name:<10} -> none"),
        }
    }
}
