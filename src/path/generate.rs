// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Procedural polygon generation.
//!
//! Points are produced around the origin; callers place the result by
//! offsetting the points or through the shape's transform.

use crate::model::{PathCommand, PathShape};
use kurbo::Point;
use std::f64::consts::{FRAC_PI_2, PI};

/// Star outline with `n` points
///
/// Yields `2n` vertices starting at the top (-90°) and stepping `π/n`,
/// alternating outer (even indices) and inner (odd indices) radius.
pub fn star_polygon(n: usize, outer: f64, inner: f64) -> Vec<Point> {
    if n == 0 {
        return Vec::new();
    }
    let step = PI / n as f64;
    (0..2 * n)
        .map(|i| {
            let angle = -FRAC_PI_2 + step * i as f64;
            let radius = if i % 2 == 0 { outer } else { inner };
            Point::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Regular polygon with `sides` vertices, first vertex at the top
pub fn regular_polygon(sides: usize, radius: f64) -> Vec<Point> {
    if sides == 0 {
        return Vec::new();
    }
    let step = 2.0 * PI / sides as f64;
    (0..sides)
        .map(|i| {
            let angle = -FRAC_PI_2 + step * i as f64;
            Point::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Closed shape through `points`: `MoveTo`, one `LineTo` per remaining point,
/// then `Close`
pub fn polygon_shape(points: &[Point]) -> PathShape {
    let mut shape = PathShape::polyline(points);
    if !points.is_empty() {
        shape.commands.push(PathCommand::Close);
    }
    shape
}
