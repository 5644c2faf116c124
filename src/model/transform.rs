// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Object transforms and the local ⇄ world coordinate mapping.
//!
//! A shape stores its commands in raw path-local units. Before the object
//! transform applies, the shape's `local_origin` (the center of its bounding
//! box) is subtracted, so the transform always pivots around the box. The
//! composed matrix is
//!
//! ```text
//! translate(center) · rotate · skew · scale
//! ```
//!
//! where `center` is the world position of the bounding-box center, derived
//! from the object's `position` and its `pivot` (a normalized point inside
//! the box, `(0.5, 0.5)` being the center itself).

use super::shape::PathShape;
use crate::settings;
use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

// ===== Object Transform =====

/// Placement of a shape in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectTransform {
    /// World position of the pivot point
    pub position: Point,
    /// Rotation in radians
    pub rotation: f64,
    /// Non-uniform scale factors
    pub scale: Vec2,
    /// Skew angles (x, y) in radians
    pub skew: Vec2,
    /// Pivot within the bounding box, normalized to 0..1
    pub pivot: Point,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
            skew: Vec2::ZERO,
            pivot: Point::new(0.5, 0.5),
        }
    }
}

impl ObjectTransform {
    /// Rotation, skew and scale without any translation
    pub fn linear(&self) -> Affine {
        Affine::rotate(self.rotation)
            * Affine::skew(self.skew.x.tan(), self.skew.y.tan())
            * Affine::scale_non_uniform(self.scale.x, self.scale.y)
    }

    /// Offset from the pivot to the box center, in world units
    fn pivot_to_center(&self, size: Size) -> Vec2 {
        let local = Point::new(
            (0.5 - self.pivot.x) * size.width,
            (0.5 - self.pivot.y) * size.height,
        );
        (self.linear() * local).to_vec2()
    }

    /// World position of the bounding-box center for a box of `size`
    pub fn center(&self, size: Size) -> Point {
        self.position + self.pivot_to_center(size)
    }

    /// Move the object so the bounding-box center lands on `center`
    pub fn set_center(&mut self, center: Point, size: Size) {
        self.position = center - self.pivot_to_center(size);
    }

    /// Full composed matrix for a box of `size`
    pub fn matrix(&self, size: Size) -> Affine {
        Affine::translate(self.center(size).to_vec2()) * self.linear()
    }
}

// ===== Coordinate Transform =====

/// Snapshot of a shape's local ⇄ world mapping
///
/// Built fresh from the shape whenever a conversion is needed, so it always
/// reflects the transform at the moment of the event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    matrix: Affine,
    local_origin: Vec2,
}

impl CoordinateTransform {
    pub fn new(matrix: Affine, local_origin: Vec2) -> Self {
        Self {
            matrix,
            local_origin,
        }
    }

    /// Snapshot the mapping of `shape` as it is right now
    pub fn for_shape(shape: &PathShape) -> Self {
        Self::new(shape.transform.matrix(shape.size), shape.local_origin)
    }

    /// The composed object matrix
    pub fn matrix(&self) -> Affine {
        self.matrix
    }

    /// Whether the matrix can be inverted without blowing up
    pub fn is_invertible(&self) -> bool {
        let det = self.matrix.determinant();
        det.is_finite()
            && det.abs() > settings::transform::MIN_DETERMINANT
            && self.matrix.as_coeffs().iter().all(|c| c.is_finite())
    }

    /// Map a raw path-local point into world space
    pub fn to_world(&self, local: Point) -> Point {
        self.matrix * (local - self.local_origin)
    }

    /// Map a world point back into raw path-local space
    ///
    /// A degenerate transform returns the input unchanged.
    pub fn to_local(&self, world: Point) -> Point {
        if !self.is_invertible() {
            tracing::debug!("Non-invertible transform {:?}, passing point through", self.matrix);
            return world;
        }
        self.matrix.inverse() * world + self.local_origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{:?} != {:?}",
            a,
            b
        );
    }

    fn busy_transform() -> ObjectTransform {
        ObjectTransform {
            position: Point::new(340.0, -12.5),
            rotation: PI / 7.0,
            scale: Vec2::new(2.5, -0.75),
            skew: Vec2::new(0.3, -0.1),
            pivot: Point::new(0.0, 1.0),
        }
    }

    #[test]
    fn identity_maps_points_to_themselves() {
        let t = ObjectTransform::default();
        let ct = CoordinateTransform::new(t.matrix(Size::ZERO), Vec2::ZERO);
        let p = Point::new(12.0, -4.0);
        assert_close(ct.to_world(p), p);
        assert_close(ct.to_local(p), p);
    }

    #[test]
    fn local_origin_is_subtracted_before_transform() {
        let t = ObjectTransform {
            position: Point::new(100.0, 100.0),
            ..Default::default()
        };
        let ct = CoordinateTransform::new(t.matrix(Size::new(20.0, 20.0)), Vec2::new(10.0, 10.0));
        assert_close(ct.to_world(Point::new(10.0, 10.0)), Point::new(100.0, 100.0));
        assert_close(ct.to_world(Point::new(0.0, 0.0)), Point::new(90.0, 90.0));
    }

    #[test]
    fn round_trip_under_busy_transform() {
        let t = busy_transform();
        let size = Size::new(80.0, 35.0);
        let ct = CoordinateTransform::new(t.matrix(size), Vec2::new(40.0, 17.5));

        for &(x, y) in &[(0.0, 0.0), (80.0, 35.0), (-1e3, 2.5e3), (0.125, -9.75)] {
            let p = Point::new(x, y);
            let mut q = p;
            for _ in 0..10 {
                q = ct.to_local(ct.to_world(q));
            }
            assert_close(q, p);
        }
    }

    #[test]
    fn pivot_offsets_position() {
        // Top-left pivot: position is the box corner, center sits half a box away
        let t = ObjectTransform {
            position: Point::new(10.0, 10.0),
            pivot: Point::new(0.0, 0.0),
            ..Default::default()
        };
        assert_close(t.center(Size::new(40.0, 20.0)), Point::new(30.0, 20.0));
    }

    #[test]
    fn set_center_inverts_center() {
        let mut t = busy_transform();
        let size = Size::new(13.0, 7.0);
        t.set_center(Point::new(-4.0, 9.0), size);
        assert_close(t.center(size), Point::new(-4.0, 9.0));
    }

    #[test]
    fn degenerate_transform_passes_points_through() {
        let t = ObjectTransform {
            scale: Vec2::new(0.0, 1.0),
            ..Default::default()
        };
        let ct = CoordinateTransform::new(t.matrix(Size::ZERO), Vec2::new(5.0, 5.0));
        assert!(!ct.is_invertible());
        let w = Point::new(3.0, 4.0);
        assert_eq!(ct.to_local(w), w);
    }
}
