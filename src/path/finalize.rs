// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Bounding-geometry recompute and open/close toggling.
//!
//! After commands change, a shape's `local_origin` and `size` no longer
//! describe its bounding box. `finalize` recomputes both from the command
//! list and moves the object so nothing shifts on screen.
//!
//! The reference point held fixed is the center of the *new* bounding box:
//! its world position is read through the old mapping, then the transform is
//! re-centered on it. Because the rotation/skew/scale part is untouched,
//! this keeps every point of the path at its previous world position, for
//! any pivot.

use crate::model::{PathCommand, PathShape};
use crate::theme;
use kurbo::Rect;

/// Recompute origin and size from the commands without visual displacement
///
/// Returns the new local bounding box, or `None` for a path with no points
/// (which is left untouched).
pub fn finalize(shape: &mut PathShape) -> Option<Rect> {
    let bounds = shape.bounds()?;

    let old = shape.coordinate_transform();
    let center = bounds.center();
    let center_world = old.to_world(center);

    shape.local_origin = center.to_vec2();
    shape.size = bounds.size();
    shape.transform.set_center(center_world, shape.size);

    tracing::debug!(
        "Finalized shape {}: origin=({:.3}, {:.3}) size={:.3}x{:.3}",
        shape.id,
        center.x,
        center.y,
        bounds.width(),
        bounds.height()
    );
    Some(bounds)
}

/// Close an open path or reopen a closed one
///
/// Closing appends `Close`; reopening removes the trailing `Close`. A path
/// closed without a fill gets the default fill so the closure is visible.
/// Returns whether the path is closed afterwards.
pub fn toggle_closed(shape: &mut PathShape) -> bool {
    if shape.is_closed() {
        shape.commands.pop();
        tracing::debug!("Opened shape {}", shape.id);
        return false;
    }

    if shape.is_empty() {
        return false;
    }

    shape.commands.push(PathCommand::Close);
    if shape.fill.is_none() {
        shape.fill = Some(theme::shape::CLOSED_FILL);
    }
    tracing::debug!("Closed shape {}", shape.id);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ObjectTransform;
    use kurbo::{Point, Vec2};
    use std::f64::consts::PI;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{:?} != {:?}",
            a,
            b
        );
    }

    fn world_anchors(shape: &PathShape) -> Vec<Point> {
        shape
            .commands
            .iter()
            .filter_map(|c| c.anchor())
            .map(|p| shape.to_world(p))
            .collect()
    }

    #[test]
    fn finalize_centers_origin_on_bounds() {
        let mut shape = PathShape::polyline(&[
            Point::new(10.0, 10.0),
            Point::new(110.0, 10.0),
            Point::new(110.0, 110.0),
        ]);
        let bounds = finalize(&mut shape).unwrap();
        assert_eq!(bounds, Rect::new(10.0, 10.0, 110.0, 110.0));
        assert_eq!(shape.local_origin, Vec2::new(60.0, 60.0));
        assert_eq!(shape.size.width, 100.0);
        // Raw coordinates were world coordinates; they still are
        assert_close(shape.to_world(Point::new(10.0, 10.0)), Point::new(10.0, 10.0));
    }

    #[test]
    fn finalize_after_edit_keeps_visual_placement() {
        let mut shape = PathShape::polyline(&[
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(50.0, 30.0),
        ]);
        finalize(&mut shape);
        shape.transform = ObjectTransform {
            position: Point::new(400.0, 250.0),
            rotation: PI / 5.0,
            scale: Vec2::new(1.5, 0.5),
            skew: Vec2::new(0.2, 0.0),
            pivot: Point::new(0.0, 0.0),
        };

        // Drag a vertex far outside the old box, as a handle drag would
        shape.commands[2] = PathCommand::LineTo(Point::new(120.0, -40.0));
        let before = world_anchors(&shape);

        finalize(&mut shape);
        let after = world_anchors(&shape);
        for (a, b) in before.iter().zip(after.iter()) {
            assert_close(*a, *b);
        }
        assert_eq!(shape.local_origin, Vec2::new(60.0, -20.0));
    }

    #[test]
    fn finalize_is_idempotent() {
        let mut shape = PathShape::polyline(&[Point::new(3.0, 4.0), Point::new(-7.0, 12.0)]);
        finalize(&mut shape);
        let transform = shape.transform;
        let origin = shape.local_origin;
        finalize(&mut shape);
        assert_close(shape.transform.position, transform.position);
        assert_eq!(shape.local_origin, origin);
    }

    #[test]
    fn finalize_empty_path_is_noop() {
        let mut shape = PathShape::polyline(&[]);
        assert!(finalize(&mut shape).is_none());
        assert_eq!(shape.local_origin, Vec2::ZERO);
    }

    #[test]
    fn toggle_closed_twice_restores_commands() {
        let mut shape = PathShape::polyline(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ]);
        let original = shape.commands.clone();

        assert!(toggle_closed(&mut shape));
        assert!(shape.is_closed());
        assert!(!toggle_closed(&mut shape));
        assert_eq!(shape.commands, original);
    }

    #[test]
    fn closing_unfilled_shape_applies_default_fill() {
        let mut shape = PathShape::polyline(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
        assert!(shape.fill.is_none());
        toggle_closed(&mut shape);
        assert!(shape.fill.is_some());
        // Reopening leaves the fill alone
        toggle_closed(&mut shape);
        assert!(shape.fill.is_some());
    }
}
