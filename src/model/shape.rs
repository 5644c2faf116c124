// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! The editable path shape: commands, local origin and placement.
//!
//! Commands are stored in raw path-local units. `local_origin` is the vector
//! subtracted from those units before the object transform applies; after
//! finalization it is the center of the command list's bounding box, and
//! `size` is that box's size. Editing mutates `commands` in place and leaves
//! `local_origin`/`size` alone until the shape is finalized again.

use super::command::PathCommand;
use super::entity_id::EntityId;
use super::error::ModelError;
use super::transform::{CoordinateTransform, ObjectTransform};
use crate::theme;
use kurbo::{BezPath, ParamCurveExtrema, Point, Rect, Size, Vec2};
use peniko::Color;

/// A path object placed on the canvas
#[derive(Debug, Clone)]
pub struct PathShape {
    /// Unique identifier for this shape
    pub id: EntityId,
    /// Draw-ordered commands, path-local coordinates
    pub commands: Vec<PathCommand>,
    /// Subtracted from raw coordinates before the object transform
    pub local_origin: Vec2,
    /// Bounding-box size in local units (as of the last finalize)
    pub size: Size,
    /// World placement
    pub transform: ObjectTransform,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl PathShape {
    /// Create a shape whose raw coordinates are world coordinates
    ///
    /// The local origin is zero and the transform is the identity until the
    /// shape is finalized.
    pub fn new(commands: Vec<PathCommand>) -> Result<Self, ModelError> {
        if let Some(first) = commands.first()
            && !matches!(first, PathCommand::MoveTo(_))
        {
            return Err(ModelError::MissingMoveTo(first.opcode()));
        }

        Ok(Self {
            id: EntityId::next(),
            commands,
            local_origin: Vec2::ZERO,
            size: Size::ZERO,
            transform: ObjectTransform::default(),
            fill: None,
            stroke: Some(theme::shape::STROKE),
            stroke_width: theme::shape::STROKE_WIDTH,
        })
    }

    /// Open polyline through `points` (`MoveTo` then one `LineTo` each)
    pub fn polyline(points: &[Point]) -> Self {
        let commands = points
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                if i == 0 {
                    PathCommand::MoveTo(p)
                } else {
                    PathCommand::LineTo(p)
                }
            })
            .collect();

        Self {
            id: EntityId::next(),
            commands,
            local_origin: Vec2::ZERO,
            size: Size::ZERO,
            transform: ObjectTransform::default(),
            fill: None,
            stroke: Some(theme::shape::STROKE),
            stroke_width: theme::shape::STROKE_WIDTH,
        }
    }

    /// Number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Whether the path ends with `Close`
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// The pen position a command starts drawing from
    ///
    /// This is the previous command's anchor, except after a `Close`, where
    /// the pen returns to the start of its subpath.
    pub fn current_point_before(&self, index: usize) -> Option<Point> {
        let prev = index.checked_sub(1)?;
        match self.commands.get(prev)? {
            PathCommand::Close => self.commands[..prev].iter().rev().find_map(|cmd| match cmd {
                PathCommand::MoveTo(p) => Some(*p),
                _ => None,
            }),
            cmd => cmd.anchor(),
        }
    }

    /// Snapshot of the current local ⇄ world mapping
    pub fn coordinate_transform(&self) -> CoordinateTransform {
        CoordinateTransform::for_shape(self)
    }

    /// World position of a raw local point
    pub fn to_world(&self, local: Point) -> Point {
        self.coordinate_transform().to_world(local)
    }

    /// The path in raw local coordinates
    pub fn raw_bezpath(&self) -> BezPath {
        self.commands
            .iter()
            .map(|cmd| cmd.to_path_el(Vec2::ZERO))
            .collect()
    }

    /// The path relative to the local origin (what the transform consumes)
    pub fn to_bezpath(&self) -> BezPath {
        self.commands
            .iter()
            .map(|cmd| cmd.to_path_el(self.local_origin))
            .collect()
    }

    /// The path as drawn in world space
    pub fn world_bezpath(&self) -> BezPath {
        self.transform.matrix(self.size) * self.to_bezpath()
    }

    /// Tight bounding box of the raw command list, curve extrema included
    ///
    /// `None` for a path with no points at all.
    pub fn bounds(&self) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        let mut grow = |r: Rect| {
            bounds = Some(match bounds {
                Some(b) => b.union(r),
                None => r,
            });
        };

        // Lone MoveTo points contribute even without a following segment
        for cmd in &self.commands {
            if let PathCommand::MoveTo(p) = cmd {
                grow(Rect::from_points(*p, *p));
            }
        }
        for seg in self.raw_bezpath().segments() {
            grow(seg.bounding_box());
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> PathShape {
        PathShape::polyline(&[
            Point::new(10.0, 10.0),
            Point::new(110.0, 10.0),
            Point::new(110.0, 110.0),
        ])
    }

    #[test]
    fn new_requires_leading_move_to() {
        let err = PathShape::new(vec![PathCommand::LineTo(Point::ZERO)]).unwrap_err();
        assert!(matches!(err, ModelError::MissingMoveTo('L')));
        assert!(PathShape::new(Vec::new()).is_ok());
    }

    #[test]
    fn polyline_builds_move_then_lines() {
        let shape = triangle();
        assert_eq!(shape.len(), 3);
        assert!(matches!(shape.commands[0], PathCommand::MoveTo(_)));
        assert!(matches!(shape.commands[2], PathCommand::LineTo(_)));
        assert!(!shape.is_closed());
    }

    #[test]
    fn bounds_cover_curve_extrema() {
        let shape = PathShape::new(vec![
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::CurveTo(
                Point::new(0.0, 100.0),
                Point::new(100.0, 100.0),
                Point::new(100.0, 0.0),
            ),
        ])
        .unwrap();
        let b = shape.bounds().unwrap();
        assert_eq!(b.x0, 0.0);
        assert_eq!(b.x1, 100.0);
        // Curve peaks at 75, below its control points
        assert!((b.y1 - 75.0).abs() < 1e-9);
    }

    #[test]
    fn single_point_has_zero_size_bounds() {
        let shape = PathShape::polyline(&[Point::new(5.0, 6.0)]);
        let b = shape.bounds().unwrap();
        assert_eq!(b, Rect::new(5.0, 6.0, 5.0, 6.0));
        assert!(PathShape::polyline(&[]).bounds().is_none());
    }

    #[test]
    fn current_point_after_close_is_subpath_start() {
        let mut shape = triangle();
        shape.commands.push(PathCommand::Close);
        shape.commands.push(PathCommand::LineTo(Point::new(0.0, 0.0)));
        assert_eq!(shape.current_point_before(4), Some(Point::new(10.0, 10.0)));
        assert_eq!(shape.current_point_before(2), Some(Point::new(110.0, 10.0)));
        assert_eq!(shape.current_point_before(0), None);
    }

    #[test]
    fn unfinalized_shape_draws_at_raw_coordinates() {
        let shape = triangle();
        let p = Point::new(110.0, 110.0);
        assert_eq!(shape.to_world(p), p);
    }
}
