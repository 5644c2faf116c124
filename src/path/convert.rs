// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Line ⇄ curve conversion at a single vertex.

use crate::model::{PathCommand, PathShape};
use std::fmt;

/// Outcome of a point-type toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// A line segment became a cubic with thirds-placed controls
    ToCurve,
    /// A cubic or quadratic became a straight line
    ToLine,
    /// Nothing changed
    Declined(DeclineReason),
}

impl Conversion {
    pub fn is_declined(self) -> bool {
        matches!(self, Conversion::Declined(_))
    }
}

/// Why a toggle was declined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclineReason {
    /// A subpath start has no incoming segment to convert
    MoveTo,
    Close,
    OutOfRange,
    /// The command has no current point to build controls from
    NoPreviousPoint,
}

impl fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DeclineReason::MoveTo => "a move-to starts a subpath",
            DeclineReason::Close => "a close command has no anchor",
            DeclineReason::OutOfRange => "no command at that index",
            DeclineReason::NoPreviousPoint => "no previous point",
        };
        f.write_str(text)
    }
}

/// Toggle the segment ending at `index` between straight and curved
///
/// A line becomes a cubic whose controls sit one and two thirds of the way
/// from the previous point to the anchor, so the curve initially traces the
/// line. A cubic or quadratic becomes a line ending at the same anchor.
pub fn toggle_point_type(shape: &mut PathShape, index: usize) -> Conversion {
    let Some(command) = shape.commands.get(index).copied() else {
        return decline(shape, index, DeclineReason::OutOfRange);
    };

    let replacement = match command {
        PathCommand::MoveTo(_) => return decline(shape, index, DeclineReason::MoveTo),
        PathCommand::Close => return decline(shape, index, DeclineReason::Close),
        PathCommand::LineTo(curr) => {
            let Some(prev) = shape.current_point_before(index) else {
                return decline(shape, index, DeclineReason::NoPreviousPoint);
            };
            let delta = curr - prev;
            let c1 = prev + delta / 3.0;
            let c2 = prev + delta * 2.0 / 3.0;
            PathCommand::CurveTo(c1, c2, curr)
        }
        PathCommand::CurveTo(_, _, p) | PathCommand::QuadTo(_, p) => PathCommand::LineTo(p),
    };

    let result = if matches!(replacement, PathCommand::CurveTo(..)) {
        Conversion::ToCurve
    } else {
        Conversion::ToLine
    };
    shape.commands[index] = replacement;
    tracing::debug!("Shape {} command {}: {:?}", shape.id, index, result);
    result
}

fn decline(shape: &PathShape, index: usize, reason: DeclineReason) -> Conversion {
    tracing::debug!(
        "Point type toggle on shape {} command {} declined: {}",
        shape.id,
        index,
        reason
    );
    Conversion::Declined(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn line_to_curve_places_controls_at_thirds() {
        let mut shape = PathShape::polyline(&[Point::new(10.0, 10.0), Point::new(110.0, 10.0)]);
        assert_eq!(toggle_point_type(&mut shape, 1), Conversion::ToCurve);

        let PathCommand::CurveTo(c1, c2, p) = shape.commands[1] else {
            panic!("expected a cubic, got {:?}", shape.commands[1]);
        };
        assert_close(c1, Point::new(10.0 + 100.0 / 3.0, 10.0));
        assert_close(c2, Point::new(10.0 + 200.0 / 3.0, 10.0));
        assert!((c1.x - 43.33).abs() < 0.01);
        assert!((c2.x - 76.67).abs() < 0.01);
        assert_eq!(p, Point::new(110.0, 10.0));
    }

    #[test]
    fn toggling_twice_restores_line_with_exact_anchor() {
        let anchor = Point::new(0.1 + 0.2, 1.0 / 3.0);
        let mut shape = PathShape::polyline(&[Point::new(7.0, -3.0), anchor]);
        let original = shape.commands.clone();

        toggle_point_type(&mut shape, 1);
        assert_eq!(toggle_point_type(&mut shape, 1), Conversion::ToLine);
        assert_eq!(shape.commands, original);
        assert_eq!(shape.commands[1].anchor(), Some(anchor));
    }

    #[test]
    fn quad_converts_to_line() {
        let mut shape = PathShape::new(vec![
            PathCommand::MoveTo(Point::ZERO),
            PathCommand::QuadTo(Point::new(5.0, 9.0), Point::new(10.0, 0.0)),
        ])
        .unwrap();
        assert_eq!(toggle_point_type(&mut shape, 1), Conversion::ToLine);
        assert_eq!(shape.commands[1], PathCommand::LineTo(Point::new(10.0, 0.0)));
    }

    #[test]
    fn move_close_and_out_of_range_are_declined() {
        let mut shape = PathShape::polyline(&[Point::ZERO, Point::new(1.0, 1.0)]);
        shape.commands.push(PathCommand::Close);
        let before = shape.commands.clone();

        assert_eq!(
            toggle_point_type(&mut shape, 0),
            Conversion::Declined(DeclineReason::MoveTo)
        );
        assert_eq!(
            toggle_point_type(&mut shape, 2),
            Conversion::Declined(DeclineReason::Close)
        );
        assert_eq!(
            toggle_point_type(&mut shape, 9),
            Conversion::Declined(DeclineReason::OutOfRange)
        );
        assert_eq!(shape.commands, before);
    }

    #[test]
    fn line_after_close_curves_from_subpath_start() {
        let mut shape = PathShape::polyline(&[Point::new(0.0, 0.0), Point::new(30.0, 0.0)]);
        shape.commands.push(PathCommand::Close);
        shape.commands.push(PathCommand::LineTo(Point::new(0.0, 30.0)));

        toggle_point_type(&mut shape, 3);
        let PathCommand::CurveTo(c1, _, _) = shape.commands[3] else {
            panic!("expected a cubic");
        };
        assert_close(c1, Point::new(0.0, 10.0));
    }
}
