// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Nearest-handle hit testing in world space

use crate::model::EntityId;
use kurbo::Point;

/// The closest candidate to a pointer position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTestResult {
    pub entity: EntityId,
    pub distance: f64,
}

/// Find the candidate closest to `pos`, if any lies within `max_dist`
///
/// Ties go to the earliest candidate, so handles spawned first (anchors)
/// win over coincident control points.
pub fn find_closest(
    pos: Point,
    candidates: impl Iterator<Item = (EntityId, Point)>,
    max_dist: f64,
) -> Option<HitTestResult> {
    let mut best: Option<HitTestResult> = None;
    for (entity, point) in candidates {
        let distance = pos.distance(point);
        if distance > max_dist {
            continue;
        }
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(HitTestResult { entity, distance });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_nearest_within_radius() {
        let a = EntityId::next();
        let b = EntityId::next();
        let candidates = vec![(a, Point::new(0.0, 0.0)), (b, Point::new(5.0, 0.0))];

        let hit = find_closest(Point::new(4.0, 0.0), candidates.clone().into_iter(), 8.0).unwrap();
        assert_eq!(hit.entity, b);
        assert_eq!(hit.distance, 1.0);

        assert!(find_closest(Point::new(40.0, 0.0), candidates.into_iter(), 8.0).is_none());
    }

    #[test]
    fn ties_go_to_first_candidate() {
        let a = EntityId::next();
        let b = EntityId::next();
        let p = Point::new(1.0, 1.0);
        let hit = find_closest(p, vec![(a, p), (b, p)].into_iter(), 1.0).unwrap();
        assert_eq!(hit.entity, a);
    }
}
