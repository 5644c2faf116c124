// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Shapes tool for placing generated polygons
//!
//! A click drops a shape centered on the pointer:
//! - Star (default)
//! - Regular polygon

use crate::editing::{EditContext, GeometryEvent, MouseDelegate, MouseEvent, Selection};
use crate::host::Host;
use crate::model::{EntityId, PathShape};
use crate::path::{self, polygon_shape, regular_polygon, star_polygon};
use crate::settings::Settings;
use crate::tools::{Tool, ToolId};
use kurbo::Point;

// ===== Shape Type =====

/// Type of shape being placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeType {
    /// Star with the configured point count and radii
    #[default]
    Star,
    /// Regular polygon with this many sides, at the star's outer radius
    Polygon(usize),
}

// ===== ShapesTool Struct =====

/// The shapes tool - click to place a primitive
#[derive(Debug, Clone, Default)]
pub struct ShapesTool {
    shape_type: ShapeType,
}

impl ShapesTool {
    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    pub fn set_shape_type(&mut self, shape_type: ShapeType) {
        self.shape_type = shape_type;
    }

    /// Build the current primitive centered on `center`, finalized
    pub fn build(&self, center: Point, settings: &Settings) -> PathShape {
        let outline = match self.shape_type {
            ShapeType::Star => star_polygon(
                settings.star_points,
                settings.star_outer_radius,
                settings.star_inner_radius,
            ),
            ShapeType::Polygon(sides) => regular_polygon(sides, settings.star_outer_radius),
        };
        let points: Vec<Point> = outline.into_iter().map(|p| p + center.to_vec2()).collect();

        let mut shape = polygon_shape(&points);
        path::finalize(&mut shape);
        shape
    }

    /// Install the current primitive at `center`
    pub fn place(&self, host: &mut dyn Host, center: Point, settings: &Settings) -> Option<EntityId> {
        let shape = self.build(center, settings);
        if shape.is_empty() {
            tracing::warn!("Shapes: {:?} produced no points", self.shape_type);
            return None;
        }

        let id = host.install_shape(shape);
        host.emit(GeometryEvent::Installed { shape: id });
        host.set_selection(Selection::single(id));
        host.request_redraw();
        tracing::info!("Shapes: placed {:?} {} at {:?}", self.shape_type, id, center);
        Some(id)
    }
}

// ===== Tool Implementation =====

impl Tool for ShapesTool {
    fn id(&self) -> ToolId {
        ToolId::Shapes
    }
}

// ===== MouseDelegate Implementation =====

impl MouseDelegate for ShapesTool {
    fn left_down(&mut self, event: MouseEvent, ctx: &mut EditContext<'_>) {
        self.place(ctx.host, event.pos, ctx.settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;

    #[test]
    fn star_is_centered_on_click() {
        let tool = ShapesTool::default();
        let shape = tool.build(Point::new(200.0, 100.0), &Settings::default());

        // 10 vertices plus Close
        assert_eq!(shape.len(), 11);
        assert!(shape.is_closed());

        // The top point sits one outer radius above the click
        let top = shape.to_world(shape.commands[0].anchor().unwrap());
        assert!((top - Point::new(200.0, 50.0)).hypot() < 1e-9);
    }

    #[test]
    fn place_installs_and_selects() {
        let mut canvas = Canvas::new();
        let tool = ShapesTool::default();
        let id = tool
            .place(&mut canvas, Point::new(0.0, 0.0), &Settings::default())
            .unwrap();
        assert_eq!(canvas.shapes().len(), 1);
        assert!(canvas.selection().contains(&id));
    }

    #[test]
    fn polygon_uses_requested_sides() {
        let mut tool = ShapesTool::default();
        tool.set_shape_type(ShapeType::Polygon(6));
        let shape = tool.build(Point::ZERO, &Settings::default());
        assert_eq!(shape.len(), 7);
    }

    #[test]
    fn degenerate_polygon_is_not_placed() {
        let mut canvas = Canvas::new();
        let mut tool = ShapesTool::default();
        tool.set_shape_type(ShapeType::Polygon(0));
        assert!(tool.place(&mut canvas, Point::ZERO, &Settings::default()).is_none());
        assert!(canvas.shapes().is_empty());
    }
}
