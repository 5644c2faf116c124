// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Pen tool for building paths click by click
//!
//! Each click commits a vertex; the pointer trails a rubber-band segment
//! from the last vertex. Double-click or Enter turns the committed vertices
//! into a finalized shape, Escape throws everything away. Until commit the
//! document is untouched: the only thing on screen is a preview proxy.

use crate::editing::{
    EditContext, EditType, GeometryEvent, Key, MouseDelegate, MouseEvent, Selection,
};
use crate::host::{Host, PreviewPath, Proxy};
use crate::model::{EntityId, PathShape};
use crate::path;
use crate::settings;
use crate::tools::{Tool, ToolId};
use kurbo::{BezPath, Point};

// ===== Phase =====

/// Where the pen is in its construction cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PenPhase {
    /// No vertices yet
    #[default]
    Idle,
    /// At least one vertex committed, preview on screen
    Drawing,
}

// ===== PenTool Struct =====

/// The pen tool - used for drawing polylines
#[derive(Debug, Clone, Default)]
pub struct PenTool {
    phase: PenPhase,
    /// Committed vertices, world space
    vertices: Vec<Point>,
    /// Live pointer position for the rubber band
    pointer: Option<Point>,
    /// Preview proxy id while drawing
    preview: Option<EntityId>,
}

impl PenTool {
    pub fn phase(&self) -> PenPhase {
        self.phase
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Commit a vertex at a world position
    pub fn click(&mut self, host: &mut dyn Host, pos: Point) {
        // Both presses of a double-click land here; keep one vertex
        if self.vertices.last() == Some(&pos) {
            tracing::debug!("Pen: ignoring repeated click at {:?}", pos);
            return;
        }

        self.vertices.push(pos);
        self.pointer = None;
        self.phase = PenPhase::Drawing;
        tracing::debug!("Pen: vertex {} at {:?}", self.vertices.len(), pos);
        self.show_preview(host);
    }

    /// Track the pointer for the rubber band
    pub fn hover(&mut self, host: &mut dyn Host, pos: Point) {
        if self.phase != PenPhase::Drawing {
            return;
        }
        self.pointer = Some(pos);
        self.show_preview(host);
    }

    /// Turn committed vertices into a shape
    ///
    /// Returns the new shape's id, or `None` (with state untouched) when
    /// there are too few vertices for a path.
    pub fn commit(&mut self, host: &mut dyn Host) -> Option<EntityId> {
        if self.vertices.len() < settings::pen::MIN_VERTICES {
            tracing::debug!(
                "Pen: commit with {} vertices ignored (need {})",
                self.vertices.len(),
                settings::pen::MIN_VERTICES
            );
            return None;
        }

        let mut shape = PathShape::polyline(&self.vertices);
        path::finalize(&mut shape);

        self.clear(host);

        let id = host.install_shape(shape);
        host.emit(GeometryEvent::Installed { shape: id });
        host.set_selection(Selection::single(id));
        host.request_redraw();
        tracing::info!("Pen: committed shape {}", id);
        Some(id)
    }

    /// Drop all pending vertices and the preview; nothing is installed
    pub fn cancel_drawing(&mut self, host: &mut dyn Host) {
        if self.phase == PenPhase::Idle {
            return;
        }
        tracing::debug!("Pen: cancelled with {} vertices", self.vertices.len());
        self.clear(host);
        host.request_redraw();
    }

    fn clear(&mut self, host: &mut dyn Host) {
        if let Some(id) = self.preview.take() {
            host.remove_proxy(id);
        }
        self.vertices.clear();
        self.pointer = None;
        self.phase = PenPhase::Idle;
    }

    /// Provisional outline: committed vertices plus the rubber band
    fn preview_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut points = self.vertices.iter().chain(self.pointer.as_ref());
        if let Some(&first) = points.next() {
            path.move_to(first);
            for &p in points {
                path.line_to(p);
            }
        }
        path
    }

    fn show_preview(&mut self, host: &mut dyn Host) {
        let path = self.preview_path();
        match self.preview {
            Some(id) => host.update_proxy(Proxy::Preview(PreviewPath { id, path })),
            None => {
                let id = EntityId::next();
                host.add_proxy(Proxy::Preview(PreviewPath { id, path }));
                self.preview = Some(id);
            }
        }
        host.request_redraw();
    }
}

// ===== Tool Implementation =====

impl Tool for PenTool {
    fn id(&self) -> ToolId {
        ToolId::Pen
    }

    fn edit_type(&self) -> Option<EditType> {
        match self.phase {
            PenPhase::Drawing => Some(EditType::Normal),
            PenPhase::Idle => None,
        }
    }
}

// ===== MouseDelegate Implementation =====

impl MouseDelegate for PenTool {
    fn left_down(&mut self, event: MouseEvent, ctx: &mut EditContext<'_>) {
        self.click(ctx.host, event.pos);
    }

    fn mouse_moved(&mut self, event: MouseEvent, ctx: &mut EditContext<'_>) {
        self.hover(ctx.host, event.pos);
    }

    fn double_click(&mut self, _event: MouseEvent, ctx: &mut EditContext<'_>) {
        self.commit(ctx.host);
    }

    fn key_down(&mut self, key: Key, ctx: &mut EditContext<'_>) {
        match key {
            Key::Enter => {
                self.commit(ctx.host);
            }
            Key::Escape => self.cancel_drawing(ctx.host),
        }
    }

    fn cancel(&mut self, ctx: &mut EditContext<'_>) {
        self.cancel_drawing(ctx.host);
    }
}
