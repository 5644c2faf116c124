// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! In-memory reference host.
//!
//! `Canvas` keeps shapes in draw order, a typed per-shape extension record
//! for editing state, the proxies the engine put on screen, and a history
//! recorder fed from geometry events. It renders to SVG for debugging and
//! exports the document as JSON.

use crate::editing::events::{EventBus, GeometryEvent, GeometryListener};
use crate::editing::history::HistoryRecorder;
use crate::editing::selection::Selection;
use crate::host::{Host, Proxy};
use crate::model::{EntityId, HandleRole, ObjectTransform, PathShape, wire};
use crate::theme;
use anyhow::Result;
use kurbo::{Size, Vec2};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;

// ===== Extension Side-Table =====

/// Engine-owned state the host keeps for every shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathExtension {
    /// Whether the shape can be selected and moved as a whole
    pub interactive: bool,
    /// Whether a vertex edit session is open on the shape
    pub editing: bool,
    /// Commands changed since the last render
    pub dirty: bool,
}

impl Default for PathExtension {
    fn default() -> Self {
        Self {
            interactive: true,
            editing: false,
            dirty: false,
        }
    }
}

// ===== Canvas =====

/// Reference `Host` implementation
#[derive(Debug, Default)]
pub struct Canvas {
    shapes: Vec<PathShape>,
    extensions: HashMap<EntityId, PathExtension>,
    proxies: BTreeMap<EntityId, Proxy>,
    selection: Selection,
    redraw_requests: usize,
    history: HistoryRecorder,
    listeners: EventBus,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive every geometry event after the history recorder has
    pub fn subscribe(&mut self, listener: Box<dyn GeometryListener>) {
        self.listeners.subscribe(listener);
    }

    /// Shapes in draw order
    pub fn shapes(&self) -> &[PathShape] {
        &self.shapes
    }

    pub fn extension(&self, id: EntityId) -> Option<&PathExtension> {
        self.extensions.get(&id)
    }

    pub fn is_interactive(&self, id: EntityId) -> bool {
        self.extension(id).is_some_and(|ext| ext.interactive)
    }

    pub fn is_editing(&self, id: EntityId) -> bool {
        self.extension(id).is_some_and(|ext| ext.editing)
    }

    pub fn is_dirty(&self, id: EntityId) -> bool {
        self.extension(id).is_some_and(|ext| ext.dirty)
    }

    /// Proxies currently on screen, in id order
    pub fn proxies(&self) -> impl Iterator<Item = &Proxy> {
        self.proxies.values()
    }

    pub fn proxy_count(&self) -> usize {
        self.proxies.len()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn redraw_requests(&self) -> usize {
        self.redraw_requests
    }

    pub fn history(&self) -> &HistoryRecorder {
        &self.history
    }

    fn extension_mut(&mut self, id: EntityId) -> Option<&mut PathExtension> {
        self.extensions.get_mut(&id)
    }

    // ===== Output =====

    /// Document snapshot: every shape's commands and placement
    pub fn export(&self) -> Result<Vec<ShapeExport>> {
        self.shapes.iter().map(ShapeExport::from_shape).collect()
    }

    /// Debug rendering of shapes, connectors, handles and pen previews
    pub fn to_svg(&self) -> String {
        let mut svg = String::from(r#"<svg xmlns="http://www.w3.org/2000/svg">"#);
        svg.push('\n');

        for shape in &self.shapes {
            let fill = shape.fill.map_or_else(|| "none".to_string(), theme::to_hex);
            let stroke = shape.stroke.map_or_else(|| "none".to_string(), theme::to_hex);
            let _ = writeln!(
                svg,
                r#"  <path d="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                shape.world_bezpath().to_svg(),
                fill,
                stroke,
                shape.stroke_width
            );
        }

        // Connectors under handles
        for proxy in self.proxies.values() {
            if let Proxy::Connector(connector) = proxy {
                let [dash, gap] = theme::connector::DASH;
                let _ = writeln!(
                    svg,
                    r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-dasharray="{} {}"/>"#,
                    connector.line.p0.x,
                    connector.line.p0.y,
                    connector.line.p1.x,
                    connector.line.p1.y,
                    theme::to_hex(theme::connector::COLOR),
                    dash,
                    gap
                );
            }
        }

        for proxy in self.proxies.values() {
            match proxy {
                Proxy::Handle(handle) => {
                    let (fill, radius) = match handle.role {
                        HandleRole::Anchor => {
                            (theme::handle::ANCHOR_FILL, theme::handle::ANCHOR_RADIUS)
                        }
                        _ => (theme::handle::CONTROL_FILL, theme::handle::CONTROL_RADIUS),
                    };
                    let fill = if self.selection.contains(&handle.id) {
                        theme::handle::SELECTED_FILL
                    } else {
                        fill
                    };
                    let _ = writeln!(
                        svg,
                        r#"  <circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}"/>"#,
                        handle.position.x,
                        handle.position.y,
                        radius,
                        theme::to_hex(fill),
                        theme::to_hex(theme::handle::OUTLINE)
                    );
                }
                Proxy::Preview(preview) => {
                    let _ = writeln!(
                        svg,
                        r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                        preview.path.to_svg(),
                        theme::to_hex(theme::pen_preview::STROKE),
                        theme::pen_preview::WIDTH
                    );
                }
                Proxy::Connector(_) => {}
            }
        }

        svg.push_str("</svg>\n");
        svg
    }
}

// ===== Host Implementation =====

impl Host for Canvas {
    fn shape(&self, id: EntityId) -> Option<&PathShape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    fn shape_mut(&mut self, id: EntityId) -> Option<&mut PathShape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    fn install_shape(&mut self, shape: PathShape) -> EntityId {
        let id = shape.id;
        self.extensions.insert(id, PathExtension::default());
        self.shapes.push(shape);
        tracing::debug!("Canvas: installed shape {}", id);
        id
    }

    fn remove_shape(&mut self, id: EntityId) -> Option<PathShape> {
        let index = self.shapes.iter().position(|s| s.id == id)?;
        self.extensions.remove(&id);
        self.selection.remove(&id);
        tracing::debug!("Canvas: removed shape {}", id);
        Some(self.shapes.remove(index))
    }

    fn add_proxy(&mut self, proxy: Proxy) {
        self.proxies.insert(proxy.id(), proxy);
    }

    fn update_proxy(&mut self, proxy: Proxy) {
        let id = proxy.id();
        match self.proxies.get_mut(&id) {
            Some(slot) => *slot = proxy,
            None => tracing::warn!("Canvas: update for unknown proxy {}", id),
        }
    }

    fn remove_proxy(&mut self, id: EntityId) {
        if self.proxies.remove(&id).is_none() {
            tracing::warn!("Canvas: remove for unknown proxy {}", id);
        }
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    fn set_interactive(&mut self, id: EntityId, interactive: bool) {
        if let Some(ext) = self.extension_mut(id) {
            ext.interactive = interactive;
        }
    }

    fn mark_dirty(&mut self, id: EntityId) {
        if let Some(ext) = self.extension_mut(id) {
            ext.dirty = true;
        }
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }

    fn emit(&mut self, event: GeometryEvent) {
        let id = event.shape();
        match event {
            GeometryEvent::EditEntered { .. } => {
                if let Some(ext) = self.extension_mut(id) {
                    ext.editing = true;
                }
            }
            GeometryEvent::EditExited { .. } => {
                if let Some(ext) = self.extension_mut(id) {
                    ext.editing = false;
                }
            }
            _ => {}
        }

        let shape = self.shapes.iter().find(|s| s.id == id);
        self.history.geometry_changed(&event, shape);
        self.listeners.publish(&event, shape);
    }
}

// ===== Export =====

/// Serializable snapshot of one shape
#[derive(Debug, Clone, Serialize)]
pub struct ShapeExport {
    pub id: EntityId,
    /// Commands in `[opcode, ...args]` form
    pub commands: serde_json::Value,
    pub local_origin: Vec2,
    pub size: Size,
    pub transform: ObjectTransform,
    pub closed: bool,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: f64,
}

impl ShapeExport {
    fn from_shape(shape: &PathShape) -> Result<Self> {
        Ok(Self {
            id: shape.id,
            commands: wire::to_value(&shape.commands)?,
            local_origin: shape.local_origin,
            size: shape.size,
            transform: shape.transform,
            closed: shape.is_closed(),
            fill: shape.fill.map(theme::to_hex),
            stroke: shape.stroke.map(theme::to_hex),
            stroke_width: shape.stroke_width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::EditType;
    use kurbo::Point;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Probe(Rc<RefCell<Vec<(GeometryEvent, bool)>>>);

    impl GeometryListener for Probe {
        fn geometry_changed(&mut self, event: &GeometryEvent, shape: Option<&PathShape>) {
            self.0.borrow_mut().push((*event, shape.is_some()));
        }
    }

    #[test]
    fn install_creates_interactive_extension() {
        let mut canvas = Canvas::new();
        let id = canvas.install_shape(PathShape::polyline(&[Point::ZERO]));
        assert_eq!(canvas.extension(id), Some(&PathExtension::default()));
        assert!(canvas.is_interactive(id));

        canvas.remove_shape(id);
        assert!(canvas.extension(id).is_none());
        assert!(canvas.shape(id).is_none());
    }

    #[test]
    fn events_reach_subscribers_with_shape_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut canvas = Canvas::new();
        canvas.subscribe(Box::new(Probe(seen.clone())));

        let id = canvas.install_shape(PathShape::polyline(&[Point::ZERO, Point::new(1.0, 1.0)]));
        canvas.emit(GeometryEvent::CommandsChanged {
            shape: id,
            edit: EditType::Normal,
        });
        canvas.emit(GeometryEvent::Finalized {
            shape: EntityId::next(),
        });

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].1);
        assert!(!seen[1].1);
        assert_eq!(canvas.history().len(), 1);
    }

    #[test]
    fn export_uses_wire_format() {
        let mut canvas = Canvas::new();
        canvas.install_shape(PathShape::polyline(&[
            Point::new(10.0, 10.0),
            Point::new(110.0, 10.0),
        ]));
        let export = canvas.export().unwrap();
        assert_eq!(
            export[0].commands,
            serde_json::json!([["M", 10.0, 10.0], ["L", 110.0, 10.0]])
        );
        assert!(!export[0].closed);
    }

    #[test]
    fn svg_contains_shapes_and_handles() {
        let mut canvas = Canvas::new();
        let id = canvas.install_shape(PathShape::polyline(&[
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
        ]));
        let session = crate::editing::EditSession::enter(
            &mut canvas,
            id,
            &crate::settings::Settings::default(),
        )
        .unwrap();

        let svg = canvas.to_svg();
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<path d=\"M").count(), 1);
        assert_eq!(svg.matches("<circle").count(), 2);

        session.exit(&mut canvas);
        assert_eq!(canvas.to_svg().matches("<circle").count(), 0);
    }
}
