// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Select tool: pick shapes, enter vertex editing, drag handles
//!
//! Outside edit mode a press selects the shape under the pointer and a
//! double-click on it opens an edit session. Inside edit mode presses grab
//! handles, double-clicking an anchor toggles its point type, and a
//! double-click on empty canvas (or Escape) leaves edit mode.

use crate::editing::{
    EditContext, EditSession, EditType, Key, MouseDelegate, MouseEvent, Selection,
};
use crate::model::{EntityId, HandleRole};
use crate::tools::{Tool, ToolId};

// ===== SelectTool Struct =====

/// The select tool
#[derive(Debug, Clone, Default)]
pub struct SelectTool {
    /// Handle grabbed by the last press, while the button is down
    dragging: Option<EntityId>,
}

// ===== Tool Implementation =====

impl Tool for SelectTool {
    fn id(&self) -> ToolId {
        ToolId::Select
    }

    fn edit_type(&self) -> Option<EditType> {
        self.dragging.map(|_| EditType::Drag)
    }
}

// ===== MouseDelegate Implementation =====

impl MouseDelegate for SelectTool {
    fn left_down(&mut self, event: MouseEvent, ctx: &mut EditContext<'_>) {
        let radius = ctx.settings.handle_hit_radius;

        if let Some(session) = ctx.session.as_mut() {
            let hit = session.hit_test_handle(event.pos, radius).map(|h| h.entity);
            if let Err(e) = session.select_handle(ctx.host, hit) {
                tracing::warn!("Select: {}", e);
                return;
            }
            self.dragging = hit;
            tracing::debug!("Select: pressed handle {:?}", hit);
            return;
        }

        let selection = match event.target {
            Some(shape) => Selection::single(shape),
            None => Selection::new(),
        };
        ctx.host.set_selection(selection);
        ctx.host.request_redraw();
    }

    fn mouse_moved(&mut self, event: MouseEvent, ctx: &mut EditContext<'_>) {
        let (Some(handle), Some(session)) = (self.dragging, ctx.session.as_mut()) else {
            return;
        };
        if let Err(e) = session.drag_handle(ctx.host, handle, event.pos) {
            tracing::warn!("Select: drag of handle {} stopped: {}", handle, e);
            session.end_drag(ctx.host);
            self.dragging = None;
        }
    }

    fn left_up(&mut self, _event: MouseEvent, ctx: &mut EditContext<'_>) {
        if self.dragging.take().is_some()
            && let Some(session) = ctx.session.as_mut()
        {
            session.end_drag(ctx.host);
        }
    }

    fn double_click(&mut self, event: MouseEvent, ctx: &mut EditContext<'_>) {
        self.dragging = None;

        if let Some(session) = ctx.session.as_mut() {
            let radius = ctx.settings.handle_hit_radius;
            let anchor = session
                .hit_test_handle(event.pos, radius)
                .and_then(|hit| session.handles().find(hit.entity))
                .filter(|handle| handle.role == HandleRole::Anchor)
                .map(|handle| handle.id);

            if let Some(handle) = anchor {
                match session.toggle_handle_point_type(ctx.host, handle) {
                    Ok(conversion) => tracing::debug!("Select: {:?}", conversion),
                    Err(e) => tracing::warn!("Select: point toggle failed: {}", e),
                }
                return;
            }

            let current = session.shape();
            match event.target {
                // Double-click inside the edited shape keeps editing
                Some(target) if target == current => {}
                Some(target) => {
                    exit_edit(ctx);
                    enter_edit(ctx, target);
                }
                None => exit_edit(ctx),
            }
            return;
        }

        if let Some(target) = event.target {
            enter_edit(ctx, target);
        }
    }

    fn key_down(&mut self, key: Key, ctx: &mut EditContext<'_>) {
        if key == Key::Escape {
            self.dragging = None;
            exit_edit(ctx);
        }
    }

    fn cancel(&mut self, ctx: &mut EditContext<'_>) {
        if self.dragging.take().is_some()
            && let Some(session) = ctx.session.as_mut()
        {
            session.end_drag(ctx.host);
        }
    }
}

/// Open an edit session on `shape`; a refused shape stays selected
fn enter_edit(ctx: &mut EditContext<'_>, shape: EntityId) {
    match EditSession::enter(ctx.host, shape, ctx.settings) {
        Ok(session) => *ctx.session = Some(session),
        Err(e) => {
            tracing::warn!("Select: cannot edit shape {}: {}", shape, e);
            ctx.host.set_selection(Selection::single(shape));
        }
    }
}

fn exit_edit(ctx: &mut EditContext<'_>) {
    if let Some(session) = ctx.session.take() {
        session.exit(ctx.host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::host::Host;
    use crate::model::{PathCommand, PathShape};
    use crate::settings::Settings;
    use kurbo::Point;

    struct Fixture {
        canvas: Canvas,
        session: Option<EditSession>,
        settings: Settings,
        tool: SelectTool,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                canvas: Canvas::new(),
                session: None,
                settings: Settings::default(),
                tool: SelectTool::default(),
            }
        }

        fn with<R>(&mut self, f: impl FnOnce(&mut SelectTool, &mut EditContext<'_>) -> R) -> R {
            let mut ctx = EditContext {
                host: &mut self.canvas,
                session: &mut self.session,
                settings: &self.settings,
            };
            f(&mut self.tool, &mut ctx)
        }
    }

    fn line() -> PathShape {
        PathShape::polyline(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)])
    }

    #[test]
    fn double_click_enters_and_empty_double_click_exits() {
        let mut fx = Fixture::new();
        let id = fx.canvas.install_shape(line());

        fx.with(|t, ctx| t.double_click(MouseEvent::on(Point::new(50.0, 0.0), id), ctx));
        assert!(fx.session.is_some());
        assert!(fx.canvas.is_editing(id));

        fx.with(|t, ctx| t.double_click(MouseEvent::new(Point::new(300.0, 300.0)), ctx));
        assert!(fx.session.is_none());
        assert_eq!(fx.canvas.proxy_count(), 0);
        assert!(fx.canvas.is_interactive(id));
    }

    #[test]
    fn press_move_release_drags_a_handle() {
        let mut fx = Fixture::new();
        let id = fx.canvas.install_shape(line());
        fx.with(|t, ctx| t.double_click(MouseEvent::on(Point::ZERO, id), ctx));

        fx.with(|t, ctx| t.left_down(MouseEvent::new(Point::new(98.0, 1.0)), ctx));
        assert_eq!(fx.tool.edit_type(), Some(EditType::Drag));
        fx.with(|t, ctx| t.mouse_moved(MouseEvent::new(Point::new(100.0, 40.0)), ctx));
        fx.with(|t, ctx| t.left_up(MouseEvent::new(Point::new(100.0, 40.0)), ctx));

        assert_eq!(
            fx.canvas.shape(id).unwrap().commands[1],
            PathCommand::LineTo(Point::new(100.0, 40.0))
        );
        assert!(fx.tool.edit_type().is_none());
        assert!(!fx.session.as_ref().unwrap().is_dragging());
    }

    #[test]
    fn double_click_on_anchor_toggles_point_type() {
        let mut fx = Fixture::new();
        let id = fx.canvas.install_shape(line());
        fx.with(|t, ctx| t.double_click(MouseEvent::on(Point::ZERO, id), ctx));

        let at_anchor = MouseEvent::on(Point::new(100.0, 0.0), id);
        fx.with(|t, ctx| t.left_down(at_anchor, ctx));
        fx.with(|t, ctx| t.left_up(at_anchor, ctx));
        fx.with(|t, ctx| t.double_click(at_anchor, ctx));

        assert!(matches!(
            fx.canvas.shape(id).unwrap().commands[1],
            PathCommand::CurveTo(..)
        ));
        assert!(fx.session.is_some());
    }

    #[test]
    fn escape_exits_edit_mode() {
        let mut fx = Fixture::new();
        let id = fx.canvas.install_shape(line());
        fx.with(|t, ctx| t.double_click(MouseEvent::on(Point::ZERO, id), ctx));
        fx.with(|t, ctx| t.key_down(Key::Escape, ctx));
        assert!(fx.session.is_none());
        assert_eq!(fx.canvas.proxy_count(), 0);
    }

    #[test]
    fn refused_shape_stays_selected() {
        let mut fx = Fixture::new();
        let points: Vec<Point> = (0..250).map(|i| Point::new(i as f64, 0.0)).collect();
        let id = fx.canvas.install_shape(PathShape::polyline(&points));

        fx.with(|t, ctx| t.double_click(MouseEvent::on(Point::ZERO, id), ctx));
        assert!(fx.session.is_none());
        assert!(fx.canvas.selection().contains(&id));
        assert!(fx.canvas.is_interactive(id));
    }

    #[test]
    fn press_selects_target_shape() {
        let mut fx = Fixture::new();
        let id = fx.canvas.install_shape(line());
        fx.with(|t, ctx| t.left_down(MouseEvent::on(Point::ZERO, id), ctx));
        assert!(fx.canvas.selection().contains(&id));
        fx.with(|t, ctx| t.left_down(MouseEvent::new(Point::new(500.0, 0.0)), ctx));
        assert!(fx.canvas.selection().is_empty());
    }
}
