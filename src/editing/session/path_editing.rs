// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Path editing methods for EditSession: handle drags, point-type
//! conversion and open/close toggling

use super::EditSession;
use crate::editing::edit_types::EditType;
use crate::editing::error::EditError;
use crate::editing::events::GeometryEvent;
use crate::editing::handles::ControlHandleSet;
use crate::editing::selection::Selection;
use crate::host::Host;
use crate::model::{EntityId, HandleRole};
use crate::path::{self, Conversion};
use kurbo::Point;

impl EditSession {
    /// Move a handle to a world position
    ///
    /// Consecutive calls until `end_drag` form one undo group.
    pub fn drag_handle(
        &mut self,
        host: &mut dyn Host,
        handle: EntityId,
        world: Point,
    ) -> Result<(), EditError> {
        self.handles.drag(host, handle, world)?;
        self.dragging = Some(handle);
        host.emit(GeometryEvent::CommandsChanged {
            shape: self.shape,
            edit: EditType::Drag,
        });
        Ok(())
    }

    /// Close the undo group of the drag in progress, if any
    pub fn end_drag(&mut self, host: &mut dyn Host) {
        if let Some(handle) = self.dragging.take() {
            tracing::debug!("Drag of handle {} ended", handle);
            host.emit(GeometryEvent::CommandsChanged {
                shape: self.shape,
                edit: EditType::DragUp,
            });
        }
    }

    /// Toggle the segment ending at `command_index` between line and curve
    ///
    /// On success the handle set is rebuilt to match the new command. If
    /// that command's anchor handle was selected, the new anchor handle is
    /// selected afterwards.
    pub fn toggle_point_type(
        &mut self,
        host: &mut dyn Host,
        command_index: usize,
    ) -> Result<Conversion, EditError> {
        let shape = host
            .shape_mut(self.shape)
            .ok_or(EditError::ShapeMissing(self.shape))?;
        let conversion = path::toggle_point_type(shape, command_index);
        if conversion.is_declined() {
            return Ok(conversion);
        }

        let was_selected = self
            .handles
            .handles()
            .iter()
            .any(|h| {
                h.command_index == command_index
                    && h.role == HandleRole::Anchor
                    && self.selection.contains(&h.id)
            });

        self.rebuild_handles(host)?;

        if was_selected {
            let anchor = self
                .handles
                .handle_at(command_index, HandleRole::Anchor)
                .map(|h| h.id);
            self.select_handle(host, anchor)?;
        }

        host.mark_dirty(self.shape);
        host.emit(GeometryEvent::CommandsChanged {
            shape: self.shape,
            edit: EditType::Normal,
        });
        host.request_redraw();
        Ok(conversion)
    }

    /// Toggle the point type of the command a handle belongs to
    pub fn toggle_handle_point_type(
        &mut self,
        host: &mut dyn Host,
        handle: EntityId,
    ) -> Result<Conversion, EditError> {
        let index = self
            .handles
            .find(handle)
            .map(|h| h.command_index)
            .ok_or(EditError::HandleNotFound(handle))?;
        self.toggle_point_type(host, index)
    }

    /// Close the path if open, reopen it if closed
    ///
    /// Returns whether the path is closed afterwards. Closing a path already
    /// at the command ceiling is refused before anything changes.
    pub fn toggle_closed(&mut self, host: &mut dyn Host) -> Result<bool, EditError> {
        let shape = host
            .shape_mut(self.shape)
            .ok_or(EditError::ShapeMissing(self.shape))?;

        if !shape.is_closed() && !shape.is_empty() && shape.len() >= self.limit {
            let count = shape.len() + 1;
            tracing::warn!(
                "Closing shape {} would need {} commands (limit {})",
                self.shape,
                count,
                self.limit
            );
            return Err(EditError::TooComplex {
                count,
                limit: self.limit,
            });
        }

        let closed = path::toggle_closed(shape);

        // A Close carries no handles, but connectors may hinge on it
        self.rebuild_handles(host)?;

        host.mark_dirty(self.shape);
        host.emit(GeometryEvent::CommandsChanged {
            shape: self.shape,
            edit: EditType::Normal,
        });
        host.request_redraw();
        Ok(closed)
    }

    /// Tear down and respawn every handle from the shape
    fn rebuild_handles(&mut self, host: &mut dyn Host) -> Result<(), EditError> {
        self.handles.remove_all(host);
        self.selection.clear();
        host.set_selection(Selection::new());
        self.dragging = None;
        self.handles = ControlHandleSet::spawn(host, self.shape, self.limit)?;
        Ok(())
    }
}
