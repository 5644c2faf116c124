// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - vertex editing state for a single shape
//!
//! Entering a session locks the shape against whole-object interaction and
//! spawns its control handles. Every way out (`exit`, `abandon`) removes all
//! proxies the session added; `exit` also re-normalizes the shape's bounding
//! geometry so edits never displace it on screen.

mod hit_testing;
mod path_editing;

use super::error::EditError;
use super::events::GeometryEvent;
use super::handles::ControlHandleSet;
use super::selection::Selection;
use crate::host::Host;
use crate::model::EntityId;
use crate::path;
use crate::settings::Settings;

/// Vertex editing session on one shape
#[derive(Debug, Clone)]
pub struct EditSession {
    /// The shape being edited
    shape: EntityId,

    /// Proxies mirroring the shape's points
    handles: ControlHandleSet,

    /// Selected handles
    selection: Selection,

    /// Handle currently being dragged, if any
    dragging: Option<EntityId>,

    /// Command ceiling the session was entered with (used on rebuilds)
    limit: usize,
}

impl EditSession {
    /// Start editing `shape`
    ///
    /// Shapes above the command ceiling are refused and stay selectable and
    /// movable as whole objects.
    pub fn enter(
        host: &mut dyn Host,
        shape: EntityId,
        settings: &Settings,
    ) -> Result<Self, EditError> {
        let limit = settings.max_editable_commands;
        let handles = ControlHandleSet::spawn(host, shape, limit)?;

        host.set_interactive(shape, false);
        host.set_selection(Selection::new());
        host.emit(GeometryEvent::EditEntered { shape });
        host.request_redraw();

        tracing::info!(
            "Entered edit mode on shape {} ({} handles)",
            shape,
            handles.handles().len()
        );

        Ok(Self {
            shape,
            handles,
            selection: Selection::new(),
            dragging: None,
            limit,
        })
    }

    /// Leave edit mode, normalizing the shape's bounding geometry
    pub fn exit(mut self, host: &mut dyn Host) {
        self.end_drag(host);
        self.handles.remove_all(host);
        host.set_interactive(self.shape, true);

        let finalized = host.shape_mut(self.shape).and_then(path::finalize);
        if finalized.is_some() {
            host.emit(GeometryEvent::Finalized { shape: self.shape });
        }

        host.emit(GeometryEvent::EditExited { shape: self.shape });
        host.set_selection(Selection::single(self.shape));
        host.request_redraw();
        tracing::info!("Exited edit mode on shape {}", self.shape);
    }

    /// Tear down a session whose shape was deleted out from under it
    ///
    /// Only the proxies are removed; there is no shape left to finalize.
    pub fn abandon(mut self, host: &mut dyn Host) {
        self.handles.remove_all(host);
        host.set_selection(Selection::new());
        host.request_redraw();
        tracing::info!("Abandoned edit session on shape {}", self.shape);
    }

    pub fn shape(&self) -> EntityId {
        self.shape
    }

    pub fn handles(&self) -> &ControlHandleSet {
        &self.handles
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }
}
