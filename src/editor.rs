// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor state: the active tool, the open edit session and settings
//!
//! The host forwards its input here; the editor builds an `EditContext`
//! and routes the event to whichever tool is active.

use crate::editing::{EditContext, EditError, EditSession, Key, MouseDelegate, MouseEvent};
use crate::host::Host;
use crate::model::EntityId;
use crate::path::Conversion;
use crate::settings::Settings;
use crate::tools::{ToolBox, ToolId};

/// Routes host events to tools
#[derive(Debug)]
pub struct Editor {
    tool: ToolBox,
    session: Option<EditSession>,
    settings: Settings,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Editor {
    pub fn new(settings: Settings) -> Self {
        Self {
            tool: ToolBox::for_id(ToolId::Select),
            session: None,
            settings,
        }
    }

    pub fn tool(&self) -> &ToolBox {
        &self.tool
    }

    pub fn tool_id(&self) -> ToolId {
        self.tool.id()
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Switch tools, abandoning any gesture and leaving edit mode
    pub fn set_tool(&mut self, host: &mut dyn Host, id: ToolId) {
        if self.tool.id() == id {
            return;
        }
        self.dispatch(host, |tool, ctx| tool.cancel(ctx));
        self.exit_edit(host);
        self.tool = ToolBox::for_id(id);
        tracing::info!("Tool changed to {:?}", id);
    }

    // ===== Input =====

    pub fn left_down(&mut self, host: &mut dyn Host, event: MouseEvent) {
        self.dispatch(host, |tool, ctx| tool.left_down(event, ctx));
    }

    pub fn left_up(&mut self, host: &mut dyn Host, event: MouseEvent) {
        self.dispatch(host, |tool, ctx| tool.left_up(event, ctx));
    }

    pub fn mouse_moved(&mut self, host: &mut dyn Host, event: MouseEvent) {
        self.dispatch(host, |tool, ctx| tool.mouse_moved(event, ctx));
    }

    pub fn double_click(&mut self, host: &mut dyn Host, event: MouseEvent) {
        self.dispatch(host, |tool, ctx| tool.double_click(event, ctx));
    }

    pub fn key_down(&mut self, host: &mut dyn Host, key: Key) {
        self.dispatch(host, |tool, ctx| tool.key_down(key, ctx));
    }

    // ===== Edit Mode =====

    /// Open an edit session on a shape, leaving any current one first
    pub fn enter_edit(&mut self, host: &mut dyn Host, shape: EntityId) -> Result<(), EditError> {
        self.exit_edit(host);
        self.session = Some(EditSession::enter(host, shape, &self.settings)?);
        Ok(())
    }

    /// Leave edit mode if it is active
    pub fn exit_edit(&mut self, host: &mut dyn Host) {
        if let Some(session) = self.session.take() {
            session.exit(host);
        }
    }

    /// Toggle line/curve at a command of the shape being edited
    ///
    /// `None` when no edit session is open.
    pub fn toggle_point_type(
        &mut self,
        host: &mut dyn Host,
        command_index: usize,
    ) -> Option<Result<Conversion, EditError>> {
        let session = self.session.as_mut()?;
        Some(session.toggle_point_type(host, command_index))
    }

    /// Open or close the shape being edited
    pub fn toggle_closed(&mut self, host: &mut dyn Host) -> Option<Result<bool, EditError>> {
        let session = self.session.as_mut()?;
        Some(session.toggle_closed(host))
    }

    /// The host deleted a shape
    ///
    /// An edit session on it is torn down without finalizing.
    pub fn shape_removed(&mut self, host: &mut dyn Host, shape: EntityId) {
        if self.session.as_ref().is_some_and(|s| s.shape() == shape) {
            self.dispatch(host, |tool, ctx| tool.cancel(ctx));
            if let Some(session) = self.session.take() {
                session.abandon(host);
            }
        }
    }

    fn dispatch(
        &mut self,
        host: &mut dyn Host,
        f: impl FnOnce(&mut ToolBox, &mut EditContext<'_>),
    ) {
        let mut ctx = EditContext {
            host,
            session: &mut self.session,
            settings: &self.settings,
        };
        f(&mut self.tool, &mut ctx);
    }
}
