// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Tool system for path editing

use crate::editing::{EditContext, EditType, Key, MouseDelegate, MouseEvent};
use serde::{Deserialize, Serialize};

// ===== Tool Identifier =====

/// Tool identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    /// Select shapes, edit their vertices
    Select,
    /// Draw new paths by clicking vertices
    Pen,
    /// Place generated polygons
    Shapes,
}

// ===== Tool Trait =====

/// A tool for editing paths
pub trait Tool: MouseDelegate {
    /// Get the tool identifier
    fn id(&self) -> ToolId;

    /// Get the edit type for the current operation (for undo grouping)
    fn edit_type(&self) -> Option<EditType> {
        None
    }
}

// ===== ToolBox Enum =====

/// Enum wrapping all tool types
#[derive(Debug, Clone)]
pub enum ToolBox {
    Select(select::SelectTool),
    Pen(pen::PenTool),
    Shapes(shapes::ShapesTool),
}

// ===== ToolBox Implementation =====

impl ToolBox {
    /// Create a tool by ID
    pub fn for_id(id: ToolId) -> Self {
        match id {
            ToolId::Select => ToolBox::Select(select::SelectTool::default()),
            ToolId::Pen => ToolBox::Pen(pen::PenTool::default()),
            ToolId::Shapes => ToolBox::Shapes(shapes::ShapesTool::default()),
        }
    }

    /// Get the tool ID
    pub fn id(&self) -> ToolId {
        match self {
            ToolBox::Select(tool) => tool.id(),
            ToolBox::Pen(tool) => tool.id(),
            ToolBox::Shapes(tool) => tool.id(),
        }
    }

    /// Get edit type
    pub fn edit_type(&self) -> Option<EditType> {
        match self {
            ToolBox::Select(tool) => tool.edit_type(),
            ToolBox::Pen(tool) => tool.edit_type(),
            ToolBox::Shapes(tool) => tool.edit_type(),
        }
    }

    fn delegate(&mut self) -> &mut dyn MouseDelegate {
        match self {
            ToolBox::Select(tool) => tool,
            ToolBox::Pen(tool) => tool,
            ToolBox::Shapes(tool) => tool,
        }
    }
}

// ===== MouseDelegate Implementation =====

/// Implement MouseDelegate for ToolBox so the editor can route events
/// without knowing which tool is active
impl MouseDelegate for ToolBox {
    fn left_down(&mut self, event: MouseEvent, ctx: &mut EditContext<'_>) {
        self.delegate().left_down(event, ctx);
    }

    fn left_up(&mut self, event: MouseEvent, ctx: &mut EditContext<'_>) {
        self.delegate().left_up(event, ctx);
    }

    fn mouse_moved(&mut self, event: MouseEvent, ctx: &mut EditContext<'_>) {
        self.delegate().mouse_moved(event, ctx);
    }

    fn double_click(&mut self, event: MouseEvent, ctx: &mut EditContext<'_>) {
        self.delegate().double_click(event, ctx);
    }

    fn key_down(&mut self, key: Key, ctx: &mut EditContext<'_>) {
        self.delegate().key_down(key, ctx);
    }

    fn cancel(&mut self, ctx: &mut EditContext<'_>) {
        self.delegate().cancel(ctx);
    }
}

// ===== Tool Modules =====

pub mod pen;
pub mod select;
pub mod shapes;
