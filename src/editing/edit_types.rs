// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit types for undo grouping

use serde::{Deserialize, Serialize};

/// Type of edit being performed
///
/// Used to group consecutive edits of the same type into a single undo
/// action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditType {
    /// Normal edit (creates new undo group)
    Normal,

    /// Drag operation in progress (updates current undo group)
    Drag,

    /// Drag operation completed (creates undo group if not already in
    /// one)
    DragUp,
}
