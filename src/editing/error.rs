// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors raised by edit-session operations

use crate::model::EntityId;
use thiserror::Error;

/// Why an editing action could not be carried out
///
/// None of these leave the document in a changed state; callers log them and
/// carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The path has too many commands for vertex editing
    #[error("path has {count} commands, vertex editing is limited to {limit}")]
    TooComplex { count: usize, limit: usize },

    /// The shape being edited is no longer in the host
    #[error("shape {0} no longer exists")]
    ShapeMissing(EntityId),

    /// A handle refers to a command slot that no longer exists
    #[error("handle {0} refers to a command that no longer exists")]
    StaleHandle(EntityId),

    /// No handle with this id belongs to the session
    #[error("no handle {0} in this edit session")]
    HandleNotFound(EntityId),
}
