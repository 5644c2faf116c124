// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while building or decoding path data

use thiserror::Error;

/// Failure to construct or decode path data
#[derive(Debug, Error)]
pub enum ModelError {
    /// Opcode outside `M`, `L`, `C`, `Q`, `Z`
    #[error("unknown path opcode {0:?}")]
    UnknownOpcode(String),

    /// Opcode with the wrong number of coordinates
    #[error("'{op}' takes {expected} numbers, found {found}")]
    Arity {
        op: char,
        expected: usize,
        found: usize,
    },

    /// A non-empty command list must start with `MoveTo`
    #[error("path must start with a MoveTo command, found '{0}'")]
    MissingMoveTo(char),

    /// Wire document that is not a list of tuples
    #[error("path data must be a list of command tuples")]
    NotAList,

    #[error("path data encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
