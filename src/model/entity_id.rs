// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Identity for shapes and the proxies spawned around them.
//!
//! Shapes, control handles, connectors and pen previews all draw their ids
//! from one monotonically increasing counter, so an id alone is enough to
//! address any entity the engine hands to the host. Ids are never reused:
//! a handle that outlives its shape keeps pointing at nothing rather than at
//! a different shape.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a shape or proxy entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(u64);

static ENTITY_COUNTER: AtomicU64 = AtomicU64::new(1);

impl EntityId {
    /// Allocate a fresh id
    pub fn next() -> Self {
        Self(ENTITY_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value (used in logs and debug output)
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::next()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
