// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Immutable selection set for tracking which shapes or handles are selected.
//!
//! `Selection` wraps an `Arc<BTreeSet<EntityId>>` so it can be handed to the
//! host cheaply on every change. Mutations produce a new set. The `BTreeSet`
//! gives deterministic iteration order, which keeps debug output and SVG
//! rendering stable.

use crate::model::EntityId;
use std::collections::BTreeSet;
use std::sync::Arc;

/// A set of selected entities (shapes or control handles)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    inner: Arc<BTreeSet<EntityId>>,
}

impl Selection {
    /// Create a new empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection holding exactly one entity
    pub fn single(id: EntityId) -> Self {
        Self {
            inner: Arc::new(BTreeSet::from([id])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.inner.contains(id)
    }

    /// Iterate over selected entities in id order
    pub fn iter(&self) -> impl Iterator<Item = &EntityId> {
        self.inner.iter()
    }

    /// Add an entity to the selection
    pub fn insert(&mut self, id: EntityId) {
        Arc::make_mut(&mut self.inner).insert(id);
    }

    /// Remove an entity from the selection
    pub fn remove(&mut self, id: &EntityId) {
        if self.inner.contains(id) {
            Arc::make_mut(&mut self.inner).remove(id);
        }
    }

    pub fn clear(&mut self) {
        self.inner = Arc::default();
    }
}
