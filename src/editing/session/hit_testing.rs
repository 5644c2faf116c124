// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing and handle selection methods for EditSession

use super::EditSession;
use crate::editing::error::EditError;
use crate::editing::hit_test::{self, HitTestResult};
use crate::editing::selection::Selection;
use crate::host::Host;
use crate::model::EntityId;
use kurbo::Point;

impl EditSession {
    /// Find the handle closest to a world position within `max_dist`
    pub fn hit_test_handle(&self, world: Point, max_dist: f64) -> Option<HitTestResult> {
        let candidates = self.handles.handles().iter().map(|h| (h.id, h.position));
        let result = hit_test::find_closest(world, candidates, max_dist);

        if let Some(ref hit) = result {
            tracing::debug!(
                "[hit_test_handle] Hit handle {} at distance {:.3}",
                hit.entity,
                hit.distance
            );
        }
        result
    }

    /// Select a single handle, or clear the selection with `None`
    ///
    /// The host's selection follows the session's.
    pub fn select_handle(
        &mut self,
        host: &mut dyn Host,
        handle: Option<EntityId>,
    ) -> Result<(), EditError> {
        self.selection = match handle {
            Some(id) => {
                if self.handles.find(id).is_none() {
                    return Err(EditError::HandleNotFound(id));
                }
                Selection::single(id)
            }
            None => Selection::new(),
        };
        host.set_selection(self.selection.clone());
        host.request_redraw();
        Ok(())
    }
}
