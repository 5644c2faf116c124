// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Geometry history recorder.
//!
//! Subscribes to geometry events and keeps a wire-format snapshot of the
//! shape after each undoable change. Consecutive drag updates on one shape
//! collapse into a single entry that the final `DragUp` closes, so a whole
//! handle drag is one undo step.

use super::edit_types::EditType;
use super::events::{GeometryEvent, GeometryListener};
use crate::model::{EntityId, PathShape, wire};

/// One undoable state of a shape
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub shape: EntityId,
    /// Event that produced this state
    pub event: GeometryEvent,
    /// Commands in wire format after the change
    pub commands: String,
}

/// Records shape snapshots for the host's undo stack
#[derive(Debug, Default)]
pub struct HistoryRecorder {
    entries: Vec<HistoryEntry>,
    /// Shape whose drag group is still open
    open_drag: Option<EntityId>,
}

impl HistoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent entry
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    fn record(&mut self, event: GeometryEvent, shape: &PathShape) {
        let commands = match wire::encode(&shape.commands) {
            Ok(commands) => commands,
            Err(e) => {
                tracing::warn!("Failed to snapshot shape {}: {}", shape.id, e);
                return;
            }
        };

        let entry = HistoryEntry {
            shape: shape.id,
            event,
            commands,
        };

        let coalesce = matches!(
            event,
            GeometryEvent::CommandsChanged {
                edit: EditType::Drag | EditType::DragUp,
                ..
            }
        ) && self.open_drag == Some(shape.id);

        match (coalesce, self.entries.last_mut()) {
            (true, Some(last)) => *last = entry,
            _ => self.entries.push(entry),
        }
    }
}

impl GeometryListener for HistoryRecorder {
    fn geometry_changed(&mut self, event: &GeometryEvent, shape: Option<&PathShape>) {
        // Entering or leaving edit mode is not a document change
        if matches!(
            event,
            GeometryEvent::EditEntered { .. } | GeometryEvent::EditExited { .. }
        ) {
            return;
        }

        let Some(shape) = shape else {
            tracing::debug!("History: shape {} gone, nothing to record", event.shape());
            self.open_drag = None;
            return;
        };

        self.record(*event, shape);

        self.open_drag = match event {
            GeometryEvent::CommandsChanged {
                edit: EditType::Drag,
                shape,
            } => Some(*shape),
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn changed(shape: EntityId, edit: EditType) -> GeometryEvent {
        GeometryEvent::CommandsChanged { shape, edit }
    }

    #[test]
    fn drag_updates_coalesce_into_one_entry() {
        let mut shape = PathShape::polyline(&[Point::ZERO, Point::new(10.0, 0.0)]);
        let mut history = HistoryRecorder::new();
        history.geometry_changed(&GeometryEvent::Installed { shape: shape.id }, Some(&shape));

        for x in [11.0, 12.0, 13.0] {
            shape.commands[1] = crate::model::PathCommand::LineTo(Point::new(x, 0.0));
            history.geometry_changed(&changed(shape.id, EditType::Drag), Some(&shape));
        }
        history.geometry_changed(&changed(shape.id, EditType::DragUp), Some(&shape));

        assert_eq!(history.len(), 2);
        assert_eq!(history.last().unwrap().commands, r#"[["M",0.0,0.0],["L",13.0,0.0]]"#);

        // The next drag opens a new group
        history.geometry_changed(&changed(shape.id, EditType::Drag), Some(&shape));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn normal_edits_each_get_an_entry() {
        let shape = PathShape::polyline(&[Point::ZERO, Point::new(1.0, 1.0)]);
        let mut history = HistoryRecorder::new();
        history.geometry_changed(&changed(shape.id, EditType::Normal), Some(&shape));
        history.geometry_changed(&changed(shape.id, EditType::Normal), Some(&shape));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn edit_mode_transitions_are_not_recorded() {
        let shape = PathShape::polyline(&[Point::ZERO]);
        let mut history = HistoryRecorder::new();
        history.geometry_changed(&GeometryEvent::EditEntered { shape: shape.id }, Some(&shape));
        history.geometry_changed(&GeometryEvent::EditExited { shape: shape.id }, Some(&shape));
        assert!(history.is_empty());
    }
}
