// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Geometry-changed notifications.
//!
//! Engine operations never call into rendering or undo storage directly.
//! They emit a `GeometryEvent` through the host, and the host fans it out to
//! whoever subscribed: the history recorder, a renderer, a test probe.

use super::edit_types::EditType;
use crate::model::{EntityId, PathShape};
use serde::Serialize;
use std::fmt;

/// Something happened to a shape's geometry or edit state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GeometryEvent {
    /// A new shape was added to the document
    Installed { shape: EntityId },
    /// Vertex editing started on a shape
    EditEntered { shape: EntityId },
    /// Commands were mutated in place
    CommandsChanged { shape: EntityId, edit: EditType },
    /// Bounding geometry was recomputed
    Finalized { shape: EntityId },
    /// Vertex editing ended
    EditExited { shape: EntityId },
}

impl GeometryEvent {
    /// The shape the event is about
    pub fn shape(&self) -> EntityId {
        match *self {
            GeometryEvent::Installed { shape }
            | GeometryEvent::EditEntered { shape }
            | GeometryEvent::CommandsChanged { shape, .. }
            | GeometryEvent::Finalized { shape }
            | GeometryEvent::EditExited { shape } => shape,
        }
    }
}

/// Receives geometry events along with the shape's state after the change
pub trait GeometryListener {
    /// `shape` is `None` when the shape is no longer in the document
    fn geometry_changed(&mut self, event: &GeometryEvent, shape: Option<&PathShape>);
}

/// Fan-out of geometry events to subscribed listeners
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<Box<dyn GeometryListener>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Box<dyn GeometryListener>) {
        self.listeners.push(listener);
    }

    /// Deliver an event to every listener, in subscription order
    pub fn publish(&mut self, event: &GeometryEvent, shape: Option<&PathShape>) {
        for listener in &mut self.listeners {
            listener.geometry_changed(event, shape);
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Probe(Rc<RefCell<Vec<GeometryEvent>>>);

    impl GeometryListener for Probe {
        fn geometry_changed(&mut self, event: &GeometryEvent, _shape: Option<&PathShape>) {
            self.0.borrow_mut().push(*event);
        }
    }

    #[test]
    fn publish_reaches_every_listener() {
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.subscribe(Box::new(Probe(first.clone())));
        bus.subscribe(Box::new(Probe(second.clone())));

        let shape = EntityId::next();
        bus.publish(&GeometryEvent::Installed { shape }, None);

        assert_eq!(first.borrow().as_slice(), &[GeometryEvent::Installed { shape }]);
        assert_eq!(second.borrow().len(), 1);
    }

    #[test]
    fn event_reports_its_shape() {
        let shape = EntityId::next();
        let event = GeometryEvent::CommandsChanged {
            shape,
            edit: EditType::Drag,
        };
        assert_eq!(event.shape(), shape);
    }
}
