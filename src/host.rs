// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! The boundary between the engine and the canvas that embeds it.
//!
//! The engine owns no document. Every operation receives the host as
//! `&mut dyn Host` and goes through it to read or mutate shapes, to put
//! ephemeral proxies (handles, connectors, pen previews) on screen and to
//! announce geometry changes.

use crate::editing::events::GeometryEvent;
use crate::editing::handles::{Connector, ControlHandle};
use crate::editing::selection::Selection;
use crate::model::{EntityId, PathShape};
use kurbo::BezPath;

/// Provisional path drawn while the pen tool is collecting vertices
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewPath {
    pub id: EntityId,
    /// World-space outline including the rubber band, if any
    pub path: BezPath,
}

/// An ephemeral, non-document object the engine asks the host to display
#[derive(Debug, Clone, PartialEq)]
pub enum Proxy {
    Handle(ControlHandle),
    Connector(Connector),
    Preview(PreviewPath),
}

impl Proxy {
    pub fn id(&self) -> EntityId {
        match self {
            Proxy::Handle(handle) => handle.id,
            Proxy::Connector(connector) => connector.id,
            Proxy::Preview(preview) => preview.id,
        }
    }
}

/// Services the embedding canvas provides to the engine
pub trait Host {
    // ===== Document =====

    fn shape(&self, id: EntityId) -> Option<&PathShape>;

    fn shape_mut(&mut self, id: EntityId) -> Option<&mut PathShape>;

    /// Add a finished shape to the document, returning its id
    fn install_shape(&mut self, shape: PathShape) -> EntityId;

    fn remove_shape(&mut self, id: EntityId) -> Option<PathShape>;

    // ===== Proxies =====

    fn add_proxy(&mut self, proxy: Proxy);

    /// Replace a proxy previously added under the same id
    fn update_proxy(&mut self, proxy: Proxy);

    fn remove_proxy(&mut self, id: EntityId);

    // ===== Interaction state =====

    fn set_selection(&mut self, selection: Selection);

    /// Whether the host may select or move the shape as a whole
    fn set_interactive(&mut self, id: EntityId, interactive: bool);

    /// Flag a shape whose commands changed since the last render
    fn mark_dirty(&mut self, id: EntityId);

    fn request_redraw(&mut self);

    // ===== Notifications =====

    fn emit(&mut self, event: GeometryEvent);
}
