// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! World-space control handles mirroring a shape's coordinate pairs.
//!
//! A `ControlHandleSet` spawns one proxy per anchor and control point of the
//! shape being edited, plus dashed connectors from each control point to the
//! anchor whose tangent it governs. The shape stays authoritative: handle
//! positions are always derived from the commands through the shape's
//! current coordinate transform, and a drag writes straight back into the
//! command slot the handle stands for.

use super::error::EditError;
use crate::host::{Host, Proxy};
use crate::model::{EntityId, HandleRole, PathCommand, PathShape};
use kurbo::{Line, Point};
use std::collections::HashMap;

// ===== Proxies =====

/// On-screen proxy for one coordinate pair of a command
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlHandle {
    pub id: EntityId,
    /// Shape the handle belongs to
    pub shape: EntityId,
    pub command_index: usize,
    pub role: HandleRole,
    /// World position, derived from the shape
    pub position: Point,
}

/// Dashed guide from a control point to the anchor it shapes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    pub id: EntityId,
    /// Control handle at one end
    pub control: EntityId,
    /// Anchor handle at the other end
    pub anchor: EntityId,
    pub line: Line,
}

// ===== Handle Set =====

/// The handles and connectors spawned for one shape
#[derive(Debug, Clone)]
pub struct ControlHandleSet {
    shape: EntityId,
    handles: Vec<ControlHandle>,
    connectors: Vec<Connector>,
}

impl ControlHandleSet {
    /// Spawn handles for every coordinate pair of `shape`
    ///
    /// Refuses shapes with more than `limit` commands, adding nothing to the
    /// host.
    pub fn spawn(host: &mut dyn Host, shape: EntityId, limit: usize) -> Result<Self, EditError> {
        let path = host.shape(shape).ok_or(EditError::ShapeMissing(shape))?;

        let count = path.len();
        if count > limit {
            tracing::warn!(
                "Shape {} has {} commands (limit {}), not spawning handles",
                shape,
                count,
                limit
            );
            return Err(EditError::TooComplex { count, limit });
        }

        let handles = build_handles(path);
        let connectors = build_connectors(path, &handles);

        for handle in &handles {
            host.add_proxy(Proxy::Handle(*handle));
        }
        for connector in &connectors {
            host.add_proxy(Proxy::Connector(*connector));
        }

        tracing::debug!(
            "Spawned {} handles and {} connectors for shape {}",
            handles.len(),
            connectors.len(),
            shape
        );

        Ok(Self {
            shape,
            handles,
            connectors,
        })
    }

    pub fn shape(&self) -> EntityId {
        self.shape
    }

    pub fn handles(&self) -> &[ControlHandle] {
        &self.handles
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn find(&self, id: EntityId) -> Option<&ControlHandle> {
        self.handles.iter().find(|h| h.id == id)
    }

    /// The handle for a particular command slot
    pub fn handle_at(&self, command_index: usize, role: HandleRole) -> Option<&ControlHandle> {
        self.handles
            .iter()
            .find(|h| h.command_index == command_index && h.role == role)
    }

    /// Move a handle to a world position, writing through to the shape
    ///
    /// The position is converted with the transform as it is at this moment,
    /// and only the handle's own slot changes. `local_origin` and `size`
    /// stay put until the shape is finalized.
    pub fn drag(&mut self, host: &mut dyn Host, id: EntityId, world: Point) -> Result<(), EditError> {
        let index = self
            .handles
            .iter()
            .position(|h| h.id == id)
            .ok_or(EditError::HandleNotFound(id))?;
        let ControlHandle {
            command_index,
            role,
            ..
        } = self.handles[index];

        let shape = host
            .shape_mut(self.shape)
            .ok_or(EditError::ShapeMissing(self.shape))?;
        let transform = shape.coordinate_transform();
        let local = transform.to_local(world);

        let written = shape
            .commands
            .get_mut(command_index)
            .is_some_and(|cmd| cmd.set_point(role, local));
        if !written {
            return Err(EditError::StaleHandle(id));
        }

        let position = transform.to_world(local);
        self.handles[index].position = position;

        host.mark_dirty(self.shape);
        host.update_proxy(Proxy::Handle(self.handles[index]));
        self.refresh_connectors(host);
        host.request_redraw();
        Ok(())
    }

    /// Recompute every handle position from the shape
    pub fn resync(&mut self, host: &mut dyn Host) -> Result<(), EditError> {
        let shape = host
            .shape(self.shape)
            .ok_or(EditError::ShapeMissing(self.shape))?;
        let transform = shape.coordinate_transform();

        for handle in &mut self.handles {
            let local = shape
                .commands
                .get(handle.command_index)
                .and_then(|cmd| cmd.point(handle.role))
                .ok_or(EditError::StaleHandle(handle.id))?;
            handle.position = transform.to_world(local);
        }

        for handle in &self.handles {
            host.update_proxy(Proxy::Handle(*handle));
        }
        self.refresh_connectors(host);
        host.request_redraw();
        Ok(())
    }

    /// Re-point every connector at its handles' current positions
    fn refresh_connectors(&mut self, host: &mut dyn Host) {
        let positions: HashMap<EntityId, Point> =
            self.handles.iter().map(|h| (h.id, h.position)).collect();

        for connector in &mut self.connectors {
            if let (Some(&control), Some(&anchor)) =
                (positions.get(&connector.control), positions.get(&connector.anchor))
            {
                connector.line = Line::new(control, anchor);
                host.update_proxy(Proxy::Connector(*connector));
            }
        }
    }

    /// Remove every proxy this set created
    pub fn remove_all(&mut self, host: &mut dyn Host) {
        for connector in self.connectors.drain(..) {
            host.remove_proxy(connector.id);
        }
        for handle in self.handles.drain(..) {
            host.remove_proxy(handle.id);
        }
    }
}

// ===== Construction =====

fn build_handles(shape: &PathShape) -> Vec<ControlHandle> {
    let transform = shape.coordinate_transform();
    let mut handles = Vec::new();

    for (command_index, cmd) in shape.commands.iter().enumerate() {
        for &role in cmd.roles() {
            let Some(local) = cmd.point(role) else {
                continue;
            };
            handles.push(ControlHandle {
                id: EntityId::next(),
                shape: shape.id,
                command_index,
                role,
                position: transform.to_world(local),
            });
        }
    }
    handles
}

/// Connectors follow SVG tangent semantics: a cubic's second control shapes
/// the tangent into its own anchor, its first control the tangent out of the
/// previous anchor; a quadratic's single control pairs with its own anchor.
fn build_connectors(shape: &PathShape, handles: &[ControlHandle]) -> Vec<Connector> {
    let find = |index: usize, role: HandleRole| {
        handles
            .iter()
            .find(|h| h.command_index == index && h.role == role)
    };

    let mut pairs = Vec::new();
    for (index, cmd) in shape.commands.iter().enumerate() {
        match cmd {
            PathCommand::QuadTo(..) => {
                pairs.push((find(index, HandleRole::Control1), find(index, HandleRole::Anchor)));
            }
            PathCommand::CurveTo(..) => {
                pairs.push((find(index, HandleRole::Control2), find(index, HandleRole::Anchor)));
                // After a Close there is no anchor handle to connect to
                let previous = index.checked_sub(1).and_then(|i| find(i, HandleRole::Anchor));
                pairs.push((find(index, HandleRole::Control1), previous));
            }
            _ => {}
        }
    }

    pairs
        .into_iter()
        .filter_map(|pair| match pair {
            (Some(control), Some(anchor)) => Some(Connector {
                id: EntityId::next(),
                control: control.id,
                anchor: anchor.id,
                line: Line::new(control.position, anchor.position),
            }),
            _ => None,
        })
        .collect()
}
