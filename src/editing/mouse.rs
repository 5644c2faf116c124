// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Input events delivered by the host, already in world space, and the
//! delegate trait tools implement to receive them

use super::session::EditSession;
use crate::host::Host;
use crate::model::EntityId;
use crate::settings::Settings;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A pointer event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MouseEvent {
    /// Pointer position in world coordinates
    pub pos: Point,
    /// Shape under the pointer, as picked by the host
    #[serde(default)]
    pub target: Option<EntityId>,
}

impl MouseEvent {
    pub fn new(pos: Point) -> Self {
        Self { pos, target: None }
    }

    pub fn on(pos: Point, target: EntityId) -> Self {
        Self {
            pos,
            target: Some(target),
        }
    }
}

/// Keys the engine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Enter,
    Escape,
}

/// Everything a tool may touch while handling an event
pub struct EditContext<'a> {
    pub host: &'a mut dyn Host,
    /// The open vertex edit session, if any
    pub session: &'a mut Option<EditSession>,
    pub settings: &'a Settings,
}

/// Receiver of pointer and key events
///
/// Every method defaults to doing nothing, so a tool implements only the
/// gestures it cares about.
pub trait MouseDelegate {
    fn left_down(&mut self, _event: MouseEvent, _ctx: &mut EditContext<'_>) {}

    fn left_up(&mut self, _event: MouseEvent, _ctx: &mut EditContext<'_>) {}

    fn mouse_moved(&mut self, _event: MouseEvent, _ctx: &mut EditContext<'_>) {}

    fn double_click(&mut self, _event: MouseEvent, _ctx: &mut EditContext<'_>) {}

    fn key_down(&mut self, _key: Key, _ctx: &mut EditContext<'_>) {}

    /// Abort whatever gesture is in progress
    fn cancel(&mut self, _ctx: &mut EditContext<'_>) {}
}
