// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Vertex editing: handles, sessions, events and history

pub mod edit_types;
pub mod error;
pub mod events;
pub mod handles;
pub mod history;
pub mod hit_test;
pub mod mouse;
pub mod selection;
pub mod session;

pub use edit_types::EditType;
pub use error::EditError;
pub use events::{EventBus, GeometryEvent, GeometryListener};
pub use handles::{Connector, ControlHandle, ControlHandleSet};
pub use history::{HistoryEntry, HistoryRecorder};
pub use hit_test::HitTestResult;
pub use mouse::{EditContext, Key, MouseDelegate, MouseEvent};
pub use selection::Selection;
pub use session::EditSession;
