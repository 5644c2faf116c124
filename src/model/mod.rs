// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Path document model

pub mod command;
pub mod entity_id;
pub mod error;
pub mod shape;
pub mod transform;
pub mod wire;

pub use command::{HandleRole, PathCommand};
pub use entity_id::EntityId;
pub use error::ModelError;
pub use shape::PathShape;
pub use transform::{CoordinateTransform, ObjectTransform};
