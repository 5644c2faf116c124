// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Encoding and lenient decoding of whole command lists.
//!
//! Save/load and undo snapshots exchange a path as a JSON list of command
//! tuples. Encoding is exact (floats round-trip bit for bit). Decoding is
//! forgiving: a tuple with a bad opcode or argument count is dropped with a
//! warning so one corrupt entry never takes down a whole render pass.

use super::command::PathCommand;
use super::error::ModelError;
use serde::Deserialize;
use serde_json::Value;

/// Encode a command list as its JSON wire string
pub fn encode(commands: &[PathCommand]) -> Result<String, ModelError> {
    Ok(serde_json::to_string(commands)?)
}

/// Encode a command list as a JSON value
pub fn to_value(commands: &[PathCommand]) -> Result<Value, ModelError> {
    Ok(serde_json::to_value(commands)?)
}

/// Decode a JSON wire string, skipping malformed tuples
pub fn decode(text: &str) -> Result<Vec<PathCommand>, ModelError> {
    let value: Value = serde_json::from_str(text)?;
    from_value(&value)
}

/// Decode an already-parsed JSON value, skipping malformed tuples
pub fn from_value(value: &Value) -> Result<Vec<PathCommand>, ModelError> {
    let entries = value.as_array().ok_or(ModelError::NotAList)?;

    let mut commands = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match PathCommand::deserialize(entry) {
            Ok(cmd) => commands.push(cmd),
            Err(e) => {
                tracing::warn!("Skipping malformed path command #{}: {} ({})", index, entry, e);
            }
        }
    }
    Ok(commands)
}
