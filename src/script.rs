// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Event scripts: replay a recorded sequence of host events
//!
//! A script is a JSON object with a `steps` array. Each step names an
//! `action`; shapes are referred to by their index in the canvas draw order
//! at the time the step runs, since ids are only known once shapes exist.
//!
//! ```json
//! { "steps": [
//!     { "action": "tool", "tool": "pen" },
//!     { "action": "click", "at": { "x": 10, "y": 10 } },
//!     { "action": "click", "at": { "x": 110, "y": 10 } },
//!     { "action": "key", "key": "enter" }
//! ] }
//! ```

use crate::canvas::{Canvas, ShapeExport};
use crate::editing::{GeometryEvent, Key, MouseEvent};
use crate::editor::Editor;
use crate::host::Host;
use crate::model::{EntityId, ObjectTransform, PathShape, wire};
use crate::path;
use crate::tools::ToolId;
use anyhow::{Context, Result, anyhow, bail};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ===== Script Format =====

/// One scripted host event
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Switch the active tool
    Tool { tool: ToolId },
    /// Press and release at a point
    Click {
        at: Point,
        #[serde(default)]
        target: Option<usize>,
    },
    Down {
        at: Point,
        #[serde(default)]
        target: Option<usize>,
    },
    Up {
        at: Point,
        #[serde(default)]
        target: Option<usize>,
    },
    Move { at: Point },
    DoubleClick {
        at: Point,
        #[serde(default)]
        target: Option<usize>,
    },
    Key { key: Key },
    /// Add a shape from wire-format commands
    Install {
        commands: serde_json::Value,
        #[serde(default)]
        transform: Option<ObjectTransform>,
    },
    /// Enter vertex editing on a shape
    Edit { shape: usize },
    ExitEdit,
    /// Toggle line/curve at a command of the edited shape
    TogglePoint { index: usize },
    /// Open or close the edited shape
    ToggleClosed,
    /// Delete a shape from the canvas
    Remove { shape: usize },
}

/// A sequence of steps
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid event script")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {:?}", path))?;
        Self::from_json(&text).with_context(|| format!("In {}", path.display()))
    }

    /// Run every step against the canvas
    pub fn run(&self, editor: &mut Editor, canvas: &mut Canvas) -> Result<()> {
        for (index, step) in self.steps.iter().enumerate() {
            tracing::debug!("Step {}: {:?}", index, step);
            run_step(step, editor, canvas).with_context(|| format!("Step {} failed", index))?;
        }
        tracing::info!("Ran {} steps", self.steps.len());
        Ok(())
    }
}

fn shape_at(canvas: &Canvas, index: usize) -> Result<EntityId> {
    canvas
        .shapes()
        .get(index)
        .map(|shape| shape.id)
        .ok_or_else(|| anyhow!("No shape at index {} ({} shapes)", index, canvas.shapes().len()))
}

fn mouse_event(canvas: &Canvas, at: Point, target: Option<usize>) -> Result<MouseEvent> {
    Ok(MouseEvent {
        pos: at,
        target: target.map(|i| shape_at(canvas, i)).transpose()?,
    })
}

fn run_step(step: &Step, editor: &mut Editor, canvas: &mut Canvas) -> Result<()> {
    match *step {
        Step::Tool { tool } => editor.set_tool(canvas, tool),
        Step::Click { at, target } => {
            let event = mouse_event(canvas, at, target)?;
            editor.left_down(canvas, event);
            editor.left_up(canvas, event);
        }
        Step::Down { at, target } => {
            let event = mouse_event(canvas, at, target)?;
            editor.left_down(canvas, event);
        }
        Step::Up { at, target } => {
            let event = mouse_event(canvas, at, target)?;
            editor.left_up(canvas, event);
        }
        Step::Move { at } => editor.mouse_moved(canvas, MouseEvent::new(at)),
        Step::DoubleClick { at, target } => {
            let event = mouse_event(canvas, at, target)?;
            editor.double_click(canvas, event);
        }
        Step::Key { key } => editor.key_down(canvas, key),
        Step::Install {
            ref commands,
            transform,
        } => {
            let commands = wire::from_value(commands)?;
            let mut shape = PathShape::new(commands)?;
            path::finalize(&mut shape);
            if let Some(transform) = transform {
                shape.transform = transform;
            }
            let id = canvas.install_shape(shape);
            canvas.emit(GeometryEvent::Installed { shape: id });
        }
        Step::Edit { shape } => {
            let id = shape_at(canvas, shape)?;
            if let Err(e) = editor.enter_edit(canvas, id) {
                tracing::warn!("Cannot edit shape {}: {}", id, e);
            }
        }
        Step::ExitEdit => editor.exit_edit(canvas),
        Step::TogglePoint { index } => match editor.toggle_point_type(canvas, index) {
            Some(Ok(conversion)) => tracing::info!("Command {}: {:?}", index, conversion),
            Some(Err(e)) => tracing::warn!("Point toggle failed: {}", e),
            None => bail!("toggle_point needs an open edit session"),
        },
        Step::ToggleClosed => match editor.toggle_closed(canvas) {
            Some(Ok(closed)) => tracing::info!("Path closed: {}", closed),
            Some(Err(e)) => tracing::warn!("Close toggle failed: {}", e),
            None => bail!("toggle_closed needs an open edit session"),
        },
        Step::Remove { shape } => {
            let id = shape_at(canvas, shape)?;
            canvas.remove_shape(id);
            editor.shape_removed(canvas, id);
        }
    }
    Ok(())
}

// ===== Report =====

/// Final state of a scripted run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub shapes: Vec<ShapeExport>,
    /// Shape still in edit mode at the end, if any
    pub editing: Option<EntityId>,
    pub history_entries: usize,
}

impl Report {
    pub fn new(editor: &Editor, canvas: &Canvas) -> Result<Self> {
        Ok(Self {
            shapes: canvas.export()?,
            editing: editor.session().map(|s| s.shape()),
            history_entries: canvas.history().len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PathCommand;

    fn run(text: &str) -> (Editor, Canvas) {
        let mut editor = Editor::default();
        let mut canvas = Canvas::new();
        Script::from_json(text)
            .unwrap()
            .run(&mut editor, &mut canvas)
            .unwrap();
        (editor, canvas)
    }

    #[test]
    fn pen_script_builds_a_shape() {
        let (_, canvas) = run(r#"{ "steps": [
            { "action": "tool", "tool": "pen" },
            { "action": "click", "at": { "x": 10, "y": 10 } },
            { "action": "click", "at": { "x": 110, "y": 10 } },
            { "action": "move", "at": { "x": 200, "y": 200 } },
            { "action": "click", "at": { "x": 110, "y": 110 } },
            { "action": "key", "key": "enter" }
        ] }"#);

        let shapes = canvas.export().unwrap();
        assert_eq!(shapes.len(), 1);
        assert_eq!(
            shapes[0].commands,
            serde_json::json!([["M", 10.0, 10.0], ["L", 110.0, 10.0], ["L", 110.0, 110.0]])
        );
    }

    #[test]
    fn edit_script_converts_and_closes() {
        let (editor, canvas) = run(r#"{ "steps": [
            { "action": "install", "commands": [["M", 0, 0], ["L", 90, 0], ["L", 90, 90]] },
            { "action": "edit", "shape": 0 },
            { "action": "toggle_point", "index": 1 },
            { "action": "toggle_closed" },
            { "action": "exit_edit" }
        ] }"#);

        assert!(editor.session().is_none());
        let shape = &canvas.shapes()[0];
        assert!(matches!(shape.commands[1], PathCommand::CurveTo(..)));
        assert!(shape.is_closed());
        assert_eq!(canvas.proxy_count(), 0);
    }

    #[test]
    fn removing_edited_shape_cleans_up() {
        let (editor, canvas) = run(r#"{ "steps": [
            { "action": "install", "commands": [["M", 0, 0], ["L", 9, 0]] },
            { "action": "double_click", "at": { "x": 0, "y": 0 }, "target": 0 },
            { "action": "remove", "shape": 0 }
        ] }"#);
        assert!(editor.session().is_none());
        assert!(canvas.shapes().is_empty());
        assert_eq!(canvas.proxy_count(), 0);
    }

    #[test]
    fn bad_shape_reference_is_an_error() {
        let script = Script::from_json(r#"{ "steps": [ { "action": "edit", "shape": 3 } ] }"#).unwrap();
        let err = script
            .run(&mut Editor::default(), &mut Canvas::new())
            .unwrap_err();
        assert!(format!("{:#}", err).contains("No shape at index 3"));
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!(Script::from_json(r#"{ "steps": [ { "action": "explode" } ] }"#).is_err());
    }
}
