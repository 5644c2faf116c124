// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Path commands and their `[opcode, ...args]` wire shape.
//!
//! A `PathCommand` is one drawing instruction in path-local space. The
//! trailing point of every drawing command is its *anchor*; cubic and
//! quadratic commands additionally carry off-curve control points. Each
//! coordinate pair is addressed by a `HandleRole`, which is also how the
//! editing layer names the proxy it spawns for that pair.
//!
//! On the wire a command is a flat tuple: `["M", x, y]`, `["L", x, y]`,
//! `["C", c1x, c1y, c2x, c2y, x, y]`, `["Q", cx, cy, x, y]`, `["Z"]`.

use super::error::ModelError;
use kurbo::{PathEl, Point};
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ===== Handle Role =====

/// Which coordinate pair of a command a handle stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleRole {
    /// The on-path end point of the command
    Anchor,
    /// First control point (tangent at the segment start)
    Control1,
    /// Second control point of a cubic (tangent at the segment end)
    Control2,
}

impl HandleRole {
    /// Whether this role is an off-curve control point
    pub fn is_control(self) -> bool {
        !matches!(self, HandleRole::Anchor)
    }
}

// ===== Path Command =====

/// A single path drawing instruction, in path-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic bezier: control 1, control 2, anchor
    CurveTo(Point, Point, Point),
    /// Quadratic bezier: control, anchor
    QuadTo(Point, Point),
    Close,
}

impl PathCommand {
    /// Single-letter opcode used on the wire
    pub fn opcode(&self) -> char {
        match self {
            PathCommand::MoveTo(_) => 'M',
            PathCommand::LineTo(_) => 'L',
            PathCommand::CurveTo(..) => 'C',
            PathCommand::QuadTo(..) => 'Q',
            PathCommand::Close => 'Z',
        }
    }

    /// Number of numeric arguments the opcode takes
    pub fn arity(op: char) -> Option<usize> {
        match op {
            'M' | 'L' => Some(2),
            'C' => Some(6),
            'Q' => Some(4),
            'Z' => Some(0),
            _ => None,
        }
    }

    /// The point this command ends at, `None` for `Close`
    pub fn anchor(&self) -> Option<Point> {
        self.point(HandleRole::Anchor)
    }

    /// Coordinate pair addressed by `role`, if this command carries one
    pub fn point(&self, role: HandleRole) -> Option<Point> {
        match (*self, role) {
            (PathCommand::MoveTo(p), HandleRole::Anchor)
            | (PathCommand::LineTo(p), HandleRole::Anchor)
            | (PathCommand::CurveTo(_, _, p), HandleRole::Anchor)
            | (PathCommand::QuadTo(_, p), HandleRole::Anchor) => Some(p),
            (PathCommand::CurveTo(c1, _, _), HandleRole::Control1)
            | (PathCommand::QuadTo(c1, _), HandleRole::Control1) => Some(c1),
            (PathCommand::CurveTo(_, c2, _), HandleRole::Control2) => Some(c2),
            _ => None,
        }
    }

    /// Overwrite the coordinate pair addressed by `role`
    ///
    /// Returns false (and leaves the command untouched) when the command
    /// has no such slot.
    pub fn set_point(&mut self, role: HandleRole, value: Point) -> bool {
        let slot = match (self, role) {
            (PathCommand::MoveTo(p), HandleRole::Anchor)
            | (PathCommand::LineTo(p), HandleRole::Anchor)
            | (PathCommand::CurveTo(_, _, p), HandleRole::Anchor)
            | (PathCommand::QuadTo(_, p), HandleRole::Anchor)
            | (PathCommand::CurveTo(p, _, _), HandleRole::Control1)
            | (PathCommand::QuadTo(p, _), HandleRole::Control1)
            | (PathCommand::CurveTo(_, p, _), HandleRole::Control2) => p,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Roles carried by this command, anchor first
    pub fn roles(&self) -> &'static [HandleRole] {
        match self {
            PathCommand::MoveTo(_) | PathCommand::LineTo(_) => &[HandleRole::Anchor],
            PathCommand::CurveTo(..) => &[
                HandleRole::Anchor,
                HandleRole::Control1,
                HandleRole::Control2,
            ],
            PathCommand::QuadTo(..) => &[HandleRole::Anchor, HandleRole::Control1],
            PathCommand::Close => &[],
        }
    }

    /// Build a command from an opcode and its flat argument list
    pub fn from_tuple(op: char, args: &[f64]) -> Result<Self, ModelError> {
        let expected =
            Self::arity(op).ok_or_else(|| ModelError::UnknownOpcode(op.to_string()))?;
        if args.len() != expected {
            return Err(ModelError::Arity {
                op,
                expected,
                found: args.len(),
            });
        }

        let pt = |i: usize| Point::new(args[i], args[i + 1]);
        Ok(match op {
            'M' => PathCommand::MoveTo(pt(0)),
            'L' => PathCommand::LineTo(pt(0)),
            'C' => PathCommand::CurveTo(pt(0), pt(2), pt(4)),
            'Q' => PathCommand::QuadTo(pt(0), pt(2)),
            _ => PathCommand::Close,
        })
    }

    /// Flatten into opcode and argument list (wire order)
    pub fn to_tuple(&self) -> (char, Vec<f64>) {
        let args = match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => vec![p.x, p.y],
            PathCommand::CurveTo(c1, c2, p) => vec![c1.x, c1.y, c2.x, c2.y, p.x, p.y],
            PathCommand::QuadTo(c, p) => vec![c.x, c.y, p.x, p.y],
            PathCommand::Close => Vec::new(),
        };
        (self.opcode(), args)
    }

    /// Convert to a kurbo path element, offsetting every point by `-offset`
    pub fn to_path_el(&self, offset: kurbo::Vec2) -> PathEl {
        match *self {
            PathCommand::MoveTo(p) => PathEl::MoveTo(p - offset),
            PathCommand::LineTo(p) => PathEl::LineTo(p - offset),
            PathCommand::CurveTo(c1, c2, p) => {
                PathEl::CurveTo(c1 - offset, c2 - offset, p - offset)
            }
            PathCommand::QuadTo(c, p) => PathEl::QuadTo(c - offset, p - offset),
            PathCommand::Close => PathEl::ClosePath,
        }
    }
}

// ===== Wire Serialization =====

impl Serialize for PathCommand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (op, args) = self.to_tuple();
        let mut seq = serializer.serialize_seq(Some(args.len() + 1))?;
        seq.serialize_element(&op)?;
        for value in &args {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

struct CommandVisitor;

impl<'de> Visitor<'de> for CommandVisitor {
    type Value = PathCommand;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a path command tuple such as [\"L\", x, y]")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<PathCommand, A::Error> {
        let op: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;

        let mut args = Vec::with_capacity(6);
        while let Some(value) = seq.next_element::<f64>()? {
            args.push(value);
        }

        let mut chars = op.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(de::Error::custom(ModelError::UnknownOpcode(op)));
        };
        PathCommand::from_tuple(c, &args).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for PathCommand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(CommandVisitor)
    }
}
