// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use peniko::Color;

// ============================================================================
// BASE COLORS
// ============================================================================
const BASE_A: Color = Color::from_rgb8(0x00, 0x00, 0x00);
const BASE_C: Color = Color::from_rgb8(0x33, 0x33, 0x33);
const BASE_H: Color = Color::from_rgb8(0x88, 0x88, 0x88);
const BASE_L: Color = Color::from_rgb8(0xcc, 0xcc, 0xcc);
const BASE_O: Color = Color::from_rgb8(0xff, 0xff, 0xff);

// ============================================================================
// SHAPES
// ============================================================================
const SHAPE_STROKE: Color = BASE_A;
const SHAPE_STROKE_WIDTH: f64 = 2.0;
/// Applied when an unfilled path is closed, so the closure is visible
const CLOSED_SHAPE_FILL: Color = BASE_L;

// ============================================================================
// EDIT HANDLES
// ============================================================================
const ANCHOR_FILL: Color = BASE_O;
const CONTROL_FILL: Color = Color::from_rgb8(0xff, 0x44, 0x44);
const HANDLE_OUTLINE: Color = BASE_C;
const ANCHOR_RADIUS: f64 = 6.0;
const CONTROL_RADIUS: f64 = 4.0;
const SELECTED_HANDLE_FILL: Color = Color::from_rgb8(0x3b, 0x82, 0xf6);

// Connector guide lines between control points and anchors
const CONNECTOR_COLOR: Color = BASE_H;
const CONNECTOR_DASH: [f64; 2] = [3.0, 3.0];

// ============================================================================
// PEN PREVIEW
// ============================================================================
const PEN_PREVIEW_STROKE: Color = BASE_A;
const PEN_PREVIEW_WIDTH: f64 = 2.0;

// ============================================================================
// PUBLIC API
// ============================================================================

pub mod shape {
    use super::Color;

    pub const STROKE: Color = super::SHAPE_STROKE;
    pub const STROKE_WIDTH: f64 = super::SHAPE_STROKE_WIDTH;
    pub const CLOSED_FILL: Color = super::CLOSED_SHAPE_FILL;
}

pub mod handle {
    use super::Color;

    pub const ANCHOR_FILL: Color = super::ANCHOR_FILL;
    pub const CONTROL_FILL: Color = super::CONTROL_FILL;
    pub const SELECTED_FILL: Color = super::SELECTED_HANDLE_FILL;
    pub const OUTLINE: Color = super::HANDLE_OUTLINE;
    pub const ANCHOR_RADIUS: f64 = super::ANCHOR_RADIUS;
    pub const CONTROL_RADIUS: f64 = super::CONTROL_RADIUS;
}

pub mod connector {
    use super::Color;

    pub const COLOR: Color = super::CONNECTOR_COLOR;
    pub const DASH: [f64; 2] = super::CONNECTOR_DASH;
}

pub mod pen_preview {
    use super::Color;

    pub const STROKE: Color = super::PEN_PREVIEW_STROKE;
    pub const WIDTH: f64 = super::PEN_PREVIEW_WIDTH;
}

/// CSS hex notation for a color (`#rrggbb`, alpha dropped)
pub fn to_hex(color: Color) -> String {
    let c = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}
