// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Engine settings and configuration constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, sizes) belongs in `theme.rs`.
//!
//! The constants are the compiled-in defaults. `Settings` carries the subset
//! that can be overridden at runtime from a TOML file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// EDIT MODE SETTINGS
// ============================================================================
/// Paths with more commands than this are refused for vertex editing
/// (brush strokes and traced outlines would spawn thousands of handles)
const MAX_EDITABLE_COMMANDS: usize = 200;

/// Pointer distance (world units) within which a handle counts as hit
const HANDLE_HIT_RADIUS: f64 = 8.0;

// ============================================================================
// PEN TOOL SETTINGS
// ============================================================================
/// Fewest committed vertices that produce a shape
const PEN_MIN_VERTICES: usize = 2;

// ============================================================================
// SHAPE GENERATOR SETTINGS
// ============================================================================
/// Default star placed by the shapes tool
const STAR_POINTS: usize = 5;
const STAR_OUTER_RADIUS: f64 = 50.0;
const STAR_INNER_RADIUS: f64 = 20.0;

// ============================================================================
// NUMERICS
// ============================================================================
/// Below this absolute determinant a transform is treated as singular
const MIN_DETERMINANT: f64 = 1e-12;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Vertex edit mode
pub mod editing {
    /// Command-count ceiling for entering edit mode
    pub const MAX_COMMANDS: usize = super::MAX_EDITABLE_COMMANDS;

    /// Handle hit radius in world units
    pub const HIT_RADIUS: f64 = super::HANDLE_HIT_RADIUS;
}

/// Pen tool
pub mod pen {
    pub const MIN_VERTICES: usize = super::PEN_MIN_VERTICES;
}

/// Shapes tool defaults
pub mod shapes {
    pub const STAR_POINTS: usize = super::STAR_POINTS;
    pub const STAR_OUTER_RADIUS: f64 = super::STAR_OUTER_RADIUS;
    pub const STAR_INNER_RADIUS: f64 = super::STAR_INNER_RADIUS;
}

/// Coordinate transform numerics
pub mod transform {
    pub const MIN_DETERMINANT: f64 = super::MIN_DETERMINANT;
}

// ============================================================================
// RUNTIME OVERRIDES
// ============================================================================

/// Runtime-tunable settings, defaulting to the constants above
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Command-count ceiling for entering edit mode
    pub max_editable_commands: usize,
    /// Handle hit radius in world units
    pub handle_hit_radius: f64,
    /// Star placed by the shapes tool: point count
    pub star_points: usize,
    pub star_outer_radius: f64,
    pub star_inner_radius: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_editable_commands: editing::MAX_COMMANDS,
            handle_hit_radius: editing::HIT_RADIUS,
            star_points: shapes::STAR_POINTS,
            star_outer_radius: shapes::STAR_OUTER_RADIUS,
            star_inner_radius: shapes::STAR_INNER_RADIUS,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text; missing keys keep their defaults
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid settings file")
    }

    /// Load settings from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        let settings = Self::from_toml(&text)?;
        tracing::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
