// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Whole-path operations: point-type conversion, bounding recompute and
//! procedural generation. These work on a `PathShape` directly and know
//! nothing about handles or hosts.

pub mod convert;
pub mod finalize;
pub mod generate;

pub use convert::{Conversion, DeclineReason, toggle_point_type};
pub use finalize::{finalize, toggle_closed};
pub use generate::{polygon_shape, regular_polygon, star_polygon};
