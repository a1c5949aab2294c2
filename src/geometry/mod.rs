// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - solid primitives, placement and bounds

mod bbox;
mod cursor;
mod primitives;

pub use bbox::BoundingBox;
pub use cursor::{Cursor, FlightFrame};
pub use primitives::{ElementRole, Rotation, Shape, ShapeKind, SolidElement};
