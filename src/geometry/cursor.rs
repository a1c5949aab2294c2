// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Layout cursor and flight frames

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Leading edge of the staircase on its centerline, at tread level.
///
/// A plain value: builders fold it through steps and landings and each call
/// returns the next cursor instead of mutating a shared one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cursor {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cursor {
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn point(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn offset(&self, delta: Vector3<f64>) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.z + delta.z)
    }

    /// Climb one step: up by `rise`, forward by `tread`
    pub fn climb(&self, frame: &FlightFrame, rise: f64, tread: f64) -> Self {
        self.offset(frame.forward * tread + Vector3::y() * rise)
    }

    /// Move horizontally along the frame's direction of travel
    pub fn advance(&self, frame: &FlightFrame, distance: f64) -> Self {
        self.offset(frame.forward * distance)
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::origin()
    }
}

impl From<Cursor> for Point3<f64> {
    fn from(cursor: Cursor) -> Self {
        cursor.point()
    }
}

/// Horizontal axes of one flight. Both vectors are unit length and world
/// axis-aligned, so boxes need no rotation: their extents are swapped instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightFrame {
    /// Direction of travel
    pub forward: Vector3<f64>,
    /// Horizontal perpendicular used for widths
    pub lateral: Vector3<f64>,
}

impl FlightFrame {
    /// Travel along `+z`, widths along `x`
    pub fn along_z() -> Self {
        Self {
            forward: Vector3::z(),
            lateral: Vector3::x(),
        }
    }

    /// Quarter turn: travel along `+x`, widths along `z`
    pub fn along_x() -> Self {
        Self {
            forward: Vector3::x(),
            lateral: Vector3::z(),
        }
    }

    /// Half turn: travel back along `-z`
    pub fn reversed(&self) -> Self {
        Self {
            forward: -self.forward,
            lateral: -self.lateral,
        }
    }

    /// World-axis box size from extents measured across, up and along the flight
    pub fn box_size(&self, across: f64, height: f64, along: f64) -> Vector3<f64> {
        let horizontal = self.lateral.abs() * across + self.forward.abs() * along;
        Vector3::new(horizontal.x, height, horizontal.z)
    }
}
