// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Renderer-agnostic solid primitives
//!
//! Local frames: boxes and extrusions are measured along the local axes with
//! `y` up; cylinders run along local `y`. Box and cylinder positions are the
//! solid's centre. An extruded polygon's position is the origin of its profile
//! at the bottom face, and it extrudes upward by `depth`.

use crate::spec::MaterialType;
use nalgebra::{Point2, Point3, Unit, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// The three primitives every renderer can instantiate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Box,
    ExtrudedPolygon,
    Cylinder,
}

/// Shape with its dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Extents along local x (width), y (height), z (depth)
    Box { size: Vector3<f64> },
    /// Profile in the local x/z plane, extruded along local y
    ExtrudedPolygon {
        profile: Vec<Point2<f64>>,
        depth: f64,
    },
    Cylinder { radius: f64, height: f64 },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Box { .. } => ShapeKind::Box,
            Shape::ExtrudedPolygon { .. } => ShapeKind::ExtrudedPolygon,
            Shape::Cylinder { .. } => ShapeKind::Cylinder,
        }
    }

    /// Solid volume in cubic meters
    pub fn volume(&self) -> f64 {
        match self {
            Shape::Box { size } => size.x * size.y * size.z,
            Shape::ExtrudedPolygon { profile, depth } => polygon_area(profile) * depth,
            Shape::Cylinder { radius, height } => PI * radius * radius * height,
        }
    }

    /// Hull points in the local frame
    fn local_corners(&self) -> Vec<Point3<f64>> {
        match self {
            Shape::Box { size } => box_corners(*size),
            Shape::Cylinder { radius, height } => {
                box_corners(Vector3::new(2.0 * radius, *height, 2.0 * radius))
            }
            Shape::ExtrudedPolygon { profile, depth } => profile
                .iter()
                .flat_map(|p| [Point3::new(p.x, 0.0, p.y), Point3::new(p.x, *depth, p.y)])
                .collect(),
        }
    }
}

fn box_corners(size: Vector3<f64>) -> Vec<Point3<f64>> {
    let h = size / 2.0;
    let mut corners = Vec::with_capacity(8);
    for sx in [-1.0, 1.0] {
        for sy in [-1.0, 1.0] {
            for sz in [-1.0, 1.0] {
                corners.push(Point3::new(sx * h.x, sy * h.y, sz * h.z));
            }
        }
    }
    corners
}

/// Shoelace area of a simple polygon
fn polygon_area(profile: &[Point2<f64>]) -> f64 {
    let n = profile.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let a = profile[i];
            let b = profile[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice.abs() / 2.0
}

/// Axis-angle rotation applied about the element's position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub axis: Vector3<f64>,
    /// Radians, right-handed about `axis`
    pub angle: f64,
}

impl Rotation {
    pub fn identity() -> Self {
        Self {
            axis: Vector3::y(),
            angle: 0.0,
        }
    }

    /// Turn about the vertical axis such that positive angles carry local `+x`
    /// toward world `+z`, matching `(cos θ, sin θ)` placement in the x/z plane.
    pub fn about_vertical(angle: f64) -> Self {
        Self {
            axis: -Vector3::y(),
            angle,
        }
    }

    /// Rotation carrying local `+y` onto `direction`.
    pub fn aligning_y_to(direction: &Vector3<f64>) -> Self {
        UnitQuaternion::rotation_between(&Vector3::y(), direction)
            .map(Self::from_quaternion)
            // Antiparallel: half turn about any horizontal axis
            .unwrap_or(Self {
                axis: Vector3::x(),
                angle: PI,
            })
    }

    pub fn from_quaternion(q: UnitQuaternion<f64>) -> Self {
        match q.axis_angle() {
            Some((axis, angle)) => Self {
                axis: axis.into_inner(),
                angle,
            },
            None => Self::identity(),
        }
    }

    pub fn to_quaternion(&self) -> UnitQuaternion<f64> {
        if self.angle == 0.0 || self.axis.norm_squared() == 0.0 {
            return UnitQuaternion::identity();
        }
        UnitQuaternion::from_axis_angle(&Unit::new_normalize(self.axis), self.angle)
    }

    pub fn is_identity(&self) -> bool {
        self.angle == 0.0
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

/// What part of the staircase an element models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementRole {
    WaistSlab,
    RiserFace,
    TreadCap,
    Landing,
    Handrail,
    Baluster,
    SpiralStep,
    SupportPole,
    CantileverStep,
    SupportRod,
    WallSlab,
}

/// One immutable positioned primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidElement {
    pub role: ElementRole,
    pub shape: Shape,
    pub position: Point3<f64>,
    pub rotation: Rotation,
    pub material: MaterialType,
}

impl SolidElement {
    pub fn cuboid(
        role: ElementRole,
        size: Vector3<f64>,
        position: Point3<f64>,
        material: MaterialType,
    ) -> Self {
        Self {
            role,
            shape: Shape::Box { size },
            position,
            rotation: Rotation::identity(),
            material,
        }
    }

    pub fn cylinder(
        role: ElementRole,
        radius: f64,
        height: f64,
        position: Point3<f64>,
        rotation: Rotation,
        material: MaterialType,
    ) -> Self {
        Self {
            role,
            shape: Shape::Cylinder { radius, height },
            position,
            rotation,
            material,
        }
    }

    pub fn extrusion(
        role: ElementRole,
        profile: Vec<Point2<f64>>,
        depth: f64,
        position: Point3<f64>,
        rotation: Rotation,
        material: MaterialType,
    ) -> Self {
        Self {
            role,
            shape: Shape::ExtrudedPolygon { profile, depth },
            position,
            rotation,
            material,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// World-space hull points (rotation then translation)
    pub fn corners(&self) -> Vec<Point3<f64>> {
        let q = self.rotation.to_quaternion();
        self.shape
            .local_corners()
            .into_iter()
            .map(|p| self.position + q * p.coords)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_volumes() {
        let cube = Shape::Box {
            size: Vector3::new(2.0, 3.0, 4.0),
        };
        assert_relative_eq!(cube.volume(), 24.0);

        let rod = Shape::Cylinder {
            radius: 1.0,
            height: 2.0,
        };
        assert_relative_eq!(rod.volume(), 2.0 * PI);

        let wedge = Shape::ExtrudedPolygon {
            profile: vec![
                Point2::new(0.0, 0.0),
                Point2::new(2.0, 0.0),
                Point2::new(0.0, 2.0),
            ],
            depth: 0.5,
        };
        assert_relative_eq!(wedge.volume(), 1.0);
    }

    #[test]
    fn test_about_vertical_turns_x_toward_z() {
        let q = Rotation::about_vertical(FRAC_PI_2).to_quaternion();
        let v = q * Vector3::x();
        assert_relative_eq!(v, Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn test_aligning_y() {
        let dir = Vector3::new(0.0, 1.0, 1.0).normalize();
        let q = Rotation::aligning_y_to(&dir).to_quaternion();
        assert_relative_eq!(q * Vector3::y(), dir, epsilon = 1e-12);

        assert!(Rotation::aligning_y_to(&Vector3::y()).is_identity());
    }

    #[test]
    fn test_cylinder_corners_follow_rotation() {
        let rod = SolidElement::cylinder(
            ElementRole::SupportRod,
            0.1,
            2.0,
            Point3::new(5.0, 0.0, 0.0),
            Rotation::aligning_y_to(&Vector3::x()),
            MaterialType::Steel,
        );

        let xs: Vec<f64> = rod.corners().iter().map(|p| p.x).collect();
        let min = xs.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(min, 4.0, epsilon = 1e-12);
        assert_relative_eq!(max, 6.0, epsilon = 1e-12);
    }
}
