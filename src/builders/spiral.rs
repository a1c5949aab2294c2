// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Spiral stair: one full revolution of wedge steps around a central pole

use super::BuildOutput;
use crate::config::GeneratorConfig;
use crate::geometry::{Cursor, ElementRole, Rotation, SolidElement};
use crate::spec::{MaterialType, ValidatedSpec};
use nalgebra::{Point2, Point3};
use std::f64::consts::TAU;
use tracing::debug;

/// Angle swept by each step
pub fn angle_per_step(total_risers: u32) -> f64 {
    TAU / f64::from(total_risers)
}

/// Triangle from the axis to the outer radius, spanning `±angle/2` around the
/// radial centerline. Local `x` is radial, with the origin on the outer
/// centerline point.
fn wedge_profile(radius: f64, angle: f64) -> Vec<Point2<f64>> {
    let (sin, cos) = (angle / 2.0).sin_cos();
    let rim_x = radius * cos - radius;
    vec![
        Point2::new(-radius, 0.0),
        Point2::new(rim_x, -radius * sin),
        Point2::new(rim_x, radius * sin),
    ]
}

pub(super) fn build(spec: ValidatedSpec<'_>, config: &GeneratorConfig) -> BuildOutput {
    let total = spec.total_risers();
    // Present and positive once validated
    let radius = spec.spiral_radius.unwrap_or_default();
    let angle = angle_per_step(total);
    let profile = wedge_profile(radius, angle);
    let height = spec.total_height();

    debug!(
        steps = total,
        angle_per_step = angle,
        radius,
        "laying spiral"
    );

    let mut elements: Vec<SolidElement> = (0..total)
        .map(|i| {
            let theta = f64::from(i) * angle;
            let (sin, cos) = theta.sin_cos();
            SolidElement::extrusion(
                ElementRole::SpiralStep,
                profile.clone(),
                spec.rise,
                Point3::new(cos * radius, f64::from(i) * spec.rise, sin * radius),
                Rotation::about_vertical(theta),
                spec.material_type,
            )
        })
        .collect();

    elements.push(SolidElement::cylinder(
        ElementRole::SupportPole,
        config.spiral.pole_radius,
        height,
        Point3::new(0.0, height / 2.0, 0.0),
        Rotation::identity(),
        MaterialType::Steel,
    ));

    let last = f64::from(total.saturating_sub(1)) * angle;
    BuildOutput {
        elements,
        flights: Vec::new(),
        cursor: Cursor::new(last.cos() * radius, height, last.sin() * radius),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{validate, StaircaseSpec, Typology};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn scenario_c() -> StaircaseSpec {
        let mut spec = StaircaseSpec::straight(1.0, 0.25, 0.175, 16);
        spec.typology = Typology::Spiral;
        spec.spiral_radius = Some(1.0);
        spec
    }

    #[test]
    fn test_full_revolution() {
        assert_relative_eq!(angle_per_step(16), PI / 8.0);
        assert_relative_eq!(angle_per_step(16) * 16.0, TAU);
        assert_relative_eq!(angle_per_step(7) * 7.0, TAU, epsilon = 1e-12);
    }

    #[test]
    fn test_step_eight_is_opposite_step_zero() {
        let spec = scenario_c();
        let output = build(validate(&spec).unwrap(), &GeneratorConfig::default());

        assert_eq!(output.elements.len(), 17);
        let first = &output.elements[0];
        let eighth = &output.elements[8];
        assert_relative_eq!(first.position.x, 1.0);
        assert_relative_eq!(eighth.position.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(eighth.position.z, 0.0, epsilon = 1e-12);
        assert_relative_eq!(eighth.rotation.angle, PI, epsilon = 1e-12);
        assert_relative_eq!(eighth.position.y, 8.0 * 0.175, epsilon = 1e-12);

        let last = &output.elements[15];
        assert_relative_eq!(last.position.y, 15.0 * 0.175, epsilon = 1e-12);
    }

    #[test]
    fn test_pole_spans_full_height() {
        let spec = scenario_c();
        let output = build(validate(&spec).unwrap(), &GeneratorConfig::default());

        let pole = output.elements.last().unwrap();
        assert_eq!(pole.role, ElementRole::SupportPole);
        assert_eq!(pole.material, MaterialType::Steel);
        assert_eq!(
            pole.shape,
            crate::geometry::Shape::Cylinder {
                radius: 0.1,
                height: 16.0 * 0.175
            }
        );
        assert!(output.flights.is_empty());
    }

    #[test]
    fn test_wedge_reaches_axis() {
        let spec = scenario_c();
        let output = build(validate(&spec).unwrap(), &GeneratorConfig::default());

        // Apex of every wedge lands on the rotation axis
        for step in output.elements.iter().filter(|e| e.role == ElementRole::SpiralStep) {
            let apex = step.corners()[0];
            assert_relative_eq!(apex.x, 0.0, epsilon = 1e-9);
            assert_relative_eq!(apex.z, 0.0, epsilon = 1e-9);
        }
    }
}
