// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Cantilever stair: thin slabs on steel rods projecting from a side wall

use super::BuildOutput;
use crate::config::GeneratorConfig;
use crate::geometry::{Cursor, ElementRole, Rotation, SolidElement};
use crate::spec::{MaterialType, ValidatedSpec};
use nalgebra::{Point3, Vector3};
use tracing::debug;

pub(super) fn build(spec: ValidatedSpec<'_>, config: &GeneratorConfig) -> BuildOutput {
    let cfg = &config.cantilever;
    let risers = spec.total_risers();
    let half_width = spec.clear_width / 2.0;

    // Wall centre plane sits a standoff beyond the stair's inner edge
    let wall_x = half_width + cfg.wall_standoff;
    let wall_face = wall_x - cfg.wall_thickness / 2.0;
    let rod_length = wall_face - half_width;
    let rod_x = half_width + rod_length / 2.0;
    let rod_rotation = Rotation::aligning_y_to(&Vector3::x());

    debug!(steps = risers, rod_length, "laying cantilever");

    let mut elements = Vec::with_capacity(2 * risers as usize + 1);
    for i in 0..risers {
        let y = f64::from(i) * spec.rise;
        let z = f64::from(i) * spec.tread + spec.tread / 2.0;

        elements.push(SolidElement::cuboid(
            ElementRole::CantileverStep,
            Vector3::new(spec.clear_width, cfg.step_thickness, spec.tread),
            Point3::new(0.0, y, z),
            spec.material_type,
        ));
        elements.push(SolidElement::cylinder(
            ElementRole::SupportRod,
            cfg.rod_radius,
            rod_length,
            Point3::new(rod_x, y, z),
            rod_rotation,
            MaterialType::Steel,
        ));
    }

    let height = spec.total_height();
    let depth = f64::from(risers) * spec.tread;
    elements.push(SolidElement::cuboid(
        ElementRole::WallSlab,
        Vector3::new(cfg.wall_thickness, height, depth),
        Point3::new(wall_x, height / 2.0, depth / 2.0),
        spec.material_type,
    ));

    BuildOutput {
        elements,
        flights: Vec::new(),
        cursor: Cursor::new(0.0, height, depth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{validate, StaircaseSpec, Typology};
    use approx::assert_relative_eq;

    fn scenario_d() -> StaircaseSpec {
        let mut spec = StaircaseSpec::straight(1.0, 0.28, 0.18, 10);
        spec.typology = Typology::Cantilever;
        spec.waist_thickness = 0.0;
        spec
    }

    #[test]
    fn test_step_rod_wall_counts() {
        let spec = scenario_d();
        let output = build(validate(&spec).unwrap(), &GeneratorConfig::default());

        let count = |role| output.elements.iter().filter(|e| e.role == role).count();
        assert_eq!(count(ElementRole::CantileverStep), 10);
        assert_eq!(count(ElementRole::SupportRod), 10);
        assert_eq!(count(ElementRole::WallSlab), 1);
        assert_eq!(count(ElementRole::RiserFace), 0);
        assert!(output.flights.is_empty());
    }

    #[test]
    fn test_rods_bridge_step_edge_and_wall() {
        let spec = scenario_d();
        let config = GeneratorConfig::default();
        let output = build(validate(&spec).unwrap(), &config);

        let rod = output
            .elements
            .iter()
            .find(|e| e.role == ElementRole::SupportRod)
            .unwrap();
        assert_eq!(rod.material, MaterialType::Steel);

        let xs: Vec<f64> = rod.corners().iter().map(|p| p.x).collect();
        let min = xs.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(min, 0.5, epsilon = 1e-9);
        assert_relative_eq!(max, 0.5 + 0.15 - 0.05, epsilon = 1e-9);
    }

    #[test]
    fn test_step_placement() {
        let spec = scenario_d();
        let output = build(validate(&spec).unwrap(), &GeneratorConfig::default());

        let step = &output.elements[2 * 3];
        assert_eq!(step.role, ElementRole::CantileverStep);
        assert_relative_eq!(step.position.y, 3.0 * 0.18, epsilon = 1e-12);
        assert_relative_eq!(step.position.z, 3.0 * 0.28 + 0.14, epsilon = 1e-12);

        let wall = output.elements.last().unwrap();
        assert_eq!(wall.role, ElementRole::WallSlab);
        assert_relative_eq!(wall.position.x, 0.65, epsilon = 1e-12);
        assert_relative_eq!(output.cursor.y, 1.8, epsilon = 1e-9);
    }
}
