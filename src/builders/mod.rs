// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Typology builders
//!
//! Each builder walks a [`Cursor`] from the origin and emits positioned solids
//! for one structural form. World frame: `y` up, the first flight climbs
//! along `+z` centred on `x = 0`.

mod cantilever;
mod spiral;
mod straight;
mod turned;

use crate::config::GeneratorConfig;
use crate::geometry::{Cursor, ElementRole, FlightFrame, SolidElement};
use crate::spec::{MaterialType, Typology, ValidatedSpec};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Cursor positions recorded at a flight's boundaries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightTrace {
    pub start: Cursor,
    pub end: Cursor,
}

/// Everything a builder produces for one staircase
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BuildOutput {
    pub elements: Vec<SolidElement>,
    /// Empty for forms without handrail support
    pub flights: Vec<FlightTrace>,
    /// Final leading edge
    pub cursor: Cursor,
}

/// Run the builder for the staircase's typology
pub fn build(spec: ValidatedSpec<'_>, config: &GeneratorConfig) -> BuildOutput {
    match spec.typology {
        Typology::Straight => straight::build(spec, config),
        Typology::LShaped => turned::build(spec, config, turned::Turn::Quarter),
        Typology::UShaped => turned::build(spec, config, turned::Turn::Half),
        Typology::Spiral => spiral::build(spec, config),
        Typology::Cantilever => cantilever::build(spec, config),
    }
}

/// Per-step emission shared by the straight and turned builders
struct FlightLayout {
    width: f64,
    rise: f64,
    tread: f64,
    waist: f64,
    riser_face: f64,
    material: MaterialType,
}

impl FlightLayout {
    fn new(spec: &ValidatedSpec<'_>, config: &GeneratorConfig) -> Self {
        Self {
            width: spec.clear_width,
            rise: spec.rise,
            tread: spec.tread,
            waist: spec.waist_thickness,
            riser_face: config.riser_face_thickness,
            material: spec.material_type,
        }
    }

    /// One step: waist slab, riser face and tread cap, plus the next cursor.
    ///
    /// The three solids overlap on purpose: the waist is the structural slab,
    /// the cap is the visible block and the riser face its front.
    fn step(&self, frame: &FlightFrame, cursor: Cursor) -> ([SolidElement; 3], Cursor) {
        let up = Vector3::y();
        let base = cursor.point();
        let half_tread = frame.forward * (self.tread / 2.0);

        let waist = SolidElement::cuboid(
            ElementRole::WaistSlab,
            frame.box_size(self.width, self.waist, self.tread),
            base + half_tread - up * (self.waist / 2.0),
            self.material,
        );
        let riser = SolidElement::cuboid(
            ElementRole::RiserFace,
            frame.box_size(self.width, self.rise, self.riser_face),
            base + up * (self.rise / 2.0),
            self.material,
        );
        let cap = SolidElement::cuboid(
            ElementRole::TreadCap,
            frame.box_size(self.width, self.rise, self.tread),
            base + half_tread + up * (self.rise / 2.0),
            self.material,
        );

        ([waist, riser, cap], cursor.climb(frame, self.rise, self.tread))
    }

    /// Fold `risers` steps from `start`, appending solids to `out`
    fn flight(
        &self,
        frame: &FlightFrame,
        start: Cursor,
        risers: u32,
        out: &mut Vec<SolidElement>,
    ) -> FlightTrace {
        let end = (0..risers).fold(start, |cursor, _| {
            let (solids, next) = self.step(frame, cursor);
            out.extend(solids);
            next
        });

        debug!(
            risers,
            start = ?start.point(),
            end = ?end.point(),
            "laid flight"
        );
        FlightTrace { start, end }
    }

    /// Flat slab whose top sits at the cursor height, `length` along the
    /// frame's direction from `near_edge_centre`.
    fn landing(
        &self,
        frame: &FlightFrame,
        near_edge_centre: Point3<f64>,
        width: f64,
        length: f64,
    ) -> SolidElement {
        debug!(width, length, "laid landing");
        SolidElement::cuboid(
            ElementRole::Landing,
            frame.box_size(width, self.waist, length),
            near_edge_centre + frame.forward * (length / 2.0) - Vector3::y() * (self.waist / 2.0),
            self.material,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{validate, StaircaseSpec};

    #[test]
    fn test_step_emits_three_solids() {
        let spec = StaircaseSpec::straight(1.2, 0.275, 0.175, 1);
        let validated = validate(&spec).unwrap();
        let layout = FlightLayout::new(&validated, &GeneratorConfig::default());

        let (solids, next) = layout.step(&FlightFrame::along_z(), Cursor::origin());
        let roles: Vec<ElementRole> = solids.iter().map(|s| s.role).collect();
        assert_eq!(
            roles,
            vec![
                ElementRole::WaistSlab,
                ElementRole::RiserFace,
                ElementRole::TreadCap
            ]
        );
        assert_eq!(next, Cursor::new(0.0, 0.175, 0.275));
        assert_eq!(solids[2].position, Point3::new(0.0, 0.0875, 0.1375));
    }

    #[test]
    fn test_dispatch_covers_every_typology() {
        for typology in Typology::ALL {
            let mut spec = StaircaseSpec::straight(1.0, 0.275, 0.175, 6);
            spec.typology = typology;
            if typology.required_flights() == Some(2) {
                spec.risers_per_flight = vec![6, 6];
                spec.num_flights = 2;
                spec.landing_lengths = vec![1.0];
                spec.landing_widths = vec![1.0];
            }
            if typology == Typology::Spiral {
                spec.spiral_radius = Some(1.0);
            }

            let validated = validate(&spec).unwrap();
            let output = build(validated, &GeneratorConfig::default());
            assert!(!output.elements.is_empty(), "{typology} produced nothing");
            assert_eq!(
                output.flights.is_empty(),
                !typology.has_handrail(),
                "{typology} flight traces"
            );
        }
    }
}
