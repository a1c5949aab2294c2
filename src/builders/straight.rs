// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Straight flights with optional intermediate landings

use super::{BuildOutput, FlightLayout};
use crate::config::GeneratorConfig;
use crate::geometry::{Cursor, FlightFrame};
use crate::spec::ValidatedSpec;

pub(super) fn build(spec: ValidatedSpec<'_>, config: &GeneratorConfig) -> BuildOutput {
    let layout = FlightLayout::new(&spec, config);
    let frame = FlightFrame::along_z();
    let last = spec.risers_per_flight.len().saturating_sub(1);

    let mut elements = Vec::with_capacity(3 * spec.total_risers() as usize + last);
    let mut flights = Vec::with_capacity(spec.num_flights);
    let mut cursor = Cursor::origin();

    for (index, &risers) in spec.risers_per_flight.iter().enumerate() {
        let trace = layout.flight(&frame, cursor, risers, &mut elements);
        flights.push(trace);
        cursor = trace.end;

        if index < last {
            let length = spec.landing_lengths[index];
            let width = spec.landing_widths[index];
            elements.push(layout.landing(&frame, cursor.point(), width, length));
            cursor = cursor.advance(&frame, length);
        }
    }

    BuildOutput {
        elements,
        flights,
        cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ElementRole;
    use crate::spec::{validate, MaterialType, StaircaseSpec, Typology};
    use approx::assert_relative_eq;

    fn scenario_a() -> StaircaseSpec {
        StaircaseSpec {
            typology: Typology::Straight,
            clear_width: 1.2,
            tread: 0.275,
            rise: 0.175,
            waist_thickness: 0.15,
            risers_per_flight: vec![8, 8],
            num_flights: 2,
            landing_lengths: vec![1.5],
            landing_widths: vec![1.2],
            spiral_radius: None,
            material_type: MaterialType::Concrete,
        }
    }

    #[test]
    fn test_cursor_conservation() {
        let spec = scenario_a();
        let output = build(validate(&spec).unwrap(), &GeneratorConfig::default());

        assert_relative_eq!(output.cursor.y, 2.8, epsilon = 1e-9);
        assert_relative_eq!(output.cursor.z, 5.9, epsilon = 1e-9);
        assert_eq!(output.cursor.x, 0.0);
    }

    #[test]
    fn test_landing_between_flights() {
        let spec = scenario_a();
        let output = build(validate(&spec).unwrap(), &GeneratorConfig::default());

        assert_eq!(output.elements.len(), 3 * 16 + 1);
        let landing = &output.elements[3 * 8];
        assert_eq!(landing.role, ElementRole::Landing);
        assert_relative_eq!(landing.position.z, 2.2 + 0.75, epsilon = 1e-9);
        assert_relative_eq!(landing.position.y, 1.4 - 0.075, epsilon = 1e-9);

        assert_eq!(output.flights.len(), 2);
        assert_relative_eq!(output.flights[1].start.z, 3.7, epsilon = 1e-9);
        assert_eq!(output.flights[0].end.y, output.flights[1].start.y);
    }

    #[test]
    fn test_single_flight_has_no_landing() {
        let spec = StaircaseSpec::straight(1.0, 0.25, 0.18, 12);
        let output = build(validate(&spec).unwrap(), &GeneratorConfig::default());

        assert_eq!(output.elements.len(), 36);
        assert!(output
            .elements
            .iter()
            .all(|e| e.role != ElementRole::Landing));
    }
}
