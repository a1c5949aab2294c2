// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Handrail and baluster layout derived from flight boundary points

use crate::builders::FlightTrace;
use crate::config::HandrailConfig;
use crate::geometry::{ElementRole, Rotation, SolidElement};
use crate::spec::MaterialType;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Slack for spacing divisions that land exactly on the flight end
const SPACING_TOLERANCE: f64 = 1e-9;

/// Centerline of one flight's railing, at tread level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandrailSegment {
    pub start_center: Point3<f64>,
    pub end_center: Point3<f64>,
    /// Distance between the two parallel rails
    pub width: f64,
}

impl HandrailSegment {
    pub fn from_trace(trace: &FlightTrace, width: f64) -> Self {
        Self {
            start_center: trace.start.point(),
            end_center: trace.end.point(),
            width,
        }
    }

    pub fn delta(&self) -> Vector3<f64> {
        self.end_center - self.start_center
    }

    /// 3D rail length
    pub fn length(&self) -> f64 {
        self.delta().norm()
    }

    pub fn horizontal_length(&self) -> f64 {
        let d = self.delta();
        d.x.hypot(d.z)
    }

    /// Pitch of the rail above horizontal, radians
    pub fn tilt(&self) -> f64 {
        self.delta().y.atan2(self.horizontal_length())
    }

    /// Horizontal unit vector across the flight
    pub fn lateral(&self) -> Vector3<f64> {
        let d = self.delta();
        let horizontal = Vector3::new(d.x, 0.0, d.z);
        if horizontal.norm_squared() == 0.0 {
            return Vector3::x();
        }
        Vector3::y().cross(&horizontal.normalize())
    }

    /// Balusters per rail: one at the start, then one every `spacing`.
    /// Zero when the run or the spacing is degenerate.
    pub fn baluster_count(&self, spacing: f64) -> usize {
        let horizontal = self.horizontal_length();
        if !(horizontal > 0.0 && spacing > 0.0) {
            return 0;
        }
        let intervals = (horizontal / spacing + SPACING_TOLERANCE).floor();
        if !intervals.is_finite() {
            return 0;
        }
        (intervals as usize).saturating_add(1)
    }
}

/// Segments and solids for the railings of the given flights
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HandrailLayout {
    pub segments: Vec<HandrailSegment>,
    pub elements: Vec<SolidElement>,
}

/// Two rails per flight at `config.height` above the tread line, offset
/// `±width/2` from the centerline, with balusters down to tread level.
pub fn layout(
    flights: &[FlightTrace],
    width: f64,
    config: &HandrailConfig,
    material: MaterialType,
) -> HandrailLayout {
    let mut result = HandrailLayout::default();

    for trace in flights {
        let segment = HandrailSegment::from_trace(trace, width);
        let length = segment.length();
        let delta = segment.delta();
        let lift = Vector3::y() * config.height;
        let sides = [-1.0, 1.0].map(|s| segment.lateral() * (s * width / 2.0));

        debug!(
            length,
            tilt = segment.tilt(),
            balusters = segment.baluster_count(config.baluster_spacing),
            "laid handrail segment"
        );

        if length > 0.0 {
            let midpoint = nalgebra::center(&segment.start_center, &segment.end_center);
            let rotation = Rotation::aligning_y_to(&(delta / length));
            for offset in sides {
                result.elements.push(SolidElement::cylinder(
                    ElementRole::Handrail,
                    config.rail_radius,
                    length,
                    midpoint + offset + lift,
                    rotation,
                    material,
                ));
            }
        }

        let horizontal = segment.horizontal_length();
        let count = segment.baluster_count(config.baluster_spacing);
        for offset in sides {
            for k in 0..count {
                let along = k as f64 * config.baluster_spacing;
                let tread_point = segment.start_center + delta * (along / horizontal);
                result.elements.push(SolidElement::cylinder(
                    ElementRole::Baluster,
                    config.baluster_radius,
                    config.height,
                    tread_point + offset + lift / 2.0,
                    Rotation::identity(),
                    material,
                ));
            }
        }

        result.segments.push(segment);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Cursor;
    use approx::assert_relative_eq;

    fn flight() -> FlightTrace {
        FlightTrace {
            start: Cursor::new(0.0, 0.0, 0.0),
            end: Cursor::new(0.0, 1.2, 1.6),
        }
    }

    #[test]
    fn test_segment_measures() {
        let segment = HandrailSegment::from_trace(&flight(), 1.0);
        assert_relative_eq!(segment.length(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(segment.horizontal_length(), 1.6);
        assert_relative_eq!(segment.tilt(), (1.2f64).atan2(1.6), epsilon = 1e-12);
        assert_relative_eq!(segment.lateral(), Vector3::x());
    }

    #[test]
    fn test_baluster_spacing() {
        let segment = HandrailSegment::from_trace(&flight(), 1.0);
        // 0.0, 0.4, 0.8, 1.2, 1.6
        assert_eq!(segment.baluster_count(0.4), 5);
        assert_eq!(segment.baluster_count(0.5), 4);
    }

    #[test]
    fn test_degenerate_spacing_places_no_balusters() {
        let segment = HandrailSegment::from_trace(&flight(), 1.0);
        assert_eq!(segment.baluster_count(0.0), 0);
        assert_eq!(segment.baluster_count(-0.25), 0);
        assert_eq!(segment.baluster_count(f64::NAN), 0);
        assert_eq!(segment.baluster_count(f64::MIN_POSITIVE), 0);
    }

    #[test]
    fn test_two_rails_and_balusters() {
        let config = HandrailConfig::default();
        let result = layout(&[flight()], 1.0, &config, MaterialType::Timber);

        let rails: Vec<_> = result
            .elements
            .iter()
            .filter(|e| e.role == ElementRole::Handrail)
            .collect();
        assert_eq!(rails.len(), 2);
        assert_relative_eq!(rails[0].position.x, -0.5);
        assert_relative_eq!(rails[1].position.x, 0.5);
        assert_relative_eq!(rails[0].position.y, 0.6 + 0.9, epsilon = 1e-12);

        let q = rails[0].rotation.to_quaternion();
        assert_relative_eq!(
            q * Vector3::y(),
            Vector3::new(0.0, 0.6, 0.8),
            epsilon = 1e-12
        );

        // 1.6 / 0.25 = 6.4 -> 7 per side
        let balusters = result.elements.len() - rails.len();
        assert_eq!(balusters, 14);
        assert_eq!(result.segments.len(), 1);
    }

    #[test]
    fn test_baluster_stands_on_tread_line() {
        let config = HandrailConfig::default();
        let result = layout(&[flight()], 1.0, &config, MaterialType::Steel);

        let baluster = result
            .elements
            .iter()
            .filter(|e| e.role == ElementRole::Baluster)
            .nth(4)
            .unwrap();
        // k = 4: 1.0 m along, 0.75 m up the pitch
        assert_relative_eq!(baluster.position.z, 1.0, epsilon = 1e-12);
        assert_relative_eq!(baluster.position.y, 0.75 + 0.45, epsilon = 1e-12);
        assert!(baluster.rotation.is_identity());
    }
}
