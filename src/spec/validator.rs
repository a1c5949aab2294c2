// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Dimensional validation
//!
//! Collects every violation in one pass. Generation only accepts a
//! [`ValidatedSpec`], so nothing is built from a rejected description.

use super::{StaircaseSpec, Typology};
use crate::error::{ConfigurationError, DimensionError, ValidationErrors, Violation};
use std::ops::{Deref, RangeInclusive};
use tracing::{debug, warn};

/// Riser height bounds (m)
pub const RISE_RANGE: RangeInclusive<f64> = 0.12..=0.22;
/// Tread going bounds (m)
pub const TREAD_RANGE: RangeInclusive<f64> = 0.22..=0.35;
/// `2R + T` bounds (m)
pub const GOING_RANGE: RangeInclusive<f64> = 0.55..=0.70;
/// Largest riser count accepted for a single flight
pub const MAX_RISERS_PER_FLIGHT: u32 = 512;
/// Largest riser count accepted over all flights
pub const MAX_TOTAL_RISERS: u32 = 1024;

/// Absorbs representation error in derived values such as `2R + T`.
const BOUND_TOLERANCE: f64 = 1e-9;

/// A staircase description that passed [`validate`]
#[derive(Debug, Clone, Copy)]
pub struct ValidatedSpec<'a>(&'a StaircaseSpec);

impl<'a> ValidatedSpec<'a> {
    pub fn spec(&self) -> &'a StaircaseSpec {
        self.0
    }
}

impl Deref for ValidatedSpec<'_> {
    type Target = StaircaseSpec;

    fn deref(&self) -> &StaircaseSpec {
        self.0
    }
}

/// Check ergonomic and structural invariants. Never mutates the input.
pub fn validate(spec: &StaircaseSpec) -> Result<ValidatedSpec<'_>, ValidationErrors> {
    let mut violations = Vec::new();

    check_dimensions(spec, &mut violations);
    check_structure(spec, &mut violations);
    check_typology(spec, &mut violations);

    match ValidationErrors::new(violations) {
        None => {
            debug!(typology = %spec.typology, "staircase accepted");
            Ok(ValidatedSpec(spec))
        }
        Some(errors) => {
            warn!(
                typology = %spec.typology,
                violations = errors.violations().len(),
                "staircase rejected: {errors}"
            );
            Err(errors)
        }
    }
}

fn check_dimensions(spec: &StaircaseSpec, out: &mut Vec<Violation>) {
    check_range("rise", spec.rise, &RISE_RANGE, out);
    check_range("tread", spec.tread, &TREAD_RANGE, out);
    if spec.rise.is_finite() && spec.tread.is_finite() {
        check_range("2*rise + tread", spec.going(), &GOING_RANGE, out);
    }

    check_positive("clearWidth", spec.clear_width, out);

    // Cantilever steps have no waist, so any value there is ignored
    if spec.typology != Typology::Cantilever {
        if !spec.waist_thickness.is_finite() {
            out.push(DimensionError::NotFinite { field: "waistThickness" }.into());
        } else if spec.waist_thickness < 0.0 {
            out.push(
                DimensionError::Negative {
                    field: "waistThickness",
                    value: spec.waist_thickness,
                }
                .into(),
            );
        }
    }

    for &length in &spec.landing_lengths {
        check_positive("landingLengths", length, out);
    }
    for &width in &spec.landing_widths {
        check_positive("landingWidths", width, out);
    }
}

fn check_structure(spec: &StaircaseSpec, out: &mut Vec<Violation>) {
    if spec.num_flights == 0 {
        out.push(ConfigurationError::NoFlights.into());
        return;
    }

    if spec.risers_per_flight.len() != spec.num_flights {
        out.push(
            ConfigurationError::LengthMismatch {
                field: "risersPerFlight",
                expected: spec.num_flights,
                found: spec.risers_per_flight.len(),
            }
            .into(),
        );
    }

    for (flight, &risers) in spec.risers_per_flight.iter().enumerate() {
        if risers == 0 {
            out.push(ConfigurationError::EmptyFlight { flight }.into());
        } else if risers > MAX_RISERS_PER_FLIGHT {
            out.push(
                ConfigurationError::FlightTooLong {
                    flight,
                    found: risers,
                    max: MAX_RISERS_PER_FLIGHT,
                }
                .into(),
            );
        }
    }

    let total: u64 = spec.risers_per_flight.iter().map(|&r| u64::from(r)).sum();
    if total > u64::from(MAX_TOTAL_RISERS) {
        out.push(
            ConfigurationError::TooManyRisers {
                found: total,
                max: MAX_TOTAL_RISERS,
            }
            .into(),
        );
    }

    let landings = spec.num_flights - 1;
    for (field, found) in [
        ("landingLengths", spec.landing_lengths.len()),
        ("landingWidths", spec.landing_widths.len()),
    ] {
        if found != landings {
            out.push(
                ConfigurationError::LengthMismatch {
                    field,
                    expected: landings,
                    found,
                }
                .into(),
            );
        }
    }
}

fn check_typology(spec: &StaircaseSpec, out: &mut Vec<Violation>) {
    if let Some(expected) = spec.typology.required_flights() {
        if spec.num_flights != 0 && spec.num_flights != expected {
            out.push(
                ConfigurationError::FlightCount {
                    typology: spec.typology.as_str(),
                    expected,
                    found: spec.num_flights,
                }
                .into(),
            );
        }
    }

    if spec.typology == Typology::Spiral {
        match spec.spiral_radius {
            None => out.push(ConfigurationError::MissingSpiralRadius.into()),
            Some(radius) => check_positive("spiralRadius", radius, out),
        }
    }
}

fn check_range(
    field: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
    out: &mut Vec<Violation>,
) {
    if !value.is_finite() {
        out.push(DimensionError::NotFinite { field }.into());
    } else if value < range.start() - BOUND_TOLERANCE || value > range.end() + BOUND_TOLERANCE {
        out.push(
            DimensionError::OutOfRange {
                field,
                value,
                min: *range.start(),
                max: *range.end(),
            }
            .into(),
        );
    }
}

fn check_positive(field: &'static str, value: f64, out: &mut Vec<Violation>) {
    if !value.is_finite() {
        out.push(DimensionError::NotFinite { field }.into());
    } else if value <= 0.0 {
        out.push(DimensionError::NotPositive { field, value }.into());
    }
}
