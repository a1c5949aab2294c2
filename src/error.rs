// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for staircase validation and generation

use std::fmt;
use thiserror::Error;

/// A numeric field violates an ergonomic or positivity bound.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DimensionError {
    /// Value lies outside the closed range `[min, max]`.
    #[error("{field} = {value} m is outside the allowed range [{min}, {max}] m")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Value must be strictly positive.
    #[error("{field} = {value} must be greater than zero")]
    NotPositive { field: &'static str, value: f64 },

    /// Value must not be negative.
    #[error("{field} = {value} must not be negative")]
    Negative { field: &'static str, value: f64 },

    /// NaN or infinity.
    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },
}

/// Structural mismatches and typology-specific preconditions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("numFlights must be at least 1")]
    NoFlights,

    #[error("{field} has {found} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("flight {flight} has no risers")]
    EmptyFlight { flight: usize },

    #[error("flight {flight} has {found} risers, at most {max} are supported")]
    FlightTooLong { flight: usize, found: u32, max: u32 },

    #[error("staircase has {found} risers in total, at most {max} are supported")]
    TooManyRisers { found: u64, max: u32 },

    #[error("{typology} staircases support exactly {expected} flight(s), got {found}")]
    FlightCount {
        typology: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("spiral staircases require spiralRadius")]
    MissingSpiralRadius,

    #[error("generator constant {name} = {value} must be greater than zero")]
    InvalidConstant { name: &'static str, value: f64 },

    #[error("baluster spacing {spacing} must exceed the baluster diameter {diameter}")]
    BalusterSpacing { spacing: f64, diameter: f64 },
}

/// One rejected aspect of a staircase description.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Every violation found in a single validation pass. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub(crate) fn new(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self(violations))
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    /// True if any violation is a [`DimensionError`]
    pub fn has_dimension_error(&self) -> bool {
        self.0.iter().any(|v| matches!(v, Violation::Dimension(_)))
    }

    /// True if any violation is a [`ConfigurationError`]
    pub fn has_configuration_error(&self) -> bool {
        self.0.iter().any(|v| matches!(v, Violation::Configuration(_)))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Crate-level error
#[derive(Debug, Error)]
pub enum StairError {
    #[error("staircase rejected: {0}")]
    Invalid(ValidationErrors),

    #[error("unsupported staircase typology `{0}`")]
    UnsupportedTypology(String),

    #[error("unsupported material `{0}`")]
    UnsupportedMaterial(String),

    #[error("invalid generator configuration: {0}")]
    Config(#[from] ConfigurationError),

    #[error("failed to parse staircase description: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<ValidationErrors> for StairError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Invalid(errors)
    }
}

impl StairError {
    /// Validation violations, if this is a validation failure
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Invalid(errors) => errors.violations(),
            _ => &[],
        }
    }
}

/// Result type for staircase operations.
pub type Result<T> = std::result::Result<T, StairError>;
