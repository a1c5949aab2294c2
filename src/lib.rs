// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Stairframe
//!
//! Parametric staircase solid-model generator. A [`StaircaseSpec`] is
//! validated, laid out by the builder for its typology, railed, given
//! material appearances and assembled into an immutable [`GeometryModel`]
//! of renderer-agnostic primitives.
//!
//! Generation is pure: no I/O, no shared state, and equal specs always
//! produce equal models.

pub mod assembly;
pub mod builders;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod handrail;
pub mod materials;
pub mod spec;

pub use assembly::{GeometryModel, ModelMetadata, ModelStats};
pub use config::GeneratorConfig;
pub use error::{
    ConfigurationError, DimensionError, Result, StairError, ValidationErrors, Violation,
};
pub use geometry::{ElementRole, Rotation, Shape, ShapeKind, SolidElement};
pub use handrail::HandrailSegment;
pub use materials::{Appearance, MaterialPalette, MaterialResolver};
pub use spec::{validate, MaterialType, StaircaseSpec, Typology, ValidatedSpec};

use tracing::info;

/// Generate a staircase with default constants and appearances
pub fn generate(spec: &StaircaseSpec) -> Result<GeometryModel> {
    StairGenerator::new().generate(spec)
}

/// Generator with configurable constants and an optional appearance palette
#[derive(Debug, Clone, Default)]
pub struct StairGenerator {
    config: GeneratorConfig,
    palette: Option<MaterialPalette>,
}

impl StairGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            palette: None,
        }
    }

    pub fn palette(mut self, palette: MaterialPalette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Validate, then build. Nothing is emitted for a rejected spec or an
    /// invalid configuration.
    pub fn generate(&self, spec: &StaircaseSpec) -> Result<GeometryModel> {
        self.config.validate()?;
        let validated = validate(spec)?;

        info!(
            typology = %spec.typology,
            flights = spec.num_flights,
            risers = spec.total_risers(),
            "generating staircase"
        );

        let built = builders::build(validated, &self.config);
        let rails = if spec.typology.has_handrail() {
            handrail::layout(
                &built.flights,
                spec.clear_width,
                &self.config.handrail,
                spec.material_type,
            )
        } else {
            handrail::HandrailLayout::default()
        };

        let resolver = MaterialResolver::new(self.palette.as_ref());
        let model = assembly::assemble(spec, built, rails, &resolver);

        info!(
            elements = model.len(),
            height = model.metadata().total_rise,
            "staircase generated"
        );
        Ok(model)
    }
}
