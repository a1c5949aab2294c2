// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry assembly - the ordered output model handed to renderers

use crate::builders::BuildOutput;
use crate::geometry::{BoundingBox, ElementRole, ShapeKind, SolidElement};
use crate::handrail::{HandrailLayout, HandrailSegment};
use crate::materials::{Appearance, MaterialResolver, MaterialType};
use crate::spec::{StaircaseSpec, Typology};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Facts about a generated staircase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub typology: Typology,
    pub flight_count: usize,
    pub total_risers: u32,
    /// Height climbed from the ground to the final cursor
    pub total_rise: f64,
    /// Horizontal distance from the origin to the final cursor
    pub horizontal_run: f64,
    /// Leading edge after the last step or landing
    pub final_cursor: Point3<f64>,
    pub handrail_segments: Vec<HandrailSegment>,
    pub bounds: BoundingBox,
}

/// Generated staircase. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryModel {
    elements: Vec<SolidElement>,
    appearances: BTreeMap<MaterialType, Appearance>,
    metadata: ModelMetadata,
}

/// Element counts and quantity take-off
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStats {
    pub element_count: usize,
    pub by_role: BTreeMap<ElementRole, usize>,
    pub by_shape: BTreeMap<String, usize>,
    /// Solid volume per material, cubic meters. Overlapping solids are
    /// counted once each.
    pub volume_by_material: BTreeMap<MaterialType, f64>,
}

impl GeometryModel {
    pub fn elements(&self) -> &[SolidElement] {
        &self.elements
    }

    pub fn appearances(&self) -> &BTreeMap<MaterialType, Appearance> {
        &self.appearances
    }

    pub fn appearance(&self, material: MaterialType) -> Option<&Appearance> {
        self.appearances.get(&material)
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements playing `role`, in emission order
    pub fn with_role(&self, role: ElementRole) -> impl Iterator<Item = &SolidElement> + '_ {
        self.elements.iter().filter(move |e| e.role == role)
    }

    pub fn count(&self, role: ElementRole) -> usize {
        self.with_role(role).count()
    }

    pub fn stats(&self) -> ModelStats {
        let mut by_role = BTreeMap::new();
        let mut by_shape = BTreeMap::new();
        let mut volume_by_material = BTreeMap::new();

        for element in &self.elements {
            *by_role.entry(element.role).or_insert(0) += 1;
            *by_shape.entry(shape_name(element.kind()).to_string()).or_insert(0) += 1;
            *volume_by_material.entry(element.material).or_insert(0.0) += element.shape.volume();
        }

        ModelStats {
            element_count: self.elements.len(),
            by_role,
            by_shape,
            volume_by_material,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn shape_name(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Box => "box",
        ShapeKind::ExtrudedPolygon => "extruded_polygon",
        ShapeKind::Cylinder => "cylinder",
    }
}

/// Concatenate builder and handrail solids into one model, resolving the
/// appearance of every material used.
pub fn assemble(
    spec: &StaircaseSpec,
    built: BuildOutput,
    rails: HandrailLayout,
    resolver: &MaterialResolver<'_>,
) -> GeometryModel {
    let BuildOutput {
        mut elements,
        flights,
        cursor,
    } = built;
    elements.extend(rails.elements);

    let appearances = resolver.resolve_all(elements.iter().map(|e| e.material));
    let bounds = BoundingBox::from_elements(&elements);

    debug!(
        elements = elements.len(),
        materials = appearances.len(),
        traced_flights = flights.len(),
        "assembled model"
    );

    let metadata = ModelMetadata {
        typology: spec.typology,
        flight_count: spec.num_flights,
        total_risers: spec.total_risers(),
        total_rise: cursor.y,
        horizontal_run: cursor.x.hypot(cursor.z),
        final_cursor: cursor.point(),
        handrail_segments: rails.segments,
        bounds,
    };

    GeometryModel {
        elements,
        appearances,
        metadata,
    }
}
