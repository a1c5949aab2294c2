// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Staircase parameter model
//!
//! Field names serialize in camelCase and all lengths are meters.

mod validator;

pub use validator::{validate, ValidatedSpec, GOING_RANGE, RISE_RANGE, TREAD_RANGE};

use crate::error::{Result, StairError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Structural form of a staircase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Typology {
    Straight,
    LShaped,
    UShaped,
    Spiral,
    Cantilever,
}

impl Typology {
    pub const ALL: [Typology; 5] = [
        Typology::Straight,
        Typology::LShaped,
        Typology::UShaped,
        Typology::Spiral,
        Typology::Cantilever,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Typology::Straight => "Straight",
            Typology::LShaped => "LShaped",
            Typology::UShaped => "UShaped",
            Typology::Spiral => "Spiral",
            Typology::Cantilever => "Cantilever",
        }
    }

    /// Whether handrails and balusters are laid out for this form
    pub fn has_handrail(&self) -> bool {
        matches!(
            self,
            Typology::Straight | Typology::LShaped | Typology::UShaped
        )
    }

    /// Exact number of flights this form supports, if restricted
    pub fn required_flights(&self) -> Option<usize> {
        match self {
            Typology::Straight => None,
            Typology::LShaped | Typology::UShaped => Some(2),
            Typology::Spiral | Typology::Cantilever => Some(1),
        }
    }
}

impl fmt::Display for Typology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Typology {
    type Err = StairError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "straight" => Ok(Typology::Straight),
            "lshaped" => Ok(Typology::LShaped),
            "ushaped" => Ok(Typology::UShaped),
            "spiral" => Ok(Typology::Spiral),
            "cantilever" => Ok(Typology::Cantilever),
            _ => Err(StairError::UnsupportedTypology(s.to_string())),
        }
    }
}

impl TryFrom<String> for Typology {
    type Error = StairError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Typology> for String {
    fn from(typology: Typology) -> Self {
        typology.as_str().to_string()
    }
}

/// Construction material. Affects appearance only.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum MaterialType {
    #[default]
    Concrete,
    Timber,
    Steel,
    Glass,
}

impl MaterialType {
    pub const ALL: [MaterialType; 4] = [
        MaterialType::Concrete,
        MaterialType::Timber,
        MaterialType::Steel,
        MaterialType::Glass,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialType::Concrete => "Concrete",
            MaterialType::Timber => "Timber",
            MaterialType::Steel => "Steel",
            MaterialType::Glass => "Glass",
        }
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialType {
    type Err = StairError;

    fn from_str(s: &str) -> Result<Self> {
        MaterialType::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StairError::UnsupportedMaterial(s.to_string()))
    }
}

impl TryFrom<String> for MaterialType {
    type Error = StairError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<MaterialType> for String {
    fn from(material: MaterialType) -> Self {
        material.as_str().to_string()
    }
}

/// Input description of one staircase design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaircaseSpec {
    pub typology: Typology,
    pub clear_width: f64,
    pub tread: f64,
    pub rise: f64,
    #[serde(default)]
    pub waist_thickness: f64,
    pub risers_per_flight: Vec<u32>,
    pub num_flights: usize,
    #[serde(default)]
    pub landing_lengths: Vec<f64>,
    #[serde(default)]
    pub landing_widths: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spiral_radius: Option<f64>,
    #[serde(default)]
    pub material_type: MaterialType,
}

impl StaircaseSpec {
    /// Single-flight straight stair with no landings
    pub fn straight(clear_width: f64, tread: f64, rise: f64, risers: u32) -> Self {
        Self {
            typology: Typology::Straight,
            clear_width,
            tread,
            rise,
            waist_thickness: 0.15,
            risers_per_flight: vec![risers],
            num_flights: 1,
            landing_lengths: Vec::new(),
            landing_widths: Vec::new(),
            spiral_radius: None,
            material_type: MaterialType::Concrete,
        }
    }

    /// Parse a JSON description. An unknown typology or material is reported
    /// as [`StairError::UnsupportedTypology`] or
    /// [`StairError::UnsupportedMaterial`] rather than a generic parse failure.
    pub fn from_json(source: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(source)?;
        if let Some(name) = value.get("typology").and_then(|t| t.as_str()) {
            name.parse::<Typology>()?;
        }
        if let Some(name) = value.get("materialType").and_then(|m| m.as_str()) {
            name.parse::<MaterialType>()?;
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sum of risers over all flights, saturating at `u32::MAX`
    pub fn total_risers(&self) -> u32 {
        self.risers_per_flight
            .iter()
            .fold(0u32, |total, &risers| total.saturating_add(risers))
    }

    pub fn total_height(&self) -> f64 {
        f64::from(self.total_risers()) * self.rise
    }

    /// The `2R + T` going value
    pub fn going(&self) -> f64 {
        2.0 * self.rise + self.tread
    }
}
