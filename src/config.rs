// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Generator configuration
//!
//! Fixed modelling constants (rail height, pole radius, rod sizes...) with
//! TOML file loading and environment variable overrides.

use crate::error::ConfigurationError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const CONFIG_FILE: &str = "stairframe.toml";

/// Handrail and baluster constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandrailConfig {
    /// Vertical standoff of the rail above the tread line
    pub height: f64,
    pub rail_radius: f64,
    /// Horizontal interval between balusters
    pub baluster_spacing: f64,
    pub baluster_radius: f64,
}

impl Default for HandrailConfig {
    fn default() -> Self {
        Self {
            height: 0.9,
            rail_radius: 0.025,
            baluster_spacing: 0.25,
            baluster_radius: 0.015,
        }
    }
}

/// Spiral constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralConfig {
    pub pole_radius: f64,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self { pole_radius: 0.1 }
    }
}

/// Cantilever constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CantileverConfig {
    pub step_thickness: f64,
    pub rod_radius: f64,
    /// Gap between the stair's inner edge and the wall's centre plane
    pub wall_standoff: f64,
    pub wall_thickness: f64,
}

impl Default for CantileverConfig {
    fn default() -> Self {
        Self {
            step_thickness: 0.05,
            rod_radius: 0.02,
            wall_standoff: 0.15,
            wall_thickness: 0.1,
        }
    }
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Depth of the thin riser-face boxes
    pub riser_face_thickness: f64,
    pub handrail: HandrailConfig,
    pub spiral: SpiralConfig,
    pub cantilever: CantileverConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            riser_face_thickness: 0.02,
            handrail: HandrailConfig::default(),
            spiral: SpiralConfig::default(),
            cantilever: CantileverConfig::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: GeneratorConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `stairframe.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::new()
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        for (var, slot) in [
            ("STAIRFRAME_HANDRAIL_HEIGHT", &mut self.handrail.height),
            (
                "STAIRFRAME_BALUSTER_SPACING",
                &mut self.handrail.baluster_spacing,
            ),
            ("STAIRFRAME_POLE_RADIUS", &mut self.spiral.pole_radius),
        ] {
            if let Ok(raw) = std::env::var(var) {
                *slot = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{var} is not a number: {raw:?}"))?;
            }
        }
        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Every constant must be strictly positive and balusters must not touch
    pub fn validate(&self) -> std::result::Result<(), ConfigurationError> {
        let constants = [
            ("riser_face_thickness", self.riser_face_thickness),
            ("handrail.height", self.handrail.height),
            ("handrail.rail_radius", self.handrail.rail_radius),
            ("handrail.baluster_spacing", self.handrail.baluster_spacing),
            ("handrail.baluster_radius", self.handrail.baluster_radius),
            ("spiral.pole_radius", self.spiral.pole_radius),
            ("cantilever.step_thickness", self.cantilever.step_thickness),
            ("cantilever.rod_radius", self.cantilever.rod_radius),
            ("cantilever.wall_standoff", self.cantilever.wall_standoff),
            ("cantilever.wall_thickness", self.cantilever.wall_thickness),
        ];

        if let Some((name, value)) = constants
            .into_iter()
            .find(|(_, value)| !(value.is_finite() && *value > 0.0))
        {
            return Err(ConfigurationError::InvalidConstant { name, value });
        }

        let diameter = 2.0 * self.handrail.baluster_radius;
        if self.handrail.baluster_spacing <= diameter {
            return Err(ConfigurationError::BalusterSpacing {
                spacing: self.handrail.baluster_spacing,
                diameter,
            });
        }

        // Support rods need a gap between the stair edge and the wall face
        let rod_length = self.cantilever.wall_standoff - self.cantilever.wall_thickness / 2.0;
        if rod_length <= 0.0 {
            return Err(ConfigurationError::InvalidConstant {
                name: "cantilever.wall_standoff",
                value: self.cantilever.wall_standoff,
            });
        }
        Ok(())
    }
}
