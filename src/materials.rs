// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Material appearance lookup
//!
//! Maps a [`MaterialType`] to surface attributes a renderer can apply. A
//! caller-supplied [`MaterialPalette`] takes precedence over the built-in
//! defaults; missing entries fall back.

pub use crate::spec::MaterialType;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Surface attributes for one material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    /// sRGB hex, e.g. `#b8b4ac`
    pub color_hint: String,
    pub roughness: f32,
    pub metalness: f32,
    pub is_transparent: bool,
    pub opacity: f32,
}

impl Appearance {
    fn opaque(color: &str, roughness: f32, metalness: f32) -> Self {
        Self {
            color_hint: color.to_string(),
            roughness,
            metalness,
            is_transparent: false,
            opacity: 1.0,
        }
    }

    /// Built-in appearance for a material
    pub fn default_for(material: MaterialType) -> Self {
        match material {
            MaterialType::Concrete => Self::opaque("#b8b4ac", 0.9, 0.0),
            MaterialType::Timber => Self::opaque("#a0703c", 0.7, 0.0),
            MaterialType::Steel => Self::opaque("#8a9199", 0.35, 0.9),
            MaterialType::Glass => Self {
                color_hint: "#d6ecf3".to_string(),
                roughness: 0.05,
                metalness: 0.0,
                is_transparent: true,
                opacity: 0.35,
            },
        }
    }
}

/// Appearance overrides keyed by material
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialPalette(BTreeMap<MaterialType, Appearance>);

impl MaterialPalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, material: MaterialType, appearance: Appearance) -> Self {
        self.0.insert(material, appearance);
        self
    }

    pub fn get(&self, material: MaterialType) -> Option<&Appearance> {
        self.0.get(&material)
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse material palette")
    }

    /// Load a palette from a `.toml` or `.json` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read palette file: {:?}", path))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse palette file: {:?}", path))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse palette file: {:?}", path))
        }
    }
}

/// Resolves appearances, preferring palette overrides
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialResolver<'a> {
    palette: Option<&'a MaterialPalette>,
}

impl<'a> MaterialResolver<'a> {
    pub fn new(palette: Option<&'a MaterialPalette>) -> Self {
        Self { palette }
    }

    pub fn resolve(&self, material: MaterialType) -> Appearance {
        self.palette
            .and_then(|p| p.get(material))
            .cloned()
            .unwrap_or_else(|| Appearance::default_for(material))
    }

    /// Appearances for every distinct material in `materials`, in enum order
    pub fn resolve_all(
        &self,
        materials: impl IntoIterator<Item = MaterialType>,
    ) -> BTreeMap<MaterialType, Appearance> {
        materials
            .into_iter()
            .map(|m| (m, self.resolve(m)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let resolver = MaterialResolver::default();
        let glass = resolver.resolve(MaterialType::Glass);
        assert!(glass.is_transparent);
        assert!(glass.opacity < 1.0);

        let steel = resolver.resolve(MaterialType::Steel);
        assert!(steel.metalness > 0.5);
        assert!(!steel.is_transparent);
    }

    #[test]
    fn test_palette_overrides_and_falls_back() {
        let oak = Appearance::opaque("#6b4423", 0.6, 0.0);
        let palette = MaterialPalette::new().with(MaterialType::Timber, oak.clone());
        let resolver = MaterialResolver::new(Some(&palette));

        assert_eq!(resolver.resolve(MaterialType::Timber), oak);
        assert_eq!(
            resolver.resolve(MaterialType::Concrete),
            Appearance::default_for(MaterialType::Concrete)
        );
    }

    #[test]
    fn test_palette_from_toml() {
        let palette = MaterialPalette::from_toml_str(
            r##"
            [Glass]
            colorHint = "#ffffff"
            roughness = 0.0
            metalness = 0.0
            isTransparent = true
            opacity = 0.2
            "##,
        )
        .unwrap();

        let glass = palette.get(MaterialType::Glass).unwrap();
        assert_eq!(glass.color_hint, "#ffffff");
        assert_eq!(glass.opacity, 0.2);
        assert!(palette.get(MaterialType::Steel).is_none());
    }

    #[test]
    fn test_resolve_all_dedups() {
        let resolved = MaterialResolver::default().resolve_all([
            MaterialType::Steel,
            MaterialType::Concrete,
            MaterialType::Steel,
        ]);
        let keys: Vec<_> = resolved.keys().copied().collect();
        assert_eq!(keys, vec![MaterialType::Concrete, MaterialType::Steel]);
    }
}
