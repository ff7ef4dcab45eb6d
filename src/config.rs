//! Configuration structures for palette generation.
//!
//! This module groups the tunable parameters of the manipulation and
//! palette operations so a set of palettes can be reproduced from a file.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use colorama::{Color, PaletteConfig};
//! use std::path::Path;
//!
//! // Load from file
//! let config = PaletteConfig::from_json_file(Path::new("palette.json"))?;
//!
//! // Or use defaults
//! let config = PaletteConfig::default();
//! let palettes = config.generate(&Color::new("teal")?);
//! # Ok::<(), colorama::ColorError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`AdjustConfig`]: ratio used by [`PaletteConfig::adjusted`]
//! - [`AnalogousConfig`]: result count and wheel slices for analogous palettes
//! - [`MonochromaticConfig`]: result count for monochromatic palettes
//!
//! Any field missing from a JSON document takes its default value.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::{Color, Scheme};
use crate::constants::{adjust, harmony};
use crate::error::{ColorError, Result};

/// Complete palette configuration.
///
/// Can be serialized to/from JSON for reproducible palettes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Manipulation configuration
    pub adjust: AdjustConfig,

    /// Analogous palette configuration
    pub analogous: AnalogousConfig,

    /// Monochromatic palette configuration
    pub monochromatic: MonochromaticConfig,

    /// Palettes produced by [`PaletteConfig::generate`], in order
    pub schemes: Vec<Scheme>,
}

/// Parameters of the lighten/darken/saturate/desaturate operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustConfig {
    /// Fraction of the current channel added or removed
    pub ratio: f64,
}

/// Analogous palette parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalogousConfig {
    /// Number of colors, including the base color
    pub results: usize,

    /// Number of segments the hue wheel is divided into
    pub slices: usize,
}

/// Monochromatic palette parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonochromaticConfig {
    /// Number of colors, including the base color
    pub results: usize,
}

/// A relative HSL manipulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Adjustment {
    Lighten,
    Darken,
    Saturate,
    Desaturate,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            adjust: AdjustConfig::default(),
            analogous: AnalogousConfig::default(),
            monochromatic: MonochromaticConfig::default(),
            schemes: Scheme::ALL.to_vec(),
        }
    }
}

impl Default for AdjustConfig {
    fn default() -> Self {
        Self {
            ratio: adjust::DEFAULT_RATIO,
        }
    }
}

impl Default for AnalogousConfig {
    fn default() -> Self {
        Self {
            results: harmony::ANALOGOUS_RESULTS,
            slices: harmony::ANALOGOUS_SLICES,
        }
    }
}

impl Default for MonochromaticConfig {
    fn default() -> Self {
        Self {
            results: harmony::MONOCHROMATIC_RESULTS,
        }
    }
}

impl PaletteConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ColorError::config_io(path, e))?;
        let config = Self::from_json_str(&content)?;
        debug!("Loaded palette configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| ColorError::config_io(path, e))?;
        debug!("Saved palette configuration to {}", path.display());
        Ok(())
    }

    /// Build every configured palette for `base`
    ///
    /// # Returns
    ///
    /// One `(scheme, colors)` pair per entry of `schemes`, in order
    pub fn generate(&self, base: &Color) -> Vec<(Scheme, Vec<Color>)> {
        self.schemes
            .iter()
            .map(|&scheme| (scheme, base.scheme(scheme, self)))
            .collect()
    }

    /// Apply one manipulation with the configured ratio to a copy of `base`
    pub fn adjusted(&self, base: &Color, adjustment: Adjustment) -> Color {
        let ratio = self.adjust.ratio;
        base.adjusted(|color| match adjustment {
            Adjustment::Lighten => color.lighten(ratio),
            Adjustment::Darken => color.darken(ratio),
            Adjustment::Saturate => color.saturate(ratio),
            Adjustment::Desaturate => color.desaturate(ratio),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = PaletteConfig::default();
        assert_eq!(config.adjust.ratio, 0.5);
        assert_eq!(config.analogous.results, 6);
        assert_eq!(config.analogous.slices, 30);
        assert_eq!(config.monochromatic.results, 6);
        assert_eq!(config.schemes.len(), 5);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PaletteConfig::from_json_str(
            r#"{"analogous": {"results": 4}, "schemes": ["triad", "split_complement"]}"#,
        )
        .unwrap();
        assert_eq!(config.analogous.results, 4);
        assert_eq!(config.analogous.slices, 30);
        assert_eq!(config.monochromatic.results, 6);
        assert_eq!(config.schemes, vec![Scheme::Triad, Scheme::SplitComplement]);
    }

    #[test]
    fn test_invalid_json() {
        let err = PaletteConfig::from_json_str(r#"{"schemes": ["rainbow"]}"#).unwrap_err();
        assert!(matches!(err, ColorError::ConfigParse { .. }));
    }

    #[test]
    fn test_json_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("palette.json");

        let mut config = PaletteConfig::default();
        config.adjust.ratio = 0.25;
        config.schemes = vec![Scheme::Monochromatic];
        config.to_json_file(&path).unwrap();

        let loaded = PaletteConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = PaletteConfig::from_json_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ColorError::ConfigIo { .. }));
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_generate_follows_schemes() {
        let config = PaletteConfig {
            schemes: vec![Scheme::Tetrad, Scheme::Triad],
            ..PaletteConfig::default()
        };
        let base = Color::from_rgb(255, 0, 0);
        let palettes = config.generate(&base);

        assert_eq!(palettes.len(), 2);
        assert_eq!(palettes[0].0, Scheme::Tetrad);
        assert_eq!(palettes[0].1.len(), 4);
        assert_eq!(palettes[1].1, base.triad());
    }

    #[test]
    fn test_adjusted_uses_ratio() {
        let config = PaletteConfig {
            adjust: AdjustConfig { ratio: 1.0 },
            ..PaletteConfig::default()
        };
        let base = Color::from_rgb(255, 0, 0);

        assert_eq!(config.adjusted(&base, Adjustment::Lighten).hex(), "ffffff");
        assert_eq!(config.adjusted(&base, Adjustment::Darken).hex(), "000000");
        assert_eq!(config.adjusted(&base, Adjustment::Desaturate).hsl().s, 0.0);
        assert_eq!(base.hex(), "ff0000");
    }
}
