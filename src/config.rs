//! Codec configuration
//!
//! Defaults live in `geopoints.toml`, compiled into the crate and parsed once.
//! A user file with the same layout can override any subset of the keys.

use std::fs;
use lazy_static::lazy_static;
use log::warn;

use crate::codec::{geohash, polyline};
use crate::errors::{GeoError, GeoResult};

lazy_static! {
    // Parse the built-in defaults at first use
    static ref BUILTIN_CONFIG: GeoConfig = {
        let content = include_str!("../geopoints.toml");
        GeoConfig::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse built-in configuration: {}", e);
            GeoConfig::default()
        })
    };
}

/// Settings shared by the codecs and the CLI
#[derive(Debug, Clone, PartialEq)]
pub struct GeoConfig {
    /// Characters per geohash
    pub geohash_length: usize,
    /// Decimal digits kept by the polyline codec
    pub polyline_precision: u32,
    /// Separator between latitude and longitude in decoded output
    pub separator: String,
}

impl Default for GeoConfig {
    fn default() -> Self {
        GeoConfig {
            geohash_length: geohash::DEFAULT_LENGTH,
            polyline_precision: polyline::DEFAULT_PRECISION,
            separator: ",".to_string(),
        }
    }
}

impl GeoConfig {
    /// The defaults shipped in `geopoints.toml`
    pub fn builtin() -> Self {
        BUILTIN_CONFIG.clone()
    }

    /// Parse a configuration from a TOML string; missing keys keep their defaults
    pub fn from_str(content: &str) -> GeoResult<Self> {
        GeoConfig::default().merged_with(content)
    }

    /// Load the built-in defaults overridden by the TOML file at `path`
    pub fn from_file(path: &str) -> GeoResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::builtin().merged_with(&contents)
    }

    /// Apply the keys present in `content` on top of `self`
    fn merged_with(mut self, content: &str) -> GeoResult<Self> {
        let toml_table: toml::Table = content
            .parse()
            .map_err(|e| GeoError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        if let Some(length) = Self::get_integer(&toml_table, "geohash", "length")? {
            self.geohash_length = usize::try_from(length)
                .ok()
                .filter(|&l| l > 0)
                .ok_or_else(|| GeoError::ConfigError(format!("geohash.length must be positive, got {}", length)))?;
        }

        if let Some(precision) = Self::get_integer(&toml_table, "polyline", "precision")? {
            self.polyline_precision = u32::try_from(precision)
                .ok()
                .filter(|&p| p <= polyline::MAX_PRECISION)
                .ok_or_else(|| {
                    GeoError::ConfigError(format!(
                        "polyline.precision must be between 0 and {}, got {}",
                        polyline::MAX_PRECISION,
                        precision
                    ))
                })?;
        }

        if let Some(value) = toml_table.get("output").and_then(|t| t.get("separator")) {
            self.separator = value
                .as_str()
                .ok_or_else(|| GeoError::ConfigError("output.separator must be a string".to_string()))?
                .to_string();
        }

        Ok(self)
    }

    /// Helper to read an optional integer key from a table
    fn get_integer(toml_table: &toml::Table, table: &str, key: &str) -> GeoResult<Option<i64>> {
        match toml_table.get(table).and_then(|t| t.get(key)) {
            None => Ok(None),
            Some(value) => value
                .as_integer()
                .map(Some)
                .ok_or_else(|| GeoError::ConfigError(format!("{}.{} must be an integer", table, key))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_matches_defaults() {
        assert_eq!(GeoConfig::builtin(), GeoConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = GeoConfig::from_str("[geohash]\nlength = 11\n").unwrap();
        assert_eq!(config.geohash_length, 11);
        assert_eq!(config.polyline_precision, 5);
        assert_eq!(config.separator, ",");
    }

    #[test]
    fn test_full_override() {
        let config = GeoConfig::from_str(
            "[geohash]\nlength = 6\n[polyline]\nprecision = 6\n[output]\nseparator = \" \"\n",
        )
        .unwrap();
        assert_eq!(config.geohash_length, 6);
        assert_eq!(config.polyline_precision, 6);
        assert_eq!(config.separator, " ");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(GeoConfig::from_str("[geohash]\nlength = 0\n"), Err(GeoError::ConfigError(_))));
        assert!(matches!(GeoConfig::from_str("[polyline]\nprecision = 12\n"), Err(GeoError::ConfigError(_))));
        assert!(matches!(GeoConfig::from_str("[polyline]\nprecision = \"5\"\n"), Err(GeoError::ConfigError(_))));
        assert!(matches!(GeoConfig::from_str("not toml ["), Err(GeoError::ConfigError(_))));
    }
}
