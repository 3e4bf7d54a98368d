//! Factory for creating point codecs

use crate::config::GeoConfig;
use crate::errors::{GeoError, GeoResult};
use super::handler::PointCodec;
use super::polyline::PolylineCodec;
use super::geohash::GeohashCodec;

/// Factory for creating point codecs
pub struct CodecFactory;

impl CodecFactory {
    /// Create a codec by name, configured from `config`
    pub fn create_codec(name: &str, config: &GeoConfig) -> GeoResult<Box<dyn PointCodec>> {
        match name.to_lowercase().as_str() {
            "polyline" => Ok(Box::new(PolylineCodec::new(config.polyline_precision)?)),
            "geohash" => Ok(Box::new(GeohashCodec::new(config.geohash_length)?)),
            _ => Err(GeoError::InvalidArgument(format!("Unknown encoding: {}", name))),
        }
    }

    /// Get all available codecs with default settings
    pub fn available_codecs() -> Vec<Box<dyn PointCodec>> {
        vec![
            Box::new(PolylineCodec::default()),
            Box::new(GeohashCodec::default()),
        ]
    }
}
