//! Polyline and geohash codecs for ordered latitude/longitude sequences
//!
//! ```
//! use geopoints::PointSequence;
//!
//! let points = PointSequence::from_flat(&[38.5, -120.2, 40.7, -120.95]).unwrap();
//! let polyline = points.to_polyline();
//! assert_eq!(polyline, "_p~iF~ps|U_ulLnnqC");
//! assert_eq!(PointSequence::from_polyline(&polyline).unwrap(), points);
//! ```

pub mod errors;
pub mod config;
pub mod coordinate;
pub mod codec;
pub mod commands;
pub mod utils;

pub use codec::{CodecFactory, GeohashCodec, PointCodec, PolylineCodec};
pub use config::GeoConfig;
pub use coordinate::{BoundingBox, Point, PointSequence};
pub use errors::{GeoError, GeoResult};
