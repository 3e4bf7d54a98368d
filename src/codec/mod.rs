//! Text encodings for point sequences
//!
//! This module provides the polyline and geohash codecs, both as plain
//! functions and as `PointCodec` strategies chosen through `CodecFactory`.

pub mod handler;
pub mod factory;
pub mod polyline;
pub mod geohash;
#[cfg(test)]
mod tests;

pub use handler::PointCodec;
pub use factory::CodecFactory;
pub use polyline::PolylineCodec;
pub use geohash::GeohashCodec;
