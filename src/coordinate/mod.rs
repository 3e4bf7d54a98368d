//! Coordinate handling for geospatial data
//!
//! This module provides the point and point-sequence types, and the
//! bounding box a geohash cell resolves to.

mod bbox;
mod point;
mod sequence;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::Point;
pub use self::sequence::PointSequence;
