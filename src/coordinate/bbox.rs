//! Bounding box structure for geohash cells

use super::point::Point;

/// A latitude/longitude rectangle
///
/// Geohash decoding resolves each hash to one of these; the decoded point is
/// its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum latitude
    pub min_lat: f64,
    /// Minimum longitude
    pub min_lon: f64,
    /// Maximum latitude
    pub max_lat: f64,
    /// Maximum longitude
    pub max_lon: f64,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        BoundingBox {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        }
    }

    /// The whole globe, the starting cell of every geohash
    pub fn world() -> Self {
        BoundingBox::new(-90.0, -180.0, 90.0, 180.0)
    }

    /// Latitude extent in degrees
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Longitude extent in degrees
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Center point of the box
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Check if this bounding box contains a point (edges inclusive)
    pub fn contains(&self, point: &Point) -> bool {
        point.latitude >= self.min_lat && point.latitude <= self.max_lat &&
            point.longitude >= self.min_lon && point.longitude <= self.max_lon
    }
}
