//! Point structure for representing a latitude/longitude pair

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::{GeoError, GeoResult};

/// A geographic point
///
/// Values are stored as given; no range clamping is applied. Two points are
/// equal when both coordinates are exactly equal as `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Point {
    /// Create a new point from latitude and longitude
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Point { latitude, longitude }
    }

    /// Create a point from an ordered `[lat, lon]` slice
    ///
    /// # Errors
    /// `GeoError::InvalidArgument` if the slice does not hold exactly two values
    pub fn from_pair(pair: &[f64]) -> GeoResult<Self> {
        match pair {
            [latitude, longitude] => Ok(Point::new(*latitude, *longitude)),
            _ => Err(GeoError::InvalidArgument(format!(
                "a point needs exactly 2 values (lat, lon), got {}",
                pair.len()
            ))),
        }
    }

    /// The point as an ordered `[lat, lon]` pair
    pub fn to_pair(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }

    // -0.0 and 0.0 compare equal, so they must hash and order alike
    fn key_value(value: f64) -> f64 {
        if value == 0.0 {
            0.0
        } else {
            value
        }
    }
}

// NaN coordinates break reflexivity; such points should not be used as map keys
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Self::key_value(self.latitude).to_bits().hash(state);
        Self::key_value(self.longitude).to_bits().hash(state);
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    /// Latitude first, then longitude, using the IEEE-754 total order with
    /// signed zeros folded together
    fn cmp(&self, other: &Self) -> Ordering {
        Self::key_value(self.latitude)
            .total_cmp(&Self::key_value(other.latitude))
            .then_with(|| Self::key_value(self.longitude).total_cmp(&Self::key_value(other.longitude)))
    }
}

impl From<[f64; 2]> for Point {
    fn from(pair: [f64; 2]) -> Self {
        Point::new(pair[0], pair[1])
    }
}

impl From<(f64, f64)> for Point {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Point::new(latitude, longitude)
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = GeoError;

    fn try_from(pair: &[f64]) -> GeoResult<Self> {
        Point::from_pair(pair)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_from_pair() {
        let point = Point::from_pair(&[-23.56649, -46.6538]).unwrap();
        assert_eq!(point, Point::new(-23.56649, -46.6538));
        assert_eq!(point.to_pair(), [-23.56649, -46.6538]);
    }

    #[test]
    fn test_from_pair_wrong_length() {
        assert!(matches!(Point::from_pair(&[1.0]), Err(GeoError::InvalidArgument(_))));
        assert!(matches!(Point::from_pair(&[1.0, 2.0, 3.0]), Err(GeoError::InvalidArgument(_))));
        assert!(Point::try_from(&[][..]).is_err());
    }

    #[test]
    fn test_equality_is_exact() {
        assert_eq!(Point::from([1.0, 2.0]), Point::from((1.0, 2.0)));
        assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 2.000_000_000_1));
    }

    #[test]
    fn test_hash_and_order() {
        let mut set = HashSet::new();
        set.insert(Point::new(0.0, 1.0));
        set.insert(Point::new(-0.0, 1.0));
        set.insert(Point::new(2.0, 1.0));
        assert_eq!(set.len(), 2);

        let mut points = vec![Point::new(2.0, 0.0), Point::new(1.0, 5.0), Point::new(1.0, -5.0)];
        points.sort();
        assert_eq!(points, vec![Point::new(1.0, -5.0), Point::new(1.0, 5.0), Point::new(2.0, 0.0)]);
    }

    #[test]
    fn test_signed_zero_order_agrees_with_eq() {
        let pairs = [
            (Point::new(0.0, 1.0), Point::new(-0.0, 1.0)),
            (Point::new(1.0, -0.0), Point::new(1.0, 0.0)),
            (Point::new(-0.0, -0.0), Point::new(0.0, 0.0)),
        ];
        for (a, b) in pairs {
            assert_eq!(a, b);
            assert_eq!(a.cmp(&b), Ordering::Equal);
            assert_eq!(b.cmp(&a), Ordering::Equal);
        }

        let mut tree = std::collections::BTreeSet::new();
        tree.insert(Point::new(0.0, 1.0));
        tree.insert(Point::new(-0.0, 1.0));
        assert_eq!(tree.len(), 1);
        assert!(Point::new(-0.0, 1.0) < Point::new(0.0, 2.0));
        assert!(Point::new(-1.0, 1.0) < Point::new(-0.0, 1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(-23.5658, -46.65313).to_string(), "-23.5658,-46.65313");
    }
}
