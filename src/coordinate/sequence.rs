//! Ordered, immutable sequence of points

use std::slice;
use std::vec;

use log::debug;

use super::point::Point;
use crate::codec::{geohash, polyline};
use crate::errors::{GeoError, GeoResult};

/// An ordered list of points with polyline and geohash conversions
///
/// Indexed access never panics: out-of-range lookups, and `first`/`last` on
/// an empty sequence, return `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PointSequence {
    points: Vec<Point>,
}

impl PointSequence {
    /// Create an empty sequence
    pub fn empty() -> Self {
        PointSequence { points: Vec::new() }
    }

    /// Build from a flat `[lat0, lon0, lat1, lon1, ...]` array
    ///
    /// # Errors
    /// `GeoError::InvalidArgument` if `coords` has an odd length
    pub fn from_flat(coords: &[f64]) -> GeoResult<Self> {
        if coords.len() % 2 != 0 {
            return Err(GeoError::InvalidArgument(format!(
                "flat coordinates must come in lat,lon pairs, got {} values",
                coords.len()
            )));
        }

        let points = coords
            .chunks_exact(2)
            .map(|pair| Point::new(pair[0], pair[1]))
            .collect();
        Ok(PointSequence { points })
    }

    /// Build from `[lat, lon]` pairs
    pub fn from_pairs(pairs: &[[f64; 2]]) -> Self {
        pairs.iter().copied().map(Point::from).collect()
    }

    /// Build from pair slices, checking that each holds exactly two values
    ///
    /// # Errors
    /// `GeoError::InvalidArgument` naming the first bad pair
    pub fn from_slices<S: AsRef<[f64]>>(pairs: &[S]) -> GeoResult<Self> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, pair)| {
                Point::from_pair(pair.as_ref()).map_err(|e| match e {
                    GeoError::InvalidArgument(msg) => {
                        GeoError::InvalidArgument(format!("pair {}: {}", i, msg))
                    }
                    other => other,
                })
            })
            .collect()
    }

    /// Decode a standard (1e-5) polyline
    ///
    /// An incomplete trailing point is dropped rather than reported.
    pub fn from_polyline(encoded: &str) -> GeoResult<Self> {
        polyline::decode(encoded).map(PointSequence::from)
    }

    /// Decode one point per geohash, keeping list order
    pub fn from_geohash<S: AsRef<str>>(hashes: &[S]) -> GeoResult<Self> {
        let points = geohash::decode_all(hashes)?;
        debug!("Decoded {} geohashes", points.len());
        Ok(PointSequence { points })
    }

    /// Encode as a standard (1e-5) polyline
    ///
    /// Non-finite or out-of-range coordinates saturate (NaN is written as 0)
    pub fn to_polyline(&self) -> String {
        polyline::encode(&self.points)
    }

    /// Encode each point as a geohash of the default length (9)
    pub fn to_geohash(&self) -> Vec<String> {
        self.to_geohash_with_length(geohash::DEFAULT_LENGTH)
    }

    /// Encode each point as a geohash of `length` characters
    pub fn to_geohash_with_length(&self, length: usize) -> Vec<String> {
        geohash::encode_all(&self.points, length)
    }

    /// Point at `index`, or `None` when out of range
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the points in order
    pub fn iter(&self) -> slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Copy the points out into a list
    pub fn to_vec(&self) -> Vec<Point> {
        self.points.clone()
    }
}

impl From<Vec<Point>> for PointSequence {
    fn from(points: Vec<Point>) -> Self {
        PointSequence { points }
    }
}

impl FromIterator<Point> for PointSequence {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        PointSequence {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for PointSequence {
    type Item = Point;
    type IntoIter = vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat() {
        let seq = PointSequence::from_flat(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.get(1), Some(&Point::new(3.0, 4.0)));
    }

    #[test]
    fn test_from_flat_odd_length() {
        let result = PointSequence::from_flat(&[-23.56649, -46.6538, -23.5658]);
        assert!(matches!(result, Err(GeoError::InvalidArgument(_))));
    }

    #[test]
    fn test_from_slices() {
        let ok = PointSequence::from_slices(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(ok, PointSequence::from_pairs(&[[1.0, 2.0], [3.0, 4.0]]));

        let bad = PointSequence::from_slices(&[vec![1.0, 2.0], vec![3.0]]);
        match bad {
            Err(GeoError::InvalidArgument(msg)) => assert!(msg.starts_with("pair 1")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_returns_none() {
        let seq = PointSequence::from_pairs(&[]);
        assert!(seq.first().is_none());
        assert!(seq.last().is_none());
        assert!(seq.get(3).is_none());
        assert_eq!(seq.len(), 0);
        assert!(seq.is_empty());
        assert_eq!(seq, PointSequence::empty());
    }

    #[test]
    fn test_iteration_is_restartable() {
        let seq = PointSequence::from_pairs(&[[1.0, 2.0], [3.0, 4.0]]);
        let first_pass: Vec<&Point> = seq.iter().collect();
        let second_pass: Vec<&Point> = (&seq).into_iter().collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(seq.clone().into_iter().collect::<Vec<Point>>(), seq.to_vec());
    }
}
