//! Geohash codec
//!
//! Every point is encoded on its own by bisecting the world cell, alternating
//! longitude and latitude (longitude first), and packing the bits 5 at a time
//! into base-32 characters. Decoding is lossy: the result is the center of
//! the resolved cell, so it lies within `cell_error(length)` of the original.

use crate::codec::handler::PointCodec;
use crate::coordinate::{BoundingBox, Point, PointSequence};
use crate::errors::{GeoError, GeoResult};

/// The geohash base-32 alphabet
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";
/// Characters per geohash when no length is given
pub const DEFAULT_LENGTH: usize = 9;

const BITS_PER_CHAR: usize = 5;

/// Encode a single point as a geohash of `length` characters
pub fn encode(point: &Point, length: usize) -> String {
    let mut cell = BoundingBox::world();
    let mut hash = String::with_capacity(length);
    let mut longitude_bit = true;

    for _ in 0..length {
        let mut index = 0usize;
        for _ in 0..BITS_PER_CHAR {
            let upper = if longitude_bit {
                bisect(&mut cell.min_lon, &mut cell.max_lon, point.longitude)
            } else {
                bisect(&mut cell.min_lat, &mut cell.max_lat, point.latitude)
            };
            index = (index << 1) | usize::from(upper);
            longitude_bit = !longitude_bit;
        }
        hash.push(char::from(BASE32[index]));
    }

    hash
}

/// Narrow `[min, max]` to the half holding `value`; returns true for the upper half
fn bisect(min: &mut f64, max: &mut f64, value: f64) -> bool {
    let mid = (*min + *max) / 2.0;
    if value >= mid {
        *min = mid;
        true
    } else {
        *max = mid;
        false
    }
}

/// Resolve a geohash to its cell
///
/// Decoding is case-insensitive. The empty hash resolves to the whole world.
///
/// # Errors
/// `GeoError::MalformedInput` for characters outside the alphabet
pub fn decode_bounds(hash: &str) -> GeoResult<BoundingBox> {
    let mut cell = BoundingBox::world();
    let mut longitude_bit = true;

    for (position, c) in hash.chars().enumerate() {
        let index = char_index(c).ok_or_else(|| {
            GeoError::malformed(position, format!("'{}' is not a geohash character", c))
        })?;

        for bit in (0..BITS_PER_CHAR).rev() {
            let upper = (index >> bit) & 1 == 1;
            let (min, max) = if longitude_bit {
                (&mut cell.min_lon, &mut cell.max_lon)
            } else {
                (&mut cell.min_lat, &mut cell.max_lat)
            };
            let mid = (*min + *max) / 2.0;
            if upper {
                *min = mid;
            } else {
                *max = mid;
            }
            longitude_bit = !longitude_bit;
        }
    }

    Ok(cell)
}

/// Decode a geohash to the center of its cell
pub fn decode(hash: &str) -> GeoResult<Point> {
    decode_bounds(hash).map(|cell| cell.center())
}

fn char_index(c: char) -> Option<usize> {
    let lower = c.to_ascii_lowercase();
    BASE32.iter().position(|&b| char::from(b) == lower)
}

/// Maximum decode error `(latitude, longitude)` in degrees at `length` characters
///
/// This is half the cell size: latitude gets `floor(5L/2)` bits and longitude
/// the remaining `ceil(5L/2)`.
pub fn cell_error(length: usize) -> (f64, f64) {
    let total_bits = length.saturating_mul(BITS_PER_CHAR);
    let lat_bits = total_bits / 2;
    let lon_bits = total_bits - lat_bits;
    (90.0 / pow2(lat_bits), 180.0 / pow2(lon_bits))
}

fn pow2(bits: usize) -> f64 {
    2f64.powi(bits.min(i32::MAX as usize) as i32)
}

/// Encode every point, preserving order
pub fn encode_all(points: &[Point], length: usize) -> Vec<String> {
    points.iter().map(|point| encode(point, length)).collect()
}

/// Decode every hash, preserving order
pub fn decode_all<S: AsRef<str>>(hashes: &[S]) -> GeoResult<Vec<Point>> {
    hashes.iter().map(|hash| decode(hash.as_ref())).collect()
}

/// Geohash codec strategy: one token per point
#[derive(Debug, Clone, Copy)]
pub struct GeohashCodec {
    length: usize,
}

impl GeohashCodec {
    /// Create a codec producing hashes of `length` characters
    pub fn new(length: usize) -> GeoResult<Self> {
        if length == 0 {
            return Err(GeoError::InvalidArgument("geohash length must be at least 1".to_string()));
        }
        Ok(GeohashCodec { length })
    }

    /// Characters per hash
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for GeohashCodec {
    fn default() -> Self {
        GeohashCodec { length: DEFAULT_LENGTH }
    }
}

impl PointCodec for GeohashCodec {
    fn encode(&self, points: &PointSequence) -> Vec<String> {
        encode_all(points.as_slice(), self.length)
    }

    fn decode(&self, tokens: &[String]) -> GeoResult<PointSequence> {
        PointSequence::from_geohash(tokens)
    }

    fn name(&self) -> &'static str {
        "geohash"
    }

    fn is_pointwise(&self) -> bool {
        true
    }
}
