//! Encoded polyline codec
//!
//! Each coordinate is scaled to an integer (1e5 by default), delta coded
//! against the previous rounded value of the same axis, zig-zag mapped and
//! written as 5-bit groups offset into printable ASCII (`'?'..='~'`).
//! Points are written latitude first.

use log::{debug, warn};

use crate::codec::handler::PointCodec;
use crate::coordinate::{Point, PointSequence};
use crate::errors::{GeoError, GeoResult};

/// Decimal digits kept by the standard polyline format
pub const DEFAULT_PRECISION: u32 = 5;
/// Largest precision accepted by the `*_with_precision` functions
pub const MAX_PRECISION: u32 = 10;

const ASCII_OFFSET: u8 = 63;
const CHUNK_BITS: u32 = 5;
const CHUNK_MASK: u64 = 0x1F;
const CONTINUATION_BIT: u64 = 0x20;

/// Encode points at the standard 1e-5 precision
///
/// Coordinates must scale to a finite value inside the `i64` range. NaN is
/// written as 0 and infinite or huge values saturate at the `i64` bounds, so
/// they do not survive a round trip; a warning is logged for each.
pub fn encode(points: &[Point]) -> String {
    encode_scaled(points, scale_factor(DEFAULT_PRECISION))
}

/// Encode points keeping `precision` decimal digits
///
/// # Errors
/// `GeoError::InvalidArgument` if `precision` exceeds `MAX_PRECISION`
pub fn encode_with_precision(points: &[Point], precision: u32) -> GeoResult<String> {
    Ok(encode_scaled(points, checked_factor(precision)?))
}

/// Decode a polyline written at the standard 1e-5 precision
///
/// A trailing point whose bytes are cut off is dropped; the points before it
/// are returned unchanged.
///
/// # Errors
/// `GeoError::MalformedInput` for bytes outside the polyline alphabet, varint
/// chains too long for 64 bits, or coordinate accumulator overflow
pub fn decode(encoded: &str) -> GeoResult<Vec<Point>> {
    decode_scaled(encoded, scale_factor(DEFAULT_PRECISION))
}

/// Decode a polyline written with `precision` decimal digits
pub fn decode_with_precision(encoded: &str, precision: u32) -> GeoResult<Vec<Point>> {
    decode_scaled(encoded, checked_factor(precision)?)
}

fn checked_factor(precision: u32) -> GeoResult<f64> {
    if precision > MAX_PRECISION {
        return Err(GeoError::InvalidArgument(format!(
            "polyline precision must be between 0 and {}, got {}",
            MAX_PRECISION, precision
        )));
    }
    Ok(scale_factor(precision))
}

fn scale_factor(precision: u32) -> f64 {
    10f64.powi(precision as i32)
}

// Half-up rounding (floor(x + 0.5)), the convention the reference vectors use.
// `as` saturates out-of-range values and maps NaN to 0.
fn round_half_up(value: f64) -> i64 {
    let rounded = (value + 0.5).floor();
    if !rounded.is_finite() || rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        warn!("Coordinate {} cannot be represented in a polyline; it will not round trip", value);
    }
    rounded as i64
}

fn encode_scaled(points: &[Point], factor: f64) -> String {
    let mut encoded = String::with_capacity(points.len() * 8);
    // Previous rounded value per axis: [latitude, longitude]
    let mut previous = [0i64; 2];

    for point in points {
        for (axis, value) in [point.latitude, point.longitude].into_iter().enumerate() {
            let current = round_half_up(value * factor);
            write_varint(current.wrapping_sub(previous[axis]), &mut encoded);
            previous[axis] = current;
        }
    }

    encoded
}

fn write_varint(delta: i64, out: &mut String) {
    let shifted = (delta as u64) << 1;
    let mut value = if delta < 0 { !shifted } else { shifted };

    while value >= CONTINUATION_BIT {
        out.push(char::from(((value & CHUNK_MASK) | CONTINUATION_BIT) as u8 + ASCII_OFFSET));
        value >>= CHUNK_BITS;
    }
    out.push(char::from(value as u8 + ASCII_OFFSET));
}

/// Read one zig-zag varint starting at `index`.
///
/// Returns `Ok(None)` when the input ends before the chain terminates.
fn read_varint(bytes: &[u8], index: &mut usize) -> GeoResult<Option<i64>> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let byte = match bytes.get(*index) {
            Some(&byte) => byte,
            None => return Ok(None),
        };
        if !(ASCII_OFFSET..=ASCII_OFFSET + 0x3F).contains(&byte) {
            return Err(GeoError::malformed(
                *index,
                format!("byte {:#04x} is outside the polyline alphabet", byte),
            ));
        }

        let chunk = u64::from(byte - ASCII_OFFSET);
        let bits = chunk & CHUNK_MASK;
        if shift >= u64::BITS || (bits << shift) >> shift != bits {
            return Err(GeoError::malformed(*index, "varint chain does not fit in 64 bits"));
        }
        result |= bits << shift;
        shift += CHUNK_BITS;
        *index += 1;

        if chunk & CONTINUATION_BIT == 0 {
            break;
        }
    }

    let value = if result & 1 == 1 { !(result >> 1) } else { result >> 1 };
    Ok(Some(value as i64))
}

fn decode_scaled(encoded: &str, factor: f64) -> GeoResult<Vec<Point>> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::with_capacity(bytes.len() / 4);
    let mut index = 0;
    let mut latitude: i64 = 0;
    let mut longitude: i64 = 0;

    while index < bytes.len() {
        let start = index;
        let lat_delta = read_varint(bytes, &mut index)?;
        let lon_delta = match lat_delta {
            Some(_) => read_varint(bytes, &mut index)?,
            None => None,
        };

        let (lat_delta, lon_delta) = match (lat_delta, lon_delta) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                warn!(
                    "Dropping incomplete trailing point at byte {} of {} (after {} points)",
                    start,
                    bytes.len(),
                    points.len()
                );
                break;
            }
        };

        latitude = latitude
            .checked_add(lat_delta)
            .ok_or_else(|| GeoError::malformed(start, "latitude accumulator overflow"))?;
        longitude = longitude
            .checked_add(lon_delta)
            .ok_or_else(|| GeoError::malformed(start, "longitude accumulator overflow"))?;

        points.push(Point::new(latitude as f64 / factor, longitude as f64 / factor));
    }

    debug!("Decoded {} points from {} polyline bytes", points.len(), bytes.len());
    Ok(points)
}

/// Polyline codec strategy: one token per sequence
#[derive(Debug, Clone, Copy)]
pub struct PolylineCodec {
    precision: u32,
}

impl PolylineCodec {
    /// Create a codec with the given decimal precision
    pub fn new(precision: u32) -> GeoResult<Self> {
        checked_factor(precision)?;
        Ok(PolylineCodec { precision })
    }

    /// Decimal digits kept per coordinate
    pub fn precision(&self) -> u32 {
        self.precision
    }
}

impl Default for PolylineCodec {
    fn default() -> Self {
        PolylineCodec { precision: DEFAULT_PRECISION }
    }
}

impl PointCodec for PolylineCodec {
    fn encode(&self, points: &PointSequence) -> Vec<String> {
        vec![encode_scaled(points.as_slice(), scale_factor(self.precision))]
    }

    fn decode(&self, tokens: &[String]) -> GeoResult<PointSequence> {
        match tokens {
            [] => Ok(PointSequence::empty()),
            [polyline] => Ok(PointSequence::from(decode_scaled(polyline, scale_factor(self.precision))?)),
            _ => Err(GeoError::InvalidArgument(format!(
                "expected a single polyline, got {} tokens",
                tokens.len()
            ))),
        }
    }

    fn name(&self) -> &'static str {
        "polyline"
    }
}
