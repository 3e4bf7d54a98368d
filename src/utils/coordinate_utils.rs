//! Coordinate text utilities
//!
//! Parsing of `lat,lon` pairs typed on the command line and formatting of
//! decoded points back to text.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::coordinate::{Point, PointSequence};
use crate::errors::{GeoError, GeoResult};

lazy_static! {
    static ref PAIR_PATTERN: Regex = Regex::new(
        r"([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s*,\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)"
    ).expect("coordinate pair pattern is valid");
    static ref TOKEN_SEPARATOR: Regex = Regex::new(r"[\s,]+").expect("token separator pattern is valid");
}

/// Parse `lat,lon` pairs separated by whitespace or `;`
///
/// # Errors
/// `GeoError::InvalidArgument` when anything other than pairs and separators
/// appears in the text
pub fn parse_coordinates(text: &str) -> GeoResult<PointSequence> {
    let mut points = Vec::new();
    let mut last_end = 0;

    for captures in PAIR_PATTERN.captures_iter(text) {
        let whole = match captures.get(0) {
            Some(whole) => whole,
            None => continue,
        };
        let (_, [lat, lon]) = captures.extract();
        check_separator(&text[last_end..whole.start()], last_end)?;
        points.push(Point::new(parse_value(lat)?, parse_value(lon)?));
        last_end = whole.end();
    }
    check_separator(&text[last_end..], last_end)?;

    debug!("Parsed {} coordinate pairs", points.len());
    Ok(PointSequence::from(points))
}

fn check_separator(gap: &str, offset: usize) -> GeoResult<()> {
    if gap.chars().all(|c| c.is_whitespace() || c == ';') {
        Ok(())
    } else {
        Err(GeoError::InvalidArgument(format!(
            "unexpected text '{}' at offset {}; expected lat,lon pairs",
            gap.trim(),
            offset
        )))
    }
}

fn parse_value(value: &str) -> GeoResult<f64> {
    value
        .parse::<f64>()
        .map_err(|_| GeoError::InvalidArgument(format!("invalid coordinate value: {}", value)))
}

/// Split encoded input into tokens on whitespace and commas
///
/// Neither character belongs to the polyline or geohash alphabets.
pub fn split_tokens(text: &str) -> Vec<String> {
    TOKEN_SEPARATOR
        .split(text)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Format points one per line as `lat<separator>lon`
pub fn format_points(points: &PointSequence, separator: &str) -> String {
    points
        .iter()
        .map(|p| format!("{}{}{}", p.latitude, separator, p.longitude))
        .collect::<Vec<_>>()
        .join("\n")
}
