//! Tests for the polyline codec

use super::test_utils::{assert_matches_sample, sample_line, SAMPLE_POINTS, SAMPLE_POLYLINE};
use crate::codec::polyline;
use crate::codec::{PointCodec, PolylineCodec};
use crate::coordinate::{Point, PointSequence};
use crate::errors::GeoError;

#[test]
fn test_encode_known_vector() {
    let points = PointSequence::from_pairs(&SAMPLE_POINTS);
    assert_matches_sample(&points);
    assert_eq!(points.to_polyline(), SAMPLE_POLYLINE);
}

#[test]
fn test_flat_construction_matches_sample() {
    let points = PointSequence::from_flat(&[
        -23.56649, -46.6538,
        -23.5658, -46.65313,
        -23.56486, -46.65221,
        -23.56486, -46.65221,
        -23.56161, -46.65613,
        -23.56162, -46.65615,
    ])
    .unwrap();
    assert_matches_sample(&points);
}

#[test]
fn test_decode_known_vector() {
    let points = PointSequence::from_polyline(SAMPLE_POLYLINE).unwrap();
    assert_matches_sample(&points);
}

#[test]
fn test_self_round_trip_is_exact() {
    let points = sample_line(40);
    let encoded = points.to_polyline();
    assert_eq!(PointSequence::from_polyline(&encoded).unwrap(), points);
}

#[test]
fn test_reference_example() {
    let points = PointSequence::from_pairs(&[[38.5, -120.2], [40.7, -120.95], [43.252, -126.453]]);
    assert_eq!(points.to_polyline(), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
    assert_eq!(PointSequence::from_polyline("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap(), points);
}

#[test]
fn test_rounding_accumulates_per_axis() {
    // 0.000004 rounds to 0 and 0.000006 to 1; deltas use the rounded values
    let points = PointSequence::from_pairs(&[[0.000004, 0.0], [0.000006, 0.0], [0.000012, 0.0]]);
    let decoded = PointSequence::from_polyline(&points.to_polyline()).unwrap();
    assert_eq!(
        decoded.to_vec(),
        vec![Point::new(0.0, 0.0), Point::new(0.00001, 0.0), Point::new(0.00001, 0.0)]
    );
}

#[test]
fn test_empty_polyline() {
    assert_eq!(PointSequence::empty().to_polyline(), "");
    assert!(PointSequence::from_polyline("").unwrap().is_empty());
}

#[test]
fn test_truncated_latitude_only_point_is_dropped() {
    // A seventh point whose longitude is missing entirely
    let truncated = format!("{}{}", SAMPLE_POLYLINE, "clxyJ");
    let points = PointSequence::from_polyline(&truncated).unwrap();
    assert_matches_sample(&points);
}

#[test]
fn test_truncated_varint_chain_is_dropped() {
    // Seventh point "clxyJ``{_M" cut inside its longitude chain
    let points = PointSequence::from_polyline(&format!("{}{}", SAMPLE_POLYLINE, "clxyJ``{_")).unwrap();
    assert_matches_sample(&points);

    // And cut inside its latitude chain
    let points = PointSequence::from_polyline(&format!("{}{}", SAMPLE_POLYLINE, "clxy")).unwrap();
    assert_matches_sample(&points);

    // The complete seventh point decodes normally
    let points = PointSequence::from_polyline(&format!("{}{}", SAMPLE_POLYLINE, "clxyJ``{_M")).unwrap();
    assert_eq!(points.len(), 7);
    assert_eq!(points.last(), Some(&Point::new(38.5, -120.2)));
}

#[test]
fn test_invalid_byte_is_malformed() {
    let corrupt = "pyynCfaw{G iCeC";
    match PointSequence::from_polyline(corrupt) {
        Err(GeoError::MalformedInput { position, .. }) => assert_eq!(position, 10),
        other => panic!("expected MalformedInput, got {:?}", other),
    }

    assert!(matches!(PointSequence::from_polyline("pyynC\u{e9}"), Err(GeoError::MalformedInput { .. })));
}

#[test]
fn test_overlong_chain_is_malformed() {
    // Fourteen continuation groups cannot fit in 64 bits
    let overlong = format!("{}?", "~".repeat(14));
    assert!(matches!(
        PointSequence::from_polyline(&overlong),
        Err(GeoError::MalformedInput { .. })
    ));
}

#[test]
fn test_custom_precision() {
    let points = vec![Point::new(38.5, -120.2), Point::new(40.7, -120.95)];
    let encoded = polyline::encode_with_precision(&points, 6).unwrap();
    assert_ne!(encoded, polyline::encode(&points));
    assert_eq!(polyline::decode_with_precision(&encoded, 6).unwrap(), points);

    assert!(matches!(
        polyline::encode_with_precision(&points, 11),
        Err(GeoError::InvalidArgument(_))
    ));
    assert!(polyline::decode_with_precision(&encoded, 42).is_err());
}

#[test]
fn test_codec_strategy() {
    let codec = PolylineCodec::default();
    assert_eq!(codec.precision(), 5);
    assert!(!codec.is_pointwise());

    let points = PointSequence::from_pairs(&SAMPLE_POINTS);
    let tokens = codec.encode(&points);
    assert_eq!(tokens, vec![SAMPLE_POLYLINE.to_string()]);
    assert_eq!(codec.decode(&tokens).unwrap(), points);
    assert!(codec.decode(&[]).unwrap().is_empty());

    let two = vec![SAMPLE_POLYLINE.to_string(), SAMPLE_POLYLINE.to_string()];
    assert!(matches!(codec.decode(&two), Err(GeoError::InvalidArgument(_))));
}

#[test]
fn test_non_finite_coordinates_saturate() {
    // NaN scales to 0
    let encoded = polyline::encode(&[Point::new(f64::NAN, 1.0)]);
    assert_eq!(encoded, polyline::encode(&[Point::new(0.0, 1.0)]));
    assert_eq!(polyline::decode(&encoded).unwrap(), vec![Point::new(0.0, 1.0)]);

    // Infinity clamps to i64::MAX and comes back finite
    let encoded = polyline::encode(&[Point::new(f64::INFINITY, 0.0)]);
    let decoded = polyline::decode(&encoded).unwrap();
    assert_eq!(decoded.len(), 1);
    assert!(decoded[0].latitude.is_finite());
    assert_eq!(decoded[0].latitude, i64::MAX as f64 / 1e5);
    assert_eq!(decoded[0].longitude, 0.0);
}
