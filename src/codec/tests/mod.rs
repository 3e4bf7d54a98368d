//! Tests for the polyline and geohash codecs

mod polyline_tests;
