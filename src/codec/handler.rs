//! Codec strategy trait definition

use crate::coordinate::PointSequence;
use crate::errors::GeoResult;

/// Strategy trait for the text encodings of a point sequence
pub trait PointCodec: Send + Sync {
    /// Encode the points into text tokens
    fn encode(&self, points: &PointSequence) -> Vec<String>;

    /// Decode text tokens back into points
    fn decode(&self, tokens: &[String]) -> GeoResult<PointSequence>;

    /// Get the name of this encoding
    fn name(&self) -> &'static str;

    /// Whether each point maps to its own token, so input can be processed in chunks
    fn is_pointwise(&self) -> bool {
        false
    }
}
