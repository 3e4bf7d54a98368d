//! Custom error types for point encoding and decoding

use std::fmt;
use std::io;

/// Errors raised while building, encoding or decoding point sequences
#[derive(Debug)]
pub enum GeoError {
    /// I/O error
    IoError(io::Error),
    /// Malformed construction input (odd flat array, pair not of length 2, bad option)
    InvalidArgument(String),
    /// Encoded text that cannot be parsed
    MalformedInput {
        /// Byte offset (polyline) or character index (geohash) of the failure
        position: usize,
        /// What went wrong
        reason: String,
    },
    /// Configuration could not be parsed
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl GeoError {
    pub(crate) fn malformed(position: usize, reason: impl Into<String>) -> Self {
        GeoError::MalformedInput {
            position,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            GeoError::MalformedInput { position, reason } => {
                write!(f, "Malformed input at position {}: {}", position, reason)
            }
            GeoError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GeoError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

impl From<String> for GeoError {
    fn from(msg: String) -> Self {
        GeoError::GenericError(msg)
    }
}

/// Result type for geopoints operations
pub type GeoResult<T> = Result<T, GeoError>;
