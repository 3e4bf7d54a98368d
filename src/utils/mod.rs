//! Utility modules for common functionality
//!
//! This module provides logging, progress reporting and the text helpers used by the CLI.

pub mod logger;
pub mod progress;
pub mod coordinate_utils;
pub(crate) mod io_utils;
