//! Input and output helpers for the CLI commands

use std::fs;
use std::io::{self, Write};
use log::debug;

use crate::errors::{GeoError, GeoResult};

/// Read command input from an inline argument or a file
///
/// Exactly one of the two must be given.
pub fn read_input(inline: Option<&str>, file: Option<&str>) -> GeoResult<String> {
    match (inline, file) {
        (Some(text), None) => Ok(text.to_string()),
        (None, Some(path)) => {
            debug!("Reading input from {}", path);
            Ok(fs::read_to_string(path)?)
        }
        (Some(_), Some(_)) => Err(GeoError::InvalidArgument(
            "Give either an input argument or --input-file, not both".to_string(),
        )),
        (None, None) => Err(GeoError::InvalidArgument(
            "Missing input: pass it as an argument or with --input-file".to_string(),
        )),
    }
}

/// Write command output to a file, or to stdout when no path is given
pub fn write_output(text: &str, path: Option<&str>) -> GeoResult<()> {
    match path {
        Some(path) => {
            debug!("Writing output to {}", path);
            fs::write(path, format!("{}\n", text))?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", text)?;
            handle.flush()?;
        }
    }
    Ok(())
}
