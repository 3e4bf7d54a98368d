//! Coordinate encoding command
//!
//! This module implements the command that turns `lat,lon` text into a
//! polyline or a list of geohashes.

use clap::ArgMatches;
use log::info;

use crate::codec::CodecFactory;
use crate::commands::command_traits::Command;
use crate::config::GeoConfig;
use crate::coordinate::PointSequence;
use crate::errors::GeoResult;
use crate::utils::coordinate_utils::parse_coordinates;
use crate::utils::io_utils::{read_input, write_output};
use crate::utils::progress::ProgressTracker;

/// Points handed to a pointwise codec per call
const CHUNK_SIZE: usize = 1024;

/// Command for encoding coordinates
pub struct EncodeCommand<'a> {
    /// Coordinate text given on the command line
    input: Option<String>,
    /// File holding the coordinate text
    input_file: Option<String>,
    /// Destination file, stdout when absent
    output_file: Option<String>,
    /// Codec name
    format: String,
    /// Whether to draw a progress bar
    show_progress: bool,
    /// Codec settings
    config: &'a GeoConfig,
}

impl<'a> EncodeCommand<'a> {
    /// Create a new encode command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Codec settings
    ///
    /// # Returns
    /// A new EncodeCommand instance or an error
    pub fn new(args: &ArgMatches, config: &'a GeoConfig) -> GeoResult<Self> {
        let format = args.get_one::<String>("format")
            .cloned()
            .unwrap_or_else(|| "polyline".to_string());

        // Fail on unknown formats before any input is read
        CodecFactory::create_codec(&format, config)?;

        Ok(EncodeCommand {
            input: args.get_one::<String>("input").cloned(),
            input_file: args.get_one::<String>("input-file").cloned(),
            output_file: args.get_one::<String>("output").cloned(),
            format,
            show_progress: args.get_flag("progress"),
            config,
        })
    }
}

impl<'a> Command for EncodeCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        let text = read_input(self.input.as_deref(), self.input_file.as_deref())?;
        let points = parse_coordinates(&text)?;
        let codec = CodecFactory::create_codec(&self.format, self.config)?;

        info!("Encoding {} points as {}", points.len(), codec.name());
        let progress = ProgressTracker::new(points.len() as u64, "Encoding", self.show_progress);

        let tokens = if codec.is_pointwise() {
            let mut tokens = Vec::with_capacity(points.len());
            for chunk in points.as_slice().chunks(CHUNK_SIZE) {
                tokens.extend(codec.encode(&PointSequence::from(chunk.to_vec())));
                progress.increment(chunk.len() as u64);
            }
            tokens
        } else {
            let tokens = codec.encode(&points);
            progress.increment(points.len() as u64);
            tokens
        };
        progress.finish();

        write_output(&tokens.join("\n"), self.output_file.as_deref())?;
        info!("Wrote {} encoded tokens", tokens.len());
        Ok(())
    }
}
