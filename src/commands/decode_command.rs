//! Decoding command
//!
//! This module implements the command that turns a polyline or a list of
//! geohashes back into `lat,lon` lines.

use clap::ArgMatches;
use log::info;

use crate::codec::CodecFactory;
use crate::commands::command_traits::Command;
use crate::config::GeoConfig;
use crate::coordinate::PointSequence;
use crate::errors::GeoResult;
use crate::utils::coordinate_utils::{format_points, split_tokens};
use crate::utils::io_utils::{read_input, write_output};
use crate::utils::progress::ProgressTracker;

/// Tokens handed to a pointwise codec per call
const CHUNK_SIZE: usize = 1024;

/// Command for decoding encoded points
pub struct DecodeCommand<'a> {
    input: Option<String>,
    input_file: Option<String>,
    output_file: Option<String>,
    format: String,
    show_progress: bool,
    config: &'a GeoConfig,
}

impl<'a> DecodeCommand<'a> {
    /// Create a new decode command
    pub fn new(args: &ArgMatches, config: &'a GeoConfig) -> GeoResult<Self> {
        let format = args.get_one::<String>("format")
            .cloned()
            .unwrap_or_else(|| "polyline".to_string());

        CodecFactory::create_codec(&format, config)?;

        Ok(DecodeCommand {
            input: args.get_one::<String>("input").cloned(),
            input_file: args.get_one::<String>("input-file").cloned(),
            output_file: args.get_one::<String>("output").cloned(),
            format,
            show_progress: args.get_flag("progress"),
            config,
        })
    }
}

impl<'a> Command for DecodeCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        let text = read_input(self.input.as_deref(), self.input_file.as_deref())?;
        let tokens = split_tokens(&text);
        let codec = CodecFactory::create_codec(&self.format, self.config)?;

        info!("Decoding {} {} tokens", tokens.len(), codec.name());
        let progress = ProgressTracker::new(tokens.len() as u64, "Decoding", self.show_progress);

        let points = if codec.is_pointwise() {
            let mut points = Vec::with_capacity(tokens.len());
            for chunk in tokens.chunks(CHUNK_SIZE) {
                points.extend(codec.decode(chunk)?);
                progress.increment(chunk.len() as u64);
            }
            PointSequence::from(points)
        } else {
            let points = codec.decode(&tokens)?;
            progress.increment(tokens.len() as u64);
            points
        };
        progress.finish();

        write_output(&format_points(&points, &self.config.separator), self.output_file.as_deref())?;
        info!("Wrote {} points", points.len());
        Ok(())
    }
}
