//! CLI command implementations
//!
//! This module contains the command-line definition and the commands
//! it dispatches to, using the Command pattern.

pub mod command_traits;
pub mod encode_command;
pub mod decode_command;

pub use command_traits::{Command, CommandFactory};
pub use encode_command::EncodeCommand;
pub use decode_command::DecodeCommand;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::config::GeoConfig;
use crate::errors::{GeoError, GeoResult};

/// Build the `geopoints` command-line definition
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("geopoints")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Encode and decode coordinate lists as polylines or geohashes")
        .arg(
            Arg::new("input")
                .help("Coordinates ('lat,lon lat,lon ...') or encoded text when decoding; put it after '--' if it starts with '-'")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("decode")
                .short('d')
                .long("decode")
                .help("Decode the input instead of encoding it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Encoding to use (polyline, geohash)")
                .value_name("FORMAT")
                .default_value("polyline"),
        )
        .arg(
            Arg::new("length")
                .long("length")
                .help("Geohash length in characters")
                .value_name("CHARS")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("precision")
                .long("precision")
                .help("Polyline decimal precision")
                .value_name("DIGITS")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("input-file")
                .short('i')
                .long("input-file")
                .help("Read input from this file")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write output to this file instead of stdout")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file overriding the built-in settings")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records to this file instead of the console")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .help("Show a progress bar")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}

/// Resolve codec settings: built-in defaults, then `--config`, then flags
pub fn config_from_args(args: &ArgMatches) -> GeoResult<GeoConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => GeoConfig::from_file(path)?,
        None => GeoConfig::builtin(),
    };

    if let Some(&length) = args.get_one::<usize>("length") {
        if length == 0 {
            return Err(GeoError::InvalidArgument("--length must be at least 1".to_string()));
        }
        config.geohash_length = length;
    }
    if let Some(&precision) = args.get_one::<u32>("precision") {
        config.polyline_precision = precision;
    }

    Ok(config)
}

/// Factory for creating command instances based on CLI arguments
pub struct GeopointsCommandFactory;

impl GeopointsCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeopointsCommandFactory
    }
}

impl Default for GeopointsCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for GeopointsCommandFactory {
    fn create_command(&self, args: &ArgMatches, config: &'a GeoConfig) -> GeoResult<Box<dyn Command + 'a>> {
        if args.get_flag("decode") {
            Ok(Box::new(DecodeCommand::new(args, config)?))
        } else {
            Ok(Box::new(EncodeCommand::new(args, config)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let args = build_cli().get_matches_from(["geopoints", "--length", "11", "--precision", "6", "1,2"]);
        let config = config_from_args(&args).unwrap();
        assert_eq!(config.geohash_length, 11);
        assert_eq!(config.polyline_precision, 6);
    }

    #[test]
    fn test_zero_length_rejected() {
        let args = build_cli().get_matches_from(["geopoints", "--length", "0", "1,2"]);
        assert!(matches!(config_from_args(&args), Err(GeoError::InvalidArgument(_))));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let config = GeoConfig::default();
        let args = build_cli().get_matches_from(["geopoints", "--format", "wkb", "1,2"]);
        assert!(GeopointsCommandFactory::new().create_command(&args, &config).is_err());
    }
}
