//! CLI Module
//!
//! Command-line interface for the half-band designer.

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::{HalfbandError, Result};

/// Digits printed after the decimal point by default
pub const DEFAULT_PRECISION: usize = 18;

/// Usage line for the plain `<STAGES> <TRANSITION>` form
pub const USAGE: &str = "usage: halfband <stages> <transition>";

/// Half-band filter designer - polyphase IIR coefficients and 2x resampling
#[derive(Parser, Debug)]
#[command(name = "halfband")]
#[command(version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Digits after the decimal point in text output
    #[arg(long, default_value_t = DEFAULT_PRECISION, global = true)]
    pub precision: usize,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Number of coefficients followed by the transition bandwidth
    #[arg(value_name = "STAGES TRANSITION")]
    pub args: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Design the shortest filter reaching a stop-band attenuation
    #[command(name = "spec")]
    Spec {
        /// Stop-band attenuation in dB
        attenuation: f64,

        /// Normalized transition bandwidth, in (0, 0.5)
        transition: f64,
    },

    /// Print the stop-band attenuation of a design
    #[command(name = "attenuation")]
    Attenuation {
        /// Number of coefficients
        stages: usize,

        /// Normalized transition bandwidth, in (0, 0.5)
        transition: f64,
    },

    /// Halve the sample rate of a WAV file
    #[command(name = "downsample")]
    Downsample {
        /// Input WAV file
        input: PathBuf,

        /// Output WAV file
        output: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,

        /// Also write the mirrored upper band to this file
        #[arg(long)]
        high: Option<PathBuf>,
    },

    /// Double the sample rate of a WAV file
    #[command(name = "upsample")]
    Upsample {
        /// Input WAV file
        input: PathBuf,

        /// Output WAV file
        output: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Filter design used by the resampling commands
#[derive(Args, Debug, Clone, Copy)]
pub struct FilterArgs {
    /// Number of coefficients
    #[arg(short, long, default_value_t = 8)]
    pub stages: usize,

    /// Normalized transition bandwidth, in (0, 0.5)
    #[arg(short, long, default_value_t = 0.05)]
    pub transition: f64,
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One value per line
    #[default]
    Text,
    /// A JSON document
    Json,
}

/// Parse the plain `<STAGES> <TRANSITION>` arguments.
///
/// Argument indices in parse errors are 1-based.
pub fn parse_design_args(args: &[String]) -> Result<(usize, f64)> {
    let [stages, transition] = args else {
        return Err(HalfbandError::Usage {
            message: USAGE.to_string(),
        });
    };

    let stages = stages
        .trim()
        .parse::<usize>()
        .map_err(|e| HalfbandError::Parse {
            index: 1,
            value: stages.clone(),
            reason: e.to_string(),
        })?;

    let transition = transition
        .trim()
        .parse::<f64>()
        .map_err(|e| HalfbandError::Parse {
            index: 2,
            value: transition.clone(),
            reason: e.to_string(),
        })?;

    Ok((stages, transition))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_design_args() {
        let (stages, transition) = parse_design_args(&args(&["4", "0.05"])).unwrap();
        assert_eq!(stages, 4);
        assert_eq!(transition, 0.05);
    }

    #[test]
    fn test_wrong_argument_count() {
        for values in [&["4"][..], &["4", "0.1", "x"][..], &[][..]] {
            assert!(matches!(
                parse_design_args(&args(values)),
                Err(HalfbandError::Usage { .. })
            ));
        }
    }

    #[test]
    fn test_parse_error_index() {
        assert!(matches!(
            parse_design_args(&args(&["four", "0.1"])),
            Err(HalfbandError::Parse { index: 1, .. })
        ));
        assert!(matches!(
            parse_design_args(&args(&["4", "abc"])),
            Err(HalfbandError::Parse { index: 2, .. })
        ));
        assert!(matches!(
            parse_design_args(&args(&["-1", "0.1"])),
            Err(HalfbandError::Parse { index: 1, .. })
        ));
    }

    #[test]
    fn test_cli_parses_plain_form() {
        let cli = Cli::try_parse_from(["halfband", "3", "0.1"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.args, vec!["3", "0.1"]);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.precision, DEFAULT_PRECISION);
    }

    #[test]
    fn test_cli_parses_subcommand() {
        let cli = Cli::try_parse_from(["halfband", "--format", "json", "spec", "96", "0.05"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(
            cli.command,
            Some(Commands::Spec { attenuation, .. }) if attenuation == 96.0
        ));
    }

    #[test]
    fn test_cli_resample_defaults() {
        let cli = Cli::try_parse_from(["halfband", "downsample", "in.wav", "out.wav"]).unwrap();
        match cli.command {
            Some(Commands::Downsample { filter, high, .. }) => {
                assert_eq!(filter.stages, 8);
                assert_eq!(filter.transition, 0.05);
                assert!(high.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
