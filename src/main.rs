//! Half-band Designer CLI
//!
//! Prints polyphase IIR half-band coefficients and resamples WAV files.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::debug;

use halfband::cli::commands::{self, OutputOptions};
use halfband::cli::{parse_design_args, Cli, Commands, USAGE};
use halfband::HalfbandError;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are reported through the same path
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    // Initialize logger
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    debug!("Halfband Designer v{}", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let options = OutputOptions {
        format: cli.format,
        precision: cli.precision,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(cmd) => {
            if !cli.args.is_empty() {
                return Err(HalfbandError::Usage {
                    message: USAGE.to_string(),
                }
                .into());
            }
            handle_command(cmd, &options, &mut out)
        }
        None => {
            let (stages, transition) = parse_design_args(&cli.args)?;
            commands::print_design(stages, transition, &options, &mut out)?;
            Ok(out.flush()?)
        }
    }
}

fn handle_command<W: Write>(
    cmd: Commands,
    options: &OutputOptions,
    out: &mut W,
) -> anyhow::Result<()> {
    match cmd {
        Commands::Spec {
            attenuation,
            transition,
        } => commands::print_spec(attenuation, transition, options, out)?,
        Commands::Attenuation { stages, transition } => {
            commands::print_attenuation(stages, transition, options, out)?
        }
        Commands::Downsample {
            input,
            output,
            filter,
            high,
        } => commands::downsample_file(&input, &output, filter, high.as_deref())?,
        Commands::Upsample {
            input,
            output,
            filter,
        } => commands::upsample_file(&input, &output, filter)?,
    }
    Ok(out.flush()?)
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<HalfbandError>() {
        Some(HalfbandError::Usage { message }) => eprintln!("{}", message),
        Some(inner) => {
            eprintln!("error: {:#}", err);
            if inner.is_input_error() {
                for hint in inner.recovery_suggestions() {
                    eprintln!("  hint: {}", hint);
                }
            }
        }
        None => eprintln!("error: {:#}", err),
    }
}
