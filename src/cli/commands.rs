//! CLI Command Implementations
//!
//! Results go to the given writer, diagnostics go through `log`.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use log::info;
use serde_json::json;

use super::{FilterArgs, OutputFormat};
use crate::audio::{self, AudioBuffer};
use crate::design::{
    design_coefficients, design_for_attenuation, stopband_attenuation, CoefficientSet,
};
use crate::error::Result;

/// How to render results
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub precision: usize,
}

/// Design `stages` coefficients and print them
pub fn print_design<W: Write>(
    stages: usize,
    transition: f64,
    options: &OutputOptions,
    out: &mut W,
) -> Result<()> {
    let set = design_coefficients(stages, transition)?;
    write_coefficients(&set, options, out)
}

/// Design the shortest filter reaching `attenuation` and print it
pub fn print_spec<W: Write>(
    attenuation: f64,
    transition: f64,
    options: &OutputOptions,
    out: &mut W,
) -> Result<()> {
    let set = design_for_attenuation(attenuation, transition)?;
    info!(
        "{} dB at transition {} needs {} coefficients",
        attenuation,
        transition,
        set.len()
    );
    write_coefficients(&set, options, out)
}

/// Print the stop-band attenuation of a design
pub fn print_attenuation<W: Write>(
    stages: usize,
    transition: f64,
    options: &OutputOptions,
    out: &mut W,
) -> Result<()> {
    let attenuation = stopband_attenuation(stages, transition)?;

    match options.format {
        OutputFormat::Text => writeln!(out, "{:.*}", options.precision, attenuation)?,
        OutputFormat::Json => {
            let doc = json!({
                "stages": stages,
                "transition": transition,
                "attenuation_db": attenuation,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        }
    }
    Ok(())
}

/// Write a coefficient set in the requested format
pub fn write_coefficients<W: Write>(
    set: &CoefficientSet,
    options: &OutputOptions,
    out: &mut W,
) -> Result<()> {
    match options.format {
        OutputFormat::Text => {
            for coef in set.coefficients() {
                writeln!(out, "{:.*}", options.precision, coef)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(set)?)?;
        }
    }
    Ok(())
}

/// Decimate a WAV file by two
pub fn downsample_file(
    input: &Path,
    output: &Path,
    filter: FilterArgs,
    high: Option<&Path>,
) -> anyhow::Result<()> {
    info!("Downsampling {} -> {}", input.display(), output.display());

    let set = design_coefficients(filter.stages, filter.transition)
        .context("cannot design the decimation filter")?;
    let buffer = load(input)?;

    match high {
        Some(high_path) => {
            let (low, upper) = audio::split_buffer(&buffer, set.coefficients())
                .with_context(|| format!("cannot downsample {}", input.display()))?;
            save(&low, output)?;
            save(&upper, high_path)?;
        }
        None => {
            let low = audio::downsample_buffer(&buffer, set.coefficients())
                .with_context(|| format!("cannot downsample {}", input.display()))?;
            save(&low, output)?;
        }
    }

    Ok(())
}

/// Interpolate a WAV file by two
pub fn upsample_file(input: &Path, output: &Path, filter: FilterArgs) -> anyhow::Result<()> {
    info!("Upsampling {} -> {}", input.display(), output.display());

    let set = design_coefficients(filter.stages, filter.transition)
        .context("cannot design the interpolation filter")?;
    let buffer = load(input)?;
    let up = audio::upsample_buffer(&buffer, set.coefficients())
        .with_context(|| format!("cannot upsample {}", input.display()))?;
    save(&up, output)
}

fn load(path: &Path) -> anyhow::Result<AudioBuffer> {
    audio::load_wav(path).with_context(|| format!("cannot load {}", path.display()))
}

fn save(buffer: &AudioBuffer, path: &Path) -> anyhow::Result<()> {
    audio::save_wav(buffer, path).with_context(|| format!("cannot save {}", path.display()))
}
