//! WAV file I/O
//!
//! Loading and saving WAV files using the hound crate.

use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::info;

use super::AudioBuffer;
use crate::error::{HalfbandError, Result};

/// Load a WAV file, converting integer samples to -1.0..1.0
pub fn load_wav<P: AsRef<Path>>(path: P) -> Result<AudioBuffer> {
    let path = path.as_ref();
    let read_error = |source: hound::Error| HalfbandError::AudioRead {
        path: path.display().to_string(),
        source,
    };

    let reader = WavReader::open(path).map_err(read_error)?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map_err(read_error))
            .collect::<Result<Vec<f32>>>()?,
        SampleFormat::Int => {
            let max_val = (1u64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val).map_err(read_error))
                .collect::<Result<Vec<f32>>>()?
        }
    };

    info!(
        "loaded {} ({} ch, {} Hz, {} samples)",
        path.display(),
        spec.channels,
        spec.sample_rate,
        samples.len()
    );

    AudioBuffer::new(samples, spec.channels, spec.sample_rate)
}

/// Save a buffer as a 32-bit float WAV file
pub fn save_wav<P: AsRef<Path>>(buffer: &AudioBuffer, path: P) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source: hound::Error| HalfbandError::AudioWrite {
        path: path.display().to_string(),
        source,
    };

    let spec = WavSpec {
        channels: buffer.channels(),
        sample_rate: buffer.sample_rate(),
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec).map_err(write_error)?;
    for &sample in buffer.samples() {
        writer.write_sample(sample).map_err(write_error)?;
    }
    writer.finalize().map_err(write_error)?;

    info!(
        "wrote {} ({} ch, {} Hz)",
        path.display(),
        buffer.channels(),
        buffer.sample_rate()
    );

    Ok(())
}
