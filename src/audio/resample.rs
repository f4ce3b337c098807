//! Whole-buffer 2x resampling. Each channel gets its own filter state.

use log::debug;

use super::AudioBuffer;
use crate::dsp::{Downsampler2x, Upsampler2x};
use crate::error::{HalfbandError, Result};

/// Halve the sample rate. A trailing odd frame is dropped.
pub fn downsample_buffer(buffer: &AudioBuffer, coefs: &[f64]) -> Result<AudioBuffer> {
    let (low, _) = decimate(buffer, coefs, false)?;
    Ok(low)
}

/// Halve the sample rate and also return the mirrored upper band
pub fn split_buffer(buffer: &AudioBuffer, coefs: &[f64]) -> Result<(AudioBuffer, AudioBuffer)> {
    let (low, high) = decimate(buffer, coefs, true)?;
    let high = high.ok_or(HalfbandError::EmptyAudio)?;
    Ok((low, high))
}

/// Double the sample rate
pub fn upsample_buffer(buffer: &AudioBuffer, coefs: &[f64]) -> Result<AudioBuffer> {
    if buffer.is_empty() {
        return Err(HalfbandError::EmptyAudio);
    }
    debug!(
        "upsampling {} frames x {} channels with {} coefficients",
        buffer.num_frames(),
        buffer.channels(),
        coefs.len()
    );

    let channels = buffer
        .deinterleave()
        .iter()
        .map(|input| -> Result<Vec<f32>> {
            let mut up = Upsampler2x::<f32>::new(coefs);
            let mut output = vec![0.0f32; input.len() * 2];
            up.process_block(&mut output, input)?;
            Ok(output)
        })
        .collect::<Result<Vec<_>>>()?;

    let sample_rate = buffer
        .sample_rate()
        .checked_mul(2)
        .ok_or_else(|| HalfbandError::InvalidAudio {
            reason: format!("cannot double sample rate {} Hz", buffer.sample_rate()),
        })?;

    AudioBuffer::from_channels(&channels, sample_rate)
}

fn decimate(
    buffer: &AudioBuffer,
    coefs: &[f64],
    keep_high: bool,
) -> Result<(AudioBuffer, Option<AudioBuffer>)> {
    if buffer.is_empty() {
        return Err(HalfbandError::EmptyAudio);
    }
    let frames = buffer.num_frames() / 2;
    debug!(
        "downsampling {} frames x {} channels with {} coefficients",
        buffer.num_frames(),
        buffer.channels(),
        coefs.len()
    );

    let mut low_channels = Vec::with_capacity(buffer.channels() as usize);
    let mut high_channels = Vec::with_capacity(buffer.channels() as usize);

    for channel in buffer.deinterleave() {
        let input = &channel[..frames * 2];
        let mut down = Downsampler2x::<f32>::new(coefs);
        let mut low = vec![0.0f32; frames];

        if keep_high {
            let mut high = vec![0.0f32; frames];
            down.process_block_split(&mut low, &mut high, input)?;
            high_channels.push(high);
        } else {
            down.process_block(&mut low, input)?;
        }
        low_channels.push(low);
    }

    let sample_rate = buffer.sample_rate() / 2;
    let low = AudioBuffer::from_channels(&low_channels, sample_rate)?;
    let high = if keep_high {
        Some(AudioBuffer::from_channels(&high_channels, sample_rate)?)
    } else {
        None
    };

    Ok((low, high))
}
