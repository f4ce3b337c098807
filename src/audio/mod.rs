//! Audio buffers and WAV plumbing for the resampling commands.

pub mod io;
pub mod resample;

pub use io::{load_wav, save_wav};
pub use resample::{downsample_buffer, split_buffer, upsample_buffer};

use crate::error::{HalfbandError, Result};

/// Interleaved audio samples with their format
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Interleaved samples normalized to -1.0..1.0
    samples: Vec<f32>,
    /// Number of channels (1 = mono, 2 = stereo)
    channels: u16,
    /// Sample rate in Hz
    sample_rate: u32,
}

impl AudioBuffer {
    /// Create a buffer from interleaved samples
    pub fn new(samples: Vec<f32>, channels: u16, sample_rate: u32) -> Result<Self> {
        if channels == 0 {
            return Err(HalfbandError::InvalidAudio {
                reason: "channel count must be at least 1".to_string(),
            });
        }
        if samples.len() % channels as usize != 0 {
            return Err(HalfbandError::InvalidAudio {
                reason: format!(
                    "sample count {} is not divisible by channel count {}",
                    samples.len(),
                    channels
                ),
            });
        }
        Ok(Self {
            samples,
            channels,
            sample_rate,
        })
    }

    /// Interleave per-channel sample vectors into one buffer
    pub fn from_channels(channels: &[Vec<f32>], sample_rate: u32) -> Result<Self> {
        let Some(first) = channels.first() else {
            return Err(HalfbandError::EmptyAudio);
        };
        let frames = first.len();
        if channels.iter().any(|ch| ch.len() != frames) {
            return Err(HalfbandError::InvalidAudio {
                reason: "channels have different lengths".to_string(),
            });
        }
        let count = u16::try_from(channels.len()).map_err(|_| HalfbandError::InvalidAudio {
            reason: format!("too many channels: {}", channels.len()),
        })?;

        let mut samples = Vec::with_capacity(frames * channels.len());
        for frame in 0..frames {
            samples.extend(channels.iter().map(|ch| ch[frame]));
        }

        Self::new(samples, count, sample_rate)
    }

    /// Create a mono sine test tone
    pub fn sine_wave(frequency: f32, duration_secs: f32, sample_rate: u32) -> Self {
        let num_samples = (duration_secs * sample_rate as f32) as usize;
        let samples = (0..num_samples)
            .map(|i| {
                let t = i as f32 / sample_rate as f32;
                (2.0 * std::f32::consts::PI * frequency * t).sin()
            })
            .collect();

        Self {
            samples,
            channels: 1,
            sample_rate,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of frames (samples per channel)
    pub fn num_frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Copy out one channel
    pub fn channel(&self, index: usize) -> Vec<f32> {
        if index >= self.channels as usize {
            return Vec::new();
        }
        self.samples
            .iter()
            .skip(index)
            .step_by(self.channels as usize)
            .copied()
            .collect()
    }

    /// Split into per-channel vectors
    pub fn deinterleave(&self) -> Vec<Vec<f32>> {
        (0..self.channels as usize).map(|ch| self.channel(ch)).collect()
    }

    /// Root mean square level of one channel
    pub fn rms(&self, index: usize) -> f32 {
        let channel = self.channel(index);
        if channel.is_empty() {
            return 0.0;
        }
        let sum: f64 = channel.iter().map(|&s| f64::from(s) * f64::from(s)).sum();
        (sum / channel.len() as f64).sqrt() as f32
    }
}
