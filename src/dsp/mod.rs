//! Polyphase Resampling
//!
//! 2x decimation and interpolation built on the allpass coefficients from
//! [`crate::design`]. Both resamplers run the two allpass paths at the low
//! sample rate, so each section only costs one multiply per output pair.

mod downsampler;
mod stage;
mod upsampler;

pub use downsampler::Downsampler2x;
pub use stage::AllpassChain;
pub use upsampler::Upsampler2x;

use num_traits::Float;

/// Sample type the resamplers can run on
pub trait Sample: Float + Send + Sync + 'static {
    /// Convert a designed coefficient to the sample type
    fn from_f64(value: f64) -> Self;
}

impl Sample for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Sample for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}
