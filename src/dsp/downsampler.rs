//! 2x Downsampler
//!
//! Decimates by two with a polyphase half-band filter. Can also split the
//! input into its lower and upper half spectrum, both critically sampled.

use super::{AllpassChain, Sample};
use crate::error::{HalfbandError, Result};

/// Polyphase half-band decimator
///
/// # Example
/// ```
/// use halfband::design::design_coefficients;
/// use halfband::dsp::Downsampler2x;
///
/// let coefs = design_coefficients(8, 0.05).unwrap();
/// let mut down = Downsampler2x::<f32>::new(coefs.coefficients());
/// let low = down.process_sample([0.5, 0.5]);
/// assert!(low.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct Downsampler2x<T: Sample> {
    chain: AllpassChain<T>,
}

impl<T: Sample> Downsampler2x<T> {
    /// Create a downsampler from designed coefficients
    pub fn new(coefs: &[f64]) -> Self {
        Self {
            chain: AllpassChain::new(coefs),
        }
    }

    /// Replace the filter coefficients
    pub fn set_coefs(&mut self, coefs: &[f64]) {
        self.chain.set_coefs(coefs);
    }

    /// Number of coefficients in use
    pub fn num_coefs(&self) -> usize {
        self.chain.len()
    }

    /// Decimate one pair of input samples into one output sample
    #[inline]
    pub fn process_sample(&mut self, input: [T; 2]) -> T {
        let (spl_0, spl_1) = self.chain.process_pair(input[1], input[0]);
        (spl_0 + spl_1) * half()
    }

    /// Decimate a block; `input` must hold exactly two samples per output
    pub fn process_block(&mut self, output: &mut [T], input: &[T]) -> Result<()> {
        check_block(input.len(), output.len())?;

        for (out, pair) in output.iter_mut().zip(input.chunks_exact(2)) {
            *out = self.process_sample([pair[0], pair[1]]);
        }
        Ok(())
    }

    /// Split one pair of samples into `(low, high)` bands.
    ///
    /// `low` equals [`process_sample`](Self::process_sample). `high` is the
    /// complementary high-pass output after decimation, so its spectrum is
    /// mirrored: Fs/4..Fs/2 maps to Fs/4..0.
    #[inline]
    pub fn process_sample_split(&mut self, input: [T; 2]) -> (T, T) {
        let (spl_0, spl_1) = self.chain.process_pair(input[1], input[0]);
        let low = (spl_0 + spl_1) * half();
        let high = spl_0 - low;
        (low, high)
    }

    /// Split a block into its lower and upper bands
    pub fn process_block_split(
        &mut self,
        output_low: &mut [T],
        output_high: &mut [T],
        input: &[T],
    ) -> Result<()> {
        check_block(input.len(), output_low.len())?;
        check_block(input.len(), output_high.len())?;

        for ((low, high), pair) in output_low
            .iter_mut()
            .zip(output_high.iter_mut())
            .zip(input.chunks_exact(2))
        {
            let (l, h) = self.process_sample_split([pair[0], pair[1]]);
            *low = l;
            *high = h;
        }
        Ok(())
    }

    /// Clear the filter memory
    pub fn clear_buffers(&mut self) {
        self.chain.reset();
    }
}

#[inline]
fn half<T: Sample>() -> T {
    T::from_f64(0.5)
}

fn check_block(input: usize, output: usize) -> Result<()> {
    if input == output * 2 {
        Ok(())
    } else {
        Err(HalfbandError::InvalidBlockSize { input, output })
    }
}
