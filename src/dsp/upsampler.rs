//! 2x Upsampler

use super::{AllpassChain, Sample};
use crate::error::{HalfbandError, Result};

/// Polyphase half-band interpolator
#[derive(Debug, Clone)]
pub struct Upsampler2x<T: Sample> {
    chain: AllpassChain<T>,
}

impl<T: Sample> Upsampler2x<T> {
    /// Create an upsampler from designed coefficients
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

    /// Produce two output samples from one input sample
    #[inline]
    pub fn process_sample(&mut self, input: T) -> [T; 2] {
        let (even, odd) = self.chain.process_pair(input, input);
        [even, odd]
    }

    /// Interpolate a block; `output` must hold two samples per input
    pub fn process_block(&mut self, output: &mut [T], input: &[T]) -> Result<()> {
        if output.len() != input.len() * 2 {
            return Err(HalfbandError::InvalidBlockSize {
                input: input.len(),
                output: output.len(),
            });
        }

        for (pair, &sample) in output.chunks_exact_mut(2).zip(input) {
            let [even, odd] = self.process_sample(sample);
            pair[0] = even;
            pair[1] = odd;
        }
        Ok(())
    }

    /// Clear the filter memory
    pub fn clear_buffers(&mut self) {
        self.chain.reset();
    }
}
