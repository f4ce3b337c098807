//! Allpass Stage Chain
//!
//! The two polyphase paths share one coefficient list: even-indexed
//! coefficients belong to path 0, odd-indexed ones to path 1. Each section
//! is the first-order allpass `y[n] = (x[n] - y[n-1]) * a + x[n-1]`, which
//! at the low rate equals `(a + z^-2) / (1 + a z^-2)` at the high rate.

use super::Sample;

/// Coefficients and state for both allpass paths
#[derive(Debug, Clone)]
pub struct AllpassChain<T: Sample> {
    coefs: Vec<T>,
    x: Vec<T>,
    y: Vec<T>,
}

impl<T: Sample> AllpassChain<T> {
    /// Create a chain with cleared state
    pub fn new(coefs: &[f64]) -> Self {
        let mut chain = Self {
            coefs: Vec::new(),
            x: Vec::new(),
            y: Vec::new(),
        };
        chain.set_coefs(coefs);
        chain
    }

    /// Replace the coefficients.
    ///
    /// State is kept when the coefficient count is unchanged, and cleared
    /// otherwise.
    pub fn set_coefs(&mut self, coefs: &[f64]) {
        let resized = coefs.len() != self.coefs.len();
        self.coefs = coefs.iter().map(|&c| T::from_f64(c)).collect();
        if resized {
            self.x = vec![T::zero(); coefs.len()];
            self.y = vec![T::zero(); coefs.len()];
        }
    }

    /// Number of allpass sections over both paths
    pub fn len(&self) -> usize {
        self.coefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefs.is_empty()
    }

    /// Run one sample through each path
    #[inline]
    pub fn process_pair(&mut self, spl_0: T, spl_1: T) -> (T, T) {
        let mut spl = [spl_0, spl_1];

        for (i, ((&a, x), y)) in self
            .coefs
            .iter()
            .zip(self.x.iter_mut())
            .zip(self.y.iter_mut())
            .enumerate()
        {
            let path = i & 1;
            let out = (spl[path] - *y) * a + *x;
            *x = spl[path];
            *y = out;
            spl[path] = out;
        }

        (spl[0], spl[1])
    }

    /// Clear the filter memory, as if silence had been processed forever
    pub fn reset(&mut self) {
        self.x.iter_mut().for_each(|s| *s = T::zero());
        self.y.iter_mut().for_each(|s| *s = T::zero());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_empty_chain_is_identity() {
        let mut chain = AllpassChain::<f64>::new(&[]);
        assert_eq!(chain.process_pair(0.25, -0.5), (0.25, -0.5));
    }

    #[test]
    fn test_single_section_impulse() {
        // (a + z^-1) / (1 + a z^-1): h = [a, 1 - a^2, -a (1 - a^2), ...]
        let a = 0.5;
        let mut chain = AllpassChain::<f64>::new(&[a]);

        let (y0, _) = chain.process_pair(1.0, 0.0);
        let (y1, _) = chain.process_pair(0.0, 0.0);
        let (y2, _) = chain.process_pair(0.0, 0.0);

        assert_abs_diff_eq!(y0, a, epsilon = 1e-15);
        assert_abs_diff_eq!(y1, 1.0 - a * a, epsilon = 1e-15);
        assert_abs_diff_eq!(y2, -a * (1.0 - a * a), epsilon = 1e-15);
    }

    #[test]
    fn test_paths_are_independent() {
        let mut chain = AllpassChain::<f64>::new(&[0.3, 0.7]);
        let (_, out_1) = chain.process_pair(1.0, 0.0);
        assert_eq!(out_1, 0.0);

        let mut chain = AllpassChain::<f64>::new(&[0.3, 0.7]);
        let (out_0, out_1) = chain.process_pair(0.0, 1.0);
        assert_eq!(out_0, 0.0);
        assert_abs_diff_eq!(out_1, 0.7, epsilon = 1e-15);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut chain = AllpassChain::<f32>::new(&[0.4, 0.6, 0.8]);
        chain.process_pair(1.0, 1.0);
        chain.reset();
        assert_eq!(chain.process_pair(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn test_set_coefs_resizes_state() {
        let mut chain = AllpassChain::<f64>::new(&[0.5]);
        chain.set_coefs(&[0.1, 0.2, 0.3]);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.process_pair(0.0, 0.0), (0.0, 0.0));
    }
}
