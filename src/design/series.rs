//! Alternating theta-style series used by the coefficient formula.

use std::f64::consts::PI;

use log::trace;

use crate::error::{HalfbandError, Result};

/// Summation stops once a term's magnitude is at or below this value
pub const CONVERGENCE_THRESHOLD: f64 = 1e-100;

/// Hard cap on the number of summed terms
pub const MAX_SERIES_TERMS: usize = 1024;

/// Which of the two series to sum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// `sum_{i>=0} (-1)^i q^(i(i+1)) sin((2i+1) c pi / order)`
    Numerator,
    /// `sum_{i>=1} (-1)^i q^(i^2) cos(2i c pi / order)`
    Denominator,
}

impl SeriesKind {
    /// First index and sign of the series
    fn start(self) -> (i32, f64) {
        match self {
            SeriesKind::Numerator => (0, 1.0),
            SeriesKind::Denominator => (1, -1.0),
        }
    }

    fn term(self, q: f64, i: i32, c: f64, order: f64) -> f64 {
        match self {
            SeriesKind::Numerator => {
                q.powi(i * (i + 1)) * ((i * 2 + 1) as f64 * c * PI / order).sin()
            }
            SeriesKind::Denominator => q.powi(i * i) * ((i * 2) as f64 * c * PI / order).cos(),
        }
    }
}

/// Sum one series for the 1-based `stage_index` of a filter of `order`.
///
/// Terms are added until the magnitude of the latest one drops to
/// [`CONVERGENCE_THRESHOLD`]. Hitting [`MAX_SERIES_TERMS`] first is reported
/// as [`HalfbandError::NonConvergence`].
pub fn accumulate(q: f64, order: usize, stage_index: usize, kind: SeriesKind) -> Result<f64> {
    if !q.is_finite() || q.abs() >= 1.0 {
        return Err(HalfbandError::Numeric {
            stage: stage_index,
            reason: format!("nome {} is outside (-1, 1)", q),
        });
    }

    let (c, order_f) = (stage_index as f64, order as f64);
    let (mut i, mut sign) = kind.start();
    let mut acc = 0.0;

    for count in 1..=MAX_SERIES_TERMS {
        let term = kind.term(q, i, c, order_f) * sign;
        acc += term;

        if term.abs() <= CONVERGENCE_THRESHOLD {
            trace!(
                "{:?} series for stage {} converged after {} terms",
                kind,
                stage_index,
                count
            );
            return Ok(acc);
        }

        sign = -sign;
        i += 1;
    }

    Err(HalfbandError::NonConvergence {
        stage: stage_index,
        iterations: MAX_SERIES_TERMS,
    })
}
