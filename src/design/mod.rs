//! Half-band Filter Design
//!
//! Computes allpass coefficients for a two-path polyphase IIR half-band
//! filter. The filter is the sum of two allpass chains:
//!
//! ```text
//!          N/2-1   a(2k+1) + z^-2              (N-1)/2   a(2k) + z^-2
//! A0(z) =  Prod   ----------------    A1(z) = z^-1 Prod  --------------
//!          k = 0  1 + a(2k+1) z^-2             k = 0    1 + a(2k) z^-2
//!
//! H(z) = (A0(z) + A1(z)) / 2
//! ```
//!
//! The sum gives the low-pass response, the difference its complementary
//! high-pass. Coefficients come from a closed-form elliptic design driven by
//! the transition bandwidth (Valenzuela & Constantinides, 1983).

mod attenuation;
mod coefficients;
mod elliptic;
mod series;

pub use attenuation::{design_for_attenuation, minimum_stage_count, stopband_attenuation};
pub use coefficients::{
    compute_coefficient, design, design_coefficients, CoefficientSet, DesignRequest,
};
pub use elliptic::EllipticParameters;
pub use series::{accumulate, SeriesKind, CONVERGENCE_THRESHOLD, MAX_SERIES_TERMS};

use crate::error::{HalfbandError, Result};

/// Filter order for a given number of allpass coefficients
#[inline]
pub fn order_for_stages(stage_count: usize) -> Result<usize> {
    stage_count
        .checked_mul(2)
        .and_then(|order| order.checked_add(1))
        .ok_or_else(|| HalfbandError::InvalidStageCount {
            stage_count,
            reason: "filter order does not fit in a machine word".to_string(),
        })
}
