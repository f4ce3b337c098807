//! Per-stage coefficient formula and the cascade driver.

use log::debug;
use serde::{Deserialize, Serialize};

use super::elliptic::{is_valid_transition, EllipticParameters};
use super::series::{accumulate, SeriesKind};
use super::{order_for_stages, stopband_attenuation};
use crate::error::{HalfbandError, Result};

/// Inputs for one coefficient design
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignRequest {
    stage_count: usize,
    transition: f64,
    order: usize,
}

impl DesignRequest {
    /// Create a request, rejecting transitions outside (0, 0.5) and stage
    /// counts whose order overflows
    pub fn new(stage_count: usize, transition: f64) -> Result<Self> {
        if !is_valid_transition(transition) {
            return Err(HalfbandError::Domain { transition });
        }
        let order = order_for_stages(stage_count)?;
        Ok(Self {
            stage_count,
            transition,
            order,
        })
    }

    /// Number of allpass coefficients to compute
    pub fn stage_count(&self) -> usize {
        self.stage_count
    }

    /// Normalized transition bandwidth
    pub fn transition(&self) -> f64 {
        self.transition
    }

    /// Elliptic filter order, `2 * stage_count + 1`
    pub fn order(&self) -> usize {
        self.order
    }
}

/// Designed allpass coefficients, first stage first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientSet {
    transition: f64,
    order: usize,
    coefficients: Vec<f64>,
}

impl CoefficientSet {
    /// Transition bandwidth the set was designed for
    pub fn transition(&self) -> f64 {
        self.transition
    }

    /// Elliptic filter order
    pub fn order(&self) -> usize {
        self.order
    }

    /// Coefficients in stage order
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Stop-band attenuation reached by this set, in dB
    pub fn attenuation_db(&self) -> Result<f64> {
        stopband_attenuation(self.coefficients.len(), self.transition)
    }

    /// Take ownership of the coefficient vector
    pub fn into_vec(self) -> Vec<f64> {
        self.coefficients
    }
}

impl AsRef<[f64]> for CoefficientSet {
    fn as_ref(&self) -> &[f64] {
        &self.coefficients
    }
}

/// Compute the allpass coefficient for the 1-based `stage_index`.
///
/// Fails with [`HalfbandError::Numeric`] when the radicand goes negative or
/// the result falls outside (0, 1), which would make the allpass unstable.
pub fn compute_coefficient(
    stage_index: usize,
    params: &EllipticParameters,
    order: usize,
) -> Result<f64> {
    let EllipticParameters { k, q } = *params;

    let num = accumulate(q, order, stage_index, SeriesKind::Numerator)? * q.powf(0.25);
    let den = accumulate(q, order, stage_index, SeriesKind::Denominator)? + 0.5;
    let ww = num / den;
    let wwsq = ww * ww;

    let radicand = (1.0 - wwsq * k) * (1.0 - wwsq / k);
    if radicand.is_nan() || radicand < 0.0 {
        return Err(HalfbandError::Numeric {
            stage: stage_index,
            reason: format!("negative radicand {:e}", radicand),
        });
    }

    let x = radicand.sqrt() / (1.0 + wwsq);
    let coef = (1.0 - x) / (1.0 + x);

    if !(coef > 0.0 && coef < 1.0) {
        return Err(HalfbandError::Numeric {
            stage: stage_index,
            reason: format!("coefficient {} is outside (0, 1)", coef),
        });
    }

    Ok(coef)
}

/// Design every coefficient of a request.
///
/// The order depends on the stage count, so designing `n` and `n + 1`
/// stages for the same transition gives unrelated sequences.
pub fn design(request: &DesignRequest) -> Result<CoefficientSet> {
    let params = EllipticParameters::from_transition(request.transition)?;
    let order = request.order();

    debug!(
        "designing {} coefficients, order {}, transition {}",
        request.stage_count, order, request.transition
    );

    let coefficients = (1..=request.stage_count)
        .map(|stage_index| compute_coefficient(stage_index, &params, order))
        .collect::<Result<Vec<f64>>>()?;

    Ok(CoefficientSet {
        transition: request.transition,
        order,
        coefficients,
    })
}

/// Shorthand for `design(&DesignRequest::new(stage_count, transition)?)`
pub fn design_coefficients(stage_count: usize, transition: f64) -> Result<CoefficientSet> {
    design(&DesignRequest::new(stage_count, transition)?)
}
