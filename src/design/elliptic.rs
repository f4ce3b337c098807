//! Elliptic parameters derived from the transition bandwidth.

use std::f64::consts::PI;

use log::debug;

use crate::error::{HalfbandError, Result};

/// Squared elliptic modulus and nome for one transition bandwidth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipticParameters {
    /// Squared modulus, in (0, 1)
    pub k: f64,
    /// Nome, in (0, 1)
    pub q: f64,
}

impl EllipticParameters {
    /// Derive `(k, q)` from a normalized transition bandwidth.
    ///
    /// The transition must lie strictly inside (0, 0.5). NaN and infinite
    /// values are rejected along with the boundaries, where the tangent
    /// degenerates.
    pub fn from_transition(transition: f64) -> Result<Self> {
        if !is_valid_transition(transition) {
            return Err(HalfbandError::Domain { transition });
        }

        let k = ((1.0 - transition * 2.0) * PI / 4.0).tan();
        let k = k * k;

        let kk_sqrt = (1.0 - k * k).powf(0.25);
        let e = 0.5 * (1.0 - kk_sqrt) / (1.0 + kk_sqrt);
        let e2 = e * e;
        let e4 = e2 * e2;
        let q = e * (1.0 + e4 * (2.0 + e4 * (15.0 + 150.0 * e4)));

        debug!("transition {} -> k = {:e}, q = {:e}", transition, k, q);

        if !(k > 0.0 && k < 1.0 && q > 0.0 && q < 1.0) {
            return Err(HalfbandError::Domain { transition });
        }

        Ok(Self { k, q })
    }
}

/// Check that a transition bandwidth lies strictly inside (0, 0.5)
#[inline]
pub(crate) fn is_valid_transition(transition: f64) -> bool {
    transition > 0.0 && transition < 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_parameters() {
        let params = EllipticParameters::from_transition(0.1).unwrap();
        assert_relative_eq!(params.k, 0.527_864_045_000_420_6, max_relative = 1e-12);
        assert_relative_eq!(params.q, 0.020_402_271_398_940_137, max_relative = 1e-12);
    }

    #[test]
    fn test_narrow_transition_gives_larger_nome() {
        let narrow = EllipticParameters::from_transition(0.01).unwrap();
        let wide = EllipticParameters::from_transition(0.4).unwrap();
        assert!(narrow.q > wide.q);
        assert!(narrow.k > wide.k);
    }

    #[test]
    fn test_rejects_boundaries() {
        for transition in [0.0, 0.5, -0.1, 0.75, f64::NAN, f64::INFINITY] {
            let result = EllipticParameters::from_transition(transition);
            assert!(
                matches!(result, Err(HalfbandError::Domain { .. })),
                "transition {} should be rejected",
                transition
            );
        }
    }

    #[test]
    fn test_parameters_stay_in_unit_interval() {
        for transition in [1e-4, 0.01, 0.25, 0.49, 0.4999] {
            let params = EllipticParameters::from_transition(transition).unwrap();
            assert!(params.k > 0.0 && params.k < 1.0);
            assert!(params.q > 0.0 && params.q < 1.0);
        }
    }
}
