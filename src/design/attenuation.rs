//! Sizing a design from a stop-band attenuation target.

use log::debug;

use super::coefficients::{design, CoefficientSet, DesignRequest};
use super::elliptic::EllipticParameters;
use super::order_for_stages;
use crate::error::{HalfbandError, Result};

/// Smallest number of coefficients reaching `attenuation_db` for the transition
pub fn minimum_stage_count(attenuation_db: f64, transition: f64) -> Result<usize> {
    check_attenuation(attenuation_db)?;
    let params = EllipticParameters::from_transition(transition)?;
    let order = order_for_attenuation(attenuation_db, params.q)?;

    debug!(
        "{} dB at transition {} needs order {}",
        attenuation_db, transition, order
    );

    Ok((order - 1) / 2)
}

/// Stop-band attenuation in dB of a design with `stage_count` coefficients
pub fn stopband_attenuation(stage_count: usize, transition: f64) -> Result<f64> {
    if stage_count == 0 {
        return Err(HalfbandError::InvalidStageCount {
            stage_count,
            reason: "at least one stage is required".to_string(),
        });
    }
    let params = EllipticParameters::from_transition(transition)?;
    let order = order_for_stages(stage_count)? as f64;

    let a = 4.0 * (order * 0.5 * params.q.ln()).exp();
    let attn_p2 = a / (1.0 + a);

    Ok(-10.0 * attn_p2.log10())
}

/// Design the shortest filter meeting `attenuation_db` for the transition
pub fn design_for_attenuation(attenuation_db: f64, transition: f64) -> Result<CoefficientSet> {
    let stage_count = minimum_stage_count(attenuation_db, transition)?;
    design(&DesignRequest::new(stage_count, transition)?)
}

fn check_attenuation(attenuation_db: f64) -> Result<()> {
    if attenuation_db.is_finite() && attenuation_db > 0.0 {
        Ok(())
    } else {
        Err(HalfbandError::InvalidAttenuation {
            attenuation: attenuation_db,
        })
    }
}

/// Odd order, at least 3. Fails once the stop-band power underflows.
fn order_for_attenuation(attenuation_db: f64, q: f64) -> Result<usize> {
    let out_of_range = || HalfbandError::InvalidAttenuation {
        attenuation: attenuation_db,
    };

    let attn_p2 = 10.0_f64.powf(-attenuation_db / 10.0);
    if attn_p2 <= 0.0 {
        return Err(out_of_range());
    }
    let a = attn_p2 / (1.0 - attn_p2);

    // ln(a^2 / 16) taken in the log domain so a^2 cannot underflow
    let ratio = (2.0 * a.ln() - 16.0_f64.ln()) / q.ln();
    if ratio.is_nan() || ratio >= usize::MAX as f64 {
        return Err(out_of_range());
    }
    let order = ratio.ceil().max(1.0) as usize;

    let order = if order % 2 == 0 {
        order.checked_add(1).ok_or_else(out_of_range)?
    } else {
        order
    };
    Ok(order.max(3))
}
