//! Cumulative evaluator: truncated alternating series for the issuance curve.
//!
//! Evaluates `CAP * (1 - e^(-x / D))` through its series expansion. Each step
//! multiplies the previous term by `x / (k * D)` with floor division; steps
//! alternate between adding and subtracting. Evaluation stops once the
//! subtracted term truncates to zero.
//!
//! While `x > k * D` the terms still grow and the running sum dips below zero,
//! so added and subtracted terms are accumulated separately and combined once
//! at the end. The result is identical to modular 256-bit accumulation.

use neumark_core::constants::{DECAY_STEP, NEUMARK_CAP, SATURATION_THRESHOLD};
use neumark_core::error::CurveError;
use neumark_core::{U256, U512};
use ruint::UintTryFrom;
use tracing::error;

/// Hard upper bound on add/subtract pairs for a single evaluation.
///
/// Below the saturation threshold the series converges in at most 74 pairs;
/// hitting this bound means the shrinking-term invariant is broken.
pub const MAX_SERIES_PAIRS: u32 = 128;

/// Result of one series evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesEvaluation {
    /// Cumulative issued amount in Ulps.
    pub value: U256,
    /// Number of add/subtract pairs executed (0 when saturated).
    pub pairs: u32,
}

/// `floor(a * b / d)` with a 512-bit intermediate product.
fn mul_div(a: U256, b: U256, d: U256) -> Result<U256, CurveError> {
    let product: U512 = a.widening_mul(b);
    let quotient = product.checked_div(U512::from(d)).ok_or_else(|| {
        error!(%a, %b, "series step divided by zero");
        CurveError::InvariantViolated("zero series denominator")
    })?;
    U256::uint_try_from(quotient).map_err(|_| CurveError::ArithmeticOverflow)
}

/// Evaluate the curve at `contributed`, reporting how many pairs were needed.
pub fn evaluate(contributed: U256) -> Result<SeriesEvaluation, CurveError> {
    if contributed >= SATURATION_THRESHOLD {
        return Ok(SeriesEvaluation {
            value: NEUMARK_CAP,
            pairs: 0,
        });
    }

    let mut term = NEUMARK_CAP;
    let mut added = U256::ZERO;
    let mut subtracted = U256::ZERO;
    let mut denom = DECAY_STEP;
    let mut pairs = 0u32;

    loop {
        if pairs == MAX_SERIES_PAIRS {
            error!(%contributed, pairs, "issuance series failed to converge");
            return Err(CurveError::InvariantViolated("series did not converge"));
        }

        term = mul_div(term, contributed, denom)?;
        added = added.checked_add(term).ok_or(CurveError::ArithmeticOverflow)?;
        denom = denom.checked_add(DECAY_STEP).ok_or(CurveError::ArithmeticOverflow)?;

        term = mul_div(term, contributed, denom)?;
        subtracted = subtracted
            .checked_add(term)
            .ok_or(CurveError::ArithmeticOverflow)?;
        denom = denom.checked_add(DECAY_STEP).ok_or(CurveError::ArithmeticOverflow)?;

        pairs += 1;
        if term.is_zero() {
            break;
        }
    }

    let value = added.checked_sub(subtracted).ok_or_else(|| {
        error!(%contributed, %added, %subtracted, "issuance series summed below zero");
        CurveError::InvariantViolated("negative series sum")
    })?;
    if value > NEUMARK_CAP {
        error!(%contributed, %value, "issuance series exceeded cap");
        return Err(CurveError::InvariantViolated("series exceeded cap"));
    }

    Ok(SeriesEvaluation { value, pairs })
}

/// Cumulative issued amount (Ulps) for a total contributed amount (Ulps).
///
/// Returns exactly [`NEUMARK_CAP`] at and above [`SATURATION_THRESHOLD`].
///
/// # Examples
///
/// ```
/// use neumark_core::U256;
/// use neumark_curve::cumulative;
/// assert_eq!(cumulative(U256::ZERO).unwrap(), U256::ZERO);
/// assert_eq!(cumulative(U256::from(1u64)).unwrap(), U256::from(6u64));
/// ```
pub fn cumulative(contributed: U256) -> Result<U256, CurveError> {
    evaluate(contributed).map(|e| e.value)
}
