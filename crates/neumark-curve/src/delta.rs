//! Delta operations: issuance for an additional contribution and the
//! contribution equivalent of retiring issuance.

use neumark_core::error::CurveError;
use neumark_core::U256;
use tracing::error;

use crate::series::cumulative;
use crate::solver::cumulative_inverse;

/// Issuance (Ulps) for contributing `delta` on top of `total` contributed.
///
/// Fails with [`CurveError::ArithmeticOverflow`] if `total + delta` does not
/// fit in 256 bits.
pub fn incremental(total: U256, delta: U256) -> Result<U256, CurveError> {
    let end = total.checked_add(delta).ok_or(CurveError::ArithmeticOverflow)?;
    let from = cumulative(total)?;
    let to = cumulative(end)?;
    to.checked_sub(from).ok_or_else(|| {
        error!(%total, %delta, %from, %to, "cumulative issuance decreased");
        CurveError::InvariantViolated("negative incremental issuance")
    })
}

/// Contribution (Ulps) equivalent of retiring `issued_delta` at `total`.
pub fn incremental_inverse(total: U256, issued_delta: U256) -> Result<U256, CurveError> {
    incremental_inverse_in(total, issued_delta, U256::ZERO, total)
}

/// Like [`incremental_inverse`], with the post-retirement contribution
/// searched in `[min, max]`. Requires `min <= max <= total`.
pub fn incremental_inverse_in(
    total: U256,
    issued_delta: U256,
    min: U256,
    max: U256,
) -> Result<U256, CurveError> {
    if issued_delta.is_zero() {
        return Ok(U256::ZERO);
    }
    if min > max || max > total {
        return Err(CurveError::InvalidBracket { min, max });
    }

    let to = cumulative(total)?;
    let from_issued = to
        .checked_sub(issued_delta)
        .ok_or(CurveError::InsufficientIssuance {
            issued: to,
            requested: issued_delta,
        })?;
    let from_contributed = cumulative_inverse(from_issued, min, max)?;

    total.checked_sub(from_contributed).ok_or_else(|| {
        error!(%total, %from_contributed, "inverse landed above total contribution");
        CurveError::InvariantViolated("inverse above total contribution")
    })
}
