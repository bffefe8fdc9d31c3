//! Inverse solver: bisection over a non-decreasing integer curve.
//!
//! The midpoint is biased toward the upper half (`floor((min + max + 1) / 2)`)
//! so that routing to the lower half always strictly decreases `max`. When no
//! contribution maps exactly to the target, the solver rounds up to the first
//! contribution whose issuance exceeds it; reversing the curve therefore never
//! refunds more contribution than the issuance being retired is worth.

use std::cmp::Ordering;

use neumark_core::error::CurveError;
use neumark_core::U256;
use tracing::{debug, error, trace};

use crate::series::cumulative;

const ONE: U256 = U256::from_limbs([1, 0, 0, 0]);

/// Upper-biased midpoint of `[lo, hi]`, equal to `floor((lo + hi + 1) / 2)`.
///
/// Computed from the span so `lo + hi` is never formed.
fn upper_midpoint(lo: U256, hi: U256) -> U256 {
    let span = hi - lo;
    lo + (span >> 1) + (span & ONE)
}

/// Find a contribution in `[min, max]` whose `curve` value is `target`,
/// rounding up when the curve skips over `target`.
///
/// `curve` must be non-decreasing on the bracket. Requires `min <= max` and
/// `curve(min) <= target <= curve(max)`.
pub fn bisect<F>(target: U256, min: U256, max: U256, curve: F) -> Result<U256, CurveError>
where
    F: Fn(U256) -> Result<U256, CurveError>,
{
    if min > max {
        return Err(CurveError::InvalidBracket { min, max });
    }
    let low = curve(min)?;
    let high = curve(max)?;
    if target < low || target > high {
        return Err(CurveError::OutOfBracket { target, low, high });
    }

    let mut lo = min;
    let mut hi = max;
    while hi > lo {
        let mid = upper_midpoint(lo, hi);
        let value = curve(mid)?;
        trace!(%lo, %hi, %mid, %value, "bisection step");
        match value.cmp(&target) {
            Ordering::Equal => return Ok(mid),
            Ordering::Less => lo = mid,
            // mid > lo, so mid >= 1.
            Ordering::Greater => hi = mid - ONE,
        }
    }

    let below = curve(lo)?;
    if below == target {
        return Ok(lo);
    }

    let next = lo.checked_add(ONE).ok_or(CurveError::ArithmeticOverflow)?;
    let above = curve(next)?;
    if !(below < target && target < above) {
        error!(%target, %lo, %below, %above, "inverse bisection ended outside a gap");
        return Err(CurveError::InvariantViolated("inexact inverse not bracketed by a gap"));
    }

    debug!(%target, contributed = %next, "no exact inverse, rounding up");
    Ok(next)
}

/// Contributed amount whose cumulative issuance matches `issued`, searched
/// within `[min, max]`.
///
/// # Examples
///
/// ```
/// use neumark_core::U256;
/// use neumark_curve::cumulative_inverse;
/// // cumulative(0) = 0 and cumulative(1) = 6: nothing maps to 5, so round up.
/// let x = cumulative_inverse(U256::from(5u64), U256::ZERO, U256::from(1u64)).unwrap();
/// assert_eq!(x, U256::from(1u64));
/// ```
pub fn cumulative_inverse(issued: U256, min: U256, max: U256) -> Result<U256, CurveError> {
    bisect(issued, min, max, cumulative)
}
