//! Trait interface for the issuance curve.
//!
//! [`IssuanceCurve`] is the contract between the curve engine
//! (neumark-curve implements) and any collaborator that prices
//! contributions or retirements against it.

use ruint::aliases::U256;

use crate::constants::{INITIAL_REWARD_FRACTION, NEUMARK_CAP};
use crate::error::CurveError;

/// Pure, stateless mapping between contributed and issued amounts.
///
/// All amounts are Ulps. Implementations must be referentially transparent:
/// the same inputs always produce the same output, on any thread.
pub trait IssuanceCurve: Send + Sync {
    /// Total issued amount for a total contributed amount.
    ///
    /// Non-decreasing, never above [`NEUMARK_CAP`], and exactly the cap at
    /// and above the saturation threshold.
    fn cumulative(&self, contributed: U256) -> Result<U256, CurveError>;

    /// Contributed amount in `[min, max]` whose cumulative issuance matches `issued`.
    ///
    /// Rounds up to the first contribution above `issued` when no contribution
    /// maps to it exactly. Requires `cumulative(min) <= issued <= cumulative(max)`.
    fn cumulative_inverse(&self, issued: U256, min: U256, max: U256)
        -> Result<U256, CurveError>;

    /// Issuance for contributing `delta` on top of `total`.
    fn incremental(&self, total: U256, delta: U256) -> Result<U256, CurveError>;

    /// Contribution equivalent of retiring `issued_delta`, searching the
    /// post-retirement contribution within `[min, max]` (`max <= total`).
    fn incremental_inverse_in(
        &self,
        total: U256,
        issued_delta: U256,
        min: U256,
        max: U256,
    ) -> Result<U256, CurveError>;

    /// Contribution equivalent of retiring `issued_delta` at `total`.
    ///
    /// Default implementation searches the whole `[0, total]` bracket.
    fn incremental_inverse(&self, total: U256, issued_delta: U256) -> Result<U256, CurveError> {
        self.incremental_inverse_in(total, issued_delta, U256::ZERO, total)
    }

    /// Maximum issuable amount.
    fn neumark_cap(&self) -> U256 {
        NEUMARK_CAP
    }

    /// Initial marginal issuance rate, 18-decimal fixed point.
    fn initial_reward_fraction(&self) -> U256 {
        INITIAL_REWARD_FRACTION
    }
}
