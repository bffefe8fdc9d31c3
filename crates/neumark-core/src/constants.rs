//! Curve constants. All amounts in Ulps (1 unit = 10^18 Ulps).
//!
//! These values are normative: every issued and contributed amount ever
//! computed by the curve depends on them bit for bit.

use ruint::aliases::U256;

/// Build a [`U256`] from a `u128` literal in const context.
pub const fn from_u128(value: u128) -> U256 {
    U256::from_limbs([value as u64, (value >> 64) as u64, 0, 0])
}

/// Number of decimal places in the fixed-point representation.
pub const DECIMALS: usize = 18;

/// Ulps per whole unit (10^18).
pub const ULPS_PER_UNIT: U256 = from_u128(1_000_000_000_000_000_000);

/// Maximum issuable amount. The curve's horizontal asymptote.
///
/// # Examples
///
/// ```
/// use neumark_core::constants::{NEUMARK_CAP, ULPS_PER_UNIT};
/// use neumark_core::U256;
/// assert_eq!(NEUMARK_CAP / ULPS_PER_UNIT, U256::from(1_500_000_000u64));
/// ```
pub const NEUMARK_CAP: U256 = from_u128(1_500_000_000_000_000_000_000_000_000);

/// Initial marginal issuance rate: 6.5 issued units per contributed unit.
pub const INITIAL_REWARD_FRACTION: U256 = from_u128(6_500_000_000_000_000_000);

/// Decay step `D`, approximately `NEUMARK_CAP / INITIAL_REWARD_FRACTION` in Ulps.
///
/// The rounded-up quotient of the other two constants, one above the floor.
pub const DECAY_STEP: U256 = from_u128(230_769_230_769_230_769_230_769_231);

/// Contribution at and above which cumulative issuance is exactly the cap.
pub const SATURATION_THRESHOLD: U256 = from_u128(8_300_000_000_000_000_000_000_000_000);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u128_spans_both_limbs() {
        let v = u128::MAX - 7;
        assert_eq!(from_u128(v), U256::from(v));
        assert_eq!(from_u128(0), U256::ZERO);
    }

    #[test]
    fn cap_is_one_and_a_half_billion_units() {
        assert_eq!(NEUMARK_CAP, ULPS_PER_UNIT * U256::from(1_500_000_000u64));
    }

    #[test]
    fn initial_reward_fraction_is_six_and_a_half() {
        assert_eq!(
            INITIAL_REWARD_FRACTION * U256::from(2u64),
            ULPS_PER_UNIT * U256::from(13u64)
        );
    }

    #[test]
    fn decay_step_is_rounded_up_quotient() {
        let quotient = NEUMARK_CAP * ULPS_PER_UNIT / INITIAL_REWARD_FRACTION;
        assert_eq!(DECAY_STEP, quotient + U256::from(1u64));
    }

    #[test]
    fn saturation_threshold_above_decay_step() {
        assert!(SATURATION_THRESHOLD > DECAY_STEP);
        assert!(SATURATION_THRESHOLD > NEUMARK_CAP);
    }

    #[test]
    fn ulps_per_unit_matches_decimals() {
        assert_eq!(ULPS_PER_UNIT, U256::from(10u64).pow(U256::from(DECIMALS as u64)));
    }
}
