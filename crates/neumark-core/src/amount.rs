//! Decimal rendering and parsing of Ulps amounts.
//!
//! Amounts are exact: parsing never rounds, and formatting prints every
//! significant fractional digit.

use ruint::aliases::U256;

use crate::constants::{DECIMALS, ULPS_PER_UNIT};
use crate::error::AmountError;

/// A fixed-point quantity scaled by 10^18.
pub type Ulps = U256;

/// Parse a decimal amount of whole units (e.g. `"12.5"`) into Ulps.
///
/// Accepts up to [`DECIMALS`] fractional digits and `_` as a digit separator.
///
/// # Examples
///
/// ```
/// use neumark_core::{parse_units, U256};
/// assert_eq!(parse_units("1.5").unwrap(), U256::from(1_500_000_000_000_000_000u64));
/// ```
pub fn parse_units(input: &str) -> Result<Ulps, AmountError> {
    let trimmed = input.trim();
    let (whole, fraction) = match trimmed.split_once('.') {
        Some((w, f)) => (w, f),
        None => (trimmed, ""),
    };
    if !whole.chars().chain(fraction.chars()).any(|c| c != '_') {
        return Err(AmountError::Empty);
    }

    let whole_value = parse_digits(whole)?;

    let fraction_digits: Vec<u8> = fraction
        .chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_digit(10).map(|d| d as u8).ok_or(AmountError::InvalidCharacter(c)))
        .collect::<Result<_, _>>()?;
    if fraction_digits.len() > DECIMALS {
        return Err(AmountError::TooManyDecimals {
            got: fraction_digits.len(),
            max: DECIMALS,
        });
    }

    let mut fraction_value = U256::ZERO;
    for i in 0..DECIMALS {
        let digit = fraction_digits.get(i).copied().unwrap_or(0);
        // At most 18 digits: cannot overflow.
        fraction_value = fraction_value * U256::from(10u64) + U256::from(digit);
    }

    whole_value
        .checked_mul(ULPS_PER_UNIT)
        .and_then(|v| v.checked_add(fraction_value))
        .ok_or(AmountError::Overflow)
}

fn parse_digits(digits: &str) -> Result<U256, AmountError> {
    let mut value = U256::ZERO;
    for c in digits.chars().filter(|c| *c != '_') {
        let digit = c.to_digit(10).ok_or(AmountError::InvalidCharacter(c))?;
        value = value
            .checked_mul(U256::from(10u64))
            .and_then(|v| v.checked_add(U256::from(digit)))
            .ok_or(AmountError::Overflow)?;
    }
    Ok(value)
}

/// Render Ulps as a decimal amount of whole units, trimming trailing zeros.
pub fn format_units(amount: Ulps) -> String {
    let whole = amount / ULPS_PER_UNIT;
    let fraction = amount % ULPS_PER_UNIT;
    if fraction.is_zero() {
        return whole.to_string();
    }
    let padded = format!("{:0>width$}", fraction.to_string(), width = DECIMALS);
    format!("{whole}.{}", padded.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ulps(v: u128) -> U256 {
        U256::from(v)
    }

    #[test]
    fn parse_whole_units() {
        assert_eq!(parse_units("1").unwrap(), ULPS_PER_UNIT);
        assert_eq!(parse_units("0").unwrap(), U256::ZERO);
        assert_eq!(
            parse_units("1_500_000_000").unwrap(),
            ulps(1_500_000_000_000_000_000_000_000_000)
        );
    }

    #[test]
    fn parse_fraction() {
        assert_eq!(parse_units("6.5").unwrap(), ulps(6_500_000_000_000_000_000));
        assert_eq!(parse_units(".25").unwrap(), ulps(250_000_000_000_000_000));
        assert_eq!(parse_units("2.").unwrap(), ulps(2_000_000_000_000_000_000));
    }

    #[test]
    fn parse_smallest_unit() {
        assert_eq!(parse_units("0.000000000000000001").unwrap(), ulps(1));
    }

    #[test]
    fn parse_rejects_too_many_decimals() {
        assert_eq!(
            parse_units("0.0000000000000000001"),
            Err(AmountError::TooManyDecimals { got: 19, max: 18 })
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_units(""), Err(AmountError::Empty));
        assert_eq!(parse_units("."), Err(AmountError::Empty));
        assert_eq!(parse_units("_"), Err(AmountError::Empty));
        assert_eq!(parse_units("_._"), Err(AmountError::Empty));
        assert_eq!(parse_units("1e18"), Err(AmountError::InvalidCharacter('e')));
        assert_eq!(parse_units("-1"), Err(AmountError::InvalidCharacter('-')));
        assert_eq!(parse_units("1.2.3"), Err(AmountError::InvalidCharacter('.')));
    }

    #[test]
    fn parse_rejects_overflow() {
        let huge = "9".repeat(80);
        assert_eq!(parse_units(&huge), Err(AmountError::Overflow));
    }

    #[test]
    fn format_whole_and_fraction() {
        assert_eq!(format_units(ULPS_PER_UNIT), "1");
        assert_eq!(format_units(U256::ZERO), "0");
        assert_eq!(format_units(ulps(6_500_000_000_000_000_000)), "6.5");
        assert_eq!(format_units(ulps(1)), "0.000000000000000001");
        assert_eq!(
            format_units(ulps(6_499_999_985_916_666_686)),
            "6.499999985916666686"
        );
    }

    proptest! {
        #[test]
        fn format_then_parse_is_identity(v in any::<u128>()) {
            let amount = ulps(v);
            prop_assert_eq!(parse_units(&format_units(amount)).unwrap(), amount);
        }
    }
}
