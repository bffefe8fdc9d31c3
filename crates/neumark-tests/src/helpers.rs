//! Shared test helpers for fixture and property tests.

use neumark_core::U256;

/// One whole unit in Ulps.
pub const UNIT: u128 = 1_000_000_000_000_000_000;

/// Saturation threshold as a `u128`, for proptest ranges.
pub const THRESHOLD: u128 = 8_300_000_000_000_000_000_000_000_000;

/// Cap as a `u128`.
pub const CAP: u128 = 1_500_000_000_000_000_000_000_000_000;

/// Contributions below this issue at least one Ulps per extra Ulps, so the
/// curve is strictly increasing and every issued value has one preimage.
pub const STRICT_REGION: u128 = 100_000_000_000_000_000_000_000_000;

/// Most add/subtract pairs any contribution below the threshold needs.
pub const WORST_CASE_PAIRS: u32 = 74;

/// Raw Ulps.
pub fn ulps(v: u128) -> U256 {
    U256::from(v)
}

/// Whole units.
pub fn units(v: u128) -> U256 {
    U256::from(v * UNIT)
}

/// Normative `(contributed, issued)` pairs, in Ulps.
pub const FIXTURES: &[(u128, u128)] = &[
    (0, 0),
    (1, 6),
    (1_000_000_000_000_000_000, 6_499_999_985_916_666_686),
    (1_000_000_000_000_000_000_000, 6_499_985_916_687_009_237_221),
    (1_000_000_000_000_000_000_000_000, 6_485_936_987_240_536_265_939_091),
    (100_000_000_000_000_000_000_000_000, 527_483_488_497_735_414_122_531_323),
    (230_769_230_769_230_769_230_769_231, 948_180_838_242_836_517_606_714_345),
    (1_000_000_000_000_000_000_000_000_000, 1_480_314_406_894_588_555_264_999_816),
    (2_000_000_000_000_000_000_000_000_000, 1_499_741_651_616_058_784_927_798_677),
    (5_000_000_000_000_000_000_000_000_000, 1_499_999_999_416_047_550_531_639_595),
    (THRESHOLD - 1, 1_499_999_999_999_999_640_278_502_019),
    (THRESHOLD, CAP),
];
