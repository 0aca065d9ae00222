//! Natural exponential and logarithm over wads
//!
//! Both functions work internally at `10^36` scale so that the final division back
//! to `10^18` absorbs the truncation error of the series evaluation. `exp_wad` is
//! bounded by relative error (below `1e-35`), so results above `10^17` units can
//! differ from the true value in their low wei digits.
//!
//! - `exp_wad`: `x = k·ln2 + r` with `0 <= r < ln2`, Taylor series for `e^r`, then
//!   a shift by `k` carried out in 512 bits.
//! - `ln_wad`: `x = 2^n · m` with `1 <= m < 2`, `ln m = 2·atanh((m-1)/(m+1))`, and
//!   `ln(x / 10^18) = n·ln2 + ln m - ln(10^18)`.

use crate::arithmetic::to_signed;
use crate::{Result, WadError, WAD, WAD_I128};
use primitive_types::{U256, U512};

/// Arguments at or below this value produce a result under one wei, returned as zero
pub const EXP_WAD_MIN: i128 = -41_446_531_673_892_822_313;

/// Arguments at or above this value produce a result of `2^255` or more
pub const EXP_WAD_MAX: i128 = 135_305_999_368_893_231_589;

/// Largest value `exp_wad` can return (`2^255 - 1`)
pub const EXP_WAD_CEILING: U256 = U256([u64::MAX, u64::MAX, u64::MAX, i64::MAX as u64]);

const SCALE_36: u128 = 10u128.pow(36);

/// `ln(2) · 10^36`
const LN2_36: u128 = 693_147_180_559_945_309_417_232_121_458_176_568;

/// `ln(10^18) · 10^36`
const LN_WAD_36: u128 = 41_446_531_673_892_822_312_323_846_184_318_555_736;

/// Mantissas are normalised to `[2^MANTISSA_BITS, 2^(MANTISSA_BITS + 1))` before
/// rescaling to `10^36`; 120 bits keeps `mantissa · 10^36` below `2^241`.
const MANTISSA_BITS: u32 = 120;

// Both series converge well before these bounds; the limits only cap the loop.
const EXP_SERIES_TERMS: u64 = 64;
const ATANH_SERIES_TERMS: u64 = 96;

const fn u256(value: u128) -> U256 {
    U256([value as u64, (value >> 64) as u64, 0, 0])
}

/// Natural exponential of a signed wad, as an unsigned wad
///
/// Returns zero when the true result is below one wei and fails with
/// `Overflow` when it would reach `2^255`.
pub fn exp_wad(x: i128) -> Result<U256> {
    if x <= EXP_WAD_MIN {
        return Ok(U256::zero());
    }
    if x >= EXP_WAD_MAX {
        return Err(WadError::overflow("exp_wad"));
    }

    // |x| < 1.36e20, so x·10^18 stays below i128::MAX (1.7e38)
    let x_36 = x * WAD_I128;
    let ln2 = LN2_36 as i128;
    let k = x_36.div_euclid(ln2);
    let remainder = x_36.rem_euclid(ln2).unsigned_abs();

    let e_r = exp_series(u256(remainder));

    if k >= 0 {
        let shifted = U512::from(e_r) << (k as u32);
        U256::try_from(shifted / U512::from(WAD)).map_err(|_| WadError::overflow("exp_wad"))
    } else {
        Ok((e_r >> (k.unsigned_abs() as u32)) / WAD)
    }
}

/// `e^r · 10^36` for `0 <= r < ln2` given at `10^36` scale
fn exp_series(r: U256) -> U256 {
    let one = u256(SCALE_36);
    let mut sum = one;
    let mut term = one;
    for n in 1..=EXP_SERIES_TERMS {
        // term <= 10^36 and r < 10^36: the product stays below 2^240
        term = term * r / (one * U256::from(n));
        if term.is_zero() {
            break;
        }
        sum += term;
    }
    sum
}

/// Natural logarithm of a strictly positive unsigned wad, as a signed wad
///
/// The result is truncated toward zero.
pub fn ln_wad(x: U256) -> Result<i128> {
    if x.is_zero() {
        return Err(WadError::invalid_argument("ln_wad", "logarithm of zero"));
    }

    let msb = (x.bits() - 1) as u32;
    let normalized = if msb >= MANTISSA_BITS {
        x >> (msb - MANTISSA_BITS)
    } else {
        x << (MANTISSA_BITS - msb)
    };
    let mantissa = (normalized * u256(SCALE_36)) >> MANTISSA_BITS;

    let positive = U256::from(msb) * u256(LN2_36) + ln_mantissa(mantissa);
    let ln_wad_36 = u256(LN_WAD_36);

    if positive >= ln_wad_36 {
        to_signed((positive - ln_wad_36) / WAD)
    } else {
        Ok(-to_signed((ln_wad_36 - positive) / WAD)?)
    }
}

/// Signed entry point for callers holding exponent-domain values
///
/// Fails with `InvalidArgument` for `x <= 0`.
pub fn ln_wad_signed(x: i128) -> Result<i128> {
    if x <= 0 {
        return Err(WadError::invalid_argument(
            "ln_wad_signed",
            "logarithm of a non-positive value",
        ));
    }
    ln_wad(U256::from(x.unsigned_abs()))
}

/// `ln(m) · 10^36` for `1 <= m < 2` given at `10^36` scale
fn ln_mantissa(m: U256) -> U256 {
    let one = u256(SCALE_36);
    // z in [0, 1/3): every odd power shrinks by at least 9x
    let z = (m - one) * one / (m + one);
    let z_squared = z * z / one;

    let mut sum = z;
    let mut power = z;
    for i in 1..=ATANH_SERIES_TERMS {
        power = power * z_squared / one;
        if power.is_zero() {
            break;
        }
        sum += power / U256::from(2 * i + 1);
    }
    sum * U256::from(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const E_WAD: u128 = 2_718_281_828_459_045_235;

    fn assert_close(actual: U256, expected: u128, max_diff: u128) {
        let expected = U256::from(expected);
        let diff = if actual > expected {
            actual - expected
        } else {
            expected - actual
        };
        assert!(
            diff <= U256::from(max_diff),
            "expected {expected}, got {actual} (diff {diff})"
        );
    }

    #[test]
    fn test_exp_identities() {
        assert_eq!(exp_wad(0).unwrap(), WAD);
        assert_eq!(exp_wad(WAD_I128).unwrap(), U256::from(E_WAD));
        // e^-1 = 0.367879441171442321...
        assert_eq!(exp_wad(-WAD_I128).unwrap(), U256::from(367_879_441_171_442_321u128));
        // e^10 = 22026.465794806716516957...
        assert_close(
            exp_wad(10 * WAD_I128).unwrap(),
            22_026_465_794_806_716_516_957,
            1,
        );
    }

    #[test]
    fn test_exp_relative_error_at_large_arguments() {
        // e^100 · 10^18, truncated
        let expected = U256::from_dec_str(
            "26881171418161354484126255515800135873611118773741922415191608",
        )
        .unwrap();
        let actual = exp_wad(100 * WAD_I128).unwrap();
        let diff = if actual > expected {
            actual - expected
        } else {
            expected - actual
        };
        // Absolute error grows with the result; the relative error stays near 1e-35
        assert!(diff > U256::zero());
        assert!(
            diff <= expected / U256::exp10(33),
            "expected {expected}, got {actual} (diff {diff})"
        );
    }

    #[test]
    fn test_exp_range_limits() {
        assert_eq!(exp_wad(EXP_WAD_MIN).unwrap(), U256::zero());
        assert_eq!(exp_wad(-100 * WAD_I128).unwrap(), U256::zero());
        assert!(exp_wad(EXP_WAD_MIN + 1_000_000_000_000_000).unwrap() > U256::zero());

        assert_eq!(
            exp_wad(EXP_WAD_MAX).unwrap_err(),
            WadError::overflow("exp_wad")
        );
        let near_max = exp_wad(EXP_WAD_MAX - 1).unwrap();
        assert!(near_max <= EXP_WAD_CEILING);
        assert!(near_max > EXP_WAD_CEILING / 2);
    }

    #[test]
    fn test_ln_identities() {
        assert_eq!(ln_wad(WAD).unwrap(), 0);
        // ln 2 = 0.693147180559945309417...
        assert_eq!(ln_wad(WAD * 2).unwrap(), 693_147_180_559_945_309);
        // ln 0.5
        assert_eq!(ln_wad(WAD / 2).unwrap(), -693_147_180_559_945_309);
        // ln(1e-18) = -41.446531673892822312...
        assert_eq!(ln_wad(U256::one()).unwrap(), -41_446_531_673_892_822_312);
        // ln((2^256 - 1) / 1e18) = 135.999146549453176898...
        assert_eq!(ln_wad(U256::MAX).unwrap(), 135_999_146_549_453_176_898);
    }

    #[test]
    fn test_ln_rejects_non_positive() {
        assert_eq!(
            ln_wad(U256::zero()).unwrap_err(),
            WadError::invalid_argument("ln_wad", "logarithm of zero")
        );
        let err = ln_wad_signed(-WAD_I128).unwrap_err();
        assert!(matches!(err, WadError::InvalidArgument { .. }));
        assert_eq!(err.operation(), "ln_wad_signed");
        assert_eq!(ln_wad_signed(0).unwrap_err().operation(), "ln_wad_signed");
        assert_eq!(ln_wad_signed(WAD_I128).unwrap(), 0);
    }

    #[test]
    fn test_ln_inverts_exp() {
        for x in [-5 * WAD_I128, -WAD_I128 / 3, WAD_I128 / 7, 3 * WAD_I128, 120 * WAD_I128] {
            let back = ln_wad(exp_wad(x).unwrap()).unwrap();
            // e^-5 keeps only 16 significant digits as a wad
            let tolerance = if x < 0 { 100 } else { 2 };
            assert!((back - x).abs() <= tolerance, "x={x} back={back}");
        }
    }

    proptest! {
        #[test]
        fn prop_exp_is_monotonic(x in -41_000i64..135_000, step in 1i64..1_000) {
            let lo = x as i128 * 1_000_000_000_000_000;
            let hi = lo + step as i128 * 1_000_000_000_000;
            prop_assert!(exp_wad(lo).unwrap() <= exp_wad(hi).unwrap());
        }

        #[test]
        fn prop_ln_is_monotonic(x in 1u128..u128::MAX / 2, step in 1u128..1_000_000_000) {
            let lo = ln_wad(U256::from(x)).unwrap();
            let hi = ln_wad(U256::from(x + step)).unwrap();
            prop_assert!(lo <= hi);
        }
    }
}
