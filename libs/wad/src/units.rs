//! Conversion between human-readable decimal amounts and wads
//!
//! `Decimal` holds a 96-bit mantissa with up to 28 fractional digits, so
//! conversion toward wads is always exact up to truncation of digits past the
//! 18th, while conversion back may need to drop fractional digits of very large
//! values.

use crate::{Result, WadError, WAD_DECIMALS};
use primitive_types::U256;
use rust_decimal::Decimal;

/// Largest mantissa a `Decimal` can carry (`2^96 - 1`)
const DECIMAL_MAX_MANTISSA: u128 = (1u128 << 96) - 1;

/// Convert a non-negative decimal amount (e.g. `1.5` ETH) to wads
///
/// Digits beyond the 18th decimal place are truncated.
pub fn to_wad(amount: Decimal) -> Result<U256> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(WadError::underflow("to_wad"));
    }

    let mantissa = U256::from(amount.mantissa().unsigned_abs());
    let scale = amount.scale();

    if scale <= WAD_DECIMALS {
        mantissa
            .checked_mul(U256::exp10((WAD_DECIMALS - scale) as usize))
            .ok_or_else(|| WadError::overflow("to_wad"))
    } else {
        Ok(mantissa / U256::exp10((scale - WAD_DECIMALS) as usize))
    }
}

/// Convert a wad to a decimal amount in whole units
///
/// Exact while the wad fits in a 96-bit mantissa (about 79 billion units);
/// beyond that, trailing fractional digits are dropped.
pub fn from_wad(value: U256) -> Result<Decimal> {
    let limit = U256::from(DECIMAL_MAX_MANTISSA);
    let ten = U256::from(10u8);

    let mut mantissa = value;
    let mut scale = WAD_DECIMALS;
    while mantissa > limit {
        if scale == 0 {
            return Err(WadError::overflow("from_wad"));
        }
        mantissa = mantissa / ten;
        scale -= 1;
    }

    // mantissa <= 2^96 - 1 here, so it fits in i128 without loss
    let mantissa = mantissa.low_u128() as i128;
    Ok(Decimal::from_i128_with_scale(mantissa, scale).normalize())
}
