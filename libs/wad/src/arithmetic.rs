//! Wad multiply/divide primitives with overflow checking
//!
//! `mul_wad` and `div_wad` require the raw product `x * y` (or `x * 10^18`) to fit
//! in 256 bits. `full_mul_div` lifts that restriction by carrying the product in
//! 512 bits, so only the final quotient has to fit.

use crate::{Result, WadError, WAD};
use primitive_types::{U256, U512};

/// `x * y / 10^18`, rounded toward zero
pub fn mul_wad(x: U256, y: U256) -> Result<U256> {
    let product = x
        .checked_mul(y)
        .ok_or_else(|| WadError::overflow("mul_wad"))?;
    Ok(product / WAD)
}

/// `x * y / 10^18`, rounded away from zero
pub fn mul_wad_up(x: U256, y: U256) -> Result<U256> {
    let product = x
        .checked_mul(y)
        .ok_or_else(|| WadError::overflow("mul_wad_up"))?;
    if product.is_zero() {
        return Ok(U256::zero());
    }
    Ok((product - U256::one()) / WAD + U256::one())
}

/// `x * 10^18 / y`, rounded toward zero
pub fn div_wad(x: U256, y: U256) -> Result<U256> {
    if y.is_zero() {
        return Err(WadError::division_by_zero("div_wad"));
    }
    let scaled = x
        .checked_mul(WAD)
        .ok_or_else(|| WadError::overflow("div_wad"))?;
    Ok(scaled / y)
}

/// `x * y / denominator` with a 512-bit intermediate product, rounded toward zero
pub fn full_mul_div(x: U256, y: U256, denominator: U256) -> Result<U256> {
    if denominator.is_zero() {
        return Err(WadError::division_by_zero("full_mul_div"));
    }
    let quotient = x.full_mul(y) / U512::from(denominator);
    U256::try_from(quotient).map_err(|_| WadError::overflow("full_mul_div"))
}

/// `x * y / denominator` with a 512-bit intermediate product, rounded up
pub fn full_mul_div_up(x: U256, y: U256, denominator: U256) -> Result<U256> {
    if denominator.is_zero() {
        return Err(WadError::division_by_zero("full_mul_div_up"));
    }
    let product = x.full_mul(y);
    let denominator = U512::from(denominator);
    let mut quotient = product / denominator;
    if !(product % denominator).is_zero() {
        quotient = quotient + U512::one();
    }
    U256::try_from(quotient).map_err(|_| WadError::overflow("full_mul_div_up"))
}

/// Narrow an unsigned wad into the signed exponent domain
pub fn to_signed(x: U256) -> Result<i128> {
    let narrow = u128::try_from(x).map_err(|_| WadError::overflow("to_signed"))?;
    i128::try_from(narrow).map_err(|_| WadError::overflow("to_signed"))
}

/// Widen a signed wad into the unsigned domain; negative values are rejected
pub fn to_unsigned(x: i128) -> Result<U256> {
    if x < 0 {
        return Err(WadError::underflow("to_unsigned"));
    }
    Ok(U256::from(x.unsigned_abs()))
}
