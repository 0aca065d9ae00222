//! Exponential bonding curve engine
//!
//! Spot price `p(s) = A · e^(B·s)` integrates to `∫ p = (A/B) · e^(B·s)`, so:
//!
//! - selling `Δs` tokens from supply `s` returns `(A/B) · (e^(B·s) - e^(B·(s-Δs)))`
//! - paying `Δe` ETH at supply `s` moves the curve to
//!   `s' = ln(e^(B·s) + Δe·B/A) / B`
//!
//! Both directions share `exp_wad` / `ln_wad`; every rounding step truncates in
//! favour of the curve, so a buy followed by a sell of the same tokens never
//! returns more ETH than was paid.

use crate::{CurveError, CurveParameters};
use primitive_types::U256;
use tracing::{debug, trace, warn};
use wad_math::{
    div_wad, exp_wad, full_mul_div, full_mul_div_up, ln_wad, mul_wad, to_signed, to_unsigned,
    WadError, EXP_WAD_CEILING,
};

/// Pure pricing engine over an immutable `(A, B)` pair
///
/// `Copy + Send + Sync`: quote from as many threads as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExponentialCurve {
    params: CurveParameters,
}

impl ExponentialCurve {
    /// Validate the parameters and build the engine
    pub fn new(params: CurveParameters) -> Result<Self, CurveError> {
        params.validate()?;
        debug!(
            a = %params.a,
            b = %params.b,
            max_supply = ?params.max_supply,
            "Exponential curve initialised"
        );
        Ok(Self { params })
    }

    pub fn parameters(&self) -> &CurveParameters {
        &self.params
    }

    /// ETH returned for burning `tokens_to_sell` out of `current_supply`
    pub fn quote_sell(
        &self,
        current_supply: U256,
        tokens_to_sell: U256,
    ) -> Result<U256, CurveError> {
        if tokens_to_sell > current_supply {
            return Err(CurveError::InsufficientSupply {
                requested: tokens_to_sell,
                available: current_supply,
            });
        }
        if tokens_to_sell.is_zero() {
            return Ok(U256::zero());
        }

        let new_supply = current_supply - tokens_to_sell;
        let eth_out = self.integral(new_supply, current_supply, "quote_sell", Rounding::Down)?;

        trace!(
            current_supply = %current_supply,
            tokens_to_sell = %tokens_to_sell,
            eth_out = %eth_out,
            "Sell quoted"
        );
        Ok(eth_out)
    }

    /// Tokens minted for paying `eth_in` at `current_supply`
    ///
    /// Fails with `Overflow` when the purchase would push the curve past the
    /// representable exponential range. Capping against a remaining-supply
    /// ceiling is the caller's job (see [`crate::PricingCurve::quote_buy_capped`]).
    pub fn quote_buy(&self, current_supply: U256, eth_in: U256) -> Result<U256, CurveError> {
        if eth_in.is_zero() {
            return Ok(U256::zero());
        }

        let exponent = self.exponent_at(current_supply)?;
        let exp_current = exp_wad(exponent)?;
        let exp_increase = full_mul_div(eth_in, self.params.b, self.params.a)?;
        let exp_new = exp_current
            .checked_add(exp_increase)
            .filter(|value| *value <= EXP_WAD_CEILING)
            .ok_or_else(|| WadError::overflow("quote_buy"))?;

        let log_new = to_unsigned(ln_wad(exp_new)?)?;

        // Compare in the exponent domain: ln error is one wei there but 1/B wei
        // once divided back into token units.
        let advance = settle_difference(
            "quote_buy",
            log_new,
            to_unsigned(exponent)?,
            self.params.rounding_tolerance,
        )?;
        if advance.is_zero() {
            trace!(current_supply = %current_supply, eth_in = %eth_in, "Buy too small to mint");
            return Ok(U256::zero());
        }

        // log_new > floor(B·s) implies log_new / B >= s
        let new_supply = div_wad(log_new, self.params.b)?;
        let tokens_out = new_supply
            .checked_sub(current_supply)
            .ok_or_else(|| WadError::underflow("quote_buy"))?;

        trace!(
            current_supply = %current_supply,
            eth_in = %eth_in,
            tokens_out = %tokens_out,
            "Buy quoted"
        );
        Ok(tokens_out)
    }

    /// ETH required to mint exactly `tokens_out` at `current_supply`, rounded up
    pub fn quote_buy_exact_tokens(
        &self,
        current_supply: U256,
        tokens_out: U256,
    ) -> Result<U256, CurveError> {
        if tokens_out.is_zero() {
            return Ok(U256::zero());
        }
        let new_supply = current_supply
            .checked_add(tokens_out)
            .ok_or_else(|| WadError::overflow("quote_buy_exact_tokens"))?;

        let eth_in = self.integral(
            current_supply,
            new_supply,
            "quote_buy_exact_tokens",
            Rounding::Up,
        )?;
        trace!(
            current_supply = %current_supply,
            tokens_out = %tokens_out,
            eth_in = %eth_in,
            "Exact-token buy quoted"
        );
        Ok(eth_in)
    }

    /// Instantaneous price `A · e^(B·supply)` in ETH per whole token
    pub fn spot_price(&self, supply: U256) -> Result<U256, CurveError> {
        let growth = exp_wad(self.exponent_at(supply)?)?;
        Ok(mul_wad(self.params.a, growth)?)
    }

    /// `B · supply` as a signed exponent argument
    fn exponent_at(&self, supply: U256) -> Result<i128, CurveError> {
        Ok(to_signed(mul_wad(self.params.b, supply)?)?)
    }

    /// `(A/B) · (e^(B·upper) - e^(B·lower))` for `lower <= upper`
    fn integral(
        &self,
        lower: U256,
        upper: U256,
        operation: &'static str,
        rounding: Rounding,
    ) -> Result<U256, CurveError> {
        let exp_upper = exp_wad(self.exponent_at(upper)?)?;
        let exp_lower = exp_wad(self.exponent_at(lower)?)?;
        let delta =
            settle_difference(operation, exp_upper, exp_lower, self.params.rounding_tolerance)?;

        let (a, b) = (self.params.a, self.params.b);
        let amount = match rounding {
            Rounding::Down => full_mul_div(a, delta, b)?,
            Rounding::Up => full_mul_div_up(a, delta, b)?,
        };
        Ok(amount)
    }
}

#[derive(Debug, Clone, Copy)]
enum Rounding {
    Down,
    Up,
}

/// `larger - smaller`, where mathematically `larger >= smaller`
///
/// A negative difference no bigger than `tolerance` is rounding noise and clamps
/// to zero; anything bigger is an `ArithmeticInconsistency`.
pub(crate) fn settle_difference(
    operation: &'static str,
    larger: U256,
    smaller: U256,
    tolerance: U256,
) -> Result<U256, CurveError> {
    if larger >= smaller {
        return Ok(larger - smaller);
    }

    let shortfall = smaller - larger;
    if shortfall > tolerance {
        return Err(CurveError::ArithmeticInconsistency {
            operation,
            shortfall,
            tolerance,
        });
    }

    warn!(operation, shortfall = %shortfall, "Clamped rounding noise to zero");
    Ok(U256::zero())
}
