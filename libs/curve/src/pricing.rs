//! Pricing trait consumed by the launch factory

use crate::{CurveError, ExponentialCurve};
use primitive_types::U256;

/// Result of a buy that may have been capped by the remaining supply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuyQuote {
    /// Tokens the buyer receives
    pub tokens_out: U256,
    /// ETH actually consumed by the curve
    pub eth_used: U256,
    /// ETH to hand back to the buyer (`eth_in - eth_used`)
    pub refund: U256,
    /// True when `tokens_out` was limited by the supply ceiling
    pub capped: bool,
}

/// Unified pricing interface for bonding curves
pub trait PricingCurve {
    /// Tokens minted for `eth_in` at `current_supply`
    fn quote_buy(&self, current_supply: U256, eth_in: U256) -> Result<U256, CurveError>;

    /// ETH returned for selling `tokens_to_sell` at `current_supply`
    fn quote_sell(&self, current_supply: U256, tokens_to_sell: U256) -> Result<U256, CurveError>;

    /// ETH required to mint exactly `tokens_out`
    fn quote_buy_exact_tokens(
        &self,
        current_supply: U256,
        tokens_out: U256,
    ) -> Result<U256, CurveError>;

    /// Instantaneous price per whole token
    fn spot_price(&self, supply: U256) -> Result<U256, CurveError>;

    /// Quote a buy, limiting the tokens minted to `remaining_supply`
    ///
    /// When the cap applies, the buyer pays only for the capped amount and the
    /// rest of `eth_in` is refunded.
    fn quote_buy_capped(
        &self,
        current_supply: U256,
        eth_in: U256,
        remaining_supply: U256,
    ) -> Result<BuyQuote, CurveError> {
        let tokens_out = self.quote_buy(current_supply, eth_in)?;
        if tokens_out <= remaining_supply {
            return Ok(BuyQuote {
                tokens_out,
                eth_used: eth_in,
                refund: U256::zero(),
                capped: false,
            });
        }

        // Rounded-up cost of the capped amount never exceeds what was offered
        let eth_used = self
            .quote_buy_exact_tokens(current_supply, remaining_supply)?
            .min(eth_in);
        Ok(BuyQuote {
            tokens_out: remaining_supply,
            eth_used,
            refund: eth_in - eth_used,
            capped: true,
        })
    }
}

impl PricingCurve for ExponentialCurve {
    fn quote_buy(&self, current_supply: U256, eth_in: U256) -> Result<U256, CurveError> {
        ExponentialCurve::quote_buy(self, current_supply, eth_in)
    }

    fn quote_sell(&self, current_supply: U256, tokens_to_sell: U256) -> Result<U256, CurveError> {
        ExponentialCurve::quote_sell(self, current_supply, tokens_to_sell)
    }

    fn quote_buy_exact_tokens(
        &self,
        current_supply: U256,
        tokens_out: U256,
    ) -> Result<U256, CurveError> {
        ExponentialCurve::quote_buy_exact_tokens(self, current_supply, tokens_out)
    }

    fn spot_price(&self, supply: U256) -> Result<U256, CurveError> {
        ExponentialCurve::spot_price(self, supply)
    }
}
