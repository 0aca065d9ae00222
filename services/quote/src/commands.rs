//! Quote commands
//!
//! Each command takes decimal amounts in whole units, converts them to wads,
//! runs the curve and converts the answer back for display.

use anyhow::{bail, Context, Result};
use bonding_curve::{ExponentialCurve, U256};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use tracing::debug;
use wad_math::{div_wad, from_wad, to_wad};

/// Outcome of a single buy, sell or exact-token cost quote
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TradeReport {
    pub side: TradeSide,
    pub supply_before: Decimal,
    pub supply_after: Decimal,
    pub tokens: Decimal,
    pub eth: Decimal,
    /// ETH per token paid or received, `None` when no tokens moved
    pub average_price: Option<Decimal>,
    pub spot_price_after: Decimal,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TradeSide {
    Buy,
    Sell,
    Cost,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PriceReport {
    pub supply: Decimal,
    pub spot_price: Decimal,
}

/// One row of the price schedule
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScheduleRow {
    pub supply: Decimal,
    pub spot_price: Decimal,
    /// ETH collateral accumulated from zero supply up to `supply`
    pub eth_raised: Decimal,
}

/// Tokens received for `eth` at `supply`
pub fn buy(curve: &ExponentialCurve, supply: Decimal, eth: Decimal) -> Result<TradeReport> {
    let supply_wad = to_wad(supply).context("Invalid supply")?;
    let eth_wad = to_wad(eth).context("Invalid ETH amount")?;

    let tokens = curve.quote_buy(supply_wad, eth_wad)?;
    let supply_after = supply_wad
        .checked_add(tokens)
        .context("Supply overflow after buy")?;
    trade_report(curve, TradeSide::Buy, supply_wad, supply_after, tokens, eth_wad)
}

/// ETH received for selling `tokens` at `supply`
pub fn sell(curve: &ExponentialCurve, supply: Decimal, tokens: Decimal) -> Result<TradeReport> {
    let supply_wad = to_wad(supply).context("Invalid supply")?;
    let tokens_wad = to_wad(tokens).context("Invalid token amount")?;

    let eth = curve.quote_sell(supply_wad, tokens_wad)?;
    trade_report(
        curve,
        TradeSide::Sell,
        supply_wad,
        supply_wad - tokens_wad,
        tokens_wad,
        eth,
    )
}

/// ETH required to buy exactly `tokens` at `supply`
pub fn cost(curve: &ExponentialCurve, supply: Decimal, tokens: Decimal) -> Result<TradeReport> {
    let supply_wad = to_wad(supply).context("Invalid supply")?;
    let tokens_wad = to_wad(tokens).context("Invalid token amount")?;

    let eth = curve.quote_buy_exact_tokens(supply_wad, tokens_wad)?;
    let supply_after = supply_wad
        .checked_add(tokens_wad)
        .context("Supply overflow after buy")?;
    trade_report(curve, TradeSide::Cost, supply_wad, supply_after, tokens_wad, eth)
}

/// Spot price at `supply`
pub fn price(curve: &ExponentialCurve, supply: Decimal) -> Result<PriceReport> {
    let supply_wad = to_wad(supply).context("Invalid supply")?;
    Ok(PriceReport {
        supply,
        spot_price: from_wad(curve.spot_price(supply_wad)?)?,
    })
}

/// Spot price and ETH raised at `steps + 1` evenly spaced supplies in `[0, max_supply]`
pub fn schedule(
    curve: &ExponentialCurve,
    max_supply: Decimal,
    steps: u32,
) -> Result<Vec<ScheduleRow>> {
    if steps == 0 {
        bail!("Schedule needs at least one step");
    }
    let max_wad = to_wad(max_supply).context("Invalid max supply")?;

    (0..=steps)
        .map(|step| {
            let supply = max_wad * U256::from(step) / U256::from(steps);
            let row = ScheduleRow {
                supply: from_wad(supply)?,
                spot_price: from_wad(curve.spot_price(supply)?)?,
                eth_raised: from_wad(curve.quote_sell(supply, supply)?)?,
            };
            debug!(step, supply = %row.supply, "Schedule row computed");
            Ok(row)
        })
        .collect()
}

fn trade_report(
    curve: &ExponentialCurve,
    side: TradeSide,
    supply_before: U256,
    supply_after: U256,
    tokens: U256,
    eth: U256,
) -> Result<TradeReport> {
    let average_price = if tokens.is_zero() {
        None
    } else {
        Some(from_wad(div_wad(eth, tokens)?)?)
    };

    Ok(TradeReport {
        side,
        supply_before: from_wad(supply_before)?,
        supply_after: from_wad(supply_after)?,
        tokens: from_wad(tokens)?,
        eth: from_wad(eth)?,
        average_price,
        spot_price_after: from_wad(curve.spot_price(supply_after)?)?,
    })
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "buy"),
            TradeSide::Sell => write!(f, "sell"),
            TradeSide::Cost => write!(f, "exact-token buy"),
        }
    }
}

impl fmt::Display for TradeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Quote ({})", self.side)?;
        writeln!(f, "  supply:        {} -> {}", self.supply_before, self.supply_after)?;
        writeln!(f, "  tokens:        {}", self.tokens)?;
        writeln!(f, "  eth:           {}", self.eth)?;
        match self.average_price {
            Some(price) => writeln!(f, "  average price: {price}")?,
            None => writeln!(f, "  average price: n/a")?,
        }
        write!(f, "  spot after:    {}", self.spot_price_after)
    }
}

impl fmt::Display for PriceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Spot price at supply {}: {} ETH/token", self.supply, self.spot_price)
    }
}
