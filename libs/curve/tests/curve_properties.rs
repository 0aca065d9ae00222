//! Bonding Curve Property Tests
//!
//! Mathematical properties that must hold for any supply and trade size inside
//! the funding range, independent of specific market conditions.

use bonding_curve::{CurveError, CurveParameters, ExponentialCurve, PricingCurve, U256, WAD};
use proptest::prelude::*;

/// Upper end of the supply range exercised (900M tokens)
const MAX_TEST_SUPPLY_TOKENS: u64 = 900_000_000;

fn engine() -> ExponentialCurve {
    ExponentialCurve::new(CurveParameters::default()).expect("default parameters are valid")
}

fn abs_diff(a: U256, b: U256) -> U256 {
    if a > b {
        a - b
    } else {
        b - a
    }
}

// Property test strategies
prop_compose! {
    fn supply()
        (
            tokens in 0u64..MAX_TEST_SUPPLY_TOKENS,
            fraction in 0u64..1_000_000_000_000_000_000,
        ) -> U256 {
        U256::from(tokens) * WAD + U256::from(fraction)
    }
}

prop_compose! {
    fn eth_amount()
        (wei in 0u128..10_000_000_000_000_000_000) -> U256 {
        U256::from(wei)
    }
}

prop_compose! {
    fn supply_and_sale()
        (total in supply())
        (sold in 0u128..=total.low_u128(), total in Just(total)) -> (U256, U256) {
        (total, U256::from(sold))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_buy_is_monotonic_in_eth(
        supply in supply(),
        eth in eth_amount(),
        extra in 0u128..1_000_000_000_000_000_000,
    ) {
        let curve = engine();
        let smaller = curve.quote_buy(supply, eth).unwrap();
        let larger = curve.quote_buy(supply, eth + U256::from(extra)).unwrap();
        prop_assert!(smaller <= larger);
    }

    #[test]
    fn prop_sell_is_monotonic_in_tokens(
        (total, sold) in supply_and_sale(),
        extra in 0u128..1_000_000_000_000_000_000_000_000,
    ) {
        let curve = engine();
        let more = (sold + U256::from(extra)).min(total);
        let smaller = curve.quote_sell(total, sold).unwrap();
        let larger = curve.quote_sell(total, more).unwrap();
        prop_assert!(smaller <= larger);
    }

    #[test]
    fn prop_buy_then_sell_returns_at_most_the_eth_paid(
        supply in supply(),
        eth in eth_amount(),
    ) {
        let curve = engine();
        let tokens = curve.quote_buy(supply, eth).unwrap();
        let eth_back = curve.quote_sell(supply + tokens, tokens).unwrap();

        prop_assert!(eth_back <= eth, "round trip created value: paid {}, got {}", eth, eth_back);
        let tolerance = U256::from(1_000u64) + eth / U256::from(1_000_000_000_000u64);
        prop_assert!(eth - eth_back <= tolerance, "paid {}, got {}", eth, eth_back);
    }

    #[test]
    fn prop_selling_whole_supply_inverts_buying_from_zero(
        tokens in 1u64..MAX_TEST_SUPPLY_TOKENS,
        fraction in 0u64..1_000_000_000_000_000_000,
    ) {
        let curve = engine();
        let supply = U256::from(tokens) * WAD + U256::from(fraction);
        let raised = curve.quote_sell(supply, supply).unwrap();
        let rebought = curve.quote_buy(U256::zero(), raised).unwrap();

        let tolerance = supply / U256::from(1_000_000_000u64) + U256::from(1_000_000_000u64);
        prop_assert!(
            abs_diff(rebought, supply) <= tolerance,
            "supply {}, rebought {}",
            supply,
            rebought
        );
    }

    #[test]
    fn prop_zero_trades_quote_zero(supply in supply()) {
        let curve = engine();
        prop_assert_eq!(curve.quote_buy(supply, U256::zero()).unwrap(), U256::zero());
        prop_assert_eq!(curve.quote_sell(supply, U256::zero()).unwrap(), U256::zero());
    }

    #[test]
    fn prop_exact_token_cost_is_never_below_sell_value(
        supply in supply(),
        tokens in 1u128..10_000_000_000_000_000_000_000_000,
    ) {
        let curve = engine();
        let tokens = U256::from(tokens);
        let cost = curve.quote_buy_exact_tokens(supply, tokens).unwrap();
        let value = curve.quote_sell(supply + tokens, tokens).unwrap();
        prop_assert!(cost >= value);
    }

    #[test]
    fn prop_overselling_always_fails(
        (total, _sold) in supply_and_sale(),
        excess in 1u64..u64::MAX,
    ) {
        let curve = engine();
        let err = curve.quote_sell(total, total + U256::from(excess)).unwrap_err();
        let is_insufficient_supply = matches!(err, CurveError::InsufficientSupply { .. });
        prop_assert!(is_insufficient_supply);
    }
}

#[test]
fn test_small_first_buy_prices_at_a() {
    let curve = engine();
    let price = curve.spot_price(U256::zero()).unwrap();
    assert_eq!(price, curve.parameters().a);

    // tokens_out · price ≈ eth_in to first order for a buy far smaller than the curve scale
    for eth_in in [1_000_000_000u64, 1_000_000_000_000] {
        let eth_in = U256::from(eth_in);
        let tokens_out = curve.quote_buy(U256::zero(), eth_in).unwrap();
        let implied = tokens_out * price / WAD;
        assert!(
            abs_diff(implied, eth_in) * U256::from(1_000u64) <= eth_in,
            "eth_in {eth_in}, implied {implied}"
        );
    }
}

#[test]
fn test_documented_error_cases() {
    let curve = engine();
    assert!(matches!(
        curve.quote_sell(U256::from(100), U256::from(150)),
        Err(CurveError::InsufficientSupply { .. })
    ));
    assert!(matches!(
        ExponentialCurve::new(CurveParameters::new(U256::zero(), WAD)),
        Err(CurveError::InvalidParameters { .. })
    ));
}

#[test]
fn test_concurrent_quotes_agree() {
    let curve = engine();
    let supply = U256::from(250_000_000u64) * WAD;
    let expected = curve.quote_buy(supply, WAD).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| curve.quote_buy(supply, WAD).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_trait_object_matches_engine() {
    let curve = engine();
    let dynamic: &dyn PricingCurve = &curve;
    let supply = U256::from(123_456_789u64) * WAD;

    assert_eq!(
        dynamic.quote_sell(supply, supply / 2).unwrap(),
        curve.quote_sell(supply, supply / 2).unwrap()
    );
    assert_eq!(
        dynamic.spot_price(supply).unwrap(),
        curve.spot_price(supply).unwrap()
    );
}
