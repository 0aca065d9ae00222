//! # Bonding Curve - Exponential Pricing Engine
//!
//! ## Purpose
//!
//! Prices the funding phase of a token launch. Before graduating to a
//! constant-product market, a token is minted and burned against an exponential
//! curve `price(supply) = A · e^(B · supply)`; this crate converts between supply,
//! ETH collateral and price along that curve.
//!
//! ## Integration Points
//!
//! - **Input Sources**: current token supply and trade size from the launch factory
//! - **Output Destinations**: factory buy/sell handlers, operator tooling
//! - **Dependencies**: `wad-math` for 18-decimal fixed-point `exp`/`ln`/`mul_div`
//!
//! ## Architecture Role
//!
//! Pure and stateless. The factory owns supply caps, fees, collateral bookkeeping
//! and graduation; it calls [`PricingCurve`] and aborts its own transaction on any
//! [`CurveError`].
//!
//! ```rust
//! use bonding_curve::{CurveParameters, ExponentialCurve, U256, WAD};
//!
//! let curve = ExponentialCurve::new(CurveParameters::default()).unwrap();
//! let tokens = curve.quote_buy(U256::zero(), WAD).unwrap();
//! let eth_back = curve.quote_sell(tokens, tokens).unwrap();
//! assert!(eth_back <= WAD);
//! ```

pub mod error;
pub mod exponential;
pub mod params;
pub mod pricing;

pub use error::CurveError;
pub use exponential::ExponentialCurve;
pub use params::{CurveParameters, DEFAULT_A, DEFAULT_B, DEFAULT_ROUNDING_TOLERANCE};
pub use pricing::{BuyQuote, PricingCurve};

/// Common types for curve calculations
pub use wad_math::{U256, WAD};
