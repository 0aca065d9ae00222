//! # Wad Math - 18-Decimal Fixed-Point Arithmetic
//!
//! ## Purpose
//!
//! Deterministic fixed-point primitives for token pricing. A "wad" is a real number
//! stored as an integer scaled by `10^18`, matching the native denomination of ETH
//! and ERC20 tokens. Unsigned quantities live in [`U256`]; signed exponent-domain
//! values live in `i128`.
//!
//! ## Integration Points
//!
//! - **Consumers**: the bonding curve engine (`bonding-curve`), configuration and CLI
//!   layers for decimal conversion
//! - **Range**: full 256-bit unsigned range, 512-bit intermediates for `full_mul_div`
//! - **Precision**: `exp_wad` has relative error below `1e-35` across the working
//!   range `-41.45 < x < 135.3` (exact to the wei while `x` stays below about 35);
//!   `ln_wad` is exact to the last wad digit
//!
//! ## Rounding
//!
//! Every primitive rounds toward zero unless its name ends in `_up`. No primitive
//! ever wraps: out-of-range results surface as [`WadError`].
//!
//! ```rust
//! use wad_math::{exp_wad, ln_wad, WAD};
//!
//! let e = exp_wad(1_000_000_000_000_000_000).unwrap();
//! assert_eq!(e.as_u128(), 2_718_281_828_459_045_235);
//! assert_eq!(ln_wad(WAD).unwrap(), 0);
//! ```

pub mod arithmetic;
pub mod error;
pub mod transcendental;
pub mod units;

pub use arithmetic::{
    div_wad, full_mul_div, full_mul_div_up, mul_wad, mul_wad_up, to_signed, to_unsigned,
};
pub use error::{Result, WadError};
pub use transcendental::{
    exp_wad, ln_wad, ln_wad_signed, EXP_WAD_CEILING, EXP_WAD_MAX, EXP_WAD_MIN,
};
pub use units::{from_wad, to_wad};

pub use primitive_types::{U256, U512};

/// One whole unit (`1.0`) in wad representation
pub const WAD: U256 = U256([1_000_000_000_000_000_000, 0, 0, 0]);

/// [`WAD`] as a signed scalar for exponent-domain arithmetic
pub const WAD_I128: i128 = 1_000_000_000_000_000_000;

/// Number of fractional decimal digits in a wad
pub const WAD_DECIMALS: u32 = 18;
