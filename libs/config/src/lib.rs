//! # Curve Configuration
//!
//! Loads bonding curve parameters from TOML with environment overrides and
//! converts them into validated [`bonding_curve::CurveParameters`].
//!
//! ## Features
//!
//! - **Decimal amounts**: `a`, `b` and `max_supply` are written in whole units
//!   (ETH, tokens) and converted to wads exactly
//! - **Environment overrides**: `CURVE__A`, `CURVE__B`, `CURVE__MAX_SUPPLY`,
//!   `CURVE__ROUNDING_TOLERANCE_WEI`
//! - **Defaults**: the launch defaults when no file is given
//!
//! ## Usage
//!
//! ```rust
//! use curve_config::CurveSettings;
//!
//! let settings = CurveSettings::from_toml_str(r#"
//!     a = "0.000000001060848709"
//!     b = "0.000000004379701787"
//!     max_supply = "1000000000"
//! "#).unwrap();
//! let params = settings.to_parameters().unwrap();
//! assert_eq!(params.a.as_u64(), 1_060_848_709);
//! ```

pub mod defaults;
pub mod settings;

pub use settings::{load_parameters, CurveSettings};
