//! Curve Settings Module
//!
//! Layers built-in defaults, an optional TOML file and `CURVE__*` environment
//! variables, then converts the decimal amounts into wad parameters.

use crate::defaults::env;
use anyhow::{Context, Result};
use bonding_curve::{CurveParameters, DEFAULT_A, DEFAULT_B, DEFAULT_ROUNDING_TOLERANCE};
use config_crate::{Config, Environment, File};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};
use wad_math::{to_wad, U256, WAD_DECIMALS};

/// Curve shape as written by operators, in whole units
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CurveSettings {
    /// Price at zero supply (ETH per token)
    pub a: Decimal,

    /// Exponential growth rate (per token)
    pub b: Decimal,

    /// Largest supply the curve must be able to price (tokens)
    #[serde(default)]
    pub max_supply: Option<Decimal>,

    /// Rounding noise tolerated before a quote fails (wei)
    #[serde(default = "default_rounding_tolerance")]
    pub rounding_tolerance_wei: u64,
}

fn default_rounding_tolerance() -> u64 {
    DEFAULT_ROUNDING_TOLERANCE
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            a: Decimal::from_i128_with_scale(DEFAULT_A as i128, WAD_DECIMALS),
            b: Decimal::from_i128_with_scale(DEFAULT_B as i128, WAD_DECIMALS),
            max_supply: None,
            rounding_tolerance_wei: DEFAULT_ROUNDING_TOLERANCE,
        }
    }
}

impl CurveSettings {
    /// Load settings: defaults, then `path` if given, then environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("a", defaults.a.to_string())?
            .set_default("b", defaults.b.to_string())?
            .set_default("rounding_tolerance_wei", defaults.rounding_tolerance_wei)?;

        if let Some(path) = path {
            info!("Loading curve configuration: {:?}", path);
            builder = builder.add_source(File::from(path).required(true));
        } else {
            debug!("No curve configuration file given, using defaults");
        }

        builder = builder.add_source(
            Environment::with_prefix(env::PREFIX).separator(env::SEPARATOR),
        );

        let config = builder.build()
            .context("Failed to build curve configuration")?;

        config.try_deserialize()
            .context("Failed to deserialize curve configuration")
    }

    /// Parse settings from an in-memory TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse curve configuration")
    }

    /// Convert to validated wad parameters
    pub fn to_parameters(&self) -> Result<CurveParameters> {
        let a = to_wad(self.a).context("Invalid curve parameter `a`")?;
        let b = to_wad(self.b).context("Invalid curve parameter `b`")?;

        let mut params = CurveParameters::new(a, b)
            .with_rounding_tolerance(U256::from(self.rounding_tolerance_wei));

        if let Some(max_supply) = self.max_supply {
            let max_supply = to_wad(max_supply).context("Invalid `max_supply`")?;
            params = params.with_max_supply(max_supply);
        }

        params.validate()
            .context("Curve parameters failed validation")?;
        Ok(params)
    }
}

/// Convenience function: load settings and convert them in one step
pub fn load_parameters(path: Option<&Path>) -> Result<CurveParameters> {
    CurveSettings::load(path)?.to_parameters()
}
