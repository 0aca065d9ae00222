//! Immutable curve shape parameters
//!
//! `price(supply) = A · e^(B · supply)`, with `A` in ETH per token and `B` in
//! 1/token, both as wads.

use crate::CurveError;
use primitive_types::U256;
use wad_math::{exp_wad, mul_wad, to_signed};

/// Default price scale: ≈1.06e-9 ETH per token at zero supply
pub const DEFAULT_A: u64 = 1_060_848_709;

/// Default growth rate: ≈4.38e-9 per token
pub const DEFAULT_B: u64 = 4_379_701_787;

/// Default rounding tolerance in wei
pub const DEFAULT_ROUNDING_TOLERANCE: u64 = 1_000;

/// Shape of an exponential bonding curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParameters {
    /// Price-scale multiplier (wad, ETH per token)
    pub a: U256,
    /// Growth-rate coefficient (wad, per token)
    pub b: U256,
    /// Largest supply the curve must be able to price, checked at construction
    pub max_supply: Option<U256>,
    /// Rounding noise (wei) tolerated before a negative difference becomes an error
    pub rounding_tolerance: U256,
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self::new(U256::from(DEFAULT_A), U256::from(DEFAULT_B))
    }
}

impl CurveParameters {
    pub fn new(a: U256, b: U256) -> Self {
        Self {
            a,
            b,
            max_supply: None,
            rounding_tolerance: U256::from(DEFAULT_ROUNDING_TOLERANCE),
        }
    }

    pub fn with_max_supply(mut self, max_supply: U256) -> Self {
        self.max_supply = Some(max_supply);
        self
    }

    pub fn with_rounding_tolerance(mut self, tolerance: U256) -> Self {
        self.rounding_tolerance = tolerance;
        self
    }

    /// Check positivity of `A` and `B`, and that `e^(B · max_supply)` is representable
    pub fn validate(&self) -> Result<(), CurveError> {
        if self.a.is_zero() {
            return Err(CurveError::invalid_parameters("A must be strictly positive"));
        }
        if self.b.is_zero() {
            return Err(CurveError::invalid_parameters("B must be strictly positive"));
        }

        if let Some(max_supply) = self.max_supply {
            mul_wad(self.b, max_supply)
                .and_then(to_signed)
                .and_then(exp_wad)
                .map_err(|e| {
                    CurveError::invalid_parameters(format!(
                        "B is too steep for a max supply of {max_supply}: {e}"
                    ))
                })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wad_math::WAD;

    #[test]
    fn test_defaults_are_valid() {
        let params = CurveParameters::default();
        assert_eq!(params.a, U256::from(DEFAULT_A));
        assert_eq!(params.b, U256::from(DEFAULT_B));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_zero_parameters_rejected() {
        let err = CurveParameters::new(U256::zero(), U256::from(DEFAULT_B))
            .validate()
            .unwrap_err();
        assert!(matches!(err, CurveError::InvalidParameters { .. }));

        let err = CurveParameters::new(U256::from(DEFAULT_A), U256::zero())
            .validate()
            .unwrap_err();
        assert!(matches!(err, CurveError::InvalidParameters { .. }));
    }

    #[test]
    fn test_max_supply_bounds_growth_rate() {
        let billion_tokens = U256::from(1_000_000_000u64) * WAD;
        assert!(CurveParameters::default()
            .with_max_supply(billion_tokens)
            .validate()
            .is_ok());

        // B = 1.0 per token: e^(1e9) is far outside the representable range
        let err = CurveParameters::new(U256::from(DEFAULT_A), WAD)
            .with_max_supply(billion_tokens)
            .validate()
            .unwrap_err();
        assert!(matches!(err, CurveError::InvalidParameters { .. }));
    }
}
