//! Configuration defaults
//!
//! Values used when neither a configuration file nor an environment override
//! provides them.

/// Environment override conventions
pub mod env {
    /// Prefix for overrides, e.g. `CURVE__A=0.000000002`
    pub const PREFIX: &str = "CURVE";

    /// Separator between prefix and key
    pub const SEPARATOR: &str = "__";
}

/// Configuration file consulted by tools when no path is passed
pub const DEFAULT_CONFIG_PATH: &str = "config/curve.toml";
