//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::FeePolicy;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Late fee charged per overdue day
    pub late_fee_base_rate: Decimal,

    /// Multiplier applied to bestsellers
    pub late_fee_bestseller_multiplier: Decimal,

    /// Multiplier applied to premium members
    pub late_fee_premium_multiplier: Decimal,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = FeePolicy::default();

        let late_fee_base_rate = decimal_var("LATE_FEE_BASE_RATE", defaults.base_rate_per_day)?;
        let late_fee_bestseller_multiplier =
            decimal_var("LATE_FEE_BESTSELLER_MULTIPLIER", defaults.bestseller_multiplier)?;
        let late_fee_premium_multiplier =
            decimal_var("LATE_FEE_PREMIUM_MULTIPLIER", defaults.premium_multiplier)?;

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Ok(Self {
            late_fee_base_rate,
            late_fee_bestseller_multiplier,
            late_fee_premium_multiplier,
            environment,
        })
    }

    /// Fee policy described by this configuration
    pub fn fee_policy(&self) -> FeePolicy {
        FeePolicy {
            base_rate_per_day: self.late_fee_base_rate,
            bestseller_multiplier: self.late_fee_bestseller_multiplier,
            premium_multiplier: self.late_fee_premium_multiplier,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let policy = FeePolicy::default();
        Self {
            late_fee_base_rate: policy.base_rate_per_day,
            late_fee_bestseller_multiplier: policy.bestseller_multiplier,
            late_fee_premium_multiplier: policy.premium_multiplier,
            environment: "development".to_string(),
        }
    }
}

/// Read a non-negative decimal, falling back to `default` when unset.
fn decimal_var(name: &'static str, default: Decimal) -> Result<Decimal, ConfigError> {
    match env::var(name) {
        Ok(raw) => parse_non_negative(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_non_negative(name: &'static str, raw: &str) -> Result<Decimal, ConfigError> {
    let value = Decimal::from_str(raw.trim()).map_err(|_| ConfigError::InvalidValue(name))?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ConfigError::InvalidValue(name));
    }
    Ok(value)
}

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
