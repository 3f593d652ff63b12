//! Demo store configuration, read from the environment.

use core::str::FromStr;

use thiserror::Error;
use tracing::debug;

use tuxmart_core::{Amount, Quantity};
use tuxmart_observability::LogFormat;

pub const OPENING_BALANCE_VAR: &str = "TUXMART_OPENING_BALANCE";
pub const OPENING_STOCK_VAR: &str = "TUXMART_OPENING_STOCK";
pub const LOG_FORMAT_VAR: &str = "TUXMART_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: '{value}' is not a decimal number")]
    NotADecimal { var: &'static str, value: String },

    #[error("{var}: {message}")]
    Invalid { var: &'static str, message: String },
}

/// Settings for the demo store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Prepaid balance of the demo buyer.
    pub opening_balance: Amount,
    /// Opening stock for every catalog product.
    pub opening_stock: Quantity,
    pub log_format: LogFormat,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            opening_balance: Amount::from(100),
            opening_stock: Quantity::from(10),
            log_format: LogFormat::Json,
        }
    }
}

impl StoreConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`; unset or blank variables
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let value = |var: &'static str| {
            let raw = lookup(var).filter(|v| !v.trim().is_empty());
            if raw.is_none() {
                debug!("{var} not set; using default");
            }
            raw
        };

        let opening_balance = match value(OPENING_BALANCE_VAR) {
            Some(raw) => parse_decimal(OPENING_BALANCE_VAR, &raw)?,
            None => defaults.opening_balance,
        };
        if opening_balance < Amount::ZERO {
            return Err(ConfigError::Invalid {
                var: OPENING_BALANCE_VAR,
                message: "must not be negative".to_string(),
            });
        }

        let opening_stock = match value(OPENING_STOCK_VAR) {
            Some(raw) => parse_decimal(OPENING_STOCK_VAR, &raw)?,
            None => defaults.opening_stock,
        };
        if opening_stock <= Quantity::ZERO {
            return Err(ConfigError::Invalid {
                var: OPENING_STOCK_VAR,
                message: "must be positive".to_string(),
            });
        }

        let log_format = match value(LOG_FORMAT_VAR) {
            Some(raw) => LogFormat::from_str(&raw).map_err(|message| ConfigError::Invalid {
                var: LOG_FORMAT_VAR,
                message,
            })?,
            None => defaults.log_format,
        };

        Ok(Self {
            opening_balance,
            opening_stock,
            log_format,
        })
    }
}

fn parse_decimal(var: &'static str, raw: &str) -> Result<Amount, ConfigError> {
    Amount::from_str(raw.trim()).map_err(|_| ConfigError::NotADecimal {
        var,
        value: raw.to_string(),
    })
}
