//! Contract address configuration.
//!
//! Addresses default to Ethereum mainnet deployments but are plain values so
//! callers and test doubles can substitute their own.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ORACLE_CONTRACT_ADDRESS: &str = "0x83d95e0D5f402511dB06817Aff3f9eA88224B030";
pub const STRATEGIES_HELPER_CONTRACT_ADDRESS: &str = "0x2114d9a16da30fA5B59795e4f8C9eAd19E40f0a0";
pub const USDC_ADDRESS: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
pub const USDC_DECIMALS: u32 = 6;

pub const ENV_ORACLE: &str = "VAULTLENS_ORACLE_ADDRESS";
pub const ENV_STRATEGIES_HELPER: &str = "VAULTLENS_STRATEGIES_HELPER_ADDRESS";
pub const ENV_USDC: &str = "VAULTLENS_USDC_ADDRESS";

/// Addresses of the contracts the multicall batches target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractAddresses {
    /// Price oracle
    #[serde(default = "default_oracle")]
    pub oracle: String,
    /// Strategies helper; also used as the batch reference for its calls
    #[serde(default = "default_strategies_helper")]
    pub strategies_helper: String,
    /// USDC token
    #[serde(default = "default_usdc")]
    pub usdc: String,
}

fn default_oracle() -> String {
    ORACLE_CONTRACT_ADDRESS.into()
}

fn default_strategies_helper() -> String {
    STRATEGIES_HELPER_CONTRACT_ADDRESS.into()
}

fn default_usdc() -> String {
    USDC_ADDRESS.into()
}

impl Default for ContractAddresses {
    fn default() -> Self {
        Self {
            oracle: default_oracle(),
            strategies_helper: default_strategies_helper(),
            usdc: default_usdc(),
        }
    }
}

impl ContractAddresses {
    /// Parse from YAML. Missing keys fall back to mainnet defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let addresses: Self = serde_yaml::from_str(yaml)?;
        addresses.validate()?;
        Ok(addresses)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_yaml_str(&text)
    }

    /// Override fields from `VAULTLENS_*_ADDRESS` environment variables.
    pub fn apply_env_overrides(self) -> Result<Self, ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Same as `apply_env_overrides` with an injectable lookup.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_ORACLE) {
            self.oracle = v;
        }
        if let Some(v) = lookup(ENV_STRATEGIES_HELPER) {
            self.strategies_helper = v;
        }
        if let Some(v) = lookup(ENV_USDC) {
            self.usdc = v;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("oracle", &self.oracle),
            ("strategies_helper", &self.strategies_helper),
            ("usdc", &self.usdc),
        ] {
            if !is_hex_address(value) {
                return Err(ConfigError::InvalidAddress {
                    field: field.to_string(),
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    /// Case-insensitive match against the configured USDC address.
    pub fn is_usdc(&self, token: &str) -> bool {
        token.eq_ignore_ascii_case(&self.usdc)
    }
}

fn is_hex_address(s: &str) -> bool {
    match s.strip_prefix("0x") {
        Some(hex) => hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
