//! Subscriber setup for the VaultLens binaries.
//!
//! The filter comes from `VAULTLENS_LOG` when set (same syntax as
//! `RUST_LOG`); otherwise it is built from a [`LogConfig`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a full filter directive string.
pub const LOG_ENV: &str = "VAULTLENS_LOG";

/// Output encoding of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Filter and output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// crate name → level, e.g. `vaultlens-core: trace`
    #[serde(default)]
    pub components: BTreeMap<String, String>,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            components: BTreeMap::new(),
            format: LogFormat::Text,
        }
    }
}

impl LogConfig {
    /// CLI preset: `debug` for the VaultLens crates when verbose, `warn` otherwise.
    pub fn for_cli(verbose: bool, format: LogFormat) -> Self {
        let config = Self {
            format,
            ..Self::default()
        };
        if !verbose {
            return config;
        }
        ["vaultlens", "vaultlens-core", "vaultlens-format"]
            .into_iter()
            .fold(config, |c, name| c.component(name, "debug"))
    }

    pub fn component(mut self, name: impl Into<String>, level: impl Into<String>) -> Self {
        self.components.insert(name.into(), level.into());
        self
    }

    /// Filter directive string, e.g. `"warn,vaultlens_core=debug"`.
    pub fn directives(&self) -> String {
        self.components
            .iter()
            .fold(self.level.clone(), |acc, (component, level)| {
                format!("{acc},{}={level}", component.replace('-', "_"))
            })
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(self.directives()))
            .unwrap_or_else(|_| EnvFilter::new(default_level()))
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &LogConfig) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(config.env_filter());
    match config.format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Text => registry.with(fmt::layer().with_target(false)).try_init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_normalise_crate_names() {
        let config = LogConfig::default()
            .component("vaultlens-core", "debug")
            .component("vaultlens_format", "trace");
        assert_eq!(
            config.directives(),
            "warn,vaultlens_core=debug,vaultlens_format=trace"
        );
    }

    #[test]
    fn cli_preset() {
        assert_eq!(LogConfig::for_cli(false, LogFormat::Text).directives(), "warn");

        let verbose = LogConfig::for_cli(true, LogFormat::Json);
        assert_eq!(verbose.format, LogFormat::Json);
        assert_eq!(
            verbose.directives(),
            "warn,vaultlens=debug,vaultlens_core=debug,vaultlens_format=debug"
        );
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: LogConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LogConfig::default());

        let config: LogConfig =
            serde_json::from_str(r#"{"level":"info","format":"json"}"#).unwrap();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Json);
    }
}
