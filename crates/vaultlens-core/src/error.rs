//! Error types for VaultLens.

use thiserror::Error;

/// Errors raised while mapping a multicall response.
///
/// Per-call failures are never errors (they land in `MappedScalarResult::errors`);
/// these variants signal a response that does not match the requested shape.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("Reference '{reference}' missing from multicall results")]
    MissingReference { reference: String },
}

/// Errors from a `BatchCaller` implementation.
#[derive(Debug, Error)]
pub enum CallerError {
    #[error("No recorded results for reference '{reference}'")]
    MissingReference { reference: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Errors loading contract address configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid address for '{field}': {value}")]
    InvalidAddress { field: String, value: String },

    #[error("Cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
