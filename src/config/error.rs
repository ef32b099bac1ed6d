//! Errors raised while loading endpoint configuration.

use thiserror::Error;

/// Errors that can occur while merging endpoint groups.
///
/// Every variant is terminal: loading stops at the first one.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed YAML or a key the schema does not know.
    #[error("failed to decode endpoint config: {0}")]
    Decode(#[from] serde_yaml::Error),

    /// A group declared a mode other than `""` or `"strict"`.
    #[error("{mode:?} is not a valid endpoint mode (expected \"\" or \"strict\")")]
    InvalidMode { mode: String },

    /// A strict group listed discovery files.
    #[error("endpoint group {group:?}: no sd-files allowed in strict mode")]
    StrictModeDiscovery { group: String },

    /// The same address appears more than once across all groups.
    #[error("{address} endpoint provided more than once")]
    DuplicateEndpoint { address: String },
}

/// Result type for endpoint configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
