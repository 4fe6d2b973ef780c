//! Error types for configuration loading and validation.

use thiserror::Error;

/// Errors from reading, parsing or validating an [`crate::EngineConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(String),
    /// The TOML text is malformed or has fields of the wrong type.
    #[error("config parse error: {0}")]
    Parse(String),
    /// A field parsed correctly but holds an unusable value.
    #[error("invalid config: {field} = {value}")]
    Invalid { field: &'static str, value: String },
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
