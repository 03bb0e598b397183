//! Error types for configuration loading and validation.

/// Errors that can occur when loading or validating a `ccg.toml` configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A configuration value failed validation.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidField {
        /// Dotted path of the offending key, e.g. `emit.populate_method`.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}
