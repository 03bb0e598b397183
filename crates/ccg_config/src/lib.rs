//! Parsing and validation of `ccg.toml` generator configuration.
//!
//! The configuration pins down every choice the attribute surface leaves open:
//! the default of `IsRequired`, the default search scope, the names of the
//! runtime lookup primitives the generated code calls, and the names of the
//! generated members. An absent file means [`GeneratorConfig::default`].

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{find_config, load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
