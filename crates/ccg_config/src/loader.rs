//! Configuration file discovery, loading, and validation.

use crate::error::ConfigError;
use crate::types::GeneratorConfig;
use ccg_common::is_identifier;
use std::path::{Path, PathBuf};

/// File name looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = "ccg.toml";

/// Walks up from `start` looking for the nearest `ccg.toml`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Loads `<project_dir>/ccg.toml`, or the defaults if the file does not exist.
pub fn load_config(project_dir: &Path) -> Result<GeneratorConfig, ConfigError> {
    let path = project_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(GeneratorConfig::default());
    }
    load_config_file(&path)
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates configuration text.
pub fn load_config_from_str(content: &str) -> Result<GeneratorConfig, ConfigError> {
    let config: GeneratorConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks that every configured name can appear in generated source.
pub fn validate_config(config: &GeneratorConfig) -> Result<(), ConfigError> {
    if config.attribute.search_scope.is_empty() {
        return Err(ConfigError::InvalidField {
            field: "attribute.search_scope",
            reason: "at least one scope is required".to_string(),
        });
    }

    let runtime = &config.runtime;
    require_identifier("runtime.behaviour_base", &runtime.behaviour_base)?;
    require_identifier("runtime.find_in_self", &runtime.find_in_self)?;
    require_identifier("runtime.find_in_children", &runtime.find_in_children)?;
    require_identifier("runtime.find_in_parent", &runtime.find_in_parent)?;
    require_type_name("runtime.require_attribute", &runtime.require_attribute)?;
    require_type_name("runtime.missing_exception", &runtime.missing_exception)?;

    let emit = &config.emit;
    require_identifier("emit.populate_method", &emit.populate_method)?;
    require_identifier("emit.lifecycle_hook", &emit.lifecycle_hook)?;
    if emit.populate_method == emit.lifecycle_hook {
        return Err(ConfigError::InvalidField {
            field: "emit.lifecycle_hook",
            reason: format!("must differ from emit.populate_method ('{}')", emit.populate_method),
        });
    }
    if emit.file_suffix.is_empty() || emit.file_suffix.contains(['/', '\\']) {
        return Err(ConfigError::InvalidField {
            field: "emit.file_suffix",
            reason: format!("'{}' is not a file name suffix", emit.file_suffix),
        });
    }
    if !(1..=8).contains(&emit.indent) {
        return Err(ConfigError::InvalidField {
            field: "emit.indent",
            reason: "must be between 1 and 8".to_string(),
        });
    }
    Ok(())
}

fn require_identifier(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if is_identifier(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidField {
            field,
            reason: format!("'{value}' is not a valid identifier"),
        })
    }
}

/// Accepts dotted names with an optional `global::` alias.
fn require_type_name(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let body = value.strip_prefix("global::").unwrap_or(value);
    if !body.is_empty() && body.split('.').all(is_identifier) {
        Ok(())
    } else {
        Err(ConfigError::InvalidField {
            field,
            reason: format!("'{value}' is not a valid type name"),
        })
    }
}
