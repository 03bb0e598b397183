//! `ccg init`: writes a `ccg.toml` holding every default.

use std::fs;
use std::path::{Path, PathBuf};

use ccg_config::{GeneratorConfig, CONFIG_FILE_NAME};

use crate::GlobalArgs;

/// Runs the `ccg init` command in the current directory.
pub fn run(force: bool, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let path = write_default_config(&std::env::current_dir()?, force)?;
    if !global.quiet {
        eprintln!("     Created {}", path.display());
    }
    Ok(0)
}

/// Writes the default configuration into `dir`, refusing to overwrite an
/// existing file unless `force` is set.
pub fn write_default_config(dir: &Path, force: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )
        .into());
    }
    let body = toml::to_string_pretty(&GeneratorConfig::default())?;
    fs::write(&path, format!("# Component cache generator settings.\n\n{body}"))?;
    Ok(path)
}
