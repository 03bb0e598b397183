//! Shared helpers for the `generate` and `check` commands: configuration
//! resolution, input loading, diagnostic reporting, and output writing.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ccg_config::GeneratorConfig;
use ccg_diagnostics::{Diagnostic, DiagnosticRenderer, Severity, TerminalRenderer};
use ccg_model::AnnotatedDeclaration;
use ccg_source::SourceDb;
use ccg_synth::GeneratedUnit;
use serde_json::Value;

use crate::GlobalArgs;

/// Loads the configuration named by `--config`, or the nearest `ccg.toml`
/// above the current directory, or the defaults.
pub fn resolve_config(global: &GlobalArgs) -> Result<GeneratorConfig, Box<dyn std::error::Error>> {
    let path = match &global.config {
        Some(path) => Some(path.clone()),
        None => ccg_config::find_config(&std::env::current_dir()?),
    };
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            Ok(ccg_config::load_config_file(&path)
                .map_err(|e| format!("{}: {e}", path.display()))?)
        }
        None => Ok(GeneratorConfig::default()),
    }
}

/// Reads declarations from a JSON file.
pub fn read_declarations(
    path: &Path,
) -> Result<Vec<AnnotatedDeclaration>, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    parse_declarations(&text).map_err(|e| format!("{}: {e}", path.display()).into())
}

/// Parses either a bare array of declarations or `{ "declarations": [...] }`.
pub fn parse_declarations(
    text: &str,
) -> Result<Vec<AnnotatedDeclaration>, Box<dyn std::error::Error>> {
    let value: Value = serde_json::from_str(text)?;
    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map
            .remove("declarations")
            .ok_or("expected a `declarations` array")?,
        _ => return Err("expected an array of declarations".into()),
    };
    Ok(serde_json::from_value(list)?)
}

/// Loads every declaring file that exists on disk into a [`SourceDb`], keyed
/// by the path the host reported. Relative paths resolve against `base_dir`.
pub fn load_sources(decls: &[AnnotatedDeclaration], base_dir: &Path) -> SourceDb {
    let files: BTreeSet<&Path> = decls
        .iter()
        .filter(|d| !d.location.is_unknown())
        .map(|d| d.location.file.as_path())
        .collect();

    let mut db = SourceDb::new();
    for key in files {
        let disk_path = if key.is_absolute() {
            key.to_path_buf()
        } else {
            base_dir.join(key)
        };
        if let Err(e) = db.load_file(key, &disk_path) {
            tracing::debug!(path = %disk_path.display(), "source not loaded: {e}");
        }
    }
    db
}

/// Directory relative declaring-file paths are resolved against.
pub fn input_base_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Error and warning totals over a set of diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    /// Error-severity diagnostics plus input errors.
    pub errors: usize,
    /// Warning-severity diagnostics.
    pub warnings: usize,
}

impl Tally {
    /// Adds the diagnostics of one declaration.
    pub fn add(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            match diag.severity {
                Severity::Error => self.errors += 1,
                Severity::Warning => self.warnings += 1,
                Severity::Note => {}
            }
        }
    }
}

/// Prints diagnostics to stderr with the terminal renderer.
pub fn print_diagnostics(diagnostics: &[Diagnostic], source_db: &SourceDb, color: bool) {
    let renderer = TerminalRenderer::new(color);
    for diag in diagnostics {
        eprintln!("{}", renderer.render(diag, source_db));
    }
}

/// What [`write_if_changed`] did with a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist.
    Created,
    /// The file existed with different content.
    Updated,
    /// The file already held this exact content.
    Unchanged,
}

/// Writes `unit` to `dir/<hint_name>` unless the file there already hashes to
/// the same content.
pub fn write_if_changed(dir: &Path, unit: &GeneratedUnit) -> io::Result<(PathBuf, WriteOutcome)> {
    let path = dir.join(&unit.hint_name);
    let outcome = match fs::read(&path) {
        Ok(existing) if ccg_common::ContentHash::from_bytes(&existing) == unit.content_hash => {
            return Ok((path, WriteOutcome::Unchanged));
        }
        Ok(_) => WriteOutcome::Updated,
        Err(e) if e.kind() == io::ErrorKind::NotFound => WriteOutcome::Created,
        Err(e) => return Err(e),
    };
    fs::write(&path, &unit.text)?;
    Ok((path, outcome))
}
