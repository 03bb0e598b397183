//! Lookup of declaring source text by path, for diagnostic rendering.

use crate::location::Location;
use crate::source_file::SourceFile;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Declaring files the host was able to read, keyed by the path used in
/// [`Location::file`].
pub struct SourceDb {
    files: BTreeMap<PathBuf, SourceFile>,
}

impl SourceDb {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self {
            files: BTreeMap::new(),
        }
    }

    /// Reads `disk_path` and registers it under `key`.
    ///
    /// `key` is the path as it appears in locations; `disk_path` is where the
    /// host actually finds it (usually `key` joined onto a project root).
    pub fn load_file(&mut self, key: &Path, disk_path: &Path) -> Result<(), io::Error> {
        let content = std::fs::read_to_string(disk_path)?;
        self.add_source(key, content);
        Ok(())
    }

    /// Registers in-memory text under `key`.
    pub fn add_source(&mut self, key: impl Into<PathBuf>, content: String) {
        let key = key.into();
        let file = SourceFile::new(key.clone(), content);
        self.files.insert(key, file);
    }

    /// Returns `true` if text for `key` is registered.
    pub fn contains(&self, key: &Path) -> bool {
        self.files.contains_key(key)
    }

    /// Returns the file registered under `key`.
    pub fn get_file(&self, key: &Path) -> Option<&SourceFile> {
        self.files.get(key)
    }

    /// Returns the source line a location points into, if known.
    pub fn line_text(&self, location: &Location) -> Option<&str> {
        if location.is_unknown() {
            return None;
        }
        self.get_file(&location.file)?.line(location.line)
    }
}

impl Default for SourceDb {
    fn default() -> Self {
        Self::new()
    }
}
