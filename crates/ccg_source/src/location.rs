//! Host-resolved positions of declaration identifier tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The position of a declaration's identifier token in its source file.
///
/// Lines and columns are 1-indexed. `length` is the token length in characters
/// and drives the underline width in rendered diagnostics. A location with
/// line 0 is unknown; hosts use it for declarations without source, such as
/// test fixtures.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Location {
    /// Path of the declaring file as the host knows it.
    pub file: PathBuf,
    /// Line of the identifier token (1-indexed).
    pub line: u32,
    /// Column of the identifier token (1-indexed).
    pub column: u32,
    /// Length of the identifier token.
    #[serde(default)]
    pub length: u32,
}

impl Location {
    /// Creates a location for a token in `file`.
    pub fn new(file: impl Into<PathBuf>, line: u32, column: u32, length: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            length,
        }
    }

    /// A location carrying no position.
    pub fn unknown() -> Self {
        Self {
            file: PathBuf::new(),
            line: 0,
            column: 0,
            length: 0,
        }
    }

    /// Returns `true` if this location carries no position.
    pub fn is_unknown(&self) -> bool {
        self.line == 0
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return f.write_str("<unknown>");
        }
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}
