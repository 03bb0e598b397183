//! How serious a reported problem is.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity level of a diagnostic.
///
/// Ordered from least severe (`Note`) to most severe (`Error`). Only
/// `Error` suppresses generation for the declaration.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational context.
    Note,
    /// A likely mistake; the companion is still generated.
    Warning,
    /// A violated rule; no companion is generated.
    Error,
}

impl Severity {
    /// Whether a diagnostic at this level blocks generation.
    pub fn is_error(self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Lower-case label used in terminal output and JSON reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Note => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
