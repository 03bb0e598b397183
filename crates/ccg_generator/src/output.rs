//! Batch results.

use ccg_diagnostics::Diagnostic;
use ccg_synth::GeneratedUnit;

use crate::error::GenerateError;

/// Everything one declaration produced in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationOutput {
    /// Qualified name of the declaration.
    pub declaration: String,
    /// Diagnostics in report order.
    pub diagnostics: Vec<Diagnostic>,
    /// The companion source, if generation succeeded.
    pub unit: Option<GeneratedUnit>,
    /// The input error, if the attribute input was malformed.
    pub error: Option<GenerateError>,
}

impl DeclarationOutput {
    /// Returns `true` if the declaration failed with an error diagnostic or
    /// an input error.
    pub fn has_errors(&self) -> bool {
        self.error.is_some() || self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Number of error diagnostics plus the input error, if any.
    pub fn error_count(&self) -> usize {
        let diags = self
            .diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count();
        diags + usize::from(self.error.is_some())
    }
}
