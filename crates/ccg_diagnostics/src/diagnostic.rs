//! Structured diagnostic messages.

use crate::code::DiagnosticCode;
use crate::label::Label;
use crate::severity::Severity;
use ccg_source::Location;
use serde::{Deserialize, Serialize};

/// A report about one annotated declaration.
///
/// Diagnostics are write-once: stages build them with the `with_*` methods and
/// hand them to a [`DiagnosticChannel`](crate::DiagnosticChannel), after which
/// they are never mutated by the generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level.
    pub severity: Severity,
    /// The stable identifier.
    pub code: DiagnosticCode,
    /// The rendered message, with the declaration name substituted.
    pub message: String,
    /// The declaration the message is about.
    pub subject: String,
    /// The declaration's identifier token.
    pub location: Location,
    /// Additional annotated locations.
    pub labels: Vec<Label>,
    /// Explanatory footnotes.
    pub notes: Vec<String>,
    /// Actionable suggestions.
    pub help: Vec<String>,
}

impl Diagnostic {
    /// Creates a diagnostic with the given severity.
    pub fn new(
        severity: Severity,
        code: DiagnosticCode,
        subject: impl Into<String>,
        message: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            subject: subject.into(),
            location,
            labels: Vec::new(),
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// Creates an error diagnostic.
    pub fn error(
        code: DiagnosticCode,
        subject: impl Into<String>,
        message: impl Into<String>,
        location: Location,
    ) -> Self {
        Self::new(Severity::Error, code, subject, message, location)
    }

    /// Creates a warning diagnostic.
    pub fn warning(
        code: DiagnosticCode,
        subject: impl Into<String>,
        message: impl Into<String>,
        location: Location,
    ) -> Self {
        Self::new(Severity::Warning, code, subject, message, location)
    }

    /// Adds a label.
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    /// Adds a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Adds a help message.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_error() {
        let diag = Diagnostic::error(
            DiagnosticCode::MUST_BE_PARTIAL,
            "Sandbox",
            "type 'Sandbox' must be partial",
            Location::unknown(),
        );
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.subject, "Sandbox");
        assert_eq!(diag.code.to_string(), "CCG001");
    }

    #[test]
    fn builder_methods() {
        let loc = Location::new("Sandbox.cs", 4, 14, 7);
        let diag = Diagnostic::warning(
            DiagnosticCode::DUPLICATE_PROPERTY,
            "Sandbox",
            "duplicate property 'rb'",
            loc.clone(),
        )
        .with_label(Label::primary(loc, "declared here"))
        .with_note("both attributes name the property 'rb'")
        .with_help("pass a distinct PropertyName");
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.labels.len(), 1);
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.help.len(), 1);
    }

    #[test]
    fn json_shape() {
        let diag = Diagnostic::error(
            DiagnosticCode::MUST_INHERIT_BEHAVIOUR,
            "Sandbox",
            "msg",
            Location::new("Sandbox.cs", 1, 2, 3),
        );
        let value = serde_json::to_value(&diag).unwrap();
        assert_eq!(value["severity"], "error");
        assert_eq!(value["code"]["number"], 2);
        assert_eq!(value["location"]["line"], 1);
        let back: Diagnostic = serde_json::from_value(value).unwrap();
        assert_eq!(back, diag);
    }
}
