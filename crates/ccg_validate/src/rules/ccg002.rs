//! CCG002: the annotated type must derive from the behaviour base class.

use ccg_diagnostics::{Diagnostic, DiagnosticChannel, DiagnosticCode, Label, Severity};
use ccg_model::AnnotatedDeclaration;

use crate::DeclarationRule;

/// Rejects declarations with no ancestor named like the behaviour base.
///
/// Ancestry entries are compared by simple name, so `UnityEngine.MonoBehaviour`
/// and `global::UnityEngine.MonoBehaviour` both satisfy a `MonoBehaviour` base.
pub struct MustInheritBehaviour {
    base: String,
}

impl MustInheritBehaviour {
    /// Creates the rule for the given base class simple name.
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
        }
    }
}

impl DeclarationRule for MustInheritBehaviour {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::MUST_INHERIT_BEHAVIOUR
    }

    fn name(&self) -> &str {
        "must-inherit-behaviour"
    }

    fn description(&self) -> &str {
        "annotated types must derive from the runtime behaviour base class"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, decl: &AnnotatedDeclaration, channel: &dyn DiagnosticChannel) {
        if decl.derives_from(&self.base) {
            return;
        }
        let name = decl.display_name();
        let mut diag = Diagnostic::new(
            self.default_severity(),
            self.code(),
            decl.qualified_name(),
            format!(
                "type '{name}' must derive from {} to receive generated component caches",
                self.base
            ),
            decl.location.clone(),
        )
        .with_label(Label::primary(decl.location.clone(), "declared here"));
        if let Some(direct) = decl.ancestry.first() {
            diag = diag.with_note(format!("'{name}' derives from '{direct}'"));
        }
        channel.report(diag);
    }
}
