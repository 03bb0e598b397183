//! CCG001: the annotated type must be declared `partial`.

use ccg_diagnostics::{Diagnostic, DiagnosticChannel, DiagnosticCode, Label, Severity};
use ccg_model::AnnotatedDeclaration;

use crate::DeclarationRule;

/// Rejects declarations that are not `partial`.
pub struct MustBePartial;

impl DeclarationRule for MustBePartial {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::MUST_BE_PARTIAL
    }

    fn name(&self) -> &str {
        "must-be-partial"
    }

    fn description(&self) -> &str {
        "annotated types must be partial so generated members can be merged in"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, decl: &AnnotatedDeclaration, channel: &dyn DiagnosticChannel) {
        if decl.is_partial {
            return;
        }
        let name = decl.display_name();
        channel.report(
            Diagnostic::new(
                self.default_severity(),
                self.code(),
                decl.qualified_name(),
                format!("type '{name}' must be partial to receive generated component caches"),
                decl.location.clone(),
            )
            .with_label(Label::primary(decl.location.clone(), "declared here"))
            .with_help(format!("add the `partial` modifier to every declaration of '{name}'")),
        );
    }
}
