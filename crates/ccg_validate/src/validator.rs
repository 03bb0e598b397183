//! Rule registration and execution.

use ccg_config::GeneratorConfig;
use ccg_diagnostics::{Diagnostic, DiagnosticChannel, DiagnosticSink};
use ccg_model::AnnotatedDeclaration;

use crate::rules::register_builtin_rules;
use crate::DeclarationRule;

/// Outcome of validating one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Every rule passed; generation may proceed.
    Ok,
    /// At least one rule reported an error. Carries every diagnostic the
    /// rules produced, in rule order.
    Failed(Vec<Diagnostic>),
}

impl ValidationResult {
    /// Returns `true` for [`ValidationResult::Ok`].
    pub fn is_ok(&self) -> bool {
        matches!(self, ValidationResult::Ok)
    }
}

/// Runs the registered rules over declarations.
///
/// Stateless between calls, so one validator can be shared across threads.
pub struct Validator {
    rules: Vec<Box<dyn DeclarationRule>>,
}

impl Validator {
    /// Creates a validator with the built-in rules configured from `config`.
    pub fn new(config: &GeneratorConfig) -> Self {
        let mut validator = Self { rules: Vec::new() };
        register_builtin_rules(&mut validator, config);
        validator
    }

    /// Creates a validator for the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(&GeneratorConfig::default())
    }

    /// Registers an additional rule. Rules run in registration order.
    pub fn register(&mut self, rule: Box<dyn DeclarationRule>) {
        self.rules.push(rule);
    }

    /// Returns the number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all registered rules.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Runs every rule on `decl`, forwarding diagnostics to `channel`.
    pub fn validate(
        &self,
        decl: &AnnotatedDeclaration,
        channel: &dyn DiagnosticChannel,
    ) -> ValidationResult {
        let local = DiagnosticSink::new();
        for rule in &self.rules {
            rule.check(decl, &local);
        }

        let failed = local.has_errors();
        let diagnostics = local.take_all();
        tracing::debug!(
            declaration = %decl.qualified_name(),
            diagnostics = diagnostics.len(),
            failed,
            "validated declaration"
        );
        for diag in &diagnostics {
            channel.report(diag.clone());
        }

        if failed {
            ValidationResult::Failed(diagnostics)
        } else {
            ValidationResult::Ok
        }
    }
}
