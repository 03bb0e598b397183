//! Structural checks an annotated declaration must pass before generation.
//!
//! Every registered [`DeclarationRule`] runs on every declaration; a failing
//! rule never stops the others, so a declaration that is neither partial nor
//! a behaviour reports both problems at once.
//!
//! # Rules
//!
//! - **CCG001 `must-be-partial`:** the companion source can only merge into a
//!   partial type.
//! - **CCG002 `must-inherit-behaviour`:** the generated lookups call methods
//!   of the runtime behaviour base class.

#![warn(missing_docs)]

mod rules;
mod validator;

pub use rules::{register_builtin_rules, MustBePartial, MustInheritBehaviour};
pub use validator::{ValidationResult, Validator};

use ccg_diagnostics::{DiagnosticChannel, DiagnosticCode, Severity};
use ccg_model::AnnotatedDeclaration;

/// One structural precondition on annotated declarations.
pub trait DeclarationRule: Send + Sync {
    /// Returns the diagnostic code for this rule (e.g., CCG001).
    fn code(&self) -> DiagnosticCode;

    /// Returns the short kebab-case name of this rule (e.g., "must-be-partial").
    fn name(&self) -> &str;

    /// Returns a human-readable description of what this rule checks.
    fn description(&self) -> &str;

    /// Returns the severity of diagnostics emitted by this rule.
    fn default_severity(&self) -> Severity;

    /// Checks one declaration and reports violations to the channel.
    fn check(&self, decl: &AnnotatedDeclaration, channel: &dyn DiagnosticChannel);
}
