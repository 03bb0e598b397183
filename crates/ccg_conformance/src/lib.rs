//! Conformance test helpers for the component cache generator.
//!
//! Provides pipeline functions that run annotated declarations through
//! validation, extraction, planning and rendering and return structured
//! results for assertion in integration tests.

#![warn(missing_docs)]

use ccg_common::SearchScope;
use ccg_config::GeneratorConfig;
use ccg_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
use ccg_generator::{GenerateError, Generator};
use ccg_model::{AnnotatedDeclaration, RawAttribute, TypeRef};
use ccg_source::Location;
use ccg_synth::GeneratedUnit;

/// Result of running one declaration through the generator.
pub struct PipelineResult {
    /// The generated companion source, if any.
    pub unit: Option<GeneratedUnit>,
    /// All diagnostics emitted, in report order.
    pub diagnostics: Vec<Diagnostic>,
    /// The input error, if the attribute input was malformed.
    pub error: Option<GenerateError>,
    /// Number of error-severity diagnostics.
    pub error_count: usize,
    /// Number of warning-severity diagnostics.
    pub warning_count: usize,
}

impl PipelineResult {
    /// Codes of all diagnostics, in report order.
    pub fn codes(&self) -> Vec<DiagnosticCode> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }

    /// The generated text, or an empty string when nothing was generated.
    pub fn text(&self) -> &str {
        self.unit.as_ref().map(|u| u.text.as_str()).unwrap_or("")
    }
}

/// Parses a configuration from `ccg.toml` text, panicking on invalid input.
pub fn make_config(toml: &str) -> GeneratorConfig {
    ccg_config::load_config_from_str(toml)
        .unwrap_or_else(|e| panic!("invalid conformance config: {e}"))
}

/// Parses one declaration from its JSON form, panicking on invalid input.
pub fn parse_declaration(json: &str) -> AnnotatedDeclaration {
    serde_json::from_str(json).unwrap_or_else(|e| panic!("invalid declaration JSON: {e}"))
}

/// Runs the pipeline with the default configuration.
pub fn run_pipeline(decl: &AnnotatedDeclaration) -> PipelineResult {
    run_pipeline_with_config(decl, GeneratorConfig::default())
}

/// Runs the pipeline with the given configuration.
pub fn run_pipeline_with_config(
    decl: &AnnotatedDeclaration,
    config: GeneratorConfig,
) -> PipelineResult {
    let generator = Generator::new(config);
    let sink = DiagnosticSink::new();
    let (unit, error) = match generator.generate(decl, &sink) {
        Ok(unit) => (unit, None),
        Err(e) => (None, Some(e)),
    };
    let diagnostics = sink.take_all();
    let error_count = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let warning_count = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();
    PipelineResult {
        unit,
        diagnostics,
        error,
        error_count,
        warning_count,
    }
}

/// The reference declaration: a partial `MonoBehaviour` caching a required
/// `Rigidbody` on itself as `rb` and an optional `SampleComponent` from its
/// children as `sample`.
pub fn sandbox_declaration() -> AnnotatedDeclaration {
    AnnotatedDeclaration::new("Sandbox")
        .partial()
        .inherits("MonoBehaviour")
        .at(Location::new("Assets/Sandbox/Sandbox.cs", 6, 22, 7))
        .with_attribute(
            RawAttribute::of_type(TypeRef::new("UnityEngine", "Rigidbody")).with_property_name("rb"),
        )
        .with_attribute(
            RawAttribute::of_type(TypeRef::global("SampleComponent"))
                .with_property_name("sample")
                .with_scope(SearchScope::CHILDREN)
                .with_required(false),
        )
}
