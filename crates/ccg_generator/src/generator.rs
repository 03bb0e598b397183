//! The pipeline driver.

use ccg_config::GeneratorConfig;
use ccg_diagnostics::{DiagnosticChannel, DiagnosticSink};
use ccg_model::{extract_all, AnnotatedDeclaration};
use ccg_plan::{EmissionPlan, EmissionPlanner};
use ccg_synth::{render, GeneratedUnit};
use ccg_validate::{ValidationResult, Validator};
use rayon::prelude::*;

use crate::error::GenerateError;
use crate::output::DeclarationOutput;

/// Runs the generation pipeline for annotated declarations.
///
/// Immutable after construction and `Send + Sync`: one generator can serve
/// any number of declarations concurrently.
pub struct Generator {
    config: GeneratorConfig,
    validator: Validator,
    planner: EmissionPlanner,
}

impl Generator {
    /// Creates a generator for the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        let validator = Validator::new(&config);
        let planner = EmissionPlanner::new(&config);
        Self {
            config,
            validator,
            planner,
        }
    }

    /// Creates a generator with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(GeneratorConfig::default())
    }

    /// The configuration this generator was built with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Validates, extracts and plans `decl` without rendering.
    ///
    /// Returns `Ok(None)` when a diagnostic stopped the declaration.
    pub fn check(
        &self,
        decl: &AnnotatedDeclaration,
        channel: &dyn DiagnosticChannel,
    ) -> Result<Option<EmissionPlan>, GenerateError> {
        decl.check_identity().map_err(|source| GenerateError::Declaration {
            declaration: decl.qualified_name(),
            source,
        })?;
        if let ValidationResult::Failed(diags) = self.validator.validate(decl, channel) {
            tracing::debug!(failures = diags.len(), "skipping invalid declaration");
            return Ok(None);
        }

        let descriptors =
            extract_all(decl, &self.config.attribute).map_err(|source| GenerateError::Input {
                declaration: decl.qualified_name(),
                source,
            })?;
        let plan = self.planner.plan(descriptors);
        if self.planner.check_collisions(decl, &plan, channel) {
            tracing::debug!("skipping declaration with colliding property names");
            return Ok(None);
        }
        Ok(Some(plan))
    }

    /// Runs the full pipeline for one declaration.
    pub fn generate(
        &self,
        decl: &AnnotatedDeclaration,
        channel: &dyn DiagnosticChannel,
    ) -> Result<Option<GeneratedUnit>, GenerateError> {
        let span = tracing::debug_span!("generate", declaration = %decl.qualified_name());
        let _enter = span.enter();

        let Some(plan) = self.check(decl, channel)? else {
            return Ok(None);
        };
        Ok(Some(render(
            decl,
            &plan,
            &self.config.emit,
            &self.config.runtime,
        )))
    }

    /// Runs the full pipeline with a private sink.
    pub fn run(&self, decl: &AnnotatedDeclaration) -> DeclarationOutput {
        let sink = DiagnosticSink::new();
        let result = self.generate(decl, &sink);
        let (unit, error) = match result {
            Ok(unit) => (unit, None),
            Err(err) => {
                tracing::warn!("{err}");
                (None, Some(err))
            }
        };
        DeclarationOutput {
            declaration: decl.qualified_name(),
            diagnostics: sink.take_all(),
            unit,
            error,
        }
    }

    /// Runs every declaration on the rayon pool.
    ///
    /// Outputs are returned in input order and each declaration's diagnostics
    /// are isolated from the others.
    pub fn generate_batch(&self, decls: &[AnnotatedDeclaration]) -> Vec<DeclarationOutput> {
        tracing::debug!(declarations = decls.len(), "generating batch");
        decls.par_iter().map(|decl| self.run(decl)).collect()
    }
}
