//! Descriptor aggregation and property-name collision checks.

use std::collections::{HashMap, HashSet};

use ccg_common::SearchScope;
use ccg_config::{GeneratorConfig, RuleLevel};
use ccg_diagnostics::{Diagnostic, DiagnosticChannel, DiagnosticCode, Severity};
use ccg_model::{AnnotatedDeclaration, CacheDescriptor};

use crate::lookup::lookup_steps;
use crate::plan::{EmissionPlan, PlannedProperty};

/// Builds emission plans and checks them for name collisions.
pub struct EmissionPlanner {
    collisions: RuleLevel,
    populate_method: String,
    lifecycle_hook: String,
}

impl EmissionPlanner {
    /// Creates a planner for the given configuration.
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            collisions: config.validate.property_collisions,
            populate_method: config.emit.populate_method.clone(),
            lifecycle_hook: config.emit.lifecycle_hook.clone(),
        }
    }

    /// Aggregates descriptors, in attribute order, into a plan.
    ///
    /// A required descriptor whose scope includes Self adds its type to the
    /// constraints unless an equal type is already there.
    pub fn plan(&self, descriptors: Vec<CacheDescriptor>) -> EmissionPlan {
        let mut plan = EmissionPlan::default();
        let mut constrained = HashSet::new();

        for (i, descriptor) in descriptors.into_iter().enumerate() {
            let name = descriptor.resolved_property_name();
            if descriptor.required
                && descriptor.scope.contains(SearchScope::SELF)
                && constrained.insert(descriptor.dependency.fully_qualified())
            {
                plan.constraints.push(descriptor.dependency.clone());
            }
            plan.properties.push(PlannedProperty {
                name,
                steps: lookup_steps(descriptor.scope),
                dependency: descriptor.dependency,
                required: descriptor.required,
                position: i + 1,
            });
        }

        tracing::debug!(
            properties = plan.properties.len(),
            constraints = plan.constraints.len(),
            "planned emission"
        );
        plan
    }

    /// Reports CCG003 for properties that share a name with each other, with
    /// the enclosing type, with a user-declared member, or with a generated
    /// method.
    ///
    /// Returns `true` if an error-severity diagnostic was reported.
    pub fn check_collisions(
        &self,
        decl: &AnnotatedDeclaration,
        plan: &EmissionPlan,
        channel: &dyn DiagnosticChannel,
    ) -> bool {
        let severity = match self.collisions {
            RuleLevel::Allow => return false,
            RuleLevel::Warning => Severity::Warning,
            RuleLevel::Error => Severity::Error,
        };
        let name = decl.display_name();
        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        let mut reported = false;

        for property in &plan.properties {
            let key = property.name.trim_start_matches('@');
            let problem = if let Some(first) = first_seen.get(key) {
                Some((
                    format!("property '{}' is generated more than once for '{name}'", property.name),
                    format!(
                        "attribute #{first} and attribute #{} both produce '{}'",
                        property.position, property.name
                    ),
                ))
            } else if key == decl.name.trim_start_matches('@') {
                Some((
                    format!("property '{}' has the same name as its enclosing type '{name}'", property.name),
                    format!("produced by attribute #{}", property.position),
                ))
            } else if decl
                .members
                .iter()
                .any(|m| m.name.trim_start_matches('@') == key)
            {
                Some((
                    format!("property '{}' conflicts with a member declared on '{name}'", property.name),
                    format!("produced by attribute #{}", property.position),
                ))
            } else if key == self.populate_method || key == self.lifecycle_hook {
                Some((
                    format!("property '{}' conflicts with a generated method on '{name}'", property.name),
                    format!("produced by attribute #{}", property.position),
                ))
            } else {
                None
            };
            first_seen.entry(key).or_insert(property.position);

            if let Some((message, note)) = problem {
                channel.report(
                    Diagnostic::new(
                        severity,
                        DiagnosticCode::DUPLICATE_PROPERTY,
                        decl.qualified_name(),
                        message,
                        decl.location.clone(),
                    )
                    .with_note(note)
                    .with_help("give the attribute a distinct property name"),
                );
                reported = true;
            }
        }

        reported && severity.is_error()
    }
}
