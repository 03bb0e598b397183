//! Configuration types deserialized from `ccg.toml`.

use ccg_common::SearchScope;
use serde::{Deserialize, Serialize};

/// The top-level generator configuration.
///
/// Every table is optional; missing keys take the documented defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Defaults applied to attribute arguments the user left out.
    pub attribute: AttributeDefaults,
    /// Names of the runtime framework API the generated code targets.
    pub runtime: RuntimeApi,
    /// Shape of the generated companion source.
    pub emit: EmitConfig,
    /// Optional validation rules.
    pub validate: ValidateConfig,
}

/// Defaults for arguments omitted from a `GenerateComponentCache` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AttributeDefaults {
    /// Value of `IsRequired` when the attribute does not set it.
    pub required: bool,
    /// Value of `SearchScope` when the attribute does not set it.
    pub search_scope: SearchScope,
}

impl Default for AttributeDefaults {
    fn default() -> Self {
        Self {
            required: true,
            search_scope: SearchScope::SELF,
        }
    }
}

/// Names of the runtime types and methods the generated code refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeApi {
    /// Simple name of the base class every annotated type must derive from.
    pub behaviour_base: String,
    /// Lookup on the annotated object itself.
    pub find_in_self: String,
    /// Lookup on the annotated object's descendants.
    pub find_in_children: String,
    /// Lookup on the annotated object's ancestors.
    pub find_in_parent: String,
    /// Attribute declaring that the annotated object requires a dependency.
    pub require_attribute: String,
    /// Exception thrown when a required dependency is not found.
    pub missing_exception: String,
}

impl Default for RuntimeApi {
    fn default() -> Self {
        Self {
            behaviour_base: "MonoBehaviour".to_string(),
            find_in_self: "GetComponent".to_string(),
            find_in_children: "GetComponentInChildren".to_string(),
            find_in_parent: "GetComponentInParent".to_string(),
            require_attribute: "global::UnityEngine.RequireComponent".to_string(),
            missing_exception: "global::UnityEngine.MissingReferenceException".to_string(),
        }
    }
}

/// Shape of the generated companion source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitConfig {
    /// Name of the generated method that fills every cache property.
    pub populate_method: String,
    /// Lifecycle method injected to call `populate_method` when the user has
    /// not declared a zero-argument method with this name.
    pub lifecycle_hook: String,
    /// Suffix appended to the sanitized qualified name to form the file name.
    pub file_suffix: String,
    /// Spaces per indentation level.
    pub indent: usize,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            populate_method: "CacheComponents".to_string(),
            lifecycle_hook: "Awake".to_string(),
            file_suffix: "ComponentCache.g.cs".to_string(),
            indent: 4,
        }
    }
}

/// Optional validation rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidateConfig {
    /// How to report cache properties whose names collide.
    pub property_collisions: RuleLevel,
}

/// Severity assigned to an optional rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    /// Report as an error; no companion is generated.
    #[default]
    Error,
    /// Report as a warning; the companion is still generated.
    Warning,
    /// Do not check.
    Allow,
}
