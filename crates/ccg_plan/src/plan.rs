//! The per-declaration emission plan.

use crate::lookup::LookupStep;
use ccg_model::TypeRef;

/// One generated cache property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedProperty {
    /// Property name as emitted.
    pub name: String,
    /// Component type the property caches.
    pub dependency: TypeRef,
    /// Lookups in execution order. The first is unconditional, the rest run
    /// only while the property is still null.
    pub steps: &'static [LookupStep],
    /// Whether the populate method throws when every lookup fails.
    pub required: bool,
    /// 1-based index of the attribute this property came from.
    pub position: usize,
}

/// Everything the renderer emits for one declaration, in emission order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmissionPlan {
    /// Properties in attribute order.
    pub properties: Vec<PlannedProperty>,
    /// Types the declaration requires on its own object, deduplicated by
    /// fully qualified name, in order of first appearance.
    pub constraints: Vec<TypeRef>,
}

impl EmissionPlan {
    /// Returns `true` if the plan declares no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Looks up a planned property by name.
    pub fn property(&self, name: &str) -> Option<&PlannedProperty> {
        self.properties.iter().find(|p| p.name == name)
    }
}
