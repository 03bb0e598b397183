//! Normalized cache requests.

use crate::type_ref::TypeRef;
use ccg_common::{derive_property_name, SearchScope};

/// One attribute occurrence after extraction, with defaults applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheDescriptor {
    /// The component type to look up.
    pub dependency: TypeRef,
    /// Explicit property name, or `None` to derive it from the type.
    pub property_name: Option<String>,
    /// Where to search.
    pub scope: SearchScope,
    /// Whether a failed lookup throws.
    pub required: bool,
}

impl CacheDescriptor {
    /// The explicit name, or the dependency's simple name with its first
    /// character lower-cased.
    pub fn resolved_property_name(&self) -> String {
        match &self.property_name {
            Some(name) => name.clone(),
            None => derive_property_name(&self.dependency.name),
        }
    }
}
