//! References to dependency types named in attributes.

use ccg_common::is_identifier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A type reference resolved by the host.
///
/// Renders as a fully qualified name rooted at `global::`, so generated code
/// is immune to `using` aliases and shadowing in the user's file.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Dotted namespace, `None` for the global namespace.
    #[serde(default)]
    pub namespace: Option<String>,
    /// Enclosing types from outermost to innermost, for nested types.
    #[serde(default)]
    pub containing_types: Vec<String>,
    /// Simple name without type arguments.
    pub name: String,
    /// Type arguments of a constructed generic type.
    #[serde(default)]
    pub type_arguments: Vec<TypeRef>,
}

impl TypeRef {
    /// A type in the given namespace.
    pub fn new(namespace: &str, name: &str) -> Self {
        Self {
            namespace: Some(namespace.to_string()),
            containing_types: Vec::new(),
            name: name.to_string(),
            type_arguments: Vec::new(),
        }
    }

    /// A type in the global namespace.
    pub fn global(name: &str) -> Self {
        Self {
            namespace: None,
            containing_types: Vec::new(),
            name: name.to_string(),
            type_arguments: Vec::new(),
        }
    }

    /// Nests this type inside `outer` (outermost first across calls).
    pub fn nested_in(mut self, outer: &str) -> Self {
        self.containing_types.push(outer.to_string());
        self
    }

    /// Adds a type argument.
    pub fn with_type_argument(mut self, arg: TypeRef) -> Self {
        self.type_arguments.push(arg);
        self
    }

    /// Returns `true` if every name segment is a legal identifier.
    pub fn is_resolvable(&self) -> bool {
        let namespace_ok = match &self.namespace {
            Some(ns) => ns.split('.').all(is_identifier),
            None => true,
        };
        namespace_ok
            && self.containing_types.iter().all(|t| is_identifier(t))
            && is_identifier(&self.name)
            && self.type_arguments.iter().all(TypeRef::is_resolvable)
    }

    /// The `global::`-rooted display string, e.g.
    /// `global::UnityEngine.Rigidbody` or `global::Game.Pool<global::Game.Bullet>`.
    pub fn fully_qualified(&self) -> String {
        let mut out = String::from("global::");
        if let Some(ns) = &self.namespace {
            out.push_str(ns);
            out.push('.');
        }
        for outer in &self.containing_types {
            out.push_str(outer);
            out.push('.');
        }
        out.push_str(&self.name);
        if !self.type_arguments.is_empty() {
            let args: Vec<String> = self
                .type_arguments
                .iter()
                .map(TypeRef::fully_qualified)
                .collect();
            out.push('<');
            out.push_str(&args.join(", "));
            out.push('>');
        }
        out
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fully_qualified())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespaced_type() {
        let t = TypeRef::new("UnityEngine", "Rigidbody");
        assert_eq!(t.fully_qualified(), "global::UnityEngine.Rigidbody");
    }

    #[test]
    fn global_type() {
        assert_eq!(
            TypeRef::global("SampleComponent").to_string(),
            "global::SampleComponent"
        );
    }

    #[test]
    fn nested_generic_type() {
        let t = TypeRef::new("Game", "Pool")
            .nested_in("Pools")
            .with_type_argument(TypeRef::new("Game.Items", "Bullet"))
            .with_type_argument(TypeRef::global("Marker"));
        assert_eq!(
            t.fully_qualified(),
            "global::Game.Pools.Pool<global::Game.Items.Bullet, global::Marker>"
        );
    }

    #[test]
    fn resolvability() {
        assert!(TypeRef::new("UnityEngine", "Rigidbody").is_resolvable());
        assert!(!TypeRef::global("").is_resolvable());
        assert!(!TypeRef::new("Unity..Engine", "Rigidbody").is_resolvable());
        assert!(!TypeRef::global("Pool")
            .with_type_argument(TypeRef::global("int[]"))
            .is_resolvable());
    }

    #[test]
    fn deserialize_minimal() {
        let t: TypeRef = serde_json::from_str(r#"{"name":"Rigidbody"}"#).unwrap();
        assert_eq!(t, TypeRef::global("Rigidbody"));
    }
}
