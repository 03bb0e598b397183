//! Annotated type declarations handed over by the host.

use crate::attribute::RawAttribute;
use ccg_common::{is_identifier, simple_name};
use ccg_source::Location;
use serde::{Deserialize, Serialize};

/// A member declared directly on the annotated type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSignature {
    /// Member name.
    pub name: String,
    /// Parameter count for methods; 0 for fields and properties.
    #[serde(default)]
    pub arity: usize,
}

/// A declaration whose own name cannot be emitted as C#.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// The type name is not an identifier.
    #[error("'{name}' is not a valid type name")]
    InvalidName {
        /// The rejected name.
        name: String,
    },

    /// A namespace segment is not an identifier.
    #[error("namespace '{namespace}' has invalid segment '{segment}'")]
    InvalidNamespace {
        /// The full namespace.
        namespace: String,
        /// The first offending segment.
        segment: String,
    },

    /// A generic type parameter is not an identifier.
    #[error("'{name}' is not a valid type parameter name")]
    InvalidTypeParameter {
        /// The rejected parameter.
        name: String,
    },
}

/// One type declaration carrying at least one cache attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedDeclaration {
    /// Simple name of the type.
    pub name: String,
    /// Dotted namespace, `None` for the global namespace.
    #[serde(default)]
    pub namespace: Option<String>,
    /// Generic type parameter names.
    #[serde(default)]
    pub type_parameters: Vec<String>,
    /// Whether every part of the declaration carries `partial`.
    #[serde(default)]
    pub is_partial: bool,
    /// Base types, innermost first, not including the type itself.
    #[serde(default)]
    pub ancestry: Vec<String>,
    /// Members declared by the user.
    #[serde(default)]
    pub members: Vec<MemberSignature>,
    /// Cache attributes in source order.
    #[serde(default)]
    pub attributes: Vec<RawAttribute>,
    /// Location of the type's identifier token.
    #[serde(default)]
    pub location: Location,
}

impl AnnotatedDeclaration {
    /// A non-partial declaration with nothing else set.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: None,
            type_parameters: Vec::new(),
            is_partial: false,
            ancestry: Vec::new(),
            members: Vec::new(),
            attributes: Vec::new(),
            location: Location::unknown(),
        }
    }

    /// Places the declaration in a namespace.
    pub fn in_namespace(mut self, namespace: &str) -> Self {
        self.namespace = Some(namespace.to_string());
        self
    }

    /// Marks the declaration partial.
    pub fn partial(mut self) -> Self {
        self.is_partial = true;
        self
    }

    /// Appends a base type to the ancestry chain.
    pub fn inherits(mut self, base: &str) -> Self {
        self.ancestry.push(base.to_string());
        self
    }

    /// Adds a generic type parameter.
    pub fn with_type_parameter(mut self, name: &str) -> Self {
        self.type_parameters.push(name.to_string());
        self
    }

    /// Adds a user-declared member.
    pub fn with_member(mut self, name: &str, arity: usize) -> Self {
        self.members.push(MemberSignature {
            name: name.to_string(),
            arity,
        });
        self
    }

    /// Appends a cache attribute.
    pub fn with_attribute(mut self, attribute: RawAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Sets the identifier location.
    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// `Name` or `Name<T, U>`.
    pub fn display_name(&self) -> String {
        if self.type_parameters.is_empty() {
            self.name.clone()
        } else {
            format!("{}<{}>", self.name, self.type_parameters.join(", "))
        }
    }

    /// `Namespace.Name<T, U>`, without the namespace for global types.
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) if !ns.is_empty() => format!("{ns}.{}", self.display_name()),
            _ => self.display_name(),
        }
    }

    /// Checks that the name, every namespace segment and every type parameter
    /// are C# identifiers.
    ///
    /// Generated text and file names are built from these, so nothing
    /// downstream may see a declaration that fails here.
    pub fn check_identity(&self) -> Result<(), IdentityError> {
        if !is_identifier(&self.name) {
            return Err(IdentityError::InvalidName {
                name: self.name.clone(),
            });
        }
        if let Some(ns) = self.namespace.as_deref().filter(|ns| !ns.is_empty()) {
            if let Some(segment) = ns.split('.').find(|seg| !is_identifier(seg)) {
                return Err(IdentityError::InvalidNamespace {
                    namespace: ns.to_string(),
                    segment: segment.to_string(),
                });
            }
        }
        if let Some(param) = self.type_parameters.iter().find(|p| !is_identifier(p)) {
            return Err(IdentityError::InvalidTypeParameter {
                name: param.clone(),
            });
        }
        Ok(())
    }

    /// Returns `true` if the user declared a member with this name and arity.
    pub fn declares_member(&self, name: &str, arity: usize) -> bool {
        self.members
            .iter()
            .any(|m| m.name == name && m.arity == arity)
    }

    /// Returns `true` if the user declared any member with this name.
    pub fn declares_member_named(&self, name: &str) -> bool {
        self.members.iter().any(|m| m.name == name)
    }

    /// Returns `true` if some ancestor has the given simple name.
    pub fn derives_from(&self, base: &str) -> bool {
        self.ancestry.iter().any(|a| simple_name(a) == base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_names() {
        let plain = AnnotatedDeclaration::new("Sandbox");
        assert_eq!(plain.qualified_name(), "Sandbox");

        let generic = AnnotatedDeclaration::new("Pool")
            .in_namespace("Game.Pools")
            .with_type_parameter("T")
            .with_type_parameter("U");
        assert_eq!(generic.display_name(), "Pool<T, U>");
        assert_eq!(generic.qualified_name(), "Game.Pools.Pool<T, U>");
    }

    #[test]
    fn identity_accepts_ordinary_declarations() {
        let decl = AnnotatedDeclaration::new("Pool")
            .in_namespace("Game.Pools")
            .with_type_parameter("TItem");
        assert_eq!(decl.check_identity(), Ok(()));
        assert_eq!(AnnotatedDeclaration::new("@class").check_identity(), Ok(()));
        assert_eq!(
            AnnotatedDeclaration::new("Sandbox").in_namespace("").check_identity(),
            Ok(())
        );
    }

    #[test]
    fn identity_rejects_path_like_name() {
        assert_eq!(
            AnnotatedDeclaration::new("../../escape").check_identity(),
            Err(IdentityError::InvalidName {
                name: "../../escape".to_string()
            })
        );
    }

    #[test]
    fn identity_rejects_bad_namespace_segment() {
        let decl = AnnotatedDeclaration::new("Sandbox")
            .in_namespace("Game { class Evil {} } namespace X");
        let err = decl.check_identity().unwrap_err();
        assert_eq!(
            err,
            IdentityError::InvalidNamespace {
                namespace: "Game { class Evil {} } namespace X".to_string(),
                segment: "Game { class Evil {} } namespace X".to_string(),
            }
        );

        let decl = AnnotatedDeclaration::new("Sandbox").in_namespace("Game..Core");
        assert!(matches!(
            decl.check_identity(),
            Err(IdentityError::InvalidNamespace { segment, .. }) if segment.is_empty()
        ));
    }

    #[test]
    fn identity_rejects_bad_type_parameter() {
        let decl = AnnotatedDeclaration::new("Pool").with_type_parameter("T>");
        assert_eq!(
            decl.check_identity(),
            Err(IdentityError::InvalidTypeParameter {
                name: "T>".to_string()
            })
        );
    }

    #[test]
    fn member_lookup_respects_arity() {
        let decl = AnnotatedDeclaration::new("Sandbox").with_member("Awake", 1);
        assert!(!decl.declares_member("Awake", 0));
        assert!(decl.declares_member("Awake", 1));
        assert!(decl.declares_member_named("Awake"));
    }

    #[test]
    fn ancestry_uses_simple_names() {
        let decl = AnnotatedDeclaration::new("Sandbox")
            .inherits("Game.BaseBehaviour<int>")
            .inherits("global::UnityEngine.MonoBehaviour");
        assert!(decl.derives_from("MonoBehaviour"));
        assert!(decl.derives_from("BaseBehaviour"));
        assert!(!decl.derives_from("Behaviour"));
    }

    #[test]
    fn deserialize_with_defaults() {
        let json = r#"{
            "name": "Sandbox",
            "is_partial": true,
            "ancestry": ["MonoBehaviour"],
            "location": {"file": "Assets/Sandbox.cs", "line": 6, "column": 22, "length": 7}
        }"#;
        let decl: AnnotatedDeclaration = serde_json::from_str(json).unwrap();
        assert_eq!(decl.name, "Sandbox");
        assert!(decl.namespace.is_none());
        assert!(decl.attributes.is_empty());
        assert_eq!(decl.location.line, 6);
    }
}
