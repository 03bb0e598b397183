//! The set of object-graph regions searched for a cached dependency.

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags::bitflags! {
    /// Object-graph regions searched for a dependency.
    ///
    /// Bit values match the `ComponentSearchScope` enum of the runtime package,
    /// so hosts can pass the attribute's integral constant through unchanged.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct SearchScope: u32 {
        /// The annotated object itself.
        const SELF = 1;
        /// Descendants of the annotated object.
        const CHILDREN = 2;
        /// Ancestors of the annotated object.
        const PARENT = 4;
    }
}

/// Error returned when a scope name is not one of `self`, `children`, `parent`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search scope '{0}' (expected self, children, or parent)")]
pub struct ParseScopeError(pub String);

impl SearchScope {
    /// Parses a single lower-case scope name.
    pub fn parse_name(name: &str) -> Result<Self, ParseScopeError> {
        match name {
            "self" => Ok(Self::SELF),
            "children" => Ok(Self::CHILDREN),
            "parent" => Ok(Self::PARENT),
            other => Err(ParseScopeError(other.to_string())),
        }
    }

    /// Converts a raw integral constant, rejecting unknown bits.
    pub fn from_raw(raw: i64) -> Option<Self> {
        let bits = u32::try_from(raw).ok()?;
        Self::from_bits(bits)
    }

    /// Lower-case names of the set flags in Self, Children, Parent order.
    pub fn names(self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.contains(Self::SELF) {
            out.push("self");
        }
        if self.contains(Self::CHILDREN) {
            out.push("children");
        }
        if self.contains(Self::PARENT) {
            out.push("parent");
        }
        out
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.names();
        if names.is_empty() {
            return f.write_str("none");
        }
        f.write_str(&names.join(" | "))
    }
}

impl Serialize for SearchScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let names = self.names();
        let mut seq = serializer.serialize_seq(Some(names.len()))?;
        for name in names {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

/// Accepts either a list of names (`["self", "parent"]`) or a single name.
impl<'de> Deserialize<'de> for SearchScope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScopeVisitor;

        impl<'de> Visitor<'de> for ScopeVisitor {
            type Value = SearchScope;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a scope name or a list of scope names")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                SearchScope::parse_name(v).map_err(E::custom)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut scope = SearchScope::empty();
                while let Some(name) = seq.next_element::<String>()? {
                    scope |= SearchScope::parse_name(&name).map_err(de::Error::custom)?;
                }
                Ok(scope)
            }
        }

        deserializer.deserialize_any(ScopeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_bits_match_runtime_enum() {
        assert_eq!(SearchScope::from_raw(1), Some(SearchScope::SELF));
        assert_eq!(
            SearchScope::from_raw(6),
            Some(SearchScope::CHILDREN | SearchScope::PARENT)
        );
        assert_eq!(SearchScope::from_raw(7), Some(SearchScope::all()));
    }

    #[test]
    fn unknown_bits_rejected() {
        assert_eq!(SearchScope::from_raw(8), None);
        assert_eq!(SearchScope::from_raw(-1), None);
        assert_eq!(SearchScope::from_raw(i64::MAX), None);
    }

    #[test]
    fn names_follow_fixed_order() {
        let scope = SearchScope::PARENT | SearchScope::SELF;
        assert_eq!(scope.names(), vec!["self", "parent"]);
        assert_eq!(scope.to_string(), "self | parent");
        assert_eq!(SearchScope::empty().to_string(), "none");
    }

    #[test]
    fn deserialize_list_and_single() {
        let scope: SearchScope = serde_json::from_str(r#"["parent", "children"]"#).unwrap();
        assert_eq!(scope, SearchScope::CHILDREN | SearchScope::PARENT);
        let scope: SearchScope = serde_json::from_str(r#""self""#).unwrap();
        assert_eq!(scope, SearchScope::SELF);
    }

    #[test]
    fn deserialize_unknown_name_fails() {
        let err = serde_json::from_str::<SearchScope>(r#"["siblings"]"#).unwrap_err();
        assert!(err.to_string().contains("siblings"));
    }

    #[test]
    fn parse_single_names() {
        assert_eq!(SearchScope::parse_name("children"), Ok(SearchScope::CHILDREN));
        let err = SearchScope::parse_name("Self").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown search scope 'Self' (expected self, children, or parent)"
        );
    }

    #[test]
    fn serialize_as_names() {
        let json = serde_json::to_string(&(SearchScope::SELF | SearchScope::CHILDREN)).unwrap();
        assert_eq!(json, r#"["self","children"]"#);
    }
}
