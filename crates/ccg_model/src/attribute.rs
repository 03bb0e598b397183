//! Raw attribute occurrences as bound by the host.

use crate::type_ref::TypeRef;
use ccg_common::SearchScope;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A bound attribute argument constant.
///
/// Serialized adjacently tagged: `{"kind": "int", "value": 2}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    /// A `typeof(T)` argument.
    Type(TypeRef),
    /// A string literal.
    String(String),
    /// A boolean literal.
    Bool(bool),
    /// An integer or enum constant.
    Int(i64),
    /// The `null` literal.
    Null,
    /// A constant the host could not bind, with its reason.
    Error(String),
}

impl AttributeValue {
    /// Short description used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            AttributeValue::Type(_) => "a type",
            AttributeValue::String(_) => "a string",
            AttributeValue::Bool(_) => "a bool",
            AttributeValue::Int(_) => "an integer",
            AttributeValue::Null => "null",
            AttributeValue::Error(_) => "an unbound constant",
        }
    }
}

/// One `GenerateComponentCache` occurrence on a declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAttribute {
    /// Constructor arguments in source order.
    #[serde(default)]
    pub positional: Vec<AttributeValue>,
    /// Named arguments keyed by property name.
    #[serde(default)]
    pub named: BTreeMap<String, AttributeValue>,
}

impl RawAttribute {
    /// An occurrence whose only argument is the dependency type.
    pub fn of_type(dependency: TypeRef) -> Self {
        Self {
            positional: vec![AttributeValue::Type(dependency)],
            named: BTreeMap::new(),
        }
    }

    /// Appends a positional argument.
    pub fn with_positional(mut self, value: AttributeValue) -> Self {
        self.positional.push(value);
        self
    }

    /// Sets a named argument.
    pub fn with_named(mut self, name: &str, value: AttributeValue) -> Self {
        self.named.insert(name.to_string(), value);
        self
    }

    /// Sets `PropertyName`.
    pub fn with_property_name(self, name: &str) -> Self {
        self.with_named("PropertyName", AttributeValue::String(name.to_string()))
    }

    /// Sets `SearchScope` from a flag set.
    pub fn with_scope(self, scope: SearchScope) -> Self {
        self.with_named("SearchScope", AttributeValue::Int(i64::from(scope.bits())))
    }

    /// Sets `IsRequired`.
    pub fn with_required(self, required: bool) -> Self {
        self.with_named("IsRequired", AttributeValue::Bool(required))
    }
}
