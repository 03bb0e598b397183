//! Normalization of raw attribute occurrences into [`CacheDescriptor`]s.

use crate::attribute::{AttributeValue, RawAttribute};
use crate::declaration::AnnotatedDeclaration;
use crate::descriptor::CacheDescriptor;
use crate::type_ref::TypeRef;
use ccg_common::{is_identifier, SearchScope};
use ccg_config::AttributeDefaults;

const PROPERTY_NAME: &str = "PropertyName";
const SEARCH_SCOPE: &str = "SearchScope";
const IS_REQUIRED: &str = "IsRequired";

/// An attribute occurrence that violates the input contract.
///
/// `position` is the 1-based index of the occurrence on its declaration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// No `typeof(T)` argument was supplied.
    #[error("attribute #{position}: missing dependency type argument")]
    MissingTargetType {
        /// Occurrence index.
        position: usize,
    },

    /// The first argument is not a type.
    #[error("attribute #{position}: dependency argument is {found}, expected a type")]
    TargetNotAType {
        /// Occurrence index.
        position: usize,
        /// Kind of value supplied instead.
        found: &'static str,
    },

    /// The host could not bind the dependency type.
    #[error("attribute #{position}: dependency type could not be resolved: {reason}")]
    UnresolvedTargetType {
        /// Occurrence index.
        position: usize,
        /// Host-supplied or local reason.
        reason: String,
    },

    /// More constructor arguments than `(type, name)`.
    #[error("attribute #{position}: {count} positional arguments given, at most 2 accepted")]
    TooManyArguments {
        /// Occurrence index.
        position: usize,
        /// Number supplied.
        count: usize,
    },

    /// A named argument this generator does not know.
    #[error("attribute #{position}: unknown named argument `{name}`")]
    UnknownArgument {
        /// Occurrence index.
        position: usize,
        /// The argument name.
        name: String,
    },

    /// An argument of the wrong kind.
    #[error("attribute #{position}: `{argument}` is {found}, expected {expected}")]
    ArgumentKind {
        /// Occurrence index.
        position: usize,
        /// The argument name.
        argument: &'static str,
        /// What was expected.
        expected: &'static str,
        /// What was supplied.
        found: &'static str,
    },

    /// The property name was given twice with different values.
    #[error(
        "attribute #{position}: property name given as '{positional}' and as `PropertyName = \"{named}\"`"
    )]
    ConflictingPropertyName {
        /// Occurrence index.
        position: usize,
        /// The constructor argument.
        positional: String,
        /// The named argument.
        named: String,
    },

    /// The property name cannot be a C# identifier.
    #[error("attribute #{position}: '{name}' is not a valid property name")]
    InvalidPropertyName {
        /// Occurrence index.
        position: usize,
        /// The rejected name.
        name: String,
    },

    /// The scope constant carries bits outside Self, Children, Parent.
    #[error("attribute #{position}: search scope {bits} is not a combination of Self, Children and Parent")]
    InvalidSearchScope {
        /// Occurrence index.
        position: usize,
        /// The raw constant.
        bits: i64,
    },

    /// The scope constant has no bits set.
    #[error("attribute #{position}: search scope must include at least one of Self, Children or Parent")]
    EmptySearchScope {
        /// Occurrence index.
        position: usize,
    },
}

/// Extracts one occurrence. `position` is its 1-based index on the declaration.
pub fn extract(
    position: usize,
    raw: &RawAttribute,
    defaults: &AttributeDefaults,
) -> Result<CacheDescriptor, ExtractError> {
    if raw.positional.len() > 2 {
        return Err(ExtractError::TooManyArguments {
            position,
            count: raw.positional.len(),
        });
    }

    let dependency = extract_dependency(position, raw.positional.first())?;

    let positional_name = match raw.positional.get(1) {
        Some(value) => optional_string(position, "propertyName", value)?,
        None => None,
    };

    let mut named_name = None;
    let mut scope = defaults.search_scope;
    let mut required = defaults.required;
    for (name, value) in &raw.named {
        match name.as_str() {
            PROPERTY_NAME => named_name = optional_string(position, PROPERTY_NAME, value)?,
            SEARCH_SCOPE => scope = extract_scope(position, value)?,
            IS_REQUIRED => match value {
                AttributeValue::Bool(b) => required = *b,
                other => {
                    return Err(ExtractError::ArgumentKind {
                        position,
                        argument: IS_REQUIRED,
                        expected: "a bool",
                        found: other.kind_name(),
                    })
                }
            },
            _ => {
                return Err(ExtractError::UnknownArgument {
                    position,
                    name: name.clone(),
                })
            }
        }
    }

    let property_name = match (positional_name, named_name) {
        (Some(positional), Some(named)) if positional != named => {
            return Err(ExtractError::ConflictingPropertyName {
                position,
                positional,
                named,
            })
        }
        (positional, named) => positional.or(named),
    };
    if let Some(name) = &property_name {
        if !is_identifier(name) {
            return Err(ExtractError::InvalidPropertyName {
                position,
                name: name.clone(),
            });
        }
    }

    tracing::trace!(
        position,
        dependency = %dependency,
        scope = %scope,
        required,
        "extracted cache attribute"
    );

    Ok(CacheDescriptor {
        dependency,
        property_name,
        scope,
        required,
    })
}

/// Extracts every occurrence on `decl` in order, stopping at the first error.
pub fn extract_all(
    decl: &AnnotatedDeclaration,
    defaults: &AttributeDefaults,
) -> Result<Vec<CacheDescriptor>, ExtractError> {
    decl.attributes
        .iter()
        .enumerate()
        .map(|(i, raw)| extract(i + 1, raw, defaults))
        .collect()
}

fn extract_dependency(
    position: usize,
    value: Option<&AttributeValue>,
) -> Result<TypeRef, ExtractError> {
    match value {
        None | Some(AttributeValue::Null) => Err(ExtractError::MissingTargetType { position }),
        Some(AttributeValue::Type(t)) if t.is_resolvable() => Ok(t.clone()),
        Some(AttributeValue::Type(t)) => Err(ExtractError::UnresolvedTargetType {
            position,
            reason: format!("'{}' is not a valid type name", t.fully_qualified()),
        }),
        Some(AttributeValue::Error(reason)) => Err(ExtractError::UnresolvedTargetType {
            position,
            reason: reason.clone(),
        }),
        Some(other) => Err(ExtractError::TargetNotAType {
            position,
            found: other.kind_name(),
        }),
    }
}

/// A `null` property name means "derive it".
fn optional_string(
    position: usize,
    argument: &'static str,
    value: &AttributeValue,
) -> Result<Option<String>, ExtractError> {
    match value {
        AttributeValue::String(s) => Ok(Some(s.clone())),
        AttributeValue::Null => Ok(None),
        other => Err(ExtractError::ArgumentKind {
            position,
            argument,
            expected: "a string",
            found: other.kind_name(),
        }),
    }
}

fn extract_scope(position: usize, value: &AttributeValue) -> Result<SearchScope, ExtractError> {
    let bits = match value {
        AttributeValue::Int(bits) => *bits,
        other => {
            return Err(ExtractError::ArgumentKind {
                position,
                argument: SEARCH_SCOPE,
                expected: "an integer",
                found: other.kind_name(),
            })
        }
    };
    let scope =
        SearchScope::from_raw(bits).ok_or(ExtractError::InvalidSearchScope { position, bits })?;
    if scope.is_empty() {
        return Err(ExtractError::EmptySearchScope { position });
    }
    Ok(scope)
}
