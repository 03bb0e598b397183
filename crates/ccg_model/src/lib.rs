//! Host-facing data model and attribute extraction.
//!
//! The host hands the generator one [`AnnotatedDeclaration`] per annotated
//! type. Its [`RawAttribute`]s are the attribute occurrences exactly as the
//! host bound them; [`extract`] normalizes each one into a
//! [`CacheDescriptor`] with defaults applied, so later stages never look at
//! raw argument lists.

#![warn(missing_docs)]

pub mod attribute;
pub mod declaration;
pub mod descriptor;
pub mod extract;
pub mod type_ref;

pub use attribute::{AttributeValue, RawAttribute};
pub use declaration::{AnnotatedDeclaration, IdentityError, MemberSignature};
pub use descriptor::CacheDescriptor;
pub use extract::{extract, extract_all, ExtractError};
pub use type_ref::TypeRef;
