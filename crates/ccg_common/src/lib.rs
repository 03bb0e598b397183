//! Shared foundational types used across the component cache generator.
//!
//! This crate provides the search-scope flag set, content hashing for generated
//! units, and the identifier rules shared by extraction, planning, and rendering.

#![warn(missing_docs)]

pub mod hash;
pub mod names;
pub mod scope;

pub use hash::ContentHash;
pub use names::{derive_property_name, file_safe_name, is_identifier, is_keyword, simple_name};
pub use scope::{ParseScopeError, SearchScope};
