//! Stable diagnostic identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable diagnostic identifier, displayed as `CCG` plus a zero-padded
/// 3-digit number (`CCG001`).
///
/// Numbers are never reused once published, so hosts can key suppression
/// settings on them.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The numeric part of the identifier.
    pub number: u16,
}

impl DiagnosticCode {
    /// The prefix shared by every generator diagnostic.
    pub const PREFIX: &'static str = "CCG";

    /// The annotated type is not declared `partial`.
    pub const MUST_BE_PARTIAL: DiagnosticCode = DiagnosticCode::new(1);

    /// The annotated type does not derive from the behaviour base class.
    pub const MUST_INHERIT_BEHAVIOUR: DiagnosticCode = DiagnosticCode::new(2);

    /// Two cache properties, or a cache property and a declared member, share a name.
    pub const DUPLICATE_PROPERTY: DiagnosticCode = DiagnosticCode::new(3);

    /// Creates a code from its number.
    pub const fn new(number: u16) -> Self {
        Self { number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", Self::PREFIX, self.number)
    }
}
