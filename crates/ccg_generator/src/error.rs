//! Errors for input that violates the host contract.

use ccg_model::{ExtractError, IdentityError};

/// A declaration the host handed over in a form no unit can be built from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// The declaration's own name, namespace or type parameters are malformed.
    #[error("invalid declaration '{declaration}': {source}")]
    Declaration {
        /// Qualified name of the declaration, as given.
        declaration: String,
        /// Which part of the name was rejected.
        source: IdentityError,
    },


    /// An attribute occurrence is malformed.
    #[error("invalid attribute input on '{declaration}': {source}")]
    Input {
        /// Qualified name of the declaration.
        declaration: String,
        /// What was wrong with the attribute.
        source: ExtractError,
    },
}
