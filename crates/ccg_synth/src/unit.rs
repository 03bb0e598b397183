//! The product of one generation pass.

use ccg_common::ContentHash;
use serde::Serialize;

/// Generated companion source for one declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedUnit {
    /// File name the host registers the source under.
    pub hint_name: String,
    /// The complete source text.
    pub text: String,
    /// XXH3-128 of `text`.
    pub content_hash: ContentHash,
}

impl GeneratedUnit {
    /// Creates a unit, hashing its text.
    pub fn new(hint_name: String, text: String) -> Self {
        let content_hash = ContentHash::of_text(&text);
        Self {
            hint_name,
            text,
            content_hash,
        }
    }
}
