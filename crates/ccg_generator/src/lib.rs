//! Per-declaration generation pipeline.
//!
//! For each annotated declaration the [`Generator`] validates structure,
//! extracts every attribute, plans the emission, and renders the companion
//! source. Validation failures and name collisions surface as diagnostics;
//! malformed attribute input surfaces as a [`GenerateError`]. Either way the
//! declaration produces no unit and the rest of a batch is unaffected.

#![warn(missing_docs)]

mod error;
mod generator;
mod output;

pub use error::GenerateError;
pub use generator::Generator;
pub use output::DeclarationOutput;
