//! Source locations of annotated declarations and the source text behind them.
//!
//! The host resolves each declaration's identifier token to a [`Location`]
//! before handing it to the generator. The [`SourceDb`] is optional: when the
//! host can read the declaring file, diagnostics render the offending line.

#![warn(missing_docs)]

pub mod location;
pub mod source_db;
pub mod source_file;

pub use location::Location;
pub use source_db::SourceDb;
pub use source_file::SourceFile;
