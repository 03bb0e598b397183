//! C# companion source rendering.
//!
//! [`render`] turns an [`EmissionPlan`](ccg_plan::EmissionPlan) into a
//! [`GeneratedUnit`]: a partial class declaring the cached properties, the
//! method that fills them, and, when the user has not written one, the
//! lifecycle hook that calls it.

#![warn(missing_docs)]

mod render;
mod unit;
mod writer;

pub use render::{hint_name, render};
pub use unit::GeneratedUnit;
pub use writer::SourceWriter;
