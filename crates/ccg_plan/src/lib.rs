//! Turns extracted cache descriptors into an ordered emission plan.
//!
//! The plan fixes everything the renderer needs: property names, the
//! fallback chain of lookups per property, which properties throw when the
//! lookup fails, and the deduplicated set of types the declaration must
//! require on its object.

#![warn(missing_docs)]

pub mod lookup;
pub mod plan;
pub mod planner;

pub use lookup::{lookup_steps, LookupStep};
pub use plan::{EmissionPlan, PlannedProperty};
pub use planner::EmissionPlanner;
