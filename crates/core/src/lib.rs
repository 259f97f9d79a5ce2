//! Node thermal summary aggregation.
//!
//! Pure domain logic: dimensions, normalized scores, per-dimension profiles
//! and the node-level aggregate with its tabular and JSON projections.

pub mod error;
pub mod summaries;
pub mod thermal;
pub mod types;
