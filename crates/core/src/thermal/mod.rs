//! Thermal (resource-pressure) primitives.
//!
//! Dimensions, normalized scores, and the per-node vector of mean scores.
//! All logic in this module is pure (no I/O).

pub mod dimension;
pub mod normalized;
pub mod vector;

pub use dimension::ThermalDimension;
pub use normalized::NormalizedValue;
pub use vector::ThermalVector;
