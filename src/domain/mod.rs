//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - grid and output configuration (`GridConfig`, `GridSpacing`, `TableOutput`)
//! - evaluated tables (`DerivativeRow`, `DerivativeTable`, `TableFile`)
//! - spectral shape selectors (`ShapeKind`) and audit results (`ConsistencyReport`)

pub mod types;

pub use types::*;
