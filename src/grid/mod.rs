//! Grid evaluation.
//!
//! Responsibilities:
//!
//! - generate log / linear `x` grids
//! - evaluate the derivative sequence at each grid point (parallel)
//! - audit the sequence path against the single-order path

pub mod evaluate;
pub mod spacing;

pub use evaluate::*;
pub use spacing::*;
