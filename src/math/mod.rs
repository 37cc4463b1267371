//! Numerical primitives: stable `1 - e^{-x}`, combinatorics, and the kernel polynomial.

pub mod combinatorics;
pub mod expm;
pub mod kernel;

pub use combinatorics::*;
pub use expm::*;
pub use kernel::{pfunc, pfunc_with_exp};
