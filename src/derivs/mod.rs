//! Scaled Planck derivatives `x^k d^k nPl / dx^k`.
//!
//! - [`xk_dk_npl`]: one order at a time
//! - [`dk_npl_dks`]: every order up to `kmax`, sharing work between orders

pub mod sequence;
pub mod single;

pub use sequence::*;
pub use single::{npl, xk_dk_npl};
