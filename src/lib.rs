//! `npl-derivs` library crate.
//!
//! Scaled derivatives of the Planck occupation number,
//! `x^k d^k nPl / dx^k` with `nPl(x) = 1/(e^x - 1)`, evaluated stably from
//! `x ~ 1e-4` up to the exponential tail.
//!
//! The binary (`npl`) is a thin wrapper around this library so that:
//!
//! - the numerical core is testable without spawning processes
//! - grid evaluation and exports are reusable from other tools

pub mod app;
pub mod cli;
pub mod derivs;
pub mod domain;
pub mod error;
pub mod grid;
pub mod io;
pub mod math;
pub mod report;
pub mod spectra;

pub use derivs::{dk_npl_dks, dk_npl_sequence, npl, xk_dk_npl};
pub use math::{binomial_coeff, one_minus_exp_mx, one_minus_exp_mx_with, pfunc};
