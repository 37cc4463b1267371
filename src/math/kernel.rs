//! Kernel polynomial of the Planck derivatives.
//!
//! Writing `nPl(x) = Σ_{n≥1} e^{-nx}` and differentiating term by term gives
//!
//! ```text
//! d^k nPl / dx^k = (-1)^k Σ_{n≥1} n^k e^{-nx}
//!                = (-1)^k e^{-x} A_k(e^{-x}) / (1 - e^{-x})^{k+1}
//! ```
//!
//! where `A_k(t) = Σ_{m=0}^{k-1} A(k, m) t^m` is the Eulerian polynomial.
//! `A_k` has positive coefficients and is evaluated at `t = e^{-x} ∈ (0, 1]`,
//! so the sum never cancels, for any `x > 0`. The coefficients come from the
//! triangle recurrence, which is also all-positive, so high orders keep full
//! precision.

use super::combinatorics::eulerian_row;

/// `A_k(e^{-x})`, with `A_0 = 1`.
pub fn pfunc(k: usize, x: f64) -> f64 {
    pfunc_with_exp(k, (-x).exp())
}

/// [`pfunc`] with a precomputed `exp_mx = e^{-x}`.
pub fn pfunc_with_exp(k: usize, exp_mx: f64) -> f64 {
    if k == 0 {
        return 1.0;
    }
    horner(&eulerian_row(k), exp_mx)
}

/// Horner evaluation of a coefficient row `[c_0, c_1, …]` at `t`.
#[inline]
pub(crate) fn horner(coeffs: &[f64], t: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}
