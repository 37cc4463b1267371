//! `x^k d^k nPl / dx^k` at a single order.
//!
//! With `t = e^{-x}` and `d = 1 - t`:
//!
//! ```text
//! x^k d^k nPl / dx^k = (-x/d)^k · (t/d) · A_k(t)
//! ```
//!
//! `t/d` is `nPl` itself, and `A_k` is [`pfunc`](crate::math::pfunc).

use crate::math::{one_minus_exp_mx_with, pfunc_with_exp};

/// `nPl(x) = 1 / (e^x - 1)`, evaluated as `e^{-x} / (1 - e^{-x})`.
#[inline]
pub fn npl(x: f64) -> f64 {
    let exp_mx = (-x).exp();
    exp_mx / one_minus_exp_mx_with(x, exp_mx)
}

/// `x^k · d^k nPl(x) / dx^k` for `x ≥ 0`.
///
/// The term has a pole at `x = 0`; there the signed limit `(-1)^k ∞` is
/// returned instead of `NaN`.
pub fn xk_dk_npl(k: usize, x: f64) -> f64 {
    debug_assert!(x >= 0.0, "xk_dk_npl requires x >= 0, got {x}");
    if x == 0.0 {
        return pole(k);
    }

    let exp_mx = (-x).exp();
    let d = one_minus_exp_mx_with(x, exp_mx);
    let occupation = exp_mx / d;
    if k == 0 {
        return occupation;
    }

    // Fold the prefactor into `occupation` one power at a time: `x^k` alone
    // overflows long before `x^k e^{-x}` does.
    let ratio = -x / d;
    let mut prefactor = occupation;
    for _ in 0..k {
        prefactor *= ratio;
    }
    prefactor * pfunc_with_exp(k, exp_mx)
}

/// Signed infinity approached by order `k` as `x -> 0+`.
#[inline]
pub(crate) fn pole(k: usize) -> f64 {
    if k % 2 == 0 {
        f64::INFINITY
    } else {
        f64::NEG_INFINITY
    }
}
