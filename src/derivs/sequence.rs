//! All orders `0..=kmax` of `x^k d^k nPl / dx^k` in a single forward pass.
//!
//! Shared across orders:
//! - `t = e^{-x}` and `d = 1 - t` (one exponential per point)
//! - the prefactor `(-x/d)^k`, carried as a running product
//! - the Eulerian coefficient row, advanced in place with
//!   `A(k, m) = (m+1) A(k-1, m) + (k-m) A(k-1, m-1)`
//!
//! Every update only reads lower orders, so the pass never restarts and
//! produces the same values as [`xk_dk_npl`](super::xk_dk_npl) order by order.

use crate::math::combinatorics::advance_eulerian_row;
use crate::math::kernel::horner;
use crate::math::one_minus_exp_mx_with;

use super::single::pole;

/// Fill `results` with `x^i d^i nPl / dx^i` for `i = 0..=kmax`.
///
/// Existing contents are discarded; afterwards `results.len() == kmax + 1`.
pub fn dk_npl_dks(kmax: usize, x: f64, results: &mut Vec<f64>) {
    debug_assert!(x >= 0.0, "dk_npl_dks requires x >= 0, got {x}");
    results.clear();
    results.reserve(kmax + 1);

    if x == 0.0 {
        results.extend((0..=kmax).map(pole));
        return;
    }

    let exp_mx = (-x).exp();
    let d = one_minus_exp_mx_with(x, exp_mx);
    let occupation = exp_mx / d;
    let ratio = -x / d;

    results.push(occupation);
    if kmax == 0 {
        return;
    }

    // Row k holds A(k, 0..k); starts at k = 1.
    let mut row: Vec<f64> = Vec::with_capacity(kmax);
    row.push(1.0);
    let mut prefactor = ratio * occupation;
    results.push(prefactor * horner(&row, exp_mx));

    for k in 2..=kmax {
        advance_eulerian_row(&mut row, k);
        prefactor *= ratio;
        results.push(prefactor * horner(&row, exp_mx));
    }
}

/// Allocating form of [`dk_npl_dks`].
pub fn dk_npl_sequence(kmax: usize, x: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(kmax + 1);
    dk_npl_dks(kmax, x, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivs::xk_dk_npl;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn scenario_order_three_at_unity() {
        let mut results = Vec::new();
        dk_npl_dks(3, 1.0, &mut results);
        assert_eq!(results.len(), 4);
        assert_relative_eq!(results[0], 1.0 / (std::f64::consts::E - 1.0), max_relative = 1e-14);
        assert!((results[0] - 0.581_977).abs() < 1e-6);
    }

    #[test]
    fn matches_single_order_path() {
        for &x in &[1e-4, 1e-3, 0.05, 0.1, 0.5, 1.0, 2.5, 10.0, 30.0, 75.0] {
            for kmax in 0..=12usize {
                let seq = dk_npl_sequence(kmax, x);
                assert_eq!(seq.len(), kmax + 1);
                for (k, &v) in seq.iter().enumerate() {
                    assert_relative_eq!(v, xk_dk_npl(k, x), max_relative = 1e-12);
                }
            }
        }
    }

    #[test]
    fn matches_single_order_path_on_random_points() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut buf = Vec::new();
        for _ in 0..500 {
            let x = 10f64.powf(rng.gen_range(-4.0..1.7));
            let kmax = rng.gen_range(0..=15usize);
            dk_npl_dks(kmax, x, &mut buf);
            for (k, &v) in buf.iter().enumerate() {
                assert_relative_eq!(v, xk_dk_npl(k, x), max_relative = 1e-11);
            }
        }
    }

    #[test]
    fn matches_single_order_path_at_high_orders() {
        for &x in &[1e-4, 1e-2, 0.5, 1.0, 5.0, 20.0, 50.0] {
            let seq = dk_npl_sequence(40, x);
            for (k, &v) in seq.iter().enumerate() {
                assert!(v.is_finite(), "k={k} x={x}");
                assert_relative_eq!(v, xk_dk_npl(k, x), max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn deep_tail_stays_finite_on_both_paths() {
        // x^k e^{-x} is representable here even though x^k alone is not.
        let x = 200.0;
        let seq = dk_npl_sequence(140, x);
        let single = xk_dk_npl(140, x);
        assert!(seq[140].is_finite() && single.is_finite());
        assert_relative_eq!(single, seq[140], max_relative = 1e-12);
        assert!(single > 1e235 && single < 1e236);
    }

    #[test]
    fn overwrites_previous_contents() {
        let mut results = vec![42.0; 10];
        dk_npl_dks(2, 3.0, &mut results);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|v| *v != 42.0));

        dk_npl_dks(5, 3.0, &mut results);
        assert_eq!(results.len(), 6);
    }

    #[test]
    fn pole_at_origin() {
        let seq = dk_npl_sequence(3, 0.0);
        assert_eq!(
            seq,
            vec![f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY]
        );
    }
}
