//! Binomial coefficients and Eulerian numbers as `f64`.
//!
//! Both feed straight into floating-point sums, so they are produced as reals.
//! The multiplicative recurrence keeps every intermediate value an exact
//! integer as long as it stays below `2^53`.
//!
//! Whole Eulerian rows come from the all-positive triangle recurrence
//! ([`eulerian_row`]); [`eulerian_number`] is the closed-form alternating sum,
//! exact only while its terms fit in 53 bits (`n ≲ 16`).

/// `C(n, k)` via `C(n, k) = C(n, k-1) (n-k+1) / k`.
///
/// Zero for `k < 0` or `k > n`. Iterates over `min(k, n-k)` so that
/// `C(n, k)` and `C(n, n-k)` are bit-identical.
pub fn binomial_coeff(n: i32, k: i32) -> f64 {
    if k < 0 || n < 0 || k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut c = 1.0;
    for i in 1..=k {
        c = c * f64::from(n - k + i) / f64::from(i);
    }
    c
}

/// Eulerian number `A(n, m)`: permutations of `n` elements with `m` ascents.
///
/// ```text
/// A(n, m) = Σ_{j=0}^{m} (-1)^j C(n+1, j) (m+1-j)^n
/// ```
///
/// Only the lower half of a row is summed directly; the upper half is mirrored
/// through `A(n, m) = A(n, n-1-m)`, which keeps the alternating terms small.
pub fn eulerian_number(n: usize, m: usize) -> f64 {
    if n == 0 {
        return if m == 0 { 1.0 } else { 0.0 };
    }
    if m >= n {
        return 0.0;
    }
    let m = m.min(n - 1 - m);
    let n_i = n as i32;

    let mut sum = 0.0;
    for j in 0..=m {
        let term = binomial_coeff(n_i + 1, j as i32) * ((m + 1 - j) as f64).powi(n_i);
        if j % 2 == 0 {
            sum += term;
        } else {
            sum -= term;
        }
    }
    sum
}

/// Row `k` of the Eulerian triangle, `[A(k, 0), …, A(k, k-1)]`.
///
/// Row 0 is `[1]` so that `A_0(t) = 1`.
pub fn eulerian_row(k: usize) -> Vec<f64> {
    let mut row = Vec::with_capacity(k.max(1));
    row.push(1.0);
    for n in 2..=k {
        advance_eulerian_row(&mut row, n);
    }
    row
}

/// Turn row `k-1` of the Eulerian triangle into row `k`, in place, with
/// `A(k, m) = (m+1) A(k-1, m) + (k-m) A(k-1, m-1)`.
///
/// Walking `m` downward means `row[m]` and `row[m-1]` still hold row `k-1`
/// when `row[m]` is overwritten.
pub(crate) fn advance_eulerian_row(row: &mut Vec<f64>, k: usize) {
    debug_assert_eq!(row.len(), k - 1);
    row.push(0.0);
    for m in (1..k).rev() {
        row[m] = (m + 1) as f64 * row[m] + (k - m) as f64 * row[m - 1];
    }
    // A(k, 0) = 1 for every k.
    row[0] = 1.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomial_small_values() {
        assert_eq!(binomial_coeff(5, 2), 10.0);
        assert_eq!(binomial_coeff(10, 3), 120.0);
        assert_eq!(binomial_coeff(0, 0), 1.0);
        assert_eq!(binomial_coeff(52, 5), 2_598_960.0);
    }

    #[test]
    fn binomial_edges_and_symmetry() {
        for n in 0..=40 {
            assert_eq!(binomial_coeff(n, 0), 1.0);
            assert_eq!(binomial_coeff(n, n), 1.0);
            assert_eq!(binomial_coeff(n, -1), 0.0);
            assert_eq!(binomial_coeff(n, n + 1), 0.0);
            for k in 0..=n {
                assert_eq!(binomial_coeff(n, k), binomial_coeff(n, n - k), "n={n} k={k}");
            }
        }
    }

    #[test]
    fn binomial_pascal_rule() {
        for n in 1..=30 {
            for k in 1..n {
                let lhs = binomial_coeff(n, k);
                let rhs = binomial_coeff(n - 1, k - 1) + binomial_coeff(n - 1, k);
                assert_eq!(lhs, rhs, "n={n} k={k}");
            }
        }
    }

    #[test]
    fn binomial_beyond_u64_range_stays_finite() {
        let c = binomial_coeff(100, 50);
        assert!(c.is_finite());
        assert!((c / 1.008_913_445_455_642e29 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn eulerian_known_rows() {
        let rows: [&[f64]; 5] = [
            &[1.0],
            &[1.0, 1.0],
            &[1.0, 4.0, 1.0],
            &[1.0, 11.0, 11.0, 1.0],
            &[1.0, 26.0, 66.0, 26.0, 1.0],
        ];
        for (i, row) in rows.iter().enumerate() {
            let n = i + 1;
            for (m, &expected) in row.iter().enumerate() {
                assert_eq!(eulerian_number(n, m), expected, "A({n},{m})");
            }
            assert_eq!(eulerian_number(n, n), 0.0);
        }
        assert_eq!(eulerian_number(0, 0), 1.0);
        assert_eq!(eulerian_number(0, 1), 0.0);
    }

    #[test]
    fn eulerian_rows_sum_to_factorial() {
        let mut factorial = 1.0;
        for n in 1..=15usize {
            factorial *= n as f64;
            let total: f64 = (0..n).map(|m| eulerian_number(n, m)).sum();
            assert_eq!(total, factorial, "row {n}");
        }
    }

    #[test]
    fn rows_match_closed_form_while_exact() {
        assert_eq!(eulerian_row(0), vec![1.0]);
        assert_eq!(eulerian_row(1), vec![1.0]);
        for k in 2..=16usize {
            let row = eulerian_row(k);
            assert_eq!(row.len(), k);
            for (m, &a) in row.iter().enumerate() {
                assert_eq!(a, eulerian_number(k, m), "A({k},{m})");
            }
        }
    }

    #[test]
    fn high_rows_stay_symmetric_and_sum_to_factorial() {
        let mut factorial = 1.0_f64;
        for k in 1..=40usize {
            factorial *= k as f64;
            let row = eulerian_row(k);
            for m in 0..k {
                let (a, b) = (row[m], row[k - 1 - m]);
                assert!((a - b).abs() <= 1e-13 * a, "A({k},{m})={a} vs mirror {b}");
            }
            let total: f64 = row.iter().sum();
            assert!((total / factorial - 1.0).abs() < 1e-13, "row {k}");
        }
    }
}
