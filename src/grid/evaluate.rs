//! Parallel evaluation of the derivative sequence over an `x` grid.
//!
//! Each grid point is independent, so points are spread across the rayon pool;
//! every worker owns its result buffer and the core functions share no state.
//! Output order always follows the input grid.

use rayon::prelude::*;
use tracing::debug;

use crate::derivs::{dk_npl_dks, xk_dk_npl};
use crate::domain::{ConsistencyReport, DerivativeRow, DerivativeTable};
use crate::error::AppError;
use crate::spectra::SpectralShapes;

use super::spacing::validate_x;

/// Evaluate `x^k d^k nPl / dx^k` for `k = 0..=kmax` at every grid point.
pub fn evaluate_grid(xs: &[f64], kmax: usize) -> Result<DerivativeTable, AppError> {
    for &x in xs {
        validate_x(x)?;
    }
    debug!(points = xs.len(), kmax, "evaluating derivative grid");

    let rows: Vec<DerivativeRow> = xs
        .par_iter()
        .map(|&x| {
            let mut values = Vec::with_capacity(kmax + 1);
            dk_npl_dks(kmax, x, &mut values);
            DerivativeRow { x, values }
        })
        .collect();

    if let Some(row) = rows.iter().find(|r| r.values.iter().any(|v| !v.is_finite())) {
        return Err(AppError::numeric(format!(
            "Non-finite derivative at x={} (kmax={kmax}).",
            row.x
        )));
    }

    Ok(DerivativeTable { kmax, rows })
}

/// Classical spectral shapes at each row of an evaluated table.
///
/// # Panics
/// Panics if the table was built with `kmax < 2`.
pub fn shapes_from_table(table: &DerivativeTable) -> Vec<SpectralShapes> {
    table
        .rows
        .iter()
        .map(|row| SpectralShapes::from_sequence(row.x, &row.values))
        .collect()
}

/// Compare the shared-recursion path against per-order evaluation at every
/// grid point and order.
pub fn audit_consistency(xs: &[f64], kmax: usize) -> Result<ConsistencyReport, AppError> {
    for &x in xs {
        validate_x(x)?;
    }
    debug!(points = xs.len(), kmax, "auditing sequence vs single-order evaluation");

    let (max_rel_deviation, worst_x, worst_k) = xs
        .par_iter()
        .map(|&x| {
            let mut values = Vec::with_capacity(kmax + 1);
            dk_npl_dks(kmax, x, &mut values);
            let mut worst = (0.0, x, 0);
            for (k, &seq) in values.iter().enumerate() {
                let dev = relative_deviation(seq, xk_dk_npl(k, x));
                if dev > worst.0 {
                    worst = (dev, x, k);
                }
            }
            worst
        })
        .reduce(
            || (0.0, f64::NAN, 0),
            |a, b| if b.0 > a.0 || a.1.is_nan() { b } else { a },
        );

    Ok(ConsistencyReport {
        points: xs.len(),
        kmax,
        max_rel_deviation,
        worst_x,
        worst_k,
    })
}

fn relative_deviation(a: f64, b: f64) -> f64 {
    if a == b {
        return 0.0;
    }
    if !(a.is_finite() && b.is_finite()) {
        return f64::INFINITY;
    }
    (a - b).abs() / a.abs().max(b.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::log_space;
    use approx::assert_relative_eq;

    #[test]
    fn rows_follow_grid_order() {
        let xs = log_space(1e-3, 40.0, 64).unwrap();
        let table = evaluate_grid(&xs, 6).unwrap();
        assert_eq!(table.kmax, 6);
        assert_eq!(table.rows.len(), xs.len());
        for (row, &x) in table.rows.iter().zip(&xs) {
            assert_eq!(row.x, x);
            assert_eq!(row.values.len(), 7);
            assert_relative_eq!(row.values[3], xk_dk_npl(3, x), max_relative = 1e-12);
        }
    }

    #[test]
    fn rejects_non_positive_points() {
        let err = evaluate_grid(&[1.0, 0.0, 2.0], 2).unwrap_err();
        assert_eq!(err.exit_code(), AppError::INPUT);
        assert!(audit_consistency(&[-1.0], 2).is_err());
    }

    #[test]
    fn audit_is_tight_on_wide_grid() {
        let xs = log_space(1e-4, 60.0, 200).unwrap();
        let report = audit_consistency(&xs, 14).unwrap();
        assert_eq!(report.points, 200);
        assert!(report.passes(1e-11), "max deviation {}", report.max_rel_deviation);
        assert!(report.worst_k <= 14);
    }

    #[test]
    fn shapes_follow_rows() {
        let xs = [0.5, 3.0];
        let table = evaluate_grid(&xs, 2).unwrap();
        let shapes = shapes_from_table(&table);
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[1], SpectralShapes::at(3.0));
    }

    #[test]
    fn relative_deviation_handles_edges() {
        assert_eq!(relative_deviation(0.0, 0.0), 0.0);
        assert_eq!(relative_deviation(f64::INFINITY, f64::INFINITY), 0.0);
        assert_eq!(relative_deviation(1.0, f64::NAN), f64::INFINITY);
        assert_relative_eq!(relative_deviation(1.0, 1.1), 0.1 / 1.1);
    }
}
