//! Formatted terminal output for tables, shapes and audits.
//!
//! We keep formatting code in one place so:
//! - the numerical code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{ConsistencyReport, DerivativeTable, GridConfig, GridSpacing, ShapeKind};
use crate::spectra::SpectralShapes;

const X_WIDTH: usize = 12;
const VALUE_WIDTH: usize = 15;

/// Header block describing the grid a table was evaluated on.
pub fn format_run_summary(config: &GridConfig) -> String {
    let mut out = String::new();
    out.push_str("=== npl - scaled Planck derivatives x^k d^k nPl/dx^k ===\n");
    out.push_str(&format!("Orders: 0..={}\n", config.kmax));
    out.push_str(&format!(
        "Grid: {} points | x=[{:.4e}, {:.4e}] | {}\n",
        config.steps,
        config.x_min,
        config.x_max,
        spacing_label(config.spacing),
    ));
    out
}

/// Fixed-width derivative table, one row per grid point.
pub fn format_table(table: &DerivativeTable) -> String {
    let mut out = String::new();

    let mut header = format!("{:>X_WIDTH$}", "x");
    let mut rule = format!("{:-<X_WIDTH$}", "");
    for k in 0..=table.kmax {
        header.push_str(&format!(" {:>VALUE_WIDTH$}", format!("k={k}")));
        rule.push_str(&format!(" {:-<VALUE_WIDTH$}", ""));
    }
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for row in &table.rows {
        let mut line = format!("{:>X_WIDTH$.5e}", row.x);
        for v in &row.values {
            line.push_str(&format!(" {:>VALUE_WIDTH$}", fmt_value(*v)));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// Table of the classical shapes (`nPl`, `G`, `Y0`).
pub fn format_shapes(shapes: &[SpectralShapes]) -> String {
    let mut out = String::new();

    let mut header = format!("{:>X_WIDTH$}", "x");
    let mut rule = format!("{:-<X_WIDTH$}", "");
    for kind in ShapeKind::ALL {
        header.push_str(&format!(" {:>VALUE_WIDTH$}", kind.column_name()));
        rule.push_str(&format!(" {:-<VALUE_WIDTH$}", ""));
    }
    out.push_str(&header);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for s in shapes {
        let mut line = format!("{:>X_WIDTH$.5e}", s.x);
        for kind in ShapeKind::ALL {
            line.push_str(&format!(" {:>VALUE_WIDTH$}", fmt_value(s.get(kind))));
        }
        out.push_str(&line);
        out.push('\n');
    }

    out
}

/// One-paragraph audit summary.
pub fn format_consistency(report: &ConsistencyReport, tolerance: f64) -> String {
    let verdict = if report.passes(tolerance) { "PASS" } else { "FAIL" };
    format!(
        "Consistency (sequence vs single-order): {verdict}\n\
         - points: {} | orders: 0..={}\n\
         - max relative deviation: {:.3e} (tolerance {:.1e})\n\
         - worst at: x={:.6e}, k={}\n",
        report.points,
        report.kmax,
        report.max_rel_deviation,
        tolerance,
        report.worst_x,
        report.worst_k,
    )
}

fn spacing_label(spacing: GridSpacing) -> &'static str {
    match spacing {
        GridSpacing::Log => "log-spaced",
        GridSpacing::Linear => "linear",
    }
}

fn fmt_value(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.8e}")
    } else {
        format!("{v}")
    }
}
