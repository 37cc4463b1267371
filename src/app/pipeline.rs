//! Shared "grid pipeline" logic used by the `table` and `check` commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! grid config -> x grid -> parallel evaluation -> (shapes) -> (audit)
//!
//! The command handlers can then focus on presentation and exports.

use tracing::info;

use crate::domain::{ConsistencyReport, DerivativeTable, GridConfig};
use crate::error::AppError;
use crate::grid::{audit_consistency, build_grid, evaluate_grid, shapes_from_table};
use crate::spectra::SpectralShapes;

/// All computed outputs of a single `npl table` run.
#[derive(Debug, Clone)]
pub struct TableRun {
    pub xs: Vec<f64>,
    pub table: DerivativeTable,
    pub shapes: Option<Vec<SpectralShapes>>,
}

/// Build the grid, evaluate every order, and optionally derive the shapes.
pub fn run_table(config: &GridConfig, with_shapes: bool) -> Result<TableRun, AppError> {
    if with_shapes && config.kmax < 2 {
        return Err(AppError::input(format!(
            "Shapes need orders up to 2 (got kmax={}).",
            config.kmax
        )));
    }

    let xs = build_grid(config)?;
    let table = evaluate_grid(&xs, config.kmax)?;
    let shapes = with_shapes.then(|| shapes_from_table(&table));
    info!(points = xs.len(), kmax = config.kmax, "table evaluated");

    Ok(TableRun { xs, table, shapes })
}

/// Build the grid and audit the two evaluation paths on it.
pub fn run_check(config: &GridConfig) -> Result<ConsistencyReport, AppError> {
    let xs = build_grid(config)?;
    let report = audit_consistency(&xs, config.kmax)?;
    info!(
        points = report.points,
        max_rel_deviation = report.max_rel_deviation,
        "consistency audit finished"
    );
    Ok(report)
}
