//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging / thread pool from the environment
//! - evaluates single points, grids, or audits
//! - prints reports and writes optional exports

use clap::Parser;
use tracing::info;

use crate::cli::{CheckArgs, Command, EvalArgs, GridArgs, ShowArgs, TableArgs};
use crate::derivs::{dk_npl_sequence, xk_dk_npl};
use crate::domain::{GridConfig, TableOutput};
use crate::error::AppError;
use crate::grid::validate_x;

pub mod pipeline;
pub mod runtime;

/// Entry point for the `npl` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    runtime::init()?;

    match cli.command {
        Command::Eval(args) => handle_eval(args),
        Command::Table(args) => handle_table(args),
        Command::Check(args) => handle_check(args),
        Command::Show(args) => handle_show(args),
    }
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    for line in eval_lines(&args)? {
        println!("{line}");
    }
    Ok(())
}

/// Lines printed by `npl eval`; rejects bad input and non-finite results.
fn eval_lines(args: &EvalArgs) -> Result<Vec<String>, AppError> {
    validate_x(args.x)?;

    let values: Vec<(Option<usize>, f64)> = if let Some(kind) = args.shape {
        vec![(None, crate::spectra::evaluate(kind, args.x))]
    } else if args.all {
        dk_npl_sequence(args.order, args.x)
            .into_iter()
            .enumerate()
            .map(|(k, v)| (Some(k), v))
            .collect()
    } else {
        vec![(None, xk_dk_npl(args.order, args.x))]
    };

    if let Some((_, v)) = values.iter().find(|(_, v)| !v.is_finite()) {
        return Err(AppError::numeric(format!(
            "Non-finite result {v} at x={:e} (order {}).",
            args.x, args.order
        )));
    }

    Ok(values
        .into_iter()
        .map(|(k, v)| match k {
            Some(k) => format!("{k:>3} {v:.16e}"),
            None => format!("{v:.16e}"),
        })
        .collect())
}

fn handle_table(args: TableArgs) -> Result<(), AppError> {
    let config = grid_config_from_args(&args.grid);
    let output = table_output_from_args(&args);
    let run = pipeline::run_table(&config, output.shapes)?;

    if !args.quiet {
        println!("{}", crate::report::format_run_summary(&config));
        println!("{}", crate::report::format_table(&run.table));
        if let Some(shapes) = &run.shapes {
            println!("{}", crate::report::format_shapes(shapes));
        }
    }

    // Optional exports.
    if let Some(path) = &output.export_csv {
        crate::io::write_table_csv(path, &run.table, run.shapes.as_deref())?;
        info!(path = %path.display(), "wrote CSV export");
    }
    if let Some(path) = &output.export_json {
        crate::io::write_table_json(path, &run.table, config.spacing)?;
        info!(path = %path.display(), "wrote JSON export");
    }

    Ok(())
}

fn handle_check(args: CheckArgs) -> Result<(), AppError> {
    if !(args.tolerance.is_finite() && args.tolerance >= 0.0) {
        return Err(AppError::input(format!(
            "Invalid tolerance {} (must be finite and >= 0).",
            args.tolerance
        )));
    }
    let config = grid_config_from_args(&args.grid);
    let report = pipeline::run_check(&config)?;

    print!("{}", crate::report::format_consistency(&report, args.tolerance));

    if !report.passes(args.tolerance) {
        return Err(AppError::numeric(format!(
            "Consistency audit failed: {:.3e} > {:.1e}.",
            report.max_rel_deviation, args.tolerance
        )));
    }
    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let doc = crate::io::read_table_json(&args.table)?;

    println!(
        "{} table generated {} ({} points, orders 0..={})",
        doc.tool,
        doc.generated.to_rfc3339(),
        doc.table.rows.len(),
        doc.table.kmax
    );
    println!("{}", crate::report::format_table(&doc.table));
    Ok(())
}

pub fn grid_config_from_args(args: &GridArgs) -> GridConfig {
    GridConfig {
        kmax: args.kmax,
        x_min: args.x_min,
        x_max: args.x_max,
        steps: args.steps,
        spacing: args.spacing,
    }
}

pub fn table_output_from_args(args: &TableArgs) -> TableOutput {
    TableOutput {
        shapes: args.shapes,
        export_csv: args.export.clone(),
        export_json: args.export_json.clone(),
    }
}
