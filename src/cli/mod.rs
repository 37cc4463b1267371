//! Command-line parsing for the `npl` derivative evaluator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the numerical code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{GridSpacing, ShapeKind};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "npl", version, about = "Scaled Planck derivatives x^k d^k nPl/dx^k")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate a single order at a single frequency.
    Eval(EvalArgs),
    /// Tabulate orders 0..=kmax over an x grid, optionally exporting CSV/JSON.
    Table(TableArgs),
    /// Audit the shared-recursion path against per-order evaluation.
    Check(CheckArgs),
    /// Print a previously exported table JSON.
    Show(ShowArgs),
}

/// Options for `npl eval`.
#[derive(Debug, Parser, Clone)]
pub struct EvalArgs {
    /// Derivative order k.
    #[arg(short = 'k', long, default_value_t = 0)]
    pub order: usize,

    /// Dimensionless frequency x = h nu / k T (must be > 0).
    #[arg(short = 'x', long, allow_hyphen_values = true)]
    pub x: f64,

    /// Print every order 0..=k instead of only order k.
    #[arg(long)]
    pub all: bool,

    /// Print a classical spectral shape instead of a derivative order.
    #[arg(long, value_enum, conflicts_with = "all")]
    pub shape: Option<ShapeKind>,
}

/// Grid options shared by `table` and `check`.
#[derive(Debug, Args, Clone)]
pub struct GridArgs {
    /// Highest derivative order.
    #[arg(long, default_value_t = 4)]
    pub kmax: usize,

    /// Smallest x on the grid.
    #[arg(long, default_value_t = 1e-3)]
    pub x_min: f64,

    /// Largest x on the grid.
    #[arg(long, default_value_t = 30.0)]
    pub x_max: f64,

    /// Number of grid points.
    #[arg(long, default_value_t = 25)]
    pub steps: usize,

    /// Grid spacing.
    #[arg(long, value_enum, default_value_t = GridSpacing::Log)]
    pub spacing: GridSpacing,
}

/// Options for `npl table`.
#[derive(Debug, Parser, Clone)]
pub struct TableArgs {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Also print/export the classical shapes nPl, G and Y0 (needs kmax >= 2).
    #[arg(long)]
    pub shapes: bool,

    /// Do not print the table to the terminal.
    #[arg(long)]
    pub quiet: bool,

    /// Export the table to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the table to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}

/// Options for `npl check`.
#[derive(Debug, Parser, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Maximum accepted relative deviation between the two paths.
    #[arg(long, default_value_t = 1e-12)]
    pub tolerance: f64,
}

/// Options for displaying a saved table.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Table JSON file produced by `npl table --export-json`.
    #[arg(long, value_name = "JSON")]
    pub table: PathBuf,
}
