//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - filled in-memory during grid evaluation
//! - exported to JSON/CSV
//! - reloaded later for display or comparison

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How grid points are distributed between `x_min` and `x_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GridSpacing {
    /// Log-spaced points; the natural choice when `x` spans decades.
    Log,
    /// Evenly spaced points.
    Linear,
}

/// Classical spectral shapes derived from the low orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// `nPl(x) = 1/(e^x - 1)`.
    Occupation,
    /// `G(x) = x e^x/(e^x - 1)^2`.
    TemperatureShift,
    /// `Y0(x) = G(x)(x coth(x/2) - 4)`.
    ThermalSz,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [
        ShapeKind::Occupation,
        ShapeKind::TemperatureShift,
        ShapeKind::ThermalSz,
    ];

    pub fn column_name(self) -> &'static str {
        match self {
            ShapeKind::Occupation => "npl",
            ShapeKind::TemperatureShift => "g",
            ShapeKind::ThermalSz => "y0",
        }
    }
}

/// Resolved configuration for a grid run (`npl table` / `npl check`).
#[derive(Debug, Clone)]
pub struct GridConfig {
    pub kmax: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub steps: usize,
    pub spacing: GridSpacing,
}

/// Output-side options for `npl table`.
#[derive(Debug, Clone, Default)]
pub struct TableOutput {
    pub shapes: bool,
    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

/// All orders `0..=kmax` at one grid point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivativeRow {
    pub x: f64,
    /// `values[k] = x^k d^k nPl / dx^k`.
    pub values: Vec<f64>,
}

/// Evaluated derivative table over an `x` grid, rows in grid order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivativeTable {
    pub kmax: usize,
    pub rows: Vec<DerivativeRow>,
}

/// Portable JSON representation of an evaluated table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableFile {
    pub tool: String,
    pub generated: DateTime<Utc>,
    pub spacing: GridSpacing,
    pub table: DerivativeTable,
}

/// Result of comparing the sequence path against the single-order path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsistencyReport {
    pub points: usize,
    pub kmax: usize,
    /// Largest `|seq - single| / |single|` seen.
    pub max_rel_deviation: f64,
    /// Grid point and order where it occurred.
    pub worst_x: f64,
    pub worst_k: usize,
}

impl ConsistencyReport {
    pub fn passes(&self, tolerance: f64) -> bool {
        self.max_rel_deviation <= tolerance
    }
}
