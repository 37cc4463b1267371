//! Read/write table JSON files.
//!
//! Table JSON is the "portable" representation of an evaluated grid:
//! - generating tool and timestamp
//! - grid spacing and `kmax`
//! - every row `(x, [D_0, …, D_kmax])`
//!
//! The schema is defined by `domain::TableFile`.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use chrono::Utc;

use crate::domain::{DerivativeTable, GridSpacing, TableFile};
use crate::error::AppError;

/// Write a table JSON file.
pub fn write_table_json(path: &Path, table: &DerivativeTable, spacing: GridSpacing) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create table JSON '{}': {e}", path.display())))?;

    let doc = TableFile {
        tool: "npl".to_string(),
        generated: Utc::now(),
        spacing,
        table: table.clone(),
    };

    serde_json::to_writer_pretty(BufWriter::new(file), &doc)
        .map_err(|e| AppError::input(format!("Failed to write table JSON: {e}")))?;

    Ok(())
}

/// Read a table JSON file.
pub fn read_table_json(path: &Path) -> Result<TableFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open table JSON '{}': {e}", path.display())))?;
    let doc: TableFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::input(format!("Invalid table JSON: {e}")))?;

    if doc.table.rows.iter().any(|r| r.values.len() != doc.table.kmax + 1) {
        return Err(AppError::input(format!(
            "Invalid table JSON: every row must hold kmax+1 = {} values.",
            doc.table.kmax + 1
        )));
    }
    Ok(doc)
}
