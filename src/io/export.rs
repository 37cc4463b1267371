//! Export evaluated tables to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::{DerivativeTable, ShapeKind};
use crate::error::AppError;
use crate::spectra::SpectralShapes;

/// Write one row per grid point: `x,k0,k1,…` and optionally the shape columns.
pub fn write_table_csv(
    path: &Path,
    table: &DerivativeTable,
    shapes: Option<&[SpectralShapes]>,
) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut w = BufWriter::new(file);
    write_table_csv_to(&mut w, table, shapes)?;
    w.flush()
        .map_err(|e| AppError::input(format!("Failed to flush export CSV: {e}")))
}

fn write_table_csv_to<W: Write>(
    w: &mut W,
    table: &DerivativeTable,
    shapes: Option<&[SpectralShapes]>,
) -> Result<(), AppError> {
    let mut header = String::from("x");
    for k in 0..=table.kmax {
        header.push_str(&format!(",k{k}"));
    }
    if shapes.is_some() {
        for kind in ShapeKind::ALL {
            header.push(',');
            header.push_str(kind.column_name());
        }
    }
    writeln!(w, "{header}")
        .map_err(|e| AppError::input(format!("Failed to write export CSV header: {e}")))?;

    for (i, row) in table.rows.iter().enumerate() {
        let mut line = format!("{:.17e}", row.x);
        for v in &row.values {
            line.push_str(&format!(",{v:.17e}"));
        }
        if let Some(s) = shapes.and_then(|s| s.get(i)) {
            for kind in ShapeKind::ALL {
                line.push_str(&format!(",{:.17e}", s.get(kind)));
            }
        }
        writeln!(w, "{line}")
            .map_err(|e| AppError::input(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
