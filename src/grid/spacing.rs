//! Frequency grid generation.
//!
//! Distortion spectra are usually tabulated on a log grid in `x` (the
//! interesting structure spans `1e-3 .. 50`), with a linear grid available for
//! narrow windows.

use crate::domain::{GridConfig, GridSpacing};
use crate::error::AppError;

/// Generate `steps` log-spaced points between `min` and `max` (inclusive).
pub fn log_space(min: f64, max: f64, steps: usize) -> Result<Vec<f64>, AppError> {
    check_range(min, max, steps)?;

    let ln_min = min.ln();
    let ln_max = max.ln();
    let step = (ln_max - ln_min) / (steps as f64 - 1.0);

    let mut out = Vec::with_capacity(steps);
    for i in 0..steps {
        out.push((ln_min + step * i as f64).exp());
    }
    // Pin the endpoints so they round-trip exactly.
    out[0] = min;
    out[steps - 1] = max;
    Ok(out)
}

/// Generate `steps` evenly spaced points between `min` and `max` (inclusive).
pub fn linear_space(min: f64, max: f64, steps: usize) -> Result<Vec<f64>, AppError> {
    check_range(min, max, steps)?;

    let span = max - min;
    let denom = steps as f64 - 1.0;
    Ok((0..steps)
        .map(|i| if i + 1 == steps { max } else { min + span * i as f64 / denom })
        .collect())
}

/// Build the grid described by `config`.
pub fn build_grid(config: &GridConfig) -> Result<Vec<f64>, AppError> {
    match config.spacing {
        GridSpacing::Log => log_space(config.x_min, config.x_max, config.steps),
        GridSpacing::Linear => linear_space(config.x_min, config.x_max, config.steps),
    }
}

/// Reject points outside the open domain `x > 0`.
pub fn validate_x(x: f64) -> Result<(), AppError> {
    if !x.is_finite() || x <= 0.0 {
        return Err(AppError::input(format!(
            "Invalid frequency x={x} (must be finite and > 0)."
        )));
    }
    Ok(())
}

fn check_range(min: f64, max: f64, steps: usize) -> Result<(), AppError> {
    if !(min.is_finite() && max.is_finite() && min > 0.0 && max > min) {
        return Err(AppError::input(format!(
            "Invalid x range: min={min}, max={max} (must be finite, >0, and max>min)."
        )));
    }
    if steps < 2 {
        return Err(AppError::input("Grid steps must be >= 2."));
    }
    Ok(())
}
