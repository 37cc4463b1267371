//! Distortion shapes assembled from the derivative sequence.
//!
//! With `D_k = x^k d^k nPl / dx^k`:
//!
//! - occupation: `nPl = D_0`
//! - temperature shift: `G(x) = x e^x / (e^x - 1)^2 = -D_1`
//! - thermal SZ: `Y0(x) = x^{-2} d/dx (x^4 dnPl/dx) = D_2 + 4 D_1`,
//!   equivalently `G(x) (x coth(x/2) - 4)`
//!
//! The relativistic temperature expansion layers higher `D_k` on top of these;
//! that assembly lives with the caller.

use serde::{Deserialize, Serialize};

use crate::derivs::{dk_npl_sequence, xk_dk_npl};
use crate::domain::ShapeKind;

/// The three classical shapes at one frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralShapes {
    pub x: f64,
    pub occupation: f64,
    pub temperature_shift: f64,
    pub thermal_sz: f64,
}

impl SpectralShapes {
    /// Evaluate every shape from a single `kmax = 2` sequence.
    pub fn at(x: f64) -> Self {
        let d = dk_npl_sequence(2, x);
        Self::from_sequence(x, &d)
    }

    /// Build from an already evaluated sequence with at least three orders.
    ///
    /// # Panics
    /// Panics if `seq.len() < 3`.
    pub fn from_sequence(x: f64, seq: &[f64]) -> Self {
        Self {
            x,
            occupation: seq[0],
            temperature_shift: -seq[1],
            thermal_sz: seq[2] + 4.0 * seq[1],
        }
    }

    pub fn get(&self, kind: ShapeKind) -> f64 {
        match kind {
            ShapeKind::Occupation => self.occupation,
            ShapeKind::TemperatureShift => self.temperature_shift,
            ShapeKind::ThermalSz => self.thermal_sz,
        }
    }
}

/// `G(x) = x e^x / (e^x - 1)^2`.
pub fn g_function(x: f64) -> f64 {
    -xk_dk_npl(1, x)
}

/// `Y0(x) = G(x) (x coth(x/2) - 4)`, the non-relativistic thermal SZ shape.
pub fn y_function(x: f64) -> f64 {
    let d = dk_npl_sequence(2, x);
    d[2] + 4.0 * d[1]
}

/// Evaluate one shape by kind.
pub fn evaluate(kind: ShapeKind, x: f64) -> f64 {
    match kind {
        ShapeKind::Occupation => xk_dk_npl(0, x),
        ShapeKind::TemperatureShift => g_function(x),
        ShapeKind::ThermalSz => y_function(x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn g_closed(x: f64) -> f64 {
        let em1 = x.exp_m1();
        x * x.exp() / (em1 * em1)
    }

    #[test]
    fn g_matches_closed_form() {
        for &x in &[1e-3, 0.2, 1.0, 3.83, 12.0] {
            assert_relative_eq!(g_function(x), g_closed(x), max_relative = 1e-12);
        }
        // G ~ 1/x as x -> 0.
        let x = 1e-6;
        assert_relative_eq!(x * g_function(x), 1.0, max_relative = 1e-6);
    }

    #[test]
    fn y_matches_coth_form() {
        for &x in &[0.5_f64, 1.0, 2.0, 6.0, 15.0] {
            let coth_half = 1.0 / (x / 2.0).tanh();
            let expected = g_closed(x) * (x * coth_half - 4.0);
            assert_relative_eq!(y_function(x), expected, max_relative = 1e-11);
        }
    }

    #[test]
    fn y_changes_sign_near_crossover() {
        // Classical null of the tSZ decrement/increment at x ≈ 3.830.
        assert!(y_function(3.7) < 0.0);
        assert!(y_function(3.95) > 0.0);
    }

    #[test]
    fn y_small_x_limit() {
        // x coth(x/2) -> 2 and G ~ 1/x, so x Y0 -> -2.
        let x = 1e-4;
        assert_relative_eq!(x * y_function(x), -2.0, max_relative = 1e-6);
    }

    #[test]
    fn shapes_bundle_agrees_with_single_functions() {
        let x = 2.2;
        let s = SpectralShapes::at(x);
        assert_relative_eq!(s.get(ShapeKind::Occupation), evaluate(ShapeKind::Occupation, x));
        assert_relative_eq!(s.get(ShapeKind::TemperatureShift), evaluate(ShapeKind::TemperatureShift, x));
        assert_relative_eq!(s.get(ShapeKind::ThermalSz), evaluate(ShapeKind::ThermalSz, x));
    }
}
