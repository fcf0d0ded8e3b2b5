//! Quadratic fit through the origin, `y = b·x²`
//!
//! Used for the frequency dependence of the attenuation, where theory
//! predicts `α ∝ f²`. There is no intercept and no linear term; minimizing
//! the squared error gives
//!
//! ```text
//! b = Σ(xᵢ²·yᵢ) / Σ(xᵢ⁴)
//! ```

use alloc::{format, string::String, vec::Vec};

/// Fitted `y = coefficient·x²`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticFit {
    /// The single coefficient `b`
    pub coefficient: f64,
}

impl QuadraticFit {
    /// Evaluate the fitted curve
    pub fn predict(&self, x: f64) -> f64 {
        self.coefficient * x * x
    }

    /// Sample the curve on `[start, end]` every `step`
    pub fn curve(&self, start: f64, end: f64, step: f64) -> Vec<(f64, f64)> {
        sample_range(start, end, step)
            .into_iter()
            .map(|x| (x, self.predict(x)))
            .collect()
    }

    /// Human-readable form, e.g. `α²ₗ = 0.0845·f²`
    pub fn equation(&self) -> String {
        format!("α²ₗ = {:.4}·f²", self.coefficient)
    }
}

/// Least-squares fit of `y = b·x²`
///
/// `None` for an empty input or when every x is zero.
pub fn fit_through_origin(points: &[(f64, f64)]) -> Option<QuadraticFit> {
    let (sum_x4, sum_x2y) = points.iter().fold((0.0, 0.0), |(x4, x2y), &(x, y)| {
        let x2 = x * x;
        (x4 + x2 * x2, x2y + x2 * y)
    });

    if sum_x4 == 0.0 {
        return None;
    }

    let coefficient = sum_x2y / sum_x4;
    coefficient
        .is_finite()
        .then_some(QuadraticFit { coefficient })
}

/// Most points [`sample_range`] will produce
pub const MAX_SAMPLES: usize = 100_000;

/// Evenly spaced abscissae `start, start + step, …` up to and including `end`
///
/// Empty for a non-positive step, a reversed range, or a step so small the
/// range would need more than [`MAX_SAMPLES`] points.
pub fn sample_range(start: f64, end: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !(end >= start) || !start.is_finite() || !end.is_finite() {
        return Vec::new();
    }

    // Tolerance so that e.g. 3..=13 by 0.1 still ends on 13
    let intervals = libm::floor((end - start) / step + 1e-9);
    if !(intervals < MAX_SAMPLES as f64) {
        log_debug!("sample range {}..{} by {} exceeds {} points", start, end, step, MAX_SAMPLES);
        return Vec::new();
    }

    let intervals = intervals as usize;
    (0..=intervals).map(|i| start + i as f64 * step).collect()
}
