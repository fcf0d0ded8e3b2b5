//! Result panels computed from a collection
//!
//! Read-only views over a slice of rows: counts, ranges, chart points and
//! fitted trends. Nothing here is stored; summaries are recomputed from the
//! current snapshot whenever they are needed.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::constants::JOULES_TO_ELECTRON_VOLTS;
use crate::measurement::{AcousticMeasurement, ResistanceMeasurement};
use crate::regression::{describe, least_squares, value_range, LinearFit, Summary};

/// Overview of the resistance worksheet
#[derive(Debug, Clone, PartialEq)]
pub struct ResistanceSummary {
    /// Rows with both temperature and resistance
    pub measurement_count: usize,
    /// Temperature span, °C; needs at least two measurements
    pub temperature_range: Option<(f64, f64)>,
    /// Resistance span, Ω; needs at least two measurements
    pub resistance_range: Option<(f64, f64)>,
    /// Activation energy of the series, J
    pub ionization_energy: Option<f64>,
    /// Arrhenius plot points `(1/T, lnG)`, sorted by `1/T`
    pub points: Vec<(f64, f64)>,
    /// Straight line through the Arrhenius points
    pub trend: Option<LinearFit>,
}

impl ResistanceSummary {
    /// Summarize a collection
    pub fn from_rows(rows: &[ResistanceMeasurement]) -> Self {
        let measured: Vec<(f64, f64)> = rows
            .iter()
            .filter_map(|row| Some((row.temperature_c?, row.resistance?)))
            .collect();

        let (temperature_range, resistance_range) = if measured.len() >= 2 {
            (
                value_range(measured.iter().map(|m| m.0)),
                value_range(measured.iter().map(|m| m.1)),
            )
        } else {
            (None, None)
        };

        let mut points: Vec<(f64, f64)> = rows.iter().filter_map(|row| row.arrhenius_point()).collect();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        let trend = least_squares(&points);

        Self {
            measurement_count: measured.len(),
            temperature_range,
            resistance_range,
            ionization_energy: rows.first().and_then(|row| row.ionization_energy),
            points,
            trend,
        }
    }

    /// Activation energy in electron-volts
    pub fn ionization_energy_ev(&self) -> Option<f64> {
        self.ionization_energy.map(|joules| joules * JOULES_TO_ELECTRON_VOLTS)
    }

    /// Trend line endpoints for plotting
    pub fn trend_line(&self) -> Option<[(f64, f64); 2]> {
        self.trend?.line(&self.points)
    }
}

/// Overview of the acoustic worksheet
#[derive(Debug, Clone, PartialEq)]
pub struct AcousticSummary {
    /// Attenuation chart points `(x2, α)`, sorted by `x2`
    pub points: Vec<(f64, f64)>,
    /// Mean and spread of `α`
    pub attenuation: Option<Summary>,
    /// Straight line through the chart points
    pub regression: Option<LinearFit>,
}

impl AcousticSummary {
    /// Summarize a collection
    pub fn from_rows(rows: &[AcousticMeasurement]) -> Self {
        let mut points: Vec<(f64, f64)> = rows.iter().filter_map(|row| row.attenuation_point()).collect();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));

        let alphas: Vec<f64> = points.iter().map(|p| p.1).collect();

        Self {
            attenuation: describe(&alphas),
            regression: least_squares(&points),
            points,
        }
    }

    /// Regression line endpoints for plotting
    pub fn regression_line(&self) -> Option<[(f64, f64); 2]> {
        self.regression?.line(&self.points)
    }

    /// Fitted equation as shown beside the chart
    pub fn equation(&self) -> Option<String> {
        self.regression
            .map(|fit| format!("α = {:.4} × X₂ + {:.4}", fit.slope, fit.intercept))
    }
}
