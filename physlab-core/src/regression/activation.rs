//! Activation (ionization) energy of the semiconductor series

use alloc::vec::Vec;

use crate::config::ActivationMethod;
use crate::constants::BOLTZMANN_CONSTANT_J_PER_K;
use crate::measurement::ResistanceMeasurement;

use super::linear::least_squares;

/// `ΔEᵢ = 2·k·A` for an Arrhenius slope `A`
pub fn energy_from_slope(slope: f64) -> f64 {
    2.0 * BOLTZMANN_CONSTANT_J_PER_K * slope
}

/// Activation energy of a collection with the configured method
pub fn activation_energy(rows: &[ResistanceMeasurement], method: ActivationMethod) -> Option<f64> {
    let energy = match method {
        ActivationMethod::TwoPoint => two_point_activation_energy(rows),
        ActivationMethod::LeastSquares => least_squares_activation_energy(rows),
    };
    log_debug!("activation energy ({:?}): {:?}", method, energy);
    energy
}

/// Two-point estimate from the coldest and the hottest valid rows
///
/// A row is valid when it has both `inverse_temperature` and
/// `ln_conductance`. Ties keep row order: the first of the coldest rows and
/// the last of the hottest rows are used.
pub fn two_point_activation_energy(rows: &[ResistanceMeasurement]) -> Option<f64> {
    let valid = || {
        rows.iter().filter_map(|row| {
            let (inverse_t, ln_g) = row.arrhenius_point()?;
            Some((row.temperature_k?, inverse_t, ln_g))
        })
    };

    if valid().nth(1).is_none() {
        return None;
    }

    let (_, inverse_t1, ln_g1) = valid().min_by(|a, b| a.0.total_cmp(&b.0))?;
    let (_, inverse_t2, ln_g2) = valid().max_by(|a, b| a.0.total_cmp(&b.0))?;

    let run = inverse_t1 - inverse_t2;
    if run == 0.0 {
        return None;
    }

    let energy = energy_from_slope((ln_g1 - ln_g2) / run);
    energy.is_finite().then_some(energy)
}

/// Least-squares slope of `lnG` against `1/T` over every valid row
pub fn least_squares_activation_energy(rows: &[ResistanceMeasurement]) -> Option<f64> {
    let points: Vec<(f64, f64)> = rows
        .iter()
        .filter_map(ResistanceMeasurement::arrhenius_point)
        .collect();

    let fit = least_squares(&points)?;
    let energy = energy_from_slope(fit.slope);
    energy.is_finite().then_some(energy)
}
