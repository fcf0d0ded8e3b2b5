//! Derivation Engine
//!
//! Maps one raw record to its derived fields. Every function here is pure
//! and total: a division by zero, a logarithm of a non-positive number or
//! any other non-finite intermediate yields `None` for that derived field,
//! never NaN or infinity.
//!
//! ## Resistance Rows
//!
//! ```text
//! T    = t + 273          (K)
//! 1/T                     (K⁻¹)
//! G    = 1 / R            (Ω⁻¹)
//! lnG  = ln(G)
//! ```
//!
//! All four are `None` unless both `t` and `R` are present.
//!
//! ## Acoustic Rows
//!
//! ```text
//! L = x2 - x1                        (mm)
//! λ = v / f,  v = 3.2 mm/µs          (mm)
//! α = 10·log10(ΔI/I₀) / L            (dB/mm)
//! ```
//!
//! `α` is `0` when `ΔI/I₀ == 0`. That stands in for an unbounded
//! attenuation the formula can not express; it is kept as a placeholder
//! rather than reported as missing.

use crate::constants::{CELSIUS_TO_KELVIN_OFFSET, WAVE_SPEED_MM_PER_US};
use crate::measurement::{AcousticMeasurement, ResistanceMeasurement};

/// Keep a value only if it is finite
fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Celsius to Kelvin with the worksheet offset of 273
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + CELSIUS_TO_KELVIN_OFFSET
}

/// `1 / value`, `None` for zero
pub fn reciprocal(value: f64) -> Option<f64> {
    if value == 0.0 {
        return None;
    }
    finite(1.0 / value)
}

/// Natural logarithm, `None` for non-positive input
pub fn natural_log(value: f64) -> Option<f64> {
    if value <= 0.0 {
        return None;
    }
    finite(libm::log(value))
}

/// Ultrasound wavelength (mm) for a frequency in MHz
pub fn wavelength(frequency_mhz: f64) -> Option<f64> {
    if frequency_mhz <= 0.0 {
        return None;
    }
    finite(WAVE_SPEED_MM_PER_US / frequency_mhz)
}

/// Attenuation coefficient (dB/mm) over a path of `path_length` mm
pub fn attenuation_coefficient(delta_i: f64, path_length: f64) -> Option<f64> {
    if path_length == 0.0 {
        return None;
    }
    if delta_i == 0.0 {
        return Some(0.0);
    }
    if delta_i < 0.0 {
        return None;
    }
    finite(10.0 * libm::log10(delta_i) / path_length)
}

/// Recompute `temperature_k`, `inverse_temperature`, `conductance` and
/// `ln_conductance` from the row's raw fields
///
/// `ionization_energy` is a collection-level value and is left untouched.
pub fn derive_resistance_fields(row: ResistanceMeasurement) -> ResistanceMeasurement {
    let (Some(temperature_c), Some(resistance)) = (row.temperature_c, row.resistance) else {
        return ResistanceMeasurement {
            temperature_k: None,
            inverse_temperature: None,
            conductance: None,
            ln_conductance: None,
            ..row
        };
    };

    let temperature_k = finite(celsius_to_kelvin(temperature_c));
    let inverse_temperature = temperature_k.and_then(reciprocal);
    let conductance = reciprocal(resistance);
    let ln_conductance = conductance.and_then(natural_log);

    ResistanceMeasurement {
        temperature_k,
        inverse_temperature,
        conductance,
        ln_conductance,
        ..row
    }
}

/// Recompute `path_length`, `wavelength` and `alpha` from the row's raw fields
pub fn derive_acoustic_fields(row: AcousticMeasurement) -> AcousticMeasurement {
    let path_length = match (row.x1, row.x2) {
        (Some(x1), Some(x2)) => finite(x2 - x1),
        _ => None,
    };
    let alpha = match (path_length, row.delta_i) {
        (Some(length), Some(delta_i)) => attenuation_coefficient(delta_i, length),
        _ => None,
    };

    AcousticMeasurement {
        path_length,
        wavelength: row.frequency.and_then(wavelength),
        alpha,
        ..row
    }
}
