//! Default input limits
//!
//! Bounds used by [`ValidationBounds::default`](crate::validators::ValidationBounds)
//! and the defaults applied to freshly created rows.

/// Lowest accepted bench temperature (°C).
pub const TEMPERATURE_MIN_C: f64 = 0.0;

/// Highest accepted bench temperature (°C).
///
/// The sample holder's heater does not go past this.
pub const TEMPERATURE_MAX_C: f64 = 200.0;

/// Highest accepted resistance (Ω), i.e. 1 MΩ.
///
/// The lower bound is an exclusive zero: a resistance can not be zero or
/// negative.
pub const RESISTANCE_MAX_OHM: f64 = 1.0e6;

/// Extended temperature range lower bound (°C).
pub const EXTENDED_TEMPERATURE_MIN_C: f64 = super::physics::LOWEST_TEMPERATURE_C;

/// Extended temperature range upper bound (°C).
pub const EXTENDED_TEMPERATURE_MAX_C: f64 = 1000.0;

/// Lower bound of the intensity ratio ΔI/I₀ (dimensionless).
pub const DELTA_I_MIN: f64 = 0.0;

/// Upper bound of the intensity ratio ΔI/I₀ (dimensionless).
pub const DELTA_I_MAX: f64 = 1.0;

/// Lowest accepted probe position (mm), inclusive.
pub const POSITION_MIN_MM: f64 = 0.0;

/// Frequency assigned to a new acoustic row (MHz).
pub const DEFAULT_FREQUENCY_MHZ: f64 = 10.0;
