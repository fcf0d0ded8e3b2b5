//! Constants for PhysLab Core
//!
//! Centralized numeric values used by the validators, the derivation engine
//! and the fits. Every value carries its unit in the name.
//!
//! ## Organization
//!
//! - **Physics**: fundamental constants and the fixed material constants of
//!   the two experiments
//! - **Limits**: default input bounds and row defaults

/// Physical constants and fixed material properties.
pub mod physics;

/// Default input limits and row defaults.
pub mod limits;

pub use physics::{
    BOLTZMANN_CONSTANT_J_PER_K, CELSIUS_TO_KELVIN_OFFSET, JOULES_TO_ELECTRON_VOLTS,
    LOWEST_TEMPERATURE_C, WAVE_SPEED_MM_PER_US,
};

pub use limits::{
    DEFAULT_FREQUENCY_MHZ, DELTA_I_MAX, DELTA_I_MIN, POSITION_MIN_MM, RESISTANCE_MAX_OHM,
    TEMPERATURE_MAX_C, TEMPERATURE_MIN_C,
};
