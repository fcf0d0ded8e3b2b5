//! Temperature validator
//!
//! Validates the sample temperature in Celsius against a closed range.
//! The lower bound can never be configured below −273 °C, where the
//! worksheet Kelvin value reaches zero.

use crate::{
    constants::{
        limits::{EXTENDED_TEMPERATURE_MAX_C, EXTENDED_TEMPERATURE_MIN_C},
        LOWEST_TEMPERATURE_C, TEMPERATURE_MAX_C, TEMPERATURE_MIN_C,
    },
    errors::ValidationResult,
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Temperature validator for Celsius readings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureValidator {
    /// Minimum valid temperature in Celsius
    min_celsius: f64,

    /// Maximum valid temperature in Celsius
    max_celsius: f64,
}

impl Default for TemperatureValidator {
    fn default() -> Self {
        Self::lab_bench()
    }
}

impl TemperatureValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f64, max: f64) -> Self {
        // Sanity check: can't have min > max
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        Self {
            min_celsius: min.max(LOWEST_TEMPERATURE_C),
            max_celsius: max.max(LOWEST_TEMPERATURE_C),
        }
    }

    /// Range of the heated sample holder, [0, 200] °C
    pub fn lab_bench() -> Self {
        Self {
            min_celsius: TEMPERATURE_MIN_C,
            max_celsius: TEMPERATURE_MAX_C,
        }
    }

    /// Anything with a non-negative worksheet Kelvin value, [-273, 1000] °C
    pub fn extended() -> Self {
        Self {
            min_celsius: EXTENDED_TEMPERATURE_MIN_C,
            max_celsius: EXTENDED_TEMPERATURE_MAX_C,
        }
    }

    /// Lowest accepted temperature
    pub fn min_celsius(&self) -> f64 {
        self.min_celsius
    }

    /// Highest accepted temperature
    pub fn max_celsius(&self) -> f64 {
        self.max_celsius
    }
}

impl Validator for TemperatureValidator {
    type Value = f64;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        utils::check_finite(value)?;
        utils::check_range(value, self.min_celsius, self.max_celsius)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: Some(self.min_celsius),
            min_inclusive: true,
            max_value: Some(self.max_celsius),
        }
    }
}
