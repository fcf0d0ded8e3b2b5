//! Input Validators
//!
//! ## Overview
//!
//! Every raw value typed into a measurement table passes through here before
//! it reaches a row. Validation is a pure function of the field kind and the
//! value: there is no history, no cross-row check and no side effect.
//!
//! ## The Bound Table
//!
//! | Field           | Accepted                     | Validator                   |
//! |-----------------|------------------------------|-----------------------------|
//! | `temperature_c` | `[min, max]`, default [0, 200] °C | [`TemperatureValidator`] |
//! | `resistance`    | `(0, max]`, default max 1 MΩ | [`ResistanceValidator`]     |
//! | `x1`, `x2`      | `>= 0` mm                    | [`PositionValidator`]       |
//! | `deltaI`        | `[0, 1]`                     | [`IntensityRatioValidator`] |
//! | `frequency`     | `> 0` MHz                    | [`FrequencyValidator`]      |
//!
//! The temperature range and the resistance cap are configurable through
//! [`ValidationBounds`]; the acoustic bounds are fixed by definition.
//!
//! ## Empty Input
//!
//! Fields are optional until a row is committed, so the "empty" sentinel
//! (`None`, from an empty string) always validates.
//!
//! ## Usage Example
//!
//! ```rust
//! use physlab_core::validators::{parse_input, ValidationBounds};
//! use physlab_core::FieldKind;
//!
//! let bounds = ValidationBounds::default();
//!
//! let value = parse_input(" 25,5 ")?;
//! assert_eq!(value, Some(25.5));
//! bounds.validate(FieldKind::TemperatureC, value)?;
//!
//! assert!(bounds.validate(FieldKind::DeltaI, Some(1.5)).is_err());
//! assert!(bounds.validate(FieldKind::Frequency, None).is_ok());
//! # Ok::<(), physlab_core::ValidationError>(())
//! ```

mod acoustic;
mod resistance;
mod temperature;
pub mod utils;

pub use acoustic::{FrequencyValidator, IntensityRatioValidator, PositionValidator};
pub use resistance::ResistanceValidator;
pub use temperature::TemperatureValidator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{RESISTANCE_MAX_OHM, TEMPERATURE_MAX_C, TEMPERATURE_MIN_C},
    errors::{ValidationError, ValidationResult},
    measurement::FieldKind,
    traits::{Validator, ValidatorConstraints},
};

/// Configurable part of the bound table
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidationBounds {
    /// Lowest accepted temperature (°C), inclusive
    pub temperature_min_c: f64,
    /// Highest accepted temperature (°C), inclusive
    pub temperature_max_c: f64,
    /// Highest accepted resistance (Ω), inclusive; zero is always excluded
    pub resistance_max_ohm: f64,
}

impl Default for ValidationBounds {
    fn default() -> Self {
        Self::lab_bench()
    }
}

impl ValidationBounds {
    /// Bench bounds: [0, 200] °C and (0, 1e6] Ω
    pub fn lab_bench() -> Self {
        Self {
            temperature_min_c: TEMPERATURE_MIN_C,
            temperature_max_c: TEMPERATURE_MAX_C,
            resistance_max_ohm: RESISTANCE_MAX_OHM,
        }
    }

    /// Extended temperature bounds: [-273, 1000] °C and (0, 1e6] Ω
    ///
    /// The lower end is where `t + 273` reaches zero Kelvin.
    pub fn extended() -> Self {
        let temperature = TemperatureValidator::extended();
        Self {
            temperature_min_c: temperature.min_celsius(),
            temperature_max_c: temperature.max_celsius(),
            resistance_max_ohm: RESISTANCE_MAX_OHM,
        }
    }

    /// Replace the temperature range, sanitized like
    /// [`TemperatureValidator::new_with_limits`]
    pub fn with_temperature_limits(mut self, min: f64, max: f64) -> Self {
        let temperature = TemperatureValidator::new_with_limits(min, max);
        self.temperature_min_c = temperature.min_celsius();
        self.temperature_max_c = temperature.max_celsius();
        self
    }

    /// Validator for the temperature column
    pub fn temperature(&self) -> TemperatureValidator {
        TemperatureValidator::new_with_limits(self.temperature_min_c, self.temperature_max_c)
    }

    /// Validator for the resistance column
    pub fn resistance(&self) -> ResistanceValidator {
        ResistanceValidator::new(self.resistance_max_ohm)
    }

    /// Validate one field value
    ///
    /// `None` is the empty sentinel and always passes.
    pub fn validate(&self, field: FieldKind, value: Option<f64>) -> ValidationResult<()> {
        let Some(value) = value else {
            return Ok(());
        };

        match field {
            FieldKind::TemperatureC => self.temperature().validate(value),
            FieldKind::Resistance => self.resistance().validate(value),
            FieldKind::X1 | FieldKind::X2 => PositionValidator.validate(value),
            FieldKind::DeltaI => IntensityRatioValidator.validate(value),
            FieldKind::Frequency => FrequencyValidator.validate(value),
        }
    }

    /// Bounds of one field, for input hints
    pub fn constraints(&self, field: FieldKind) -> ValidatorConstraints {
        match field {
            FieldKind::TemperatureC => self.temperature().constraints(),
            FieldKind::Resistance => self.resistance().constraints(),
            FieldKind::X1 | FieldKind::X2 => PositionValidator.constraints(),
            FieldKind::DeltaI => IntensityRatioValidator.constraints(),
            FieldKind::Frequency => FrequencyValidator.constraints(),
        }
    }
}

/// Parse raw table input
///
/// Whitespace is trimmed, an empty string is `None`, and a comma is accepted
/// as the decimal separator. Text that is not a number is `Malformed`;
/// `NaN` or infinities are `InvalidValue`.
pub fn parse_input(raw: &str) -> ValidationResult<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: f64 = if trimmed.contains(',') {
        trimmed.replace(',', ".").parse()
    } else {
        trimmed.parse()
    }
    .map_err(|_| ValidationError::Malformed)?;

    utils::check_finite(value)?;
    Ok(Some(value))
}
