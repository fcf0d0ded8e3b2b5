//! Acousto-optic input validators
//!
//! - Probe positions `x1`, `x2` (mm) are non-negative.
//! - The intensity ratio ΔI/I₀ is a fraction in `[0, 1]`.
//! - The ultrasound frequency (MHz) is strictly positive.
//!
//! `x2 >= x1` is expected for a meaningful attenuation but is not enforced;
//! a reversed pair simply produces a negative path length.

use crate::{
    constants::{DELTA_I_MAX, DELTA_I_MIN, POSITION_MIN_MM},
    errors::ValidationResult,
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Validator for probe positions along the crystal
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionValidator;

impl Validator for PositionValidator {
    type Value = f64;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        utils::check_finite(value)?;
        utils::check_at_least(value, POSITION_MIN_MM)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: Some(POSITION_MIN_MM),
            min_inclusive: true,
            max_value: None,
        }
    }
}

/// Validator for the dimensionless intensity ratio ΔI/I₀
#[derive(Debug, Clone, Copy, Default)]
pub struct IntensityRatioValidator;

impl Validator for IntensityRatioValidator {
    type Value = f64;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        utils::check_finite(value)?;
        utils::check_range(value, DELTA_I_MIN, DELTA_I_MAX)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: Some(DELTA_I_MIN),
            min_inclusive: true,
            max_value: Some(DELTA_I_MAX),
        }
    }
}

/// Validator for the ultrasound frequency
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyValidator;

impl Validator for FrequencyValidator {
    type Value = f64;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        utils::check_finite(value)?;
        utils::check_positive(value)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: Some(0.0),
            min_inclusive: false,
            max_value: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;

    #[test]
    fn positions_start_at_zero() {
        assert!(PositionValidator.validate(0.0).is_ok());
        assert!(PositionValidator.validate(35.5).is_ok());
        assert_eq!(
            PositionValidator.validate(-0.1),
            Err(ValidationError::BelowMinimum { value: -0.1, min: 0.0 })
        );
    }

    #[test]
    fn intensity_ratio_is_a_fraction() {
        assert!(IntensityRatioValidator.validate(0.0).is_ok());
        assert!(IntensityRatioValidator.validate(1.0).is_ok());
        assert!(IntensityRatioValidator.validate(1.2).is_err());
        assert!(IntensityRatioValidator.validate(-0.2).is_err());
    }

    #[test]
    fn frequency_must_be_positive() {
        assert!(FrequencyValidator.validate(10.0).is_ok());
        assert_eq!(
            FrequencyValidator.validate(0.0),
            Err(ValidationError::NotPositive { value: 0.0 })
        );
    }
}
