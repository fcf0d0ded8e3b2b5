//! Resistance validator
//!
//! A resistance is strictly positive and capped, i.e. it must lie in
//! `(0, max]`. Zero and negative readings are physically impossible and
//! would also make the conductance undefined.

use crate::{
    constants::RESISTANCE_MAX_OHM,
    errors::ValidationResult,
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Resistance validator in ohms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceValidator {
    max_ohms: f64,
}

impl Default for ResistanceValidator {
    fn default() -> Self {
        Self {
            max_ohms: RESISTANCE_MAX_OHM,
        }
    }
}

impl ResistanceValidator {
    /// Create validator with a custom cap
    pub fn new(max_ohms: f64) -> Self {
        Self {
            max_ohms: max_ohms.abs(),
        }
    }

    /// Highest accepted resistance
    pub fn max_ohms(&self) -> f64 {
        self.max_ohms
    }
}

impl Validator for ResistanceValidator {
    type Value = f64;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        utils::check_finite(value)?;
        utils::check_positive(value)?;
        utils::check_at_most(value, self.max_ohms)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: Some(0.0),
            min_inclusive: false,
            max_value: Some(self.max_ohms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;

    #[test]
    fn accepts_up_to_one_megaohm() {
        let validator = ResistanceValidator::default();

        assert!(validator.validate(0.0001).is_ok());
        assert!(validator.validate(100.0).is_ok());
        assert!(validator.validate(1.0e6).is_ok());
    }

    #[test]
    fn rejects_zero_negative_and_too_large() {
        let validator = ResistanceValidator::default();

        assert_eq!(
            validator.validate(0.0),
            Err(ValidationError::NotPositive { value: 0.0 })
        );
        assert!(validator.validate(-10.0).is_err());
        assert_eq!(
            validator.validate(1.5e6),
            Err(ValidationError::AboveMaximum { value: 1.5e6, max: 1.0e6 })
        );
    }
}
