//! Common Validation Utilities
//!
//! Pure helpers shared by every validator. None of them allocate, and
//! invalid input is always reported as an error value, never a panic.

use crate::{
    errors::{ValidationError, ValidationResult},
    traits::Validatable,
};

/// Reject NaN and infinities
pub fn check_finite(value: f64) -> ValidationResult<()> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue)
    }
}

/// Check if a value is within the closed range `[min, max]`
pub fn check_range(value: f64, min: f64, max: f64) -> ValidationResult<()> {
    if value < min || value > max {
        Err(ValidationError::OutOfRange { value, min, max })
    } else {
        Ok(())
    }
}

/// Check that a value is strictly greater than zero
pub fn check_positive(value: f64) -> ValidationResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NotPositive { value })
    }
}

/// Check an inclusive lower bound
pub fn check_at_least(value: f64, min: f64) -> ValidationResult<()> {
    if value < min {
        Err(ValidationError::BelowMinimum { value, min })
    } else {
        Ok(())
    }
}

/// Check an inclusive upper bound
pub fn check_at_most(value: f64, max: f64) -> ValidationResult<()> {
    if value > max {
        Err(ValidationError::AboveMaximum { value, max })
    } else {
        Ok(())
    }
}
