//! Error Types for Measurement Entry and Analysis
//!
//! ## Error Categories
//!
//! ### Field Validation (`ValidationError`)
//! A single raw input is malformed or violates a physical bound. These are
//! recovered locally: the store records them per `(row id, field)` and leaves
//! every other field editable. Each variant carries the offending value and
//! the bound, so the `Display` output tells the user exactly what to fix.
//!
//! ### Structural Commands (`CommandError`)
//! Adding a row while the last row is incomplete, deleting the only row,
//! addressing a row that does not exist. The command is a no-op.
//!
//! ### Persistence (`PersistenceError`)
//! Reported by a persistence collaborator. The store logs these and carries
//! on; they never reach the user and never roll back an in-memory change.
//!
//! ## Example
//!
//! ```rust
//! use physlab_core::{FieldKind, ValidationBounds, ValidationError};
//!
//! let bounds = ValidationBounds::default();
//! match bounds.validate(FieldKind::Resistance, Some(0.0)) {
//!     Err(ValidationError::NotPositive { .. }) => {}
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

use alloc::string::String;

use thiserror_no_std::Error;

use crate::measurement::FieldKind;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Field-level validation errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// Value outside a closed range
    #[error("value {value} is outside the range [{min}, {max}]")]
    OutOfRange {
        /// The rejected input
        value: f64,
        /// Lowest accepted value
        min: f64,
        /// Highest accepted value
        max: f64,
    },

    /// Value must be strictly positive
    #[error("value {value} must be greater than 0")]
    NotPositive {
        /// The rejected input
        value: f64,
    },

    /// Value below an inclusive minimum
    #[error("value {value} must not be less than {min}")]
    BelowMinimum {
        /// The rejected input
        value: f64,
        /// Lowest accepted value
        min: f64,
    },

    /// Value above an inclusive maximum
    #[error("value {value} must not exceed {max}")]
    AboveMaximum {
        /// The rejected input
        value: f64,
        /// Highest accepted value
        max: f64,
    },

    /// Value is NaN or infinite
    #[error("invalid value: not a finite number")]
    InvalidValue,

    /// Text could not be read as a number
    #[error("input is not a number")]
    Malformed,
}

/// Rejected store commands
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CommandError {
    /// The add-row gate is closed
    #[error("fill in row {id} with valid values before adding a new one")]
    RowIncomplete {
        /// Id of the last row
        id: u32,
    },

    /// A collection always keeps at least one row
    #[error("cannot delete the last remaining row")]
    LastRemainingRow,

    /// No row carries this id
    #[error("row {id} does not exist")]
    RowNotFound {
        /// The requested id
        id: u32,
    },

    /// The field update was rejected and recorded in the error map
    #[error("row {id}, {field}: {error}")]
    InvalidInput {
        /// Row the input was meant for
        id: u32,
        /// Field the input was meant for
        field: FieldKind,
        /// Why it was rejected
        error: ValidationError,
    },
}

/// Failures reported by a persistence collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The storage backend failed
    #[error("storage backend failed: {reason}")]
    Backend {
        /// Backend-specific description
        reason: String,
    },

    /// Stored data could not be encoded or decoded
    #[error("stored data is unreadable: {reason}")]
    Serialization {
        /// Decoder-specific description
        reason: String,
    },
}
