//! Core traits
//!
//! The seams between the pure parts of the engine and the store:
//! validators, record kinds, and the persistence collaborator.

use alloc::vec::Vec;
use core::fmt;

use crate::config::LabConfig;
use crate::errors::{PersistenceError, ValidationResult};
use crate::measurement::FieldKind;

/// Core validator trait - implement this for each input quantity
pub trait Validator {
    /// The type of value this validator handles
    type Value;

    /// Validate a single parsed input
    fn validate(&self, value: Self::Value) -> ValidationResult<()>;

    /// Get the bounds enforced by this validator
    fn constraints(&self) -> ValidatorConstraints;
}

/// Bounds enforced by a validator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatorConstraints {
    /// Lowest accepted value, if bounded below
    pub min_value: Option<f64>,

    /// Whether `min_value` itself is accepted
    pub min_inclusive: bool,

    /// Highest accepted value, if bounded above (always inclusive)
    pub max_value: Option<f64>,
}

impl ValidatorConstraints {
    /// Check a value against these constraints without producing an error
    pub fn admits(&self, value: f64) -> bool {
        let above_min = match self.min_value {
            Some(min) if self.min_inclusive => value >= min,
            Some(min) => value > min,
            None => true,
        };
        let below_max = self.max_value.map_or(true, |max| value <= max);
        above_min && below_max
    }
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

/// One row kind held by a [`MeasurementStore`](crate::store::MeasurementStore)
///
/// Derived fields are a function of the row's own raw fields, except for
/// whatever [`Record::refit`] broadcasts across the collection.
pub trait Record: Clone + fmt::Debug {
    /// Editable raw fields of this row kind
    type Field: Copy + Ord + fmt::Debug + Into<FieldKind> + 'static;

    /// Every editable raw field, in column order
    const FIELDS: &'static [Self::Field];

    /// A row with every raw field at its default, derived fields recomputed
    fn empty(id: u32) -> Self;

    /// Dense, 1-based position in the collection
    fn id(&self) -> u32;

    /// Renumber the row
    fn set_id(&mut self, id: u32);

    /// Current value of a raw field
    fn raw(&self, field: Self::Field) -> Option<f64>;

    /// Replace a raw field and return the re-derived row
    fn with_raw(self, field: Self::Field, value: Option<f64>) -> Self;

    /// Recompute every derived field from the raw fields
    fn rederive(self) -> Self;

    /// Whether every required raw field holds a value
    fn is_filled(&self) -> bool;

    /// Collection-level recomputation run after every mutation
    fn refit(rows: &mut [Self], config: &LabConfig);
}

/// Key-value persistence for one collection
///
/// Implementations are best-effort. The store treats a failed `load` as
/// "nothing stored" and only logs failed `save`/`clear` calls.
pub trait Persistence<R> {
    /// Read the stored rows; `Ok(vec![])` when nothing is stored
    fn load(&mut self) -> Result<Vec<R>, PersistenceError>;

    /// Replace the stored rows
    fn save(&mut self, rows: &[R]) -> Result<(), PersistenceError>;

    /// Forget the stored rows
    fn clear(&mut self) -> Result<(), PersistenceError>;
}
