//! Immutable views of a collection

use alloc::collections::BTreeMap;
use alloc::sync::Arc;

use crate::errors::ValidationError;
use crate::traits::Record;

/// Outstanding validation errors keyed by `(row id, field)`
pub type ErrorMap<F> = BTreeMap<(u32, F), ValidationError>;

/// One immutable state of a collection
///
/// Every store command that changes anything produces a new snapshot with a
/// higher `revision`; rows and errors are shared, never mutated in place.
#[derive(Debug)]
pub struct Snapshot<R: Record> {
    pub(crate) rows: Arc<[R]>,
    pub(crate) errors: Arc<ErrorMap<R::Field>>,
    pub(crate) revision: u64,
}

impl<R: Record> Clone for Snapshot<R> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
            errors: Arc::clone(&self.errors),
            revision: self.revision,
        }
    }
}

impl<R: Record> Snapshot<R> {
    /// All rows, ordered by id
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Number of rows, never zero
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row by id
    pub fn row(&self, id: u32) -> Option<&R> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Last row, the one the add-row gate inspects
    pub fn last(&self) -> Option<&R> {
        self.rows.last()
    }

    /// Every outstanding validation error
    pub fn errors(&self) -> &ErrorMap<R::Field> {
        &self.errors
    }

    /// Error attached to one input, if any
    pub fn error(&self, id: u32, field: R::Field) -> Option<&ValidationError> {
        self.errors.get(&(id, field))
    }

    /// Errors attached to the inputs of one row
    pub fn errors_for_row(&self, id: u32) -> impl Iterator<Item = (R::Field, &ValidationError)> {
        self.errors
            .iter()
            .filter(move |((row, _), _)| *row == id)
            .map(|((_, field), error)| (*field, error))
    }

    /// Monotonic change counter
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Add-row gate: last row filled and free of validation errors
    pub fn is_last_row_filled(&self) -> bool {
        self.last().map_or(false, |row| {
            row.is_filled() && self.errors_for_row(row.id()).next().is_none()
        })
    }

    /// Whether two snapshots share the same row storage
    pub fn same_rows(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.rows, &other.rows)
    }
}
