//! Measurement Store
//!
//! ## Overview
//!
//! The store is the only stateful part of the engine. It owns one ordered
//! collection of rows plus the map of outstanding validation errors, and it
//! exposes three commands:
//!
//! - [`update_field`](MeasurementStore::update_field): parse, validate,
//!   derive the edited row, refit the whole collection
//! - [`add_row`](MeasurementStore::add_row): gated on the last row being
//!   filled and error-free
//! - [`delete_row`](MeasurementStore::delete_row): never empties the
//!   collection, renumbers the rest densely from 1
//!
//! Every command runs to completion synchronously. A rejected command leaves
//! rows untouched and returns a [`CommandError`] saying why.
//!
//! ## Data Flow
//!
//! ```text
//! raw text → parse_input → ValidationBounds::validate
//!          → Record::with_raw (derivation of that row)
//!          → Record::refit    (whole collection, from scratch)
//!          → new Snapshot     → persistence (best effort)
//! ```
//!
//! ## Persistence
//!
//! A store may hold a [`Persistence`] collaborator. Rows are saved after
//! every change to the rows; failures are logged and otherwise ignored.
//!
//! ## Usage Example
//!
//! ```rust
//! use physlab_core::{LabConfig, ResistanceField, ResistanceStore};
//!
//! let mut store = ResistanceStore::new(LabConfig::default());
//! store.update_field(1, ResistanceField::TemperatureC, "27")?;
//! store.update_field(1, ResistanceField::Resistance, "100")?;
//! let id = store.add_row()?;
//! store.update_field(id, ResistanceField::TemperatureC, "127")?;
//! store.update_field(id, ResistanceField::Resistance, "50")?;
//!
//! let energy = store.rows()[0].ionization_energy;
//! assert!(energy.is_some());
//! assert!(store.rows().iter().all(|row| row.ionization_energy == energy));
//! # Ok::<(), physlab_core::CommandError>(())
//! ```

mod laboratory;
mod snapshot;

pub use laboratory::Laboratory;
pub use snapshot::{ErrorMap, Snapshot};

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use crate::config::LabConfig;
use crate::errors::{CommandError, ValidationError};
use crate::measurement::{AcousticMeasurement, ResistanceMeasurement};
use crate::traits::{Persistence, Record};
use crate::validators::parse_input;

/// Store for the resistance experiment
pub type ResistanceStore = MeasurementStore<ResistanceMeasurement>;

/// Store for the acousto-optic experiment
pub type AcousticStore = MeasurementStore<AcousticMeasurement>;

/// Owner of one measurement collection and its validation errors
pub struct MeasurementStore<R: Record> {
    config: LabConfig,
    snapshot: Snapshot<R>,
    persistence: Option<Box<dyn Persistence<R>>>,
}

impl<R: Record> MeasurementStore<R> {
    /// A collection holding a single empty row
    pub fn new(config: LabConfig) -> Self {
        Self::from_rows(config, Vec::new(), None)
    }

    /// A collection restored from `persistence`
    ///
    /// Absent or unreadable data gives a single empty row. Restored rows are
    /// renumbered and re-derived from their raw fields; stored derived values
    /// are ignored. Raw values outside the configured bounds are cleared and
    /// reported through the error map.
    pub fn restore(config: LabConfig, mut persistence: Box<dyn Persistence<R>>) -> Self {
        let rows = match persistence.load() {
            Ok(rows) => rows,
            Err(err) => {
                log_warn!("discarding stored measurements: {}", err);
                Vec::new()
            }
        };
        Self::from_rows(config, rows, Some(persistence))
    }

    fn from_rows(
        config: LabConfig,
        rows: Vec<R>,
        persistence: Option<Box<dyn Persistence<R>>>,
    ) -> Self {
        let mut errors = ErrorMap::new();
        let mut rows: Vec<R> = if rows.is_empty() {
            vec![R::empty(1)]
        } else {
            rows.into_iter()
                .zip(1u32..)
                .map(|(mut row, id)| {
                    row.set_id(id);
                    Self::admit(row, &config, &mut errors)
                })
                .collect()
        };
        R::refit(&mut rows, &config);

        Self {
            config,
            snapshot: Snapshot {
                rows: Arc::from(rows),
                errors: Arc::new(errors),
                revision: 0,
            },
            persistence,
        }
    }

    /// Configuration this store validates and fits with
    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    /// Current state, cheap to clone and safe to hold across commands
    pub fn snapshot(&self) -> Snapshot<R> {
        self.snapshot.clone()
    }

    /// Current rows
    pub fn rows(&self) -> &[R] {
        self.snapshot.rows()
    }

    /// Error attached to one input, if any
    pub fn error(&self, id: u32, field: R::Field) -> Option<&ValidationError> {
        self.snapshot.error(id, field)
    }

    /// Errors attached to the inputs of one row
    pub fn errors_for_row(&self, id: u32) -> impl Iterator<Item = (R::Field, &ValidationError)> {
        self.snapshot.errors_for_row(id)
    }

    /// Add-row gate
    pub fn is_last_row_filled(&self) -> bool {
        self.snapshot.is_last_row_filled()
    }

    /// Apply textual input to one field
    ///
    /// Empty text clears the field. Malformed or out-of-bounds input is
    /// recorded under `(id, field)` and the row keeps its previous value.
    pub fn update_field(&mut self, id: u32, field: R::Field, raw: &str) -> Result<(), CommandError> {
        self.position(id)?;
        let value = parse_input(raw).and_then(|value| {
            self.config.bounds.validate(field.into(), value)?;
            Ok(value)
        });

        match value {
            Ok(value) => self.apply(id, field, value),
            Err(error) => Err(self.reject(id, field, error)),
        }
    }

    /// Apply an already parsed value to one field
    pub fn set_value(&mut self, id: u32, field: R::Field, value: Option<f64>) -> Result<(), CommandError> {
        self.position(id)?;
        match self.config.bounds.validate(field.into(), value) {
            Ok(()) => self.apply(id, field, value),
            Err(error) => Err(self.reject(id, field, error)),
        }
    }

    /// Append an empty row, returning its id
    pub fn add_row(&mut self) -> Result<u32, CommandError> {
        if !self.is_last_row_filled() {
            let id = self.snapshot.last().map_or(0, |row| row.id());
            log_debug!("add row rejected: row {} is incomplete", id);
            return Err(CommandError::RowIncomplete { id });
        }

        let id = next_id(self.rows().len());
        let mut rows = self.rows().to_vec();
        rows.push(R::empty(id));

        let errors = (*self.snapshot.errors).clone();
        self.commit(rows, errors);
        Ok(id)
    }

    /// Remove a row and renumber the rest densely from 1
    pub fn delete_row(&mut self, id: u32) -> Result<(), CommandError> {
        if self.rows().len() <= 1 {
            log_debug!("delete of row {} rejected: last remaining row", id);
            return Err(CommandError::LastRemainingRow);
        }
        let index = self.position(id)?;

        let mut rows = self.rows().to_vec();
        rows.remove(index);
        for (row, new_id) in rows.iter_mut().zip(1u32..) {
            row.set_id(new_id);
        }

        let errors = self
            .snapshot
            .errors
            .iter()
            .filter(|((row, _), _)| *row != id)
            .map(|(&(row, field), &error)| {
                let row = if row > id { row - 1 } else { row };
                ((row, field), error)
            })
            .collect();

        self.commit(rows, errors);
        Ok(())
    }

    /// Back to a single empty row; clears stored data
    pub fn reset(&mut self) {
        let mut rows = vec![R::empty(1)];
        R::refit(&mut rows, &self.config);
        self.snapshot = Snapshot {
            rows: Arc::from(rows),
            errors: Arc::new(ErrorMap::new()),
            revision: self.snapshot.revision + 1,
        };

        if let Some(persistence) = self.persistence.as_mut() {
            if let Err(err) = persistence.clear() {
                log_warn!("failed to clear stored measurements: {}", err);
            }
        }
    }

    /// Re-derive a restored row, keeping only values the bounds accept
    ///
    /// A rejected value is cleared and its error recorded, as if it had just
    /// been typed into an empty field.
    fn admit(row: R, config: &LabConfig, errors: &mut ErrorMap<R::Field>) -> R {
        let id = row.id();
        let mut row = row.rederive();
        for &field in R::FIELDS {
            if let Err(error) = config.bounds.validate(field.into(), row.raw(field)) {
                log_warn!("restored row {} {:?} rejected: {}", id, field, error);
                errors.insert((id, field), error);
                row = row.with_raw(field, None);
            }
        }
        row
    }

    fn position(&self, id: u32) -> Result<usize, CommandError> {
        self.rows()
            .iter()
            .position(|row| row.id() == id)
            .ok_or(CommandError::RowNotFound { id })
    }

    fn apply(&mut self, id: u32, field: R::Field, value: Option<f64>) -> Result<(), CommandError> {
        let index = self.position(id)?;

        let mut rows = self.rows().to_vec();
        rows[index] = rows[index].clone().with_raw(field, value);

        let mut errors = (*self.snapshot.errors).clone();
        errors.remove(&(id, field));

        self.commit(rows, errors);
        Ok(())
    }

    fn reject(&mut self, id: u32, field: R::Field, error: ValidationError) -> CommandError {
        log_debug!("row {} {:?} rejected: {}", id, field, error);

        let mut errors = (*self.snapshot.errors).clone();
        errors.insert((id, field), error);
        self.snapshot = Snapshot {
            rows: Arc::clone(&self.snapshot.rows),
            errors: Arc::new(errors),
            revision: self.snapshot.revision + 1,
        };

        CommandError::InvalidInput {
            id,
            field: field.into(),
            error,
        }
    }

    fn commit(&mut self, mut rows: Vec<R>, errors: ErrorMap<R::Field>) {
        R::refit(&mut rows, &self.config);
        self.snapshot = Snapshot {
            rows: Arc::from(rows),
            errors: Arc::new(errors),
            revision: self.snapshot.revision + 1,
        };
        self.persist();
    }

    fn persist(&mut self) {
        if let Some(persistence) = self.persistence.as_mut() {
            if let Err(err) = persistence.save(&self.snapshot.rows) {
                log_warn!("failed to save measurements: {}", err);
            }
        }
    }
}

fn next_id(len: usize) -> u32 {
    u32::try_from(len).map_or(u32::MAX, |len| len.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::{AcousticField, ResistanceField};

    fn filled_store(rows: &[(&str, &str)]) -> ResistanceStore {
        let mut store = ResistanceStore::new(LabConfig::default());
        for (i, (t, r)) in rows.iter().enumerate() {
            let id = if i == 0 { 1 } else { store.add_row().unwrap() };
            store.update_field(id, ResistanceField::TemperatureC, t).unwrap();
            store.update_field(id, ResistanceField::Resistance, r).unwrap();
        }
        store
    }

    #[test]
    fn starts_with_one_empty_row() {
        let store = AcousticStore::new(LabConfig::default());
        assert_eq!(store.rows().len(), 1);
        assert_eq!(store.rows()[0].id, 1);
        assert_eq!(store.rows()[0].frequency, Some(10.0));
        assert_eq!(store.snapshot().revision(), 0);
    }

    #[test]
    fn invalid_input_is_recorded_and_row_kept() {
        let mut store = filled_store(&[("27", "100")]);
        let before = store.rows()[0];

        let err = store.update_field(1, ResistanceField::Resistance, "-5").unwrap_err();
        assert!(matches!(err, CommandError::InvalidInput { id: 1, .. }));
        assert_eq!(store.rows()[0], before);
        assert_eq!(
            store.error(1, ResistanceField::Resistance),
            Some(&ValidationError::NotPositive { value: -5.0 })
        );
        assert_eq!(store.error(1, ResistanceField::TemperatureC), None);
        assert_eq!(store.errors_for_row(1).count(), 1);
    }

    #[test]
    fn valid_input_clears_the_error() {
        let mut store = filled_store(&[("27", "100")]);
        let _ = store.update_field(1, ResistanceField::TemperatureC, "500");
        assert!(store.error(1, ResistanceField::TemperatureC).is_some());

        store.update_field(1, ResistanceField::TemperatureC, "30").unwrap();
        assert!(store.error(1, ResistanceField::TemperatureC).is_none());
        assert_eq!(store.rows()[0].temperature_k, Some(303.0));
    }

    #[test]
    fn empty_text_clears_a_field() {
        let mut store = filled_store(&[("27", "100")]);
        store.update_field(1, ResistanceField::Resistance, "").unwrap();

        assert_eq!(store.rows()[0].resistance, None);
        assert_eq!(store.rows()[0].conductance, None);
        assert!(!store.is_last_row_filled());
    }

    #[test]
    fn add_row_is_gated() {
        let mut store = ResistanceStore::new(LabConfig::default());
        assert_eq!(store.add_row(), Err(CommandError::RowIncomplete { id: 1 }));

        store.update_field(1, ResistanceField::TemperatureC, "27").unwrap();
        assert_eq!(store.add_row(), Err(CommandError::RowIncomplete { id: 1 }));

        store.update_field(1, ResistanceField::Resistance, "100").unwrap();
        let _ = store.update_field(1, ResistanceField::Resistance, "0");
        assert_eq!(store.add_row(), Err(CommandError::RowIncomplete { id: 1 }));
        assert_eq!(store.rows().len(), 1);

        store.update_field(1, ResistanceField::Resistance, "100").unwrap();
        assert_eq!(store.add_row(), Ok(2));
        assert_eq!(store.rows().len(), 2);
    }

    #[test]
    fn delete_renumbers_densely() {
        let mut store = filled_store(&[("20", "100"), ("40", "80"), ("60", "60")]);

        store.delete_row(2).unwrap();

        let ids: Vec<u32> = store.rows().iter().map(|row| row.id).collect();
        assert_eq!(ids, [1, 2]);
        assert_eq!(store.rows()[1].temperature_c, Some(60.0));
    }

    #[test]
    fn delete_rekeys_errors() {
        let mut store = filled_store(&[("20", "100"), ("40", "80"), ("60", "60")]);
        let _ = store.update_field(2, ResistanceField::Resistance, "x");
        let _ = store.update_field(3, ResistanceField::TemperatureC, "999");

        store.delete_row(2).unwrap();

        assert_eq!(store.error(2, ResistanceField::Resistance), None);
        assert_eq!(
            store.error(2, ResistanceField::TemperatureC),
            Some(&ValidationError::OutOfRange { value: 999.0, min: 0.0, max: 200.0 })
        );
        assert_eq!(store.snapshot().errors().len(), 1);
    }

    #[test]
    fn last_row_cannot_be_deleted() {
        let mut store = AcousticStore::new(LabConfig::default());
        assert_eq!(store.delete_row(1), Err(CommandError::LastRemainingRow));
        assert_eq!(store.rows().len(), 1);
    }

    #[test]
    fn unknown_rows_are_rejected() {
        let mut store = filled_store(&[("20", "100"), ("40", "80")]);
        assert_eq!(
            store.update_field(7, ResistanceField::Resistance, "1"),
            Err(CommandError::RowNotFound { id: 7 })
        );
        assert_eq!(store.delete_row(9), Err(CommandError::RowNotFound { id: 9 }));
        assert!(store.snapshot().errors().is_empty());
    }

    #[test]
    fn snapshots_are_immutable() {
        let mut store = filled_store(&[("27", "100")]);
        let before = store.snapshot();

        store.update_field(1, ResistanceField::Resistance, "200").unwrap();
        let after = store.snapshot();

        assert_eq!(before.rows()[0].resistance, Some(100.0));
        assert_eq!(after.rows()[0].resistance, Some(200.0));
        assert!(after.revision() > before.revision());
        assert!(!after.same_rows(&before));
    }

    #[test]
    fn rejected_input_keeps_row_storage() {
        let mut store = filled_store(&[("27", "100")]);
        let before = store.snapshot();

        let _ = store.update_field(1, ResistanceField::Resistance, "abc");
        let after = store.snapshot();

        assert!(after.same_rows(&before));
        assert_eq!(after.revision(), before.revision() + 1);
    }

    #[test]
    fn acoustic_rows_derive_on_update() {
        let mut store = AcousticStore::new(LabConfig::default());
        store.update_field(1, AcousticField::X1, "0").unwrap();
        store.update_field(1, AcousticField::X2, "10").unwrap();
        store.update_field(1, AcousticField::DeltaI, "0.5").unwrap();

        let row = store.rows()[0];
        assert_eq!(row.path_length, Some(10.0));
        assert!((row.alpha.unwrap() + 0.30103).abs() < 1e-5);
        assert!(store.is_last_row_filled());
    }

    #[test]
    fn reset_returns_to_a_single_empty_row() {
        let mut store = filled_store(&[("20", "100"), ("40", "80")]);
        let _ = store.update_field(2, ResistanceField::Resistance, "-1");

        store.reset();

        assert_eq!(store.rows().len(), 1);
        assert_eq!(store.rows()[0], ResistanceMeasurement::empty(1));
        assert!(store.snapshot().errors().is_empty());
    }

    #[test]
    fn restored_acoustic_rows_are_validated() {
        let rows = vec![
            AcousticMeasurement::from_inputs(1, Some(0.0), Some(10.0), Some(1.5), Some(10.0)),
            AcousticMeasurement::from_inputs(9, Some(2.0), Some(6.0), Some(0.5), Some(-1.0)),
        ];

        let store = AcousticStore::from_rows(LabConfig::default(), rows, None);

        assert_eq!(
            store.error(1, AcousticField::DeltaI),
            Some(&ValidationError::OutOfRange { value: 1.5, min: 0.0, max: 1.0 })
        );
        assert_eq!(store.rows()[0].delta_i, None);
        assert_eq!(store.rows()[0].alpha, None);
        assert_eq!(store.rows()[1].id, 2);
        assert_eq!(store.rows()[1].frequency, None);
        assert!(store.error(2, AcousticField::Frequency).is_some());
        assert_eq!(store.errors_for_row(2).count(), 1);
        assert!(!store.is_last_row_filled());
    }
}
