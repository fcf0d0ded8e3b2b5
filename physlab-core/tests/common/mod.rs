//! Shared fixtures for the store integration tests
//!
//! - Worksheet builders from `(t, R)` pairs
//! - An in-memory persistence double that records every call
//! - A persistence double that always fails

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use physlab_core::{
    CommandError, LabConfig, Persistence, PersistenceError, ResistanceField,
    ResistanceMeasurement, ResistanceStore,
};

/// Relative tolerance for derived quantities
pub const TOLERANCE: f64 = 1e-9;

/// Assert `actual ≈ expected` within [`TOLERANCE`]
pub fn assert_close(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0e-300);
    assert!(
        (actual - expected).abs() <= TOLERANCE * scale,
        "expected {expected}, got {actual}"
    );
}

/// Type one `(t, R)` pair per row, adding rows as needed
pub fn fill_resistance(store: &mut ResistanceStore, readings: &[(&str, &str)]) -> Result<(), CommandError> {
    for (i, (t, r)) in readings.iter().enumerate() {
        let id = if i == 0 { store.rows()[0].id } else { store.add_row()? };
        store.update_field(id, ResistanceField::TemperatureC, t)?;
        store.update_field(id, ResistanceField::Resistance, r)?;
    }
    Ok(())
}

/// A store with the given readings and default configuration
pub fn resistance_worksheet(readings: &[(&str, &str)]) -> ResistanceStore {
    let mut store = ResistanceStore::new(LabConfig::default());
    fill_resistance(&mut store, readings).expect("fixture readings are valid");
    store
}

/// What a [`RecordingPersistence`] has seen
#[derive(Debug, Default)]
pub struct Recorded {
    pub stored: Option<Vec<ResistanceMeasurement>>,
    pub saves: usize,
    pub clears: usize,
}

/// In-memory persistence double, shared with the test through an `Arc`
#[derive(Debug, Clone, Default)]
pub struct RecordingPersistence {
    pub state: Arc<Mutex<Recorded>>,
}

impl RecordingPersistence {
    pub fn with_rows(rows: Vec<ResistanceMeasurement>) -> Self {
        let persistence = Self::default();
        persistence.state.lock().unwrap().stored = Some(rows);
        persistence
    }

    pub fn saves(&self) -> usize {
        self.state.lock().unwrap().saves
    }

    pub fn clears(&self) -> usize {
        self.state.lock().unwrap().clears
    }

    pub fn stored(&self) -> Option<Vec<ResistanceMeasurement>> {
        self.state.lock().unwrap().stored.clone()
    }
}

impl Persistence<ResistanceMeasurement> for RecordingPersistence {
    fn load(&mut self) -> Result<Vec<ResistanceMeasurement>, PersistenceError> {
        Ok(self.stored().unwrap_or_default())
    }

    fn save(&mut self, rows: &[ResistanceMeasurement]) -> Result<(), PersistenceError> {
        let mut state = self.state.lock().unwrap();
        state.stored = Some(rows.to_vec());
        state.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        let mut state = self.state.lock().unwrap();
        state.stored = None;
        state.clears += 1;
        Ok(())
    }
}

/// Persistence whose every call fails
#[derive(Debug, Clone, Copy, Default)]
pub struct BrokenPersistence;

impl Persistence<ResistanceMeasurement> for BrokenPersistence {
    fn load(&mut self) -> Result<Vec<ResistanceMeasurement>, PersistenceError> {
        Err(PersistenceError::Serialization {
            reason: "unexpected end of input".into(),
        })
    }

    fn save(&mut self, _rows: &[ResistanceMeasurement]) -> Result<(), PersistenceError> {
        Err(PersistenceError::Backend {
            reason: "quota exceeded".into(),
        })
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        Err(PersistenceError::Backend {
            reason: "quota exceeded".into(),
        })
    }
}
