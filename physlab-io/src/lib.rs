//! File-side collaborators for PhysLab measurement series
//!
//! - [`storage`]: key-value persistence of a collection as JSON
//! - [`export`]: spreadsheet (CSV) export of the resistance worksheet
//! - [`config`]: loading a [`LabConfig`](physlab_core::LabConfig) from disk
//!
//! ```no_run
//! use physlab_core::{LabConfig, ResistanceMeasurement, ResistanceStore};
//! use physlab_io::storage::{FileBackend, JsonPersistence};
//!
//! let persistence = JsonPersistence::<_, ResistanceMeasurement>::new(FileBackend::new("./lab-data"));
//! let store = ResistanceStore::restore(LabConfig::default(), Box::new(persistence));
//!
//! let file = std::fs::File::create("measurements.csv")?;
//! physlab_io::export::export_rows(store.rows(), file)?;
//! # Ok::<(), physlab_io::IoError>(())
//! ```

pub mod config;
pub mod export;
pub mod storage;

use physlab_core::PersistenceError;
use thiserror::Error;

pub use config::load_config;
pub use export::{describe_row, export_rows, export_to_path};
pub use storage::{FileBackend, JsonPersistence, KeyValueStore, MemoryBackend, STORAGE_KEY};

/// Errors from file, JSON and CSV handling
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or mismatched JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Shared backend state unusable after a panic elsewhere
    #[error("Backend poisoned")]
    Poisoned,
}

impl From<IoError> for PersistenceError {
    fn from(err: IoError) -> Self {
        match err {
            IoError::Json(e) => PersistenceError::Serialization {
                reason: e.to_string(),
            },
            other => PersistenceError::Backend {
                reason: other.to_string(),
            },
        }
    }
}

/// Result alias for this crate
pub type IoResult<T> = Result<T, IoError>;
