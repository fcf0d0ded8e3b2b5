//! Measurement engine for the physics teaching lab
//!
//! Turns raw bench readings into derived quantities and fitted results for
//! two experiments: the temperature dependence of a semiconductor's
//! resistance, and acousto-optic attenuation of ultrasound in a crystal.
//!
//! Key properties:
//! - Every derived field is `None` rather than NaN or infinity
//! - Rows are numbered densely from 1 and never fewer than one
//! - Collection-wide results are refit from scratch on every change
//!
//! ```
//! use physlab_core::{LabConfig, ResistanceField, ResistanceStore};
//!
//! let mut store = ResistanceStore::new(LabConfig::default());
//! store.update_field(1, ResistanceField::TemperatureC, "27")?;
//! store.update_field(1, ResistanceField::Resistance, "100")?;
//!
//! let row = &store.rows()[0];
//! assert_eq!(row.temperature_k, Some(300.0));
//! assert_eq!(row.conductance, Some(0.01));
//! # Ok::<(), physlab_core::CommandError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

pub mod analysis;
pub mod config;
pub mod constants;
pub mod derivation;
pub mod errors;
pub mod measurement;
pub mod reference;
pub mod regression;
pub mod store;
pub mod traits;
pub mod validators;

// Public API
pub use analysis::{AcousticSummary, ResistanceSummary};
pub use config::{ActivationMethod, LabConfig};
pub use errors::{CommandError, PersistenceError, ValidationError, ValidationResult};
pub use measurement::{
    AcousticField,
    AcousticMeasurement,
    FieldKind,
    ResistanceField,
    ResistanceMeasurement,
};
pub use store::{AcousticStore, Laboratory, MeasurementStore, ResistanceStore, Snapshot};
pub use traits::{Persistence, Record, Validator};
pub use validators::{parse_input, ValidationBounds};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
