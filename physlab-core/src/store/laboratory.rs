//! Both experiment collections behind one handle

use alloc::boxed::Box;

use crate::analysis::{AcousticSummary, ResistanceSummary};
use crate::config::LabConfig;
use crate::measurement::ResistanceMeasurement;
use crate::traits::Persistence;

use super::{AcousticStore, ResistanceStore};

/// The two independent worksheets of the lab
///
/// Only the resistance worksheet is persisted; the acoustic one lives for
/// the session.
pub struct Laboratory {
    resistance: ResistanceStore,
    acoustic: AcousticStore,
}

impl Laboratory {
    /// Fresh worksheets, nothing persisted
    pub fn new(config: LabConfig) -> Self {
        Self {
            resistance: ResistanceStore::new(config),
            acoustic: AcousticStore::new(config),
        }
    }

    /// Resistance worksheet restored from and saved to `persistence`
    pub fn with_persistence(
        config: LabConfig,
        persistence: Box<dyn Persistence<ResistanceMeasurement>>,
    ) -> Self {
        Self {
            resistance: ResistanceStore::restore(config, persistence),
            acoustic: AcousticStore::new(config),
        }
    }

    /// Acoustic worksheet restored too
    pub fn with_stores(resistance: ResistanceStore, acoustic: AcousticStore) -> Self {
        Self { resistance, acoustic }
    }

    /// Resistance worksheet
    pub fn resistance(&self) -> &ResistanceStore {
        &self.resistance
    }

    /// Resistance worksheet, for commands
    pub fn resistance_mut(&mut self) -> &mut ResistanceStore {
        &mut self.resistance
    }

    /// Acoustic worksheet
    pub fn acoustic(&self) -> &AcousticStore {
        &self.acoustic
    }

    /// Acoustic worksheet, for commands
    pub fn acoustic_mut(&mut self) -> &mut AcousticStore {
        &mut self.acoustic
    }

    /// Statistics and Arrhenius trend of the resistance worksheet
    pub fn resistance_summary(&self) -> ResistanceSummary {
        ResistanceSummary::from_rows(self.resistance.rows())
    }

    /// Statistics and regression of the acoustic worksheet
    pub fn acoustic_summary(&self) -> AcousticSummary {
        AcousticSummary::from_rows(self.acoustic.rows())
    }
}
