//! Rows of the acousto-optic attenuation experiment

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::LabConfig;
use crate::constants::DEFAULT_FREQUENCY_MHZ;
use crate::derivation::derive_acoustic_fields;
use crate::traits::Record;

use super::FieldKind;

/// One pair of probe positions with the measured intensity ratio
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AcousticMeasurement {
    /// Dense 1-based row number
    pub id: u32,
    /// First probe position, mm (raw)
    pub x1: Option<f64>,
    /// Second probe position, mm (raw)
    pub x2: Option<f64>,
    /// Intensity ratio ΔI/I₀ (raw)
    pub delta_i: Option<f64>,
    /// Ultrasound frequency, MHz (raw)
    pub frequency: Option<f64>,
    /// `x2 - x1`, mm
    pub path_length: Option<f64>,
    /// `wave speed / frequency`, mm
    pub wavelength: Option<f64>,
    /// Attenuation coefficient, dB/mm
    pub alpha: Option<f64>,
}

/// Raw fields of an [`AcousticMeasurement`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AcousticField {
    /// `x1`
    X1,
    /// `x2`
    X2,
    /// `deltaI`
    DeltaI,
    /// `frequency`
    Frequency,
}

impl From<AcousticField> for FieldKind {
    fn from(field: AcousticField) -> Self {
        match field {
            AcousticField::X1 => FieldKind::X1,
            AcousticField::X2 => FieldKind::X2,
            AcousticField::DeltaI => FieldKind::DeltaI,
            AcousticField::Frequency => FieldKind::Frequency,
        }
    }
}

impl AcousticMeasurement {
    /// A row with every raw input set, derived fields computed
    pub fn from_inputs(
        id: u32,
        x1: Option<f64>,
        x2: Option<f64>,
        delta_i: Option<f64>,
        frequency: Option<f64>,
    ) -> Self {
        derive_acoustic_fields(Self {
            id,
            x1,
            x2,
            delta_i,
            frequency,
            ..Self::default()
        })
    }

    /// `(x2, alpha)` for the attenuation chart, when both are present
    pub fn attenuation_point(&self) -> Option<(f64, f64)> {
        // x1 and deltaI are implied by alpha
        Some((self.x2?, self.alpha?))
    }
}

impl Record for AcousticMeasurement {
    type Field = AcousticField;
    const FIELDS: &'static [Self::Field] = &[
        AcousticField::X1,
        AcousticField::X2,
        AcousticField::DeltaI,
        AcousticField::Frequency,
    ];

    fn empty(id: u32) -> Self {
        Self::from_inputs(id, None, None, None, Some(DEFAULT_FREQUENCY_MHZ))
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn raw(&self, field: Self::Field) -> Option<f64> {
        match field {
            AcousticField::X1 => self.x1,
            AcousticField::X2 => self.x2,
            AcousticField::DeltaI => self.delta_i,
            AcousticField::Frequency => self.frequency,
        }
    }

    fn with_raw(mut self, field: Self::Field, value: Option<f64>) -> Self {
        match field {
            AcousticField::X1 => self.x1 = value,
            AcousticField::X2 => self.x2 = value,
            AcousticField::DeltaI => self.delta_i = value,
            AcousticField::Frequency => self.frequency = value,
        }
        derive_acoustic_fields(self)
    }

    fn rederive(self) -> Self {
        derive_acoustic_fields(self)
    }

    fn is_filled(&self) -> bool {
        self.x1.is_some() && self.x2.is_some() && self.delta_i.is_some() && self.frequency.is_some()
    }

    fn refit(_rows: &mut [Self], _config: &LabConfig) {}
}
