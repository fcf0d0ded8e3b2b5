//! Rows of the semiconductor resistance experiment

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::LabConfig;
use crate::derivation::derive_resistance_fields;
use crate::regression::activation_energy;
use crate::traits::Record;

use super::FieldKind;

/// One temperature/resistance reading and everything derived from it
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResistanceMeasurement {
    /// Dense 1-based row number
    pub id: u32,
    /// Sample temperature, °C (raw)
    pub temperature_c: Option<f64>,
    /// `temperature_c + 273`, K
    pub temperature_k: Option<f64>,
    /// `1 / temperature_k`, K⁻¹
    pub inverse_temperature: Option<f64>,
    /// Sample resistance, Ω (raw)
    pub resistance: Option<f64>,
    /// `1 / resistance`, Ω⁻¹
    pub conductance: Option<f64>,
    /// `ln(conductance)`
    pub ln_conductance: Option<f64>,
    /// Activation energy of the whole series, J, identical on every row
    pub ionization_energy: Option<f64>,
}

/// Raw fields of a [`ResistanceMeasurement`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResistanceField {
    /// `temperature_c`
    TemperatureC,
    /// `resistance`
    Resistance,
}

impl From<ResistanceField> for FieldKind {
    fn from(field: ResistanceField) -> Self {
        match field {
            ResistanceField::TemperatureC => FieldKind::TemperatureC,
            ResistanceField::Resistance => FieldKind::Resistance,
        }
    }
}

impl ResistanceMeasurement {
    /// A row with both raw inputs set, derived fields computed
    pub fn from_inputs(id: u32, temperature_c: Option<f64>, resistance: Option<f64>) -> Self {
        derive_resistance_fields(Self {
            id,
            temperature_c,
            resistance,
            ..Self::default()
        })
    }

    /// Both derived axes of the Arrhenius plot, when present
    pub fn arrhenius_point(&self) -> Option<(f64, f64)> {
        Some((self.inverse_temperature?, self.ln_conductance?))
    }
}

impl Record for ResistanceMeasurement {
    type Field = ResistanceField;
    const FIELDS: &'static [Self::Field] = &[ResistanceField::TemperatureC, ResistanceField::Resistance];

    fn empty(id: u32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn raw(&self, field: Self::Field) -> Option<f64> {
        match field {
            ResistanceField::TemperatureC => self.temperature_c,
            ResistanceField::Resistance => self.resistance,
        }
    }

    fn with_raw(mut self, field: Self::Field, value: Option<f64>) -> Self {
        match field {
            ResistanceField::TemperatureC => self.temperature_c = value,
            ResistanceField::Resistance => self.resistance = value,
        }
        derive_resistance_fields(self)
    }

    fn rederive(self) -> Self {
        derive_resistance_fields(self)
    }

    fn is_filled(&self) -> bool {
        self.temperature_c.is_some() && self.resistance.is_some()
    }

    fn refit(rows: &mut [Self], config: &LabConfig) {
        let energy = activation_energy(rows, config.activation_method);
        for row in rows.iter_mut() {
            row.ionization_energy = energy;
        }
    }
}
