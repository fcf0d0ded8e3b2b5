//! Measurement Records
//!
//! One row type per experiment. Raw fields are what the user types; derived
//! fields are recomputed by [`crate::derivation`] whenever a raw field
//! changes, so a row is always internally consistent.
//!
//! Field enums name the editable raw fields of each row kind and convert
//! into [`FieldKind`], the discriminator used by the validators.

mod acoustic;
mod resistance;

pub use acoustic::{AcousticField, AcousticMeasurement};
pub use resistance::{ResistanceField, ResistanceMeasurement};

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every editable input quantity across both experiments
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldKind {
    /// Sample temperature, °C
    TemperatureC,
    /// Sample resistance, Ω
    Resistance,
    /// First probe position, mm
    X1,
    /// Second probe position, mm
    X2,
    /// Intensity ratio ΔI/I₀
    DeltaI,
    /// Ultrasound frequency, MHz
    Frequency,
}

impl FieldKind {
    /// All field kinds, resistance fields first
    pub const ALL: [FieldKind; 6] = [
        FieldKind::TemperatureC,
        FieldKind::Resistance,
        FieldKind::X1,
        FieldKind::X2,
        FieldKind::DeltaI,
        FieldKind::Frequency,
    ];

    /// Column name, as used in persisted data
    pub const fn name(&self) -> &'static str {
        match self {
            FieldKind::TemperatureC => "temperature_c",
            FieldKind::Resistance => "resistance",
            FieldKind::X1 => "x1",
            FieldKind::X2 => "x2",
            FieldKind::DeltaI => "deltaI",
            FieldKind::Frequency => "frequency",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
