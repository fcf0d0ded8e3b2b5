//! Laboratory configuration
//!
//! Everything a deployment may tune: the input bound table and the method
//! used for the activation energy. `LabConfig` is `Copy` so every store
//! keeps its own.
//!
//! ```rust
//! use physlab_core::{ActivationMethod, LabConfig, ValidationBounds};
//!
//! let config = LabConfig {
//!     bounds: ValidationBounds::extended(),
//!     activation_method: ActivationMethod::LeastSquares,
//! };
//! assert_eq!(config.bounds.temperature_max_c, 1000.0);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::validators::ValidationBounds;

/// How the activation energy is extracted from `(1/T, lnG)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActivationMethod {
    /// Slope between the lowest- and highest-temperature valid rows
    #[default]
    TwoPoint,
    /// Ordinary least-squares slope over every valid row
    LeastSquares,
}

/// Configuration shared by the stores of one laboratory session
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabConfig {
    /// Input bound table
    pub bounds: ValidationBounds,
    /// Activation energy method
    pub activation_method: ActivationMethod,
}

impl LabConfig {
    /// Lab bench bounds with the given activation method
    pub fn with_method(activation_method: ActivationMethod) -> Self {
        Self {
            bounds: ValidationBounds::default(),
            activation_method,
        }
    }
}
