//! Reference frequency-dependence data
//!
//! Four published PbMoO₄ series of attenuation squared against ultrasound
//! frequency, each fitted with `α² = b·f²`. They are static; no user data
//! feeds into them.

use alloc::vec::Vec;

use crate::regression::{fit_through_origin, QuadraticFit};

/// Frequency span the fitted curves are drawn over, MHz
pub const CURVE_RANGE_MHZ: (f64, f64) = (3.0, 13.0);

/// Sampling step of the fitted curves, MHz
pub const CURVE_STEP_MHZ: f64 = 0.1;

/// One reference series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencySeries {
    /// Crystal and conditions
    pub label: &'static str,
    /// `(f, α²)` pairs
    pub points: &'static [(f64, f64)],
}

impl FrequencySeries {
    /// Coefficient of `α² = b·f²` for this series
    pub fn fit(&self) -> Option<QuadraticFit> {
        fit_through_origin(self.points)
    }

    /// Fitted curve sampled over [`CURVE_RANGE_MHZ`]
    pub fn curve(&self) -> Vec<(f64, f64)> {
        self.fit().map_or_else(Vec::new, |fit| {
            fit.curve(CURVE_RANGE_MHZ.0, CURVE_RANGE_MHZ.1, CURVE_STEP_MHZ)
        })
    }
}

static SERIES: [FrequencySeries; 4] = [
    FrequencySeries {
        label: "PbMoO₄ colored, room temperature",
        points: &[(3.0, 1.5), (5.0, 3.0), (7.0, 5.0), (9.0, 8.0), (11.0, 11.0), (13.0, 14.0)],
    },
    FrequencySeries {
        label: "PbMoO₄ colorless, room temperature",
        points: &[(3.0, 1.2), (5.0, 2.5), (7.0, 4.0), (9.0, 6.0), (11.0, 9.0), (13.0, 12.0)],
    },
    FrequencySeries {
        label: "PbMoO₄:Na 0.5 mol%, 250 °C",
        points: &[(3.0, 1.3), (5.0, 2.8), (7.0, 4.5), (9.0, 7.0), (11.0, 10.0), (13.0, 13.0)],
    },
    FrequencySeries {
        label: "PbMoO₄:Na 0.1 mol%, 250 °C",
        points: &[(3.0, 1.0), (5.0, 2.0), (7.0, 3.5), (9.0, 5.5), (11.0, 8.0), (13.0, 11.0)],
    },
];

/// All reference series
pub fn frequency_dependence() -> &'static [FrequencySeries] {
    &SERIES
}
