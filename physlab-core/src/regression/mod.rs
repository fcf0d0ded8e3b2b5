//! Regression and Fit Module
//!
//! Pure functions over a whole collection (or any point sequence) that
//! produce one fitted model. None of them mutate their input, and every one
//! reports insufficient or degenerate data as `None` instead of letting a
//! NaN or an infinity reach the caller.
//!
//! ## Algorithms
//!
//! | Model                         | Used for                                   |
//! |-------------------------------|--------------------------------------------|
//! | Two-point slope               | Activation energy (default)                |
//! | Ordinary least squares        | Resistance trend line, acoustic regression |
//! | Quadratic through the origin  | Frequency-dependence reference curves      |
//!
//! ## Activation Energy
//!
//! From the lowest-temperature and highest-temperature valid rows:
//!
//! ```text
//! A    = (lnG₁ - lnG₂) / (1/T₁ - 1/T₂)
//! ΔEᵢ  = 2·k·A
//! ```
//!
//! The endpoint estimate is sensitive to outliers at the extremes. The
//! least-squares slope over every valid row is available through
//! [`ActivationMethod::LeastSquares`](crate::config::ActivationMethod).

mod activation;
mod linear;
mod quadratic;
mod stats;

pub use activation::{
    activation_energy, energy_from_slope, least_squares_activation_energy,
    two_point_activation_energy,
};
pub use linear::{least_squares, LinearFit};
pub use quadratic::{fit_through_origin, sample_range, QuadraticFit, MAX_SAMPLES};
pub use stats::{describe, value_range, Summary};
