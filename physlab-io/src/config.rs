//! Loading laboratory configuration from JSON
//!
//! ```json
//! {
//!   "bounds": { "temperature_min_c": -50.0, "temperature_max_c": 300.0 },
//!   "activation_method": "least_squares"
//! }
//! ```
//!
//! Keys left out keep their defaults.

use std::fs;
use std::path::Path;

use log::info;
use physlab_core::LabConfig;

use crate::IoResult;

/// Parse a configuration document
pub fn parse_config(json: &str) -> IoResult<LabConfig> {
    Ok(serde_json::from_str(json)?)
}

/// Read a configuration file
pub fn load_config(path: impl AsRef<Path>) -> IoResult<LabConfig> {
    let path = path.as_ref();
    let config = parse_config(&fs::read_to_string(path)?)?;
    info!("loaded configuration from {}", path.display());
    Ok(config)
}
