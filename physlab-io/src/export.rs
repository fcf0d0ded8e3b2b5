//! Spreadsheet export of the resistance worksheet
//!
//! One CSV row per measurement under a fixed header. Cells are formatted
//! the way the lab's report templates expect:
//!
//! | Column       | Format                          |
//! |--------------|---------------------------------|
//! | `№`, t, R    | shortest round-trip form        |
//! | T            | fixed, 2 decimals               |
//! | 1/T, G, ΔEᵢ  | scientific, 4 fraction digits   |
//! | lnG          | fixed, 4 decimals               |
//!
//! Missing values are empty cells.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::debug;
use physlab_core::ResistanceMeasurement;

use crate::IoResult;

/// Header row, in column order
pub const COLUMNS: [&str; 8] = [
    "№",
    "t (°C)",
    "T (K)",
    "1/T (K⁻¹)",
    "R (Ом)",
    "G (Ом⁻¹)",
    "lnG",
    "ΔEᵢ (Дж)",
];

/// `value` with `decimals` digits after the point
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// `value` as `d.dddde±x` with `digits` fraction digits
pub fn format_scientific(value: f64, digits: usize) -> String {
    let formatted = format!("{value:.digits$e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

fn cell(value: Option<f64>, format: impl Fn(f64) -> String) -> String {
    value.map(format).unwrap_or_default()
}

/// The eight formatted cells of one row
pub fn describe_row(row: &ResistanceMeasurement) -> [String; 8] {
    [
        row.id.to_string(),
        cell(row.temperature_c, |v| v.to_string()),
        cell(row.temperature_k, |v| format_fixed(v, 2)),
        cell(row.inverse_temperature, |v| format_scientific(v, 4)),
        cell(row.resistance, |v| v.to_string()),
        cell(row.conductance, |v| format_scientific(v, 4)),
        cell(row.ln_conductance, |v| format_fixed(v, 4)),
        cell(row.ionization_energy, |v| format_scientific(v, 4)),
    ]
}

/// Write `rows` as CSV to `writer`
pub fn export_rows<W: Write>(rows: &[ResistanceMeasurement], writer: W) -> IoResult<()> {
    let mut csv = csv::WriterBuilder::new().has_headers(false).from_writer(writer);

    csv.write_record(COLUMNS)?;
    for row in rows {
        csv.write_record(describe_row(row))?;
    }
    csv.flush()?;

    debug!("exported {} rows", rows.len());
    Ok(())
}

/// Write `rows` as a CSV file at `path`
pub fn export_to_path(rows: &[ResistanceMeasurement], path: impl AsRef<Path>) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    export_rows(rows, file)
}
