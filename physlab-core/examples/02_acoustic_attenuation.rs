//! Acousto-Optic Attenuation Example
//!
//! Records the diffracted light intensity along an ultrasound path, fits the
//! attenuation trend and prints the reference frequency-dependence fits.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_acoustic_attenuation
//! ```

use physlab_core::reference::frequency_dependence;
use physlab_core::{AcousticField, AcousticStore, AcousticSummary, CommandError, LabConfig};

fn main() -> Result<(), CommandError> {
    println!("PhysLab Acoustic Attenuation Example");
    println!("====================================\n");

    let mut store = AcousticStore::new(LabConfig::default());
    let readings = [("2", "6", "0.92"), ("2", "10", "0.81"), ("2", "14", "0.70"), ("2", "18", "0.62")];

    for (i, (x1, x2, delta_i)) in readings.iter().enumerate() {
        let id = if i == 0 { 1 } else { store.add_row()? };
        store.update_field(id, AcousticField::X1, x1)?;
        store.update_field(id, AcousticField::X2, x2)?;
        store.update_field(id, AcousticField::DeltaI, delta_i)?;
    }

    for row in store.rows() {
        println!(
            "row {}: L = {:?} mm, λ = {:?} mm, α = {:.4?} dB/mm",
            row.id, row.path_length, row.wavelength, row.alpha
        );
    }

    let summary = AcousticSummary::from_rows(store.rows());
    if let Some(stats) = summary.attenuation {
        println!("\nα mean {:.4}, std dev {:.4} over {} points", stats.mean, stats.std_dev, stats.count);
    }
    if let Some(equation) = summary.equation() {
        println!("{equation}");
    }

    println!("\nReference frequency dependence:");
    for series in frequency_dependence() {
        if let Some(fit) = series.fit() {
            println!("  {:40} {}", series.label, fit.equation());
        }
    }

    Ok(())
}
