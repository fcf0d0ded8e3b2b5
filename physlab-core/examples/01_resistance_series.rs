//! Semiconductor Resistance Example
//!
//! Enters a heating series of a semiconductor sample, shows the derived
//! columns and the activation energy of the series.
//!
//! ## What You'll Learn
//!
//! - Typing raw values into a store
//! - How invalid input and premature row additions are reported
//! - Reading the broadcast activation energy
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_resistance_series
//! ```

use physlab_core::{
    ActivationMethod, CommandError, LabConfig, ResistanceField, ResistanceStore,
    ResistanceSummary,
};

fn main() -> Result<(), CommandError> {
    println!("PhysLab Resistance Series Example");
    println!("=================================\n");

    let mut store = ResistanceStore::new(LabConfig::default());

    // Adding before the first row is filled is refused
    if let Err(e) = store.add_row() {
        println!("add row: {e}\n");
    }

    let readings = [
        ("20", "1520"),
        ("45", "830"),
        ("70", "410"),
        ("95", "215"),
        ("120", "118"),
    ];
    for (i, (t, r)) in readings.iter().enumerate() {
        let id = if i == 0 { 1 } else { store.add_row()? };
        store.update_field(id, ResistanceField::TemperatureC, t)?;
        store.update_field(id, ResistanceField::Resistance, r)?;
    }

    // Out of the bench range; recorded against the field, row unchanged
    if let Err(e) = store.update_field(3, ResistanceField::TemperatureC, "250") {
        println!("update: {e}");
    }
    store.update_field(3, ResistanceField::TemperatureC, "70")?;
    println!();

    println!("  №   t (°C)   T (K)    1/T (K⁻¹)    R (Ω)     lnG");
    for row in store.rows() {
        println!(
            "{:3} {:8.2} {:7.2} {:12.4e} {:8.1} {:8.4}",
            row.id,
            row.temperature_c.unwrap_or_default(),
            row.temperature_k.unwrap_or_default(),
            row.inverse_temperature.unwrap_or_default(),
            row.resistance.unwrap_or_default(),
            row.ln_conductance.unwrap_or_default(),
        );
    }
    println!();

    let summary = ResistanceSummary::from_rows(store.rows());
    if let (Some(joules), Some(ev)) = (summary.ionization_energy, summary.ionization_energy_ev()) {
        println!("Two-point activation energy: {joules:.4e} J ({ev:.4} eV)");
    }

    // The same series fitted over every row
    let mut fitted = ResistanceStore::new(LabConfig::with_method(ActivationMethod::LeastSquares));
    for (i, row) in store.rows().iter().enumerate() {
        let id = if i == 0 { 1 } else { fitted.add_row()? };
        fitted.set_value(id, ResistanceField::TemperatureC, row.temperature_c)?;
        fitted.set_value(id, ResistanceField::Resistance, row.resistance)?;
    }
    if let Some(joules) = fitted.rows()[0].ionization_energy {
        println!("Least-squares activation energy: {joules:.4e} J");
    }
    if let Some(trend) = summary.trend {
        println!("Arrhenius fit correlation: {:.4}", trend.correlation);
    }

    // Deleting renumbers the rest
    store.delete_row(2)?;
    let ids: Vec<u32> = store.rows().iter().map(|row| row.id).collect();
    println!("\nAfter deleting row 2: ids {ids:?}");

    Ok(())
}
