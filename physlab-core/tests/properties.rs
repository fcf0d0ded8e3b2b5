//! Property tests over the derivation and store invariants

mod common;

use physlab_core::derivation::derive_resistance_fields;
use physlab_core::regression::least_squares;
use physlab_core::{
    AcousticMeasurement, CommandError, LabConfig, ResistanceField, ResistanceMeasurement,
    ResistanceStore,
};
use proptest::prelude::*;

fn optional(strategy: impl Strategy<Value = f64>) -> impl Strategy<Value = Option<f64>> {
    prop_oneof![Just(None), strategy.prop_map(Some)]
}

proptest! {
    #[test]
    // Derived fields are never NaN or infinite, whatever the raw inputs
    fn resistance_derivation_is_total(
        t in optional(-1.0e6..1.0e6f64),
        r in optional(-1.0e9..1.0e9f64),
    ) {
        let row = derive_resistance_fields(ResistanceMeasurement { temperature_c: t, resistance: r, ..Default::default() });

        for value in [row.temperature_k, row.inverse_temperature, row.conductance, row.ln_conductance] {
            prop_assert!(value.map_or(true, f64::is_finite));
        }
        if t.is_none() || r.is_none() {
            prop_assert_eq!(row.temperature_k, None);
            prop_assert_eq!(row.inverse_temperature, None);
            prop_assert_eq!(row.conductance, None);
            prop_assert_eq!(row.ln_conductance, None);
        }
    }

    #[test]
    fn acoustic_derivation_is_total(
        x1 in optional(0.0..100.0f64),
        x2 in optional(0.0..100.0f64),
        delta_i in optional(0.0..=1.0f64),
        frequency in optional(-5.0..50.0f64),
    ) {
        let row = AcousticMeasurement::from_inputs(1, x1, x2, delta_i, frequency);

        for value in [row.path_length, row.wavelength, row.alpha] {
            prop_assert!(value.map_or(true, f64::is_finite));
        }
    }

    #[test]
    // Deleting any row keeps ids dense and the order of the survivors
    fn delete_keeps_ids_dense(count in 2usize..8, victim in 0usize..8) {
        let mut store = ResistanceStore::new(LabConfig::default());
        for i in 0..count {
            let id = if i == 0 { 1 } else { store.add_row().unwrap() };
            store.update_field(id, ResistanceField::TemperatureC, &(10 * i).to_string()).unwrap();
            store.update_field(id, ResistanceField::Resistance, "100").unwrap();
        }
        let victim = (victim % count) as u32 + 1;
        let mut expected: Vec<Option<f64>> = store.rows().iter().map(|row| row.temperature_c).collect();
        expected.remove(victim as usize - 1);

        store.delete_row(victim).unwrap();

        let ids: Vec<u32> = store.rows().iter().map(|row| row.id).collect();
        let expected_ids: Vec<u32> = (1..count as u32).collect();
        prop_assert_eq!(ids, expected_ids);
        let temperatures: Vec<Option<f64>> = store.rows().iter().map(|row| row.temperature_c).collect();
        prop_assert_eq!(temperatures, expected);
    }

    #[test]
    // The activation energy is the same on every row
    fn energy_is_uniform(readings in prop::collection::vec((0.0..200.0f64, 1.0..1.0e6f64), 1..6)) {
        let mut store = ResistanceStore::new(LabConfig::default());
        for (i, (t, r)) in readings.iter().enumerate() {
            let id = if i == 0 { 1 } else { store.add_row().unwrap() };
            store.set_value(id, ResistanceField::TemperatureC, Some(*t)).unwrap();
            store.set_value(id, ResistanceField::Resistance, Some(*r)).unwrap();
        }

        let first = store.rows()[0].ionization_energy;
        prop_assert!(store.rows().iter().all(|row| row.ionization_energy == first));
        if readings.len() < 2 {
            prop_assert_eq!(first, None);
        }
    }

    #[test]
    fn add_row_never_follows_an_empty_row(t in optional(0.0..200.0f64)) {
        let mut store = ResistanceStore::new(LabConfig::default());
        store.set_value(1, ResistanceField::TemperatureC, t).unwrap();

        prop_assert_eq!(store.add_row(), Err(CommandError::RowIncomplete { id: 1 }));
        prop_assert_eq!(store.rows().len(), 1);
    }

    #[test]
    fn exact_lines_are_recovered(slope in -100.0..100.0f64, intercept in -100.0..100.0f64) {
        let points: Vec<(f64, f64)> = (0..5)
            .map(|i| {
                let x = i as f64;
                (x, slope * x + intercept)
            })
            .collect();
        let fit = least_squares(&points).unwrap();

        prop_assert!((fit.slope - slope).abs() < 1e-6);
        prop_assert!((fit.intercept - intercept).abs() < 1e-6);
    }
}

#[test]
fn identity_line_fit() {
    let fit = least_squares(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]).unwrap();

    common::assert_close(fit.slope, 1.0);
    assert!(fit.intercept.abs() < 1e-12);
    common::assert_close(fit.correlation, 1.0);
}
