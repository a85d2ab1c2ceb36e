// ─────────────────────────────────────────────────────────────────────
// TSV-EM Core — Lifetime Study Integration Tests
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! End-to-end runs through the public surface: constants (including JSON
//! overrides) in, lifetime record out.

use tsvem_core::run_lifetime_study;
use tsvem_types::config::PhysicalConstants;
use tsvem_types::error::EmError;

#[test]
fn baseline_study_matches_reference_lifetimes() {
    let record = run_lifetime_study(4, &[2.79, 6.76, 14.7], &PhysicalConstants::default())
        .expect("Baseline study must run");

    let years: Vec<f64> = record.iter().map(|r| r.lifetime_years()).collect();
    let expected = [10.93, 18.38, 48.64];
    for (got, want) in years.iter().zip(expected) {
        assert!(
            (got - want).abs() < 0.01,
            "Expected ~{want} years, got {got:.2}"
        );
    }
}

#[test]
fn hotter_process_corner_fails_faster() {
    let baseline = PhysicalConstants::default();
    let hot = PhysicalConstants {
        temperature: baseline.temperature + 50.0,
        ..baseline.clone()
    };
    let limits = [2.79, 6.76, 14.7];

    let cold_record = run_lifetime_study(4, &limits, &baseline).unwrap();
    let hot_record = run_lifetime_study(4, &limits, &hot).unwrap();
    assert!(
        hot_record[0].lifetime_seconds < cold_record[0].lifetime_seconds,
        "Raising the temperature must shorten the 4x lifetime"
    );
}

#[test]
fn zero_max_parallelism_is_a_configuration_error() {
    let err = run_lifetime_study(0, &[], &PhysicalConstants::default()).unwrap_err();
    assert!(
        matches!(err, EmError::InvalidConfiguration(_)),
        "Expected InvalidConfiguration, got {err}"
    );
}

#[test]
fn constants_load_from_json_override_file() {
    let path = std::env::temp_dir().join("tsvem_corner_453k.json");
    std::fs::write(&path, r#"{ "idd0": 60.0e-3 }"#).unwrap();

    let constants = PhysicalConstants::from_file(path.to_str().unwrap()).unwrap();
    assert_eq!(constants.idd0, 60.0e-3);
    assert_eq!(
        constants.temperature,
        PhysicalConstants::default().temperature
    );

    std::fs::remove_file(&path).ok();
}

#[test]
fn invalid_override_file_is_rejected() {
    let path = std::env::temp_dir().join("tsvem_bad_corner.json");
    std::fs::write(&path, r#"{ "temperature": -5.0 }"#).unwrap();

    let err = PhysicalConstants::from_file(path.to_str().unwrap()).unwrap_err();
    assert!(
        matches!(err, EmError::InvalidConstant { name: "temperature", .. }),
        "Expected InvalidConstant, got {err}"
    );

    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_override_file_surfaces_io_error() {
    let err = PhysicalConstants::from_file("/nonexistent/tsvem.json").unwrap_err();
    assert!(matches!(err, EmError::Io(_)), "Expected Io error, got {err}");
}
