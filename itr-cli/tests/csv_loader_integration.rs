//! Integration tests that run the loader and engine against an on-disk
//! fixture file.
//!
//! The unit tests inside csv_loader.rs use inline strings; these cover the
//! read-from-disk path and the batch command end to end.

use std::path::Path;

use itr_cli::app;
use itr_cli::cli::OutputFormat;
use itr_cli::config::CliConfig;
use itr_cli::csv_loader;
use itr_core::{AgeGroup, FinancialYear, Regime, TaxEngine, TaxResult};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn fixture_path() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_inputs.csv")
        .leak()
}

#[test]
fn test_load_fixture_file_succeeds() {
    let inputs = csv_loader::load_from_file(fixture_path(), true)
        .expect("fixture file should load in strict mode");

    assert_eq!(inputs.len(), 4);
}

#[test]
fn test_fixture_rows_parse_selectors() {
    let inputs = csv_loader::load_from_file(fixture_path(), false).unwrap();

    assert_eq!(inputs[0].financial_year, FinancialYear::Fy2025_26);
    assert_eq!(inputs[0].income.salary, dec!(1500000));

    assert_eq!(inputs[1].financial_year, FinancialYear::Fy2024_25);
    assert_eq!(inputs[1].regime, Regime::Old);
    assert_eq!(inputs[1].age_group, AgeGroup::Senior);

    // empty age_group falls back to the default
    assert_eq!(inputs[2].age_group, AgeGroup::Below60);
    assert_eq!(inputs[2].deductions.medical_80d, dec!(25000));

    assert_eq!(inputs[3].age_group, AgeGroup::SuperSenior);
}

#[test]
fn test_fixture_rows_compute_expected_tax() {
    let engine = TaxEngine::new();
    let payable: Vec<_> = csv_loader::load_from_file(fixture_path(), false)
        .unwrap()
        .iter()
        .map(|input| engine.compute(input).tax_payable)
        .collect();

    // 1) new 25-26: 14,25,000 taxable
    // 2) old 24-25: 4,00,000 taxable, inside the rebate
    // 3) old 25-26: 16,00,000 - 50,000 - 1,75,000 = 13,75,000 taxable
    // 4) new 25-26: exempt allowances not subtracted, 11,25,000 taxable, rebated
    assert_eq!(payable, vec![dec!(140400), dec!(0), dec!(234000), dec!(0)]);
}

#[test]
fn test_batch_json_matches_engine() {
    let json = app::run_batch(fixture_path(), false, OutputFormat::Json, &CliConfig::default())
        .unwrap();

    let results: Vec<TaxResult> = serde_json::from_str(&json).unwrap();

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].taxable_income, dec!(1425000));
    assert_eq!(results[2].chapter_via, dec!(175000));
}

#[test]
fn test_batch_text_has_header_and_one_line_per_row() {
    let text = app::run_batch(fixture_path(), false, OutputFormat::Text, &CliConfig::default())
        .unwrap();

    assert_eq!(text.lines().count(), 5);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = csv_loader::load_from_file(Path::new("no/such/file.csv"), false).unwrap_err();

    assert!(matches!(err, csv_loader::CsvLoadError::Io { .. }));
}
