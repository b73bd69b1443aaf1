//! CSV loader for batch estimate input.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Amount
//! columns may be omitted entirely or left empty; both mean 0.
//!
//! | Column                    | Required | Notes |
//! |---------------------------|----------|-------|
//! | `financial_year`          | yes      | `FY2024-2025` or `FY2025-2026` (spaces allowed) |
//! | `regime`                  | yes      | `new` or `old` |
//! | `age_group`               | no       | `0-60` (default), `60-80`, `80+` |
//! | `salary`                  | no       | |
//! | `exempt_allowances`       | no       | |
//! | `interest_income`         | no       | |
//! | `home_loan_self_occupied` | no       | |
//! | `rental_income`           | no       | |
//! | `home_loan_let_out`       | no       | |
//! | `digital_assets`          | no       | |
//! | `other_income`            | no       | |
//! | `80c`                     | no       | |
//! | `80tta`                   | no       | |
//! | `80d`                     | no       | |
//! | `80g`                     | no       | |
//! | `80eea`                   | no       | |
//! | `80ccd1`                  | no       | |
//! | `80ccd2`                  | no       | |
//! | `other_deduction`         | no       | |
//!
//! ### Minimal example
//!
//! ```csv
//! financial_year,regime,salary
//! FY2025-2026,new,1500000
//! ```
//!
//! Amount cells go through the same coercion as the command line: in
//! permissive mode unparseable cells become 0, in strict mode they fail the
//! load with the row number.

use std::path::Path;

use itr_core::{
    AgeGroup, DeductionField, FinancialYear, IncomeField, ParseFieldError, Regime, TaxInput,
    ValidationError,
};
use serde::Deserialize;

use crate::utils::{ParseAmountError, read_amount};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    financial_year: String,
    regime: String,
    age_group: Option<String>,

    salary: Option<String>,
    exempt_allowances: Option<String>,
    interest_income: Option<String>,
    home_loan_self_occupied: Option<String>,
    rental_income: Option<String>,
    home_loan_let_out: Option<String>,
    digital_assets: Option<String>,
    other_income: Option<String>,

    #[serde(rename = "80c")]
    basic_80c: Option<String>,
    #[serde(rename = "80tta")]
    deposits_80tta: Option<String>,
    #[serde(rename = "80d")]
    medical_80d: Option<String>,
    #[serde(rename = "80g")]
    donations_80g: Option<String>,
    #[serde(rename = "80eea")]
    housing_80eea: Option<String>,
    #[serde(rename = "80ccd1")]
    nps_80ccd: Option<String>,
    #[serde(rename = "80ccd2")]
    nps_80ccd2: Option<String>,
    other_deduction: Option<String>,
}

impl CsvRow {
    fn income_cell(
        &self,
        field: IncomeField,
    ) -> Option<&str> {
        let cell = match field {
            IncomeField::Salary => &self.salary,
            IncomeField::ExemptAllowances => &self.exempt_allowances,
            IncomeField::InterestIncome => &self.interest_income,
            IncomeField::HomeLoanSelfOccupied => &self.home_loan_self_occupied,
            IncomeField::RentalIncome => &self.rental_income,
            IncomeField::HomeLoanLetOut => &self.home_loan_let_out,
            IncomeField::DigitalAssets => &self.digital_assets,
            IncomeField::OtherIncome => &self.other_income,
        };
        cell.as_deref()
    }

    fn deduction_cell(
        &self,
        field: DeductionField,
    ) -> Option<&str> {
        let cell = match field {
            DeductionField::Basic80C => &self.basic_80c,
            DeductionField::Deposits80Tta => &self.deposits_80tta,
            DeductionField::Medical80D => &self.medical_80d,
            DeductionField::Donations80G => &self.donations_80g,
            DeductionField::Housing80Eea => &self.housing_80eea,
            DeductionField::Nps80Ccd => &self.nps_80ccd,
            DeductionField::Nps80Ccd2 => &self.nps_80ccd2,
            DeductionField::OtherDeduction => &self.other_deduction,
        };
        cell.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or converting CSV data.
///
/// Row numbers are 1-based and exclude the header.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Bad structure, missing required column, etc.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("row {row}: {source}")]
    InvalidField {
        row: usize,
        #[source]
        source: ParseFieldError,
    },

    #[error("row {row}, column '{column}': {source}")]
    InvalidAmount {
        row: usize,
        column: &'static str,
        #[source]
        source: ParseAmountError,
    },

    #[error("row {row}: {source}")]
    Validation {
        row: usize,
        #[source]
        source: ValidationError,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn convert_row(
    row: CsvRow,
    row_number: usize,
    strict: bool,
) -> Result<TaxInput, CsvLoadError> {
    let field_err = |source| CsvLoadError::InvalidField {
        row: row_number,
        source,
    };

    let financial_year: FinancialYear = row.financial_year.parse().map_err(field_err)?;
    let regime: Regime = row.regime.parse().map_err(field_err)?;
    let age_group = match row.age_group.as_deref().map(str::trim) {
        None | Some("") => AgeGroup::default(),
        Some(s) => s.parse().map_err(field_err)?,
    };

    let amount = |column: &'static str, cell: Option<&str>| {
        read_amount(cell.unwrap_or(""), strict).map_err(|source| CsvLoadError::InvalidAmount {
            row: row_number,
            column,
            source,
        })
    };

    let mut input = TaxInput::new(financial_year, regime).with_age_group(age_group);
    for field in IncomeField::ALL {
        input = input.with_income(field, amount(field.key(), row.income_cell(field))?);
    }
    for field in DeductionField::ALL {
        input = input.with_deduction(field, amount(field.key(), row.deduction_cell(field))?);
    }

    if strict {
        input.validate().map_err(|source| CsvLoadError::Validation {
            row: row_number,
            source,
        })?;
    }

    Ok(input)
}

/// Parse CSV text and return one [`TaxInput`] per row, in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid or a
///   required column is missing.
/// * [`CsvLoadError::InvalidField`] for an unknown year, regime or age group.
/// * [`CsvLoadError::InvalidAmount`] / [`CsvLoadError::Validation`] in
///   strict mode only.
pub fn load_from_str(
    input: &str,
    strict: bool,
) -> Result<Vec<TaxInput>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1, strict)
        })
        .collect()
}

/// Reads a file from disk and delegates to [`load_from_str`].
pub fn load_from_file(
    path: &Path,
    strict: bool,
) -> Result<Vec<TaxInput>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents, strict)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    const MINIMAL_CSV: &str = "\
financial_year,regime
FY2025-2026,new
";

    const FULL_CSV: &str = "\
financial_year,regime,age_group,salary,exempt_allowances,interest_income,home_loan_self_occupied,rental_income,home_loan_let_out,digital_assets,other_income,80c,80tta,80d,80g,80eea,80ccd1,80ccd2,other_deduction
FY 2024-2025,old,60-80,1200000,100000,15000,1,240000,2,3,4,150000,10000,25000,5000,50000,50000,60000,7
";

    const MULTI_ROW_CSV: &str = "\
regime,financial_year,salary,80c
new,FY2025-2026,1000000,
new,FY2025-2026,1500000,
old,FY2024-2025,600000,150000
old,FY2025-2026,600000,150000
";

    #[test]
    fn test_minimal_csv_defaults_everything_else() {
        let inputs = load_from_str(MINIMAL_CSV, false).expect("should parse minimal CSV");

        assert_eq!(inputs, vec![TaxInput::new(FinancialYear::Fy2025_26, Regime::New)]);
    }

    #[test]
    fn test_full_csv_all_fields_populated() {
        let inputs = load_from_str(FULL_CSV, true).expect("should parse full CSV");
        assert_eq!(inputs.len(), 1);

        let input = &inputs[0];
        assert_eq!(input.financial_year, FinancialYear::Fy2024_25);
        assert_eq!(input.regime, Regime::Old);
        assert_eq!(input.age_group, AgeGroup::Senior);
        assert_eq!(input.income.salary, dec!(1200000));
        assert_eq!(input.income.exempt_allowances, dec!(100000));
        assert_eq!(input.income.interest_income, dec!(15000));
        assert_eq!(input.income.home_loan_self_occupied, dec!(1));
        assert_eq!(input.income.rental_income, dec!(240000));
        assert_eq!(input.income.home_loan_let_out, dec!(2));
        assert_eq!(input.income.digital_assets, dec!(3));
        assert_eq!(input.income.other_income, dec!(4));
        assert_eq!(input.deductions.basic_80c, dec!(150000));
        assert_eq!(input.deductions.deposits_80tta, dec!(10000));
        assert_eq!(input.deductions.medical_80d, dec!(25000));
        assert_eq!(input.deductions.donations_80g, dec!(5000));
        assert_eq!(input.deductions.housing_80eea, dec!(50000));
        assert_eq!(input.deductions.nps_80ccd, dec!(50000));
        assert_eq!(input.deductions.nps_80ccd2, dec!(60000));
        assert_eq!(input.deductions.other_deduction, dec!(7));
    }

    #[test]
    fn test_multi_row_keeps_file_order() {
        let inputs = load_from_str(MULTI_ROW_CSV, false).expect("should parse");

        let salaries: Vec<_> = inputs.iter().map(|i| i.income.salary).collect();
        assert_eq!(
            salaries,
            vec![dec!(1000000), dec!(1500000), dec!(600000), dec!(600000)]
        );
        assert_eq!(inputs[0].deductions.basic_80c, Decimal::ZERO);
        assert_eq!(inputs[3].financial_year, FinancialYear::Fy2025_26);
    }

    #[test]
    fn test_permissive_mode_coerces_bad_amounts() {
        let csv = "financial_year,regime,salary\nFY2025-2026,new,lots\n";

        let inputs = load_from_str(csv, false).expect("permissive mode should not fail");

        assert_eq!(inputs[0].income.salary, Decimal::ZERO);
    }

    #[test]
    fn test_strict_mode_rejects_bad_amounts_with_row_and_column() {
        let csv = "financial_year,regime,salary,80d\nFY2025-2026,old,1,2\nFY2025-2026,old,5,oops\n";

        let err = load_from_str(csv, true).unwrap_err();

        match err {
            CsvLoadError::InvalidAmount { row, column, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "80d");
            }
            other => panic!("expected InvalidAmount, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_mode_rejects_negative_amounts() {
        let csv = "financial_year,regime,salary\nFY2025-2026,new,-1\n";

        assert!(load_from_str(csv, false).is_ok());
        assert!(matches!(
            load_from_str(csv, true),
            Err(CsvLoadError::Validation { row: 1, .. })
        ));
    }

    #[test]
    fn test_unknown_regime_is_error_in_both_modes() {
        let csv = "financial_year,regime\nFY2025-2026,flat\n";

        for strict in [false, true] {
            let err = load_from_str(csv, strict).unwrap_err();
            assert_eq!(
                err.to_string(),
                "row 1: unknown regime 'flat' (expected new or old)"
            );
        }
    }

    #[test]
    fn test_missing_required_column_is_parse_error() {
        let csv = "regime,salary\nnew,100\n";

        assert!(matches!(
            load_from_str(csv, false),
            Err(CsvLoadError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_file_yields_no_rows() {
        let inputs = load_from_str("financial_year,regime\n", false).unwrap();

        assert!(inputs.is_empty());
    }
}
