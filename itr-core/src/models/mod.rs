mod age_group;
mod deductions;
mod error;
mod financial_year;
mod income_details;
mod regime;
mod regime_rules;
mod tax_input;
mod tax_result;
mod tax_slab;

pub use age_group::AgeGroup;
pub use deductions::{DeductionField, Deductions};
pub use error::{ParseFieldError, ValidationError};
pub use financial_year::FinancialYear;
pub use income_details::{IncomeDetails, IncomeField};
pub use regime::Regime;
pub use regime_rules::RegimeRules;
pub use tax_input::TaxInput;
pub use tax_result::TaxResult;
pub use tax_slab::TaxSlab;
