use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FinancialYear, Regime};

/// Output of one engine run. Replaced wholesale on every recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub financial_year: FinancialYear,
    pub regime: Regime,

    pub total_income: Decimal,
    /// Shown for reference under the new regime, where allowances are not
    /// subtracted. Always zero under the old regime.
    pub exempt_allowances: Decimal,
    pub standard_deduction: Decimal,
    /// Raw sum of itemized deductions. Zero under the new regime.
    pub chapter_via: Decimal,
    pub taxable_income: Decimal,

    /// Tax from the slab table before any rebate.
    pub slab_tax: Decimal,
    pub rebate: Decimal,
    pub income_tax: Decimal,
    /// Not modelled; always zero.
    pub surcharge: Decimal,
    pub health_education_cess: Decimal,
    pub tax_payable: Decimal,
}

impl TaxResult {
    pub fn total_deductions(&self) -> Decimal {
        self.standard_deduction.saturating_add(self.chapter_via)
    }

    pub fn rebate_applied(&self) -> bool {
        self.rebate > Decimal::ZERO
    }
}
