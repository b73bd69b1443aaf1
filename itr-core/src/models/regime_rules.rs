use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::{FinancialYear, Regime, TaxSlab};

/// Same thresholds for both supported years.
static NEW_REGIME_SLABS: LazyLock<Vec<TaxSlab>> = LazyLock::new(|| {
    vec![
        slab(0, Some(300_000), 0, 0),
        slab(300_000, Some(600_000), 5, 0),
        slab(600_000, Some(900_000), 10, 15_000),
        slab(900_000, Some(1_200_000), 15, 45_000),
        slab(1_200_000, Some(1_500_000), 20, 90_000),
        slab(1_500_000, None, 30, 150_000),
    ]
});

static OLD_REGIME_SLABS: LazyLock<Vec<TaxSlab>> = LazyLock::new(|| {
    vec![
        slab(0, Some(250_000), 0, 0),
        slab(250_000, Some(500_000), 5, 0),
        slab(500_000, Some(1_000_000), 20, 12_500),
        slab(1_000_000, None, 30, 112_500),
    ]
});

fn slab(
    min_income: i64,
    max_income: Option<i64>,
    rate_percent: i64,
    base_tax: i64,
) -> TaxSlab {
    TaxSlab {
        min_income: Decimal::from(min_income),
        max_income: max_income.map(Decimal::from),
        tax_rate: Decimal::new(rate_percent, 2),
        base_tax: Decimal::from(base_tax),
    }
}

/// Fixed parameters for one (regime, financial year) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegimeRules {
    pub regime: Regime,
    pub financial_year: FinancialYear,
    pub standard_deduction: Decimal,
    /// Taxable income at or below this gets a full rebate. `None` means no
    /// rebate is available.
    pub rebate_limit: Option<Decimal>,
    pub slabs: &'static [TaxSlab],
}

impl RegimeRules {
    pub fn lookup(
        regime: Regime,
        financial_year: FinancialYear,
    ) -> Self {
        let (standard_deduction, rebate_limit, slabs) = match (regime, financial_year) {
            (Regime::New, FinancialYear::Fy2025_26) => {
                (dec!(75000), Some(dec!(1200000)), NEW_REGIME_SLABS.as_slice())
            }
            (Regime::New, FinancialYear::Fy2024_25) => {
                (dec!(50000), Some(dec!(700000)), NEW_REGIME_SLABS.as_slice())
            }
            (Regime::Old, FinancialYear::Fy2024_25) => {
                (dec!(50000), Some(dec!(500000)), OLD_REGIME_SLABS.as_slice())
            }
            // No rebate under the old regime from FY 2025-26.
            (Regime::Old, FinancialYear::Fy2025_26) => {
                (dec!(50000), None, OLD_REGIME_SLABS.as_slice())
            }
        };

        Self {
            regime,
            financial_year,
            standard_deduction,
            rebate_limit,
            slabs,
        }
    }

    /// Slab that `taxable_income` falls into, or `None` for zero income.
    pub fn slab_for(
        &self,
        taxable_income: Decimal,
    ) -> Option<&'static TaxSlab> {
        self.slabs.iter().find(|s| s.contains(taxable_income))
    }

    pub fn rebate_applies(
        &self,
        taxable_income: Decimal,
    ) -> bool {
        self.rebate_limit
            .is_some_and(|limit| taxable_income <= limit)
    }
}
