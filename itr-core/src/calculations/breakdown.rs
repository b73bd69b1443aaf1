//! Four-bar summary of a result: income, deductions, taxable income and tax.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::TaxResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BreakdownKind {
    TotalIncome,
    Deductions,
    TaxableIncome,
    TaxPayable,
}

impl BreakdownKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::TotalIncome => "Total Income",
            Self::Deductions => "Deductions",
            Self::TaxableIncome => "Taxable Income",
            Self::TaxPayable => "Tax Payable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakdownBar {
    pub kind: BreakdownKind,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxBreakdown {
    pub bars: [BreakdownBar; 4],
}

impl TaxBreakdown {
    pub fn from_result(result: &TaxResult) -> Self {
        let bar = |kind, amount| BreakdownBar { kind, amount };
        Self {
            bars: [
                bar(BreakdownKind::TotalIncome, result.total_income),
                bar(BreakdownKind::Deductions, result.total_deductions()),
                bar(BreakdownKind::TaxableIncome, result.taxable_income),
                bar(BreakdownKind::TaxPayable, result.tax_payable),
            ],
        }
    }

    /// Bar lengths scaled so the largest bar is `width` long. Negative
    /// amounts draw as empty bars.
    pub fn bar_lengths(
        &self,
        width: usize,
    ) -> [usize; 4] {
        let largest = self
            .bars
            .iter()
            .map(|b| b.amount)
            .fold(Decimal::ZERO, Decimal::max);

        self.bars.map(|bar| {
            if largest <= Decimal::ZERO || bar.amount <= Decimal::ZERO {
                return 0;
            }
            (bar.amount / largest * Decimal::from(width))
                .round()
                .to_usize()
                .unwrap_or(0)
        })
    }
}
