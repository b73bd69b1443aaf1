use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    AgeGroup, DeductionField, Deductions, FinancialYear, IncomeDetails, IncomeField, Regime,
    ValidationError,
};

/// Everything the engine needs for one estimate.
///
/// Treated as a value: each edit produces a new `TaxInput` rather than
/// mutating a shared record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxInput {
    pub financial_year: FinancialYear,
    pub regime: Regime,
    pub age_group: AgeGroup,
    pub income: IncomeDetails,
    pub deductions: Deductions,
}

impl TaxInput {
    pub fn new(
        financial_year: FinancialYear,
        regime: Regime,
    ) -> Self {
        Self {
            financial_year,
            regime,
            ..Default::default()
        }
    }

    pub fn with_financial_year(
        self,
        financial_year: FinancialYear,
    ) -> Self {
        Self {
            financial_year,
            ..self
        }
    }

    pub fn with_regime(
        self,
        regime: Regime,
    ) -> Self {
        Self { regime, ..self }
    }

    pub fn with_age_group(
        self,
        age_group: AgeGroup,
    ) -> Self {
        Self { age_group, ..self }
    }

    pub fn with_income(
        mut self,
        field: IncomeField,
        amount: Decimal,
    ) -> Self {
        self.income.set(field, amount);
        self
    }

    pub fn with_deduction(
        mut self,
        field: DeductionField,
        amount: Decimal,
    ) -> Self {
        self.deductions.set(field, amount);
        self
    }

    /// Strict-mode check: every amount must be zero or positive.
    ///
    /// Returns the first offending field in declaration order, income heads
    /// before deductions.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let income = IncomeField::ALL
            .into_iter()
            .map(|field| (field.label(), self.income.get(field)));
        let deductions = DeductionField::ALL
            .into_iter()
            .map(|field| (field.label(), self.deductions.get(field)));

        match income
            .chain(deductions)
            .find(|(_, amount)| amount.is_sign_negative() && !amount.is_zero())
        {
            Some((field, amount)) => Err(ValidationError::NegativeAmount { field, amount }),
            None => Ok(()),
        }
    }
}
