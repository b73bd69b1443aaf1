//! Form state for the estimator.
//!
//! Holds the input being assembled and the last computed result. Edits
//! replace the input value; the result only changes when
//! [`FormState::calculate`] is called, mirroring an explicit "Calculate"
//! action.

use itr_core::{
    AgeGroup, DeductionField, FinancialYear, IncomeField, Regime, TaxEngine, TaxInput, TaxResult,
};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Default)]
pub struct FormState {
    input: TaxInput,
    result: Option<TaxResult>,
}

impl FormState {
    pub fn new(input: TaxInput) -> Self {
        Self {
            input,
            result: None,
        }
    }

    pub fn input(&self) -> &TaxInput {
        &self.input
    }

    /// Last calculated result. May be stale relative to [`FormState::input`].
    pub fn result(&self) -> Option<&TaxResult> {
        self.result.as_ref()
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    fn edit(
        &mut self,
        f: impl FnOnce(TaxInput) -> TaxInput,
    ) {
        self.input = f(std::mem::take(&mut self.input));
    }

    pub fn set_financial_year(
        &mut self,
        financial_year: FinancialYear,
    ) {
        self.edit(|input| input.with_financial_year(financial_year));
    }

    pub fn set_regime(
        &mut self,
        regime: Regime,
    ) {
        self.edit(|input| input.with_regime(regime));
    }

    pub fn set_age_group(
        &mut self,
        age_group: AgeGroup,
    ) {
        self.edit(|input| input.with_age_group(age_group));
    }

    pub fn set_income(
        &mut self,
        field: IncomeField,
        amount: Decimal,
    ) {
        self.edit(|input| input.with_income(field, amount));
    }

    pub fn set_deduction(
        &mut self,
        field: DeductionField,
        amount: Decimal,
    ) {
        self.edit(|input| input.with_deduction(field, amount));
    }

    /// Recomputes from the current input, replacing any previous result.
    pub fn calculate(&mut self) -> &TaxResult {
        self.result
            .insert(TaxEngine::new().compute(&self.input))
    }

    /// Clear all entered data for starting fresh.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
