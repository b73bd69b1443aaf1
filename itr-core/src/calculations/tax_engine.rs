//! Income-tax computation for a single filer under the new or old regime.
//!
//! # Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Total income: salary (less exempt allowances under the old regime) plus all other heads |
//! | 2a   | Standard deduction for the regime and financial year |
//! | 2b   | Chapter VI-A deductions (old regime only, raw sum) |
//! | 3    | Taxable income: Step 1 - (Step 2a + Step 2b), minimum 0 |
//! | 4a   | Slab tax from the regime's progressive table |
//! | 4b   | Full rebate if taxable income is within the year's limit |
//! | 4c   | Income tax: Step 4a - Step 4b, minimum 0 |
//! | 5a   | Health & education cess: 4% of Step 4c, rounded to the rupee |
//! | 5b   | Tax payable: Step 4c + Step 5a (surcharge is not modelled) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use itr_core::calculations::TaxEngine;
//! use itr_core::{FinancialYear, IncomeField, Regime, TaxInput};
//!
//! let input = TaxInput::new(FinancialYear::Fy2025_26, Regime::New)
//!     .with_income(IncomeField::Salary, dec!(1500000));
//!
//! let result = TaxEngine::new().compute(&input);
//!
//! assert_eq!(result.taxable_income, dec!(1425000));
//! assert_eq!(result.income_tax, dec!(135000));
//! assert_eq!(result.health_education_cess, dec!(5400));
//! assert_eq!(result.tax_payable, dec!(140400));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{max, round_to_rupee};
use crate::{AgeGroup, RegimeRules, TaxInput, TaxResult};

/// Stateless calculator. Every call to [`TaxEngine::compute`] is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxEngine;

impl TaxEngine {
    pub fn new() -> Self {
        Self
    }

    /// Runs every step for `input` and returns the full result.
    ///
    /// Never fails: amounts are used as given, sums saturate at the
    /// `Decimal` bounds, and negative totals are floored at the
    /// taxable-income and income-tax steps.
    pub fn compute(
        &self,
        input: &TaxInput,
    ) -> TaxResult {
        let rules = RegimeRules::lookup(input.regime, input.financial_year);

        if input.age_group != AgeGroup::default() {
            debug!(
                age_group = %input.age_group,
                "age group recorded but slab tables are not age-specific"
            );
        }

        let total_income = self.total_income(input);
        let exempt_allowances = self.displayed_exempt_allowances(input);
        let chapter_via = self.chapter_via(input);
        let total_deductions = rules.standard_deduction.saturating_add(chapter_via);

        let taxable_income = self.taxable_income(total_income, total_deductions);

        let slab_tax = self.slab_tax(&rules, taxable_income);
        let rebate = self.rebate(&rules, taxable_income, slab_tax);
        let income_tax = max(slab_tax - rebate, Decimal::ZERO);

        let health_education_cess = self.health_education_cess(income_tax);
        let tax_payable = income_tax + health_education_cess;

        debug!(
            regime = input.regime.as_str(),
            financial_year = input.financial_year.as_str(),
            %total_income,
            %total_deductions,
            %taxable_income,
            %slab_tax,
            %rebate,
            %tax_payable,
            "computed tax"
        );

        TaxResult {
            financial_year: input.financial_year,
            regime: input.regime,
            total_income,
            exempt_allowances,
            standard_deduction: rules.standard_deduction,
            chapter_via,
            taxable_income,
            slab_tax,
            rebate,
            income_tax,
            surcharge: Decimal::ZERO,
            health_education_cess,
            tax_payable,
        }
    }

    /// Exempt allowances reduce salary only under the old regime.
    fn total_income(
        &self,
        input: &TaxInput,
    ) -> Decimal {
        let salary = if input.regime.allows_itemized_deductions() {
            input
                .income
                .salary
                .saturating_sub(input.income.exempt_allowances)
        } else {
            input.income.salary
        };
        salary.saturating_add(input.income.other_income_sum())
    }

    fn displayed_exempt_allowances(
        &self,
        input: &TaxInput,
    ) -> Decimal {
        if input.regime.allows_itemized_deductions() {
            Decimal::ZERO
        } else {
            input.income.exempt_allowances
        }
    }

    fn chapter_via(
        &self,
        input: &TaxInput,
    ) -> Decimal {
        if input.regime.allows_itemized_deductions() {
            input.deductions.chapter_via_total()
        } else {
            Decimal::ZERO
        }
    }

    fn taxable_income(
        &self,
        total_income: Decimal,
        total_deductions: Decimal,
    ) -> Decimal {
        max(total_income.saturating_sub(total_deductions), Decimal::ZERO)
    }

    fn slab_tax(
        &self,
        rules: &RegimeRules,
        taxable_income: Decimal,
    ) -> Decimal {
        rules
            .slab_for(taxable_income)
            .map_or(Decimal::ZERO, |slab| slab.tax_on(taxable_income))
    }

    /// The rebate is all-or-nothing: it cancels the whole slab tax.
    fn rebate(
        &self,
        rules: &RegimeRules,
        taxable_income: Decimal,
        slab_tax: Decimal,
    ) -> Decimal {
        if rules.rebate_applies(taxable_income) {
            slab_tax
        } else {
            Decimal::ZERO
        }
    }

    fn health_education_cess(
        &self,
        income_tax: Decimal,
    ) -> Decimal {
        round_to_rupee(income_tax * Decimal::new(4, 2))
    }
}

/// Shorthand for `TaxEngine::new().compute(input)`.
pub fn compute(input: &TaxInput) -> TaxResult {
    TaxEngine::new().compute(input)
}
