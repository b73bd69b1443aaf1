use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One progressive income bracket.
///
/// Income above `min_income` and up to `max_income` (inclusive) is taxed at
/// `base_tax + (income - min_income) * tax_rate`. The top slab has no
/// ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
    pub base_tax: Decimal,
}

impl TaxSlab {
    pub fn contains(
        &self,
        income: Decimal,
    ) -> bool {
        income > self.min_income && self.max_income.is_none_or(|max| income <= max)
    }

    pub fn tax_on(
        &self,
        income: Decimal,
    ) -> Decimal {
        self.base_tax + (income - self.min_income) * self.tax_rate
    }
}
