//! Side-by-side evaluation of the same input under both regimes.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculations::TaxEngine;
use crate::{Regime, TaxInput, TaxResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegimeComparison {
    pub new_regime: TaxResult,
    pub old_regime: TaxResult,
}

impl RegimeComparison {
    pub fn result_for(
        &self,
        regime: Regime,
    ) -> &TaxResult {
        match regime {
            Regime::New => &self.new_regime,
            Regime::Old => &self.old_regime,
        }
    }

    /// Regime with the lower tax payable. Ties favour the new regime.
    pub fn recommended(&self) -> Regime {
        if self.old_regime.tax_payable < self.new_regime.tax_payable {
            Regime::Old
        } else {
            Regime::New
        }
    }

    /// How much less the recommended regime costs.
    pub fn savings(&self) -> Decimal {
        (self.new_regime.tax_payable - self.old_regime.tax_payable).abs()
    }
}

impl TaxEngine {
    /// Computes `input` under both regimes, ignoring `input.regime`.
    pub fn compare(
        &self,
        input: &TaxInput,
    ) -> RegimeComparison {
        RegimeComparison {
            new_regime: self.compute(&input.clone().with_regime(Regime::New)),
            old_regime: self.compute(&input.clone().with_regime(Regime::Old)),
        }
    }
}
