use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when a user-supplied code cannot be mapped to one of the
/// fixed input categories.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseFieldError {
    #[error("unknown financial year '{0}' (expected FY2024-2025 or FY2025-2026)")]
    FinancialYear(String),

    #[error("unknown regime '{0}' (expected new or old)")]
    Regime(String),

    #[error("unknown age group '{0}' (expected 0-60, 60-80 or 80+)")]
    AgeGroup(String),

    #[error("unknown income field '{0}'")]
    IncomeField(String),

    #[error("unknown deduction field '{0}'")]
    DeductionField(String),
}

/// Raised by [`TaxInput::validate`](crate::TaxInput::validate) in strict mode.
///
/// The engine itself accepts any amount; these checks only run when the
/// caller opts in.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be negative, got {amount}")]
    NegativeAmount { field: &'static str, amount: Decimal },
}
