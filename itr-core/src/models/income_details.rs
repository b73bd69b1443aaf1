use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ParseFieldError;

/// Income heads entered by the filer, in rupees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeDetails {
    /// Total annual salary (CTC).
    pub salary: Decimal,
    /// HRA, LTA and similar. Only subtracted from salary under the old regime.
    pub exempt_allowances: Decimal,
    pub interest_income: Decimal,
    pub home_loan_self_occupied: Decimal,
    pub rental_income: Decimal,
    pub home_loan_let_out: Decimal,
    pub digital_assets: Decimal,
    pub other_income: Decimal,
}

/// Names one field of [`IncomeDetails`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncomeField {
    Salary,
    ExemptAllowances,
    InterestIncome,
    HomeLoanSelfOccupied,
    RentalIncome,
    HomeLoanLetOut,
    DigitalAssets,
    OtherIncome,
}

impl IncomeField {
    pub const ALL: [IncomeField; 8] = [
        Self::Salary,
        Self::ExemptAllowances,
        Self::InterestIncome,
        Self::HomeLoanSelfOccupied,
        Self::RentalIncome,
        Self::HomeLoanLetOut,
        Self::DigitalAssets,
        Self::OtherIncome,
    ];

    /// Stable key used on the command line and as a CSV column header.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::ExemptAllowances => "exempt_allowances",
            Self::InterestIncome => "interest_income",
            Self::HomeLoanSelfOccupied => "home_loan_self_occupied",
            Self::RentalIncome => "rental_income",
            Self::HomeLoanLetOut => "home_loan_let_out",
            Self::DigitalAssets => "digital_assets",
            Self::OtherIncome => "other_income",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Salary => "Income from Salary",
            Self::ExemptAllowances => "Exempt Allowances",
            Self::InterestIncome => "Income from Interest",
            Self::HomeLoanSelfOccupied => "Interest on Home Loan (Self-Occupied)",
            Self::RentalIncome => "Rental Income",
            Self::HomeLoanLetOut => "Interest on Home Loan (Let-Out)",
            Self::DigitalAssets => "Income from Digital Assets",
            Self::OtherIncome => "Other Income",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            Self::Salary => {
                "Your total annual salary (CTC). In Old Regime, exemptions like HRA/LTA are deducted from this."
            }
            Self::ExemptAllowances => {
                "Exemptions such as HRA, LTA, etc. (Deducted only in Old Regime)."
            }
            Self::InterestIncome => "Interest earned from savings, fixed deposits, etc.",
            Self::HomeLoanSelfOccupied => "Interest on home loan for self-occupied property",
            Self::RentalIncome => "Income from renting out property",
            Self::HomeLoanLetOut => "Interest on home loan for let-out property",
            Self::DigitalAssets => "Income from transfer of virtual digital assets",
            Self::OtherIncome => "Any other taxable income",
        }
    }

    /// Matches the key case-insensitively, ignoring `_`, `-` and spaces, so
    /// `homeLoanLetOut` and `home-loan-let-out` both resolve.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|field| normalize_key(field.key()) == wanted)
    }
}

pub(crate) fn normalize_key(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' ' | '(' | ')'))
        .collect::<String>()
        .to_ascii_lowercase()
}

impl fmt::Display for IncomeField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for IncomeField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseFieldError::IncomeField(s.to_string()))
    }
}

impl IncomeDetails {
    pub fn get(
        &self,
        field: IncomeField,
    ) -> Decimal {
        match field {
            IncomeField::Salary => self.salary,
            IncomeField::ExemptAllowances => self.exempt_allowances,
            IncomeField::InterestIncome => self.interest_income,
            IncomeField::HomeLoanSelfOccupied => self.home_loan_self_occupied,
            IncomeField::RentalIncome => self.rental_income,
            IncomeField::HomeLoanLetOut => self.home_loan_let_out,
            IncomeField::DigitalAssets => self.digital_assets,
            IncomeField::OtherIncome => self.other_income,
        }
    }

    pub fn set(
        &mut self,
        field: IncomeField,
        amount: Decimal,
    ) {
        let slot = match field {
            IncomeField::Salary => &mut self.salary,
            IncomeField::ExemptAllowances => &mut self.exempt_allowances,
            IncomeField::InterestIncome => &mut self.interest_income,
            IncomeField::HomeLoanSelfOccupied => &mut self.home_loan_self_occupied,
            IncomeField::RentalIncome => &mut self.rental_income,
            IncomeField::HomeLoanLetOut => &mut self.home_loan_let_out,
            IncomeField::DigitalAssets => &mut self.digital_assets,
            IncomeField::OtherIncome => &mut self.other_income,
        };
        *slot = amount;
    }

    /// Sum of every head except salary and exempt allowances. Saturates at
    /// `Decimal::MAX`/`Decimal::MIN`.
    pub fn other_income_sum(&self) -> Decimal {
        [
            self.interest_income,
            self.home_loan_self_occupied,
            self.rental_income,
            self.home_loan_let_out,
            self.digital_assets,
            self.other_income,
        ]
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}
