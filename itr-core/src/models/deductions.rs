use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ParseFieldError;
use super::income_details::normalize_key;

/// Chapter VI-A deductions claimed by the filer, in rupees.
///
/// Only consulted under the old regime. Amounts are summed as entered; no
/// per-section caps are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deductions {
    pub basic_80c: Decimal,
    pub deposits_80tta: Decimal,
    pub medical_80d: Decimal,
    pub donations_80g: Decimal,
    pub housing_80eea: Decimal,
    /// Employee NPS contribution, 80CCD(1).
    pub nps_80ccd: Decimal,
    /// Employer NPS contribution, 80CCD(2).
    pub nps_80ccd2: Decimal,
    pub other_deduction: Decimal,
}

/// Names one field of [`Deductions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeductionField {
    Basic80C,
    Deposits80Tta,
    Medical80D,
    Donations80G,
    Housing80Eea,
    Nps80Ccd,
    Nps80Ccd2,
    OtherDeduction,
}

impl DeductionField {
    pub const ALL: [DeductionField; 8] = [
        Self::Basic80C,
        Self::Deposits80Tta,
        Self::Medical80D,
        Self::Donations80G,
        Self::Housing80Eea,
        Self::Nps80Ccd,
        Self::Nps80Ccd2,
        Self::OtherDeduction,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Basic80C => "80c",
            Self::Deposits80Tta => "80tta",
            Self::Medical80D => "80d",
            Self::Donations80G => "80g",
            Self::Housing80Eea => "80eea",
            Self::Nps80Ccd => "80ccd1",
            Self::Nps80Ccd2 => "80ccd2",
            Self::OtherDeduction => "other_deduction",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic80C => "Basic - 80C",
            Self::Deposits80Tta => "Deposits - 80TTA",
            Self::Medical80D => "Medical - 80D",
            Self::Donations80G => "Donations - 80G",
            Self::Housing80Eea => "Housing - 80EEA",
            Self::Nps80Ccd => "NPS - 80CCD",
            Self::Nps80Ccd2 => "NPS - 80CCD(2)",
            Self::OtherDeduction => "Other Deduction",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            Self::Basic80C => "Investments/expenses under Section 80C (PPF, ELSS, etc.)",
            Self::Deposits80Tta => "Interest earned from savings account",
            Self::Medical80D => "Medical insurance premium for self and family",
            Self::Donations80G => "Donations to approved charities",
            Self::Housing80Eea => "Additional home loan interest deduction",
            Self::Nps80Ccd => "Contribution to National Pension System (80CCD(1))",
            Self::Nps80Ccd2 => "Employer's contribution to NPS",
            Self::OtherDeduction => "Other eligible deductions under Chapter VI-A",
        }
    }

    /// Resolves the short section key (`80c`, `80ccd(1)`) or the long form
    /// (`basic80C`, `nps80CCD2`), ignoring case and punctuation.
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_key(s).as_str() {
            "80c" | "basic80c" => Some(Self::Basic80C),
            "80tta" | "deposits80tta" => Some(Self::Deposits80Tta),
            "80d" | "medical80d" => Some(Self::Medical80D),
            "80g" | "donations80g" => Some(Self::Donations80G),
            "80eea" | "housing80eea" => Some(Self::Housing80Eea),
            "80ccd" | "80ccd1" | "nps80ccd" | "nps80ccd1" => Some(Self::Nps80Ccd),
            "80ccd2" | "nps80ccd2" => Some(Self::Nps80Ccd2),
            "other" | "otherdeduction" => Some(Self::OtherDeduction),
            _ => None,
        }
    }
}

impl fmt::Display for DeductionField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DeductionField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseFieldError::DeductionField(s.to_string()))
    }
}

impl Deductions {
    pub fn get(
        &self,
        field: DeductionField,
    ) -> Decimal {
        match field {
            DeductionField::Basic80C => self.basic_80c,
            DeductionField::Deposits80Tta => self.deposits_80tta,
            DeductionField::Medical80D => self.medical_80d,
            DeductionField::Donations80G => self.donations_80g,
            DeductionField::Housing80Eea => self.housing_80eea,
            DeductionField::Nps80Ccd => self.nps_80ccd,
            DeductionField::Nps80Ccd2 => self.nps_80ccd2,
            DeductionField::OtherDeduction => self.other_deduction,
        }
    }

    pub fn set(
        &mut self,
        field: DeductionField,
        amount: Decimal,
    ) {
        let slot = match field {
            DeductionField::Basic80C => &mut self.basic_80c,
            DeductionField::Deposits80Tta => &mut self.deposits_80tta,
            DeductionField::Medical80D => &mut self.medical_80d,
            DeductionField::Donations80G => &mut self.donations_80g,
            DeductionField::Housing80Eea => &mut self.housing_80eea,
            DeductionField::Nps80Ccd => &mut self.nps_80ccd,
            DeductionField::Nps80Ccd2 => &mut self.nps_80ccd2,
            DeductionField::OtherDeduction => &mut self.other_deduction,
        };
        *slot = amount;
    }

    /// Raw sum of all eight sections.
    pub fn chapter_via_total(&self) -> Decimal {
        DeductionField::ALL
            .iter()
            .map(|field| self.get(*field))
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn chapter_via_total_sums_every_section() {
        let mut deductions = Deductions::default();
        for (i, field) in DeductionField::ALL.into_iter().enumerate() {
            deductions.set(field, Decimal::from(i as u32 + 1) * dec!(1000));
        }

        // 1000 + 2000 + ... + 8000
        assert_eq!(deductions.chapter_via_total(), dec!(36000));
    }

    #[test]
    fn chapter_via_total_is_uncapped() {
        let deductions = Deductions {
            basic_80c: dec!(500000),
            ..Default::default()
        };

        assert_eq!(deductions.chapter_via_total(), dec!(500000));
    }

    #[test]
    fn chapter_via_total_saturates() {
        let deductions = Deductions {
            basic_80c: Decimal::MAX,
            nps_80ccd2: Decimal::MAX,
            ..Default::default()
        };

        assert_eq!(deductions.chapter_via_total(), Decimal::MAX);
    }

    #[test]
    fn parse_accepts_section_and_long_names() {
        assert_eq!(DeductionField::parse("80C"), Some(DeductionField::Basic80C));
        assert_eq!(DeductionField::parse("basic80C"), Some(DeductionField::Basic80C));
        assert_eq!(DeductionField::parse("80CCD(1)"), Some(DeductionField::Nps80Ccd));
        assert_eq!(DeductionField::parse("80ccd(2)"), Some(DeductionField::Nps80Ccd2));
        assert_eq!(DeductionField::parse("nps80CCD2"), Some(DeductionField::Nps80Ccd2));
        assert_eq!(
            DeductionField::parse("other_deduction"),
            Some(DeductionField::OtherDeduction)
        );
        assert_eq!(DeductionField::parse("80u"), None);
    }

    #[test]
    fn every_key_parses_back_to_its_field() {
        for field in DeductionField::ALL {
            assert_eq!(DeductionField::parse(field.key()), Some(field));
        }
    }
}
