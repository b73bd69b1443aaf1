use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseFieldError;

/// Financial year the estimate is computed for.
///
/// Only the two years with published slab and rebate tables are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FinancialYear {
    Fy2024_25,
    #[default]
    Fy2025_26,
}

impl FinancialYear {
    pub const ALL: [FinancialYear; 2] = [Self::Fy2025_26, Self::Fy2024_25];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fy2024_25 => "FY2024-2025",
            Self::Fy2025_26 => "FY2025-2026",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Fy2024_25 => "FY 2024-2025",
            Self::Fy2025_26 => "FY 2025-2026",
        }
    }

    /// Accepts `FY2025-2026`, `FY 2025-2026`, `fy2025-26` and the bare
    /// `2025-2026` / `2025-26` forms.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();
        let years = normalized.strip_prefix("FY").unwrap_or(&normalized);

        match years {
            "2024-2025" | "2024-25" => Some(Self::Fy2024_25),
            "2025-2026" | "2025-26" => Some(Self::Fy2025_26),
            _ => None,
        }
    }
}

impl fmt::Display for FinancialYear {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FinancialYear {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseFieldError::FinancialYear(s.to_string()))
    }
}

impl TryFrom<String> for FinancialYear {
    type Error = ParseFieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FinancialYear> for String {
    fn from(value: FinancialYear) -> Self {
        value.as_str().to_string()
    }
}
