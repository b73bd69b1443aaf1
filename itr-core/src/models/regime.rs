use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseFieldError;

/// The two mutually exclusive computation schemes a filer can opt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Regime {
    #[default]
    New,
    Old,
}

impl Regime {
    pub const ALL: [Regime; 2] = [Self::New, Self::Old];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Old => "old",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New regime",
            Self::Old => "Old regime",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" | "new regime" => Some(Self::New),
            "old" | "old regime" => Some(Self::Old),
            _ => None,
        }
    }

    /// Whether Chapter VI-A deductions and exempt allowances reduce income.
    pub fn allows_itemized_deductions(&self) -> bool {
        matches!(self, Self::Old)
    }
}

impl fmt::Display for Regime {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Regime {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseFieldError::Regime(s.to_string()))
    }
}

impl TryFrom<String> for Regime {
    type Error = ParseFieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Regime> for String {
    fn from(value: Regime) -> Self {
        value.as_str().to_string()
    }
}
