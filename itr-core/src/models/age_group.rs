use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseFieldError;

/// Age bracket of the filer.
///
/// Collected with the rest of the input but not consulted by the slab
/// tables: senior-citizen exemption limits are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AgeGroup {
    #[default]
    Below60,
    Senior,
    SuperSenior,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 3] = [Self::Below60, Self::Senior, Self::SuperSenior];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Below60 => "0-60",
            Self::Senior => "60-80",
            Self::SuperSenior => "80+",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "0-60" => Some(Self::Below60),
            "60-80" => Some(Self::Senior),
            "80+" => Some(Self::SuperSenior),
            _ => None,
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeGroup {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseFieldError::AgeGroup(s.to_string()))
    }
}

impl TryFrom<String> for AgeGroup {
    type Error = ParseFieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AgeGroup> for String {
    fn from(value: AgeGroup) -> Self {
        value.as_str().to_string()
    }
}
