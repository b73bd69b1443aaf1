//! Optional TOML configuration for the estimator CLI.
//!
//! Command-line flags override values from the file; the file overrides the
//! built-in defaults.
//!
//! ```toml
//! financial_year = "FY2025-2026"
//! regime = "new"
//! age_group = "0-60"
//! strict = false
//! log_level = "info"
//! ```

use std::path::{Path, PathBuf};

use itr_core::{AgeGroup, FinancialYear, Regime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "itr-estimator.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub financial_year: FinancialYear,
    pub regime: Regime,
    pub age_group: AgeGroup,
    /// Reject unparseable or negative amounts instead of treating them as 0.
    pub strict: bool,
    pub log_level: Option<String>,
}

impl CliConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Reads `path` when given (it must exist). Otherwise reads
    /// [`DEFAULT_CONFIG_FILE`] if present, else returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !required && !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_yields_defaults() {
        let config = CliConfig::from_toml_str("").unwrap();

        assert_eq!(config, CliConfig::default());
        assert_eq!(config.financial_year, FinancialYear::Fy2025_26);
        assert_eq!(config.regime, Regime::New);
        assert!(!config.strict);
    }

    #[test]
    fn full_file_parses_every_field() {
        let config = CliConfig::from_toml_str(
            r#"
financial_year = "FY 2024-2025"
regime = "old"
age_group = "60-80"
strict = true
log_level = "debug"
"#,
        )
        .unwrap();

        assert_eq!(
            config,
            CliConfig {
                financial_year: FinancialYear::Fy2024_25,
                regime: Regime::Old,
                age_group: AgeGroup::Senior,
                strict: true,
                log_level: Some("debug".to_string()),
            }
        );
    }

    #[test]
    fn unknown_regime_is_rejected() {
        let err = CliConfig::from_toml_str(r#"regime = "flat""#).unwrap_err();

        assert!(err.to_string().contains("unknown regime 'flat'"), "{err}");
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(CliConfig::from_toml_str("surcharge = true").is_err());
    }

    #[test]
    fn explicit_missing_path_is_error() {
        let err = CliConfig::load(Some(Path::new("/no/such/itr-estimator.toml"))).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn explicit_path_is_read() {
        let path = std::env::temp_dir().join(format!(
            "itr-estimator-config-test-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "regime = \"old\"\n").unwrap();

        let config = CliConfig::load(Some(&path));
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.unwrap().regime, Regime::Old);
    }
}
