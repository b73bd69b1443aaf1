use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use itr_core::{AgeGroup, FinancialYear, Regime};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Indian income-tax estimator for the new and old regimes.
///
/// Computes total income, deductions, taxable income, income tax and cess
/// for FY 2024-2025 and FY 2025-2026.
#[derive(Debug, Parser)]
#[command(name = "itr-estimator", version, about)]
pub struct Cli {
    /// TOML config file. Defaults to `itr-estimator.toml` if present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `itr_core=trace`. Overrides the config.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute tax for one set of inputs.
    Compute {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Compute the same inputs under both regimes and recommend one.
    Compare {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Compute every row of a CSV file.
    Batch {
        /// CSV file with one estimate per row.
        #[arg(short, long)]
        file: PathBuf,

        /// Reject unparseable or negative amounts instead of treating them as 0.
        #[arg(long)]
        strict: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List income and deduction keys.
    Fields,

    /// Show the slab table, standard deduction and rebate for a regime.
    Slabs {
        #[arg(long)]
        fy: Option<FinancialYear>,

        #[arg(long)]
        regime: Option<Regime>,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Financial year, e.g. `FY2025-2026`.
    #[arg(long)]
    pub fy: Option<FinancialYear>,

    /// `new` or `old`.
    #[arg(long)]
    pub regime: Option<Regime>,

    /// `0-60`, `60-80` or `80+`.
    #[arg(long)]
    pub age_group: Option<AgeGroup>,

    /// Income head as KEY=AMOUNT, e.g. `salary=12,00,000`. Repeatable.
    #[arg(long = "income", value_name = "KEY=AMOUNT")]
    pub income: Vec<String>,

    /// Chapter VI-A deduction as KEY=AMOUNT, e.g. `80c=150000`. Repeatable.
    #[arg(long = "deduction", value_name = "KEY=AMOUNT")]
    pub deductions: Vec<String>,

    /// Reject unparseable or negative amounts instead of treating them as 0.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn compute_collects_repeated_pairs() {
        let cli = Cli::parse_from([
            "itr-estimator",
            "compute",
            "--fy",
            "FY2024-2025",
            "--regime",
            "old",
            "--income",
            "salary=600000",
            "--deduction",
            "80c=150000",
            "--deduction",
            "80d=25000",
        ]);

        match cli.command {
            Command::Compute { input, format } => {
                assert_eq!(input.fy, Some(FinancialYear::Fy2024_25));
                assert_eq!(input.regime, Some(Regime::Old));
                assert_eq!(input.income, vec!["salary=600000"]);
                assert_eq!(input.deductions, vec!["80c=150000", "80d=25000"]);
                assert_eq!(format, OutputFormat::Text);
            }
            other => panic!("expected compute, got {other:?}"),
        }
    }

    #[test]
    fn unknown_regime_is_rejected_by_parser() {
        let result = Cli::try_parse_from(["itr-estimator", "compute", "--regime", "flat"]);

        assert!(result.is_err());
    }

    #[test]
    fn global_options_follow_subcommand() {
        let cli = Cli::parse_from(["itr-estimator", "fields", "--log-level", "debug"]);

        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
