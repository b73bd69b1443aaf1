//! Subcommand handlers. Each returns the text to print so the binary stays
//! a thin shell around argument parsing and logging.

use std::path::Path;

use anyhow::{Context, Result, bail};
use itr_core::calculations::{RegimeComparison, TaxBreakdown};
use itr_core::{
    DeductionField, FinancialYear, IncomeField, Regime, RegimeRules, TaxEngine, TaxInput,
    TaxResult,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cli::{Cli, Command, InputArgs, OutputFormat};
use crate::config::CliConfig;
use crate::csv_loader;
use crate::render;
use crate::state::FormState;
use crate::utils::read_amount;

#[derive(Debug, Serialize)]
struct ComputeReport<'a> {
    input: &'a TaxInput,
    result: &'a TaxResult,
    breakdown: TaxBreakdown,
}

#[derive(Debug, Serialize)]
struct CompareReport<'a> {
    #[serde(flatten)]
    comparison: &'a RegimeComparison,
    recommended: Regime,
    savings: Decimal,
}

/// Splits `KEY=AMOUNT`. The amount may be empty (treated as 0 later).
fn split_assignment(pair: &str) -> Result<(&str, &str)> {
    match pair.split_once('=') {
        Some((key, amount)) if !key.trim().is_empty() => Ok((key.trim(), amount)),
        _ => bail!("expected KEY=AMOUNT, got '{pair}'"),
    }
}

/// Builds the form from flags layered over the config.
///
/// Unknown keys are always an error. Bad amounts are coerced to 0 unless
/// strict mode is on via the flag or the config.
pub fn build_form(
    args: &InputArgs,
    config: &CliConfig,
) -> Result<FormState> {
    let strict = args.strict || config.strict;
    let mut form = FormState::default();

    form.set_financial_year(args.fy.unwrap_or(config.financial_year));
    form.set_regime(args.regime.unwrap_or(config.regime));
    form.set_age_group(args.age_group.unwrap_or(config.age_group));

    for pair in &args.income {
        let (key, raw) = split_assignment(pair)?;
        let field: IncomeField = key.parse()?;
        let amount = read_amount(raw, strict).with_context(|| format!("--income {pair}"))?;
        form.set_income(field, amount);
    }

    for pair in &args.deductions {
        let (key, raw) = split_assignment(pair)?;
        let field: DeductionField = key.parse()?;
        let amount = read_amount(raw, strict).with_context(|| format!("--deduction {pair}"))?;
        form.set_deduction(field, amount);
    }

    if strict {
        form.input().validate()?;
    }

    debug!(input = ?form.input(), "built input");
    Ok(form)
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    json.push('\n');
    Ok(json)
}

pub fn run_compute(
    args: &InputArgs,
    format: OutputFormat,
    config: &CliConfig,
) -> Result<String> {
    let mut form = build_form(args, config)?;

    let input = form.input();
    if !input.regime.allows_itemized_deductions()
        && !input.deductions.chapter_via_total().is_zero()
    {
        warn!("Chapter VI-A deductions are ignored under the new regime");
    }

    let result = form.calculate().clone();
    let breakdown = TaxBreakdown::from_result(&result);

    match format {
        OutputFormat::Text => Ok(format!(
            "{}\n{}",
            render::render_summary(&result),
            render::render_breakdown(&breakdown)
        )),
        OutputFormat::Json => to_json(&ComputeReport {
            input: form.input(),
            result: &result,
            breakdown,
        }),
    }
}

pub fn run_compare(
    args: &InputArgs,
    format: OutputFormat,
    config: &CliConfig,
) -> Result<String> {
    let form = build_form(args, config)?;
    let comparison = TaxEngine::new().compare(form.input());

    info!(
        recommended = comparison.recommended().as_str(),
        savings = %comparison.savings(),
        "compared regimes"
    );

    match format {
        OutputFormat::Text => Ok(render::render_comparison(&comparison)),
        OutputFormat::Json => to_json(&CompareReport {
            comparison: &comparison,
            recommended: comparison.recommended(),
            savings: comparison.savings(),
        }),
    }
}

pub fn run_batch(
    file: &Path,
    strict: bool,
    format: OutputFormat,
    config: &CliConfig,
) -> Result<String> {
    let inputs = csv_loader::load_from_file(file, strict || config.strict)
        .with_context(|| format!("failed to load '{}'", file.display()))?;

    let engine = TaxEngine::new();
    let results: Vec<TaxResult> = inputs.iter().map(|input| engine.compute(input)).collect();
    info!(rows = results.len(), file = %file.display(), "computed batch");

    match format {
        OutputFormat::Text => Ok(render::render_batch(&results)),
        OutputFormat::Json => to_json(&results),
    }
}

pub fn run_slabs(
    fy: Option<FinancialYear>,
    regime: Option<Regime>,
    config: &CliConfig,
) -> String {
    let rules = RegimeRules::lookup(
        regime.unwrap_or(config.regime),
        fy.unwrap_or(config.financial_year),
    );
    render::render_slabs(&rules)
}

/// Dispatches the parsed command line.
pub fn run(
    cli: &Cli,
    config: &CliConfig,
) -> Result<String> {
    match &cli.command {
        Command::Compute { input, format } => run_compute(input, *format, config),
        Command::Compare { input, format } => run_compare(input, *format, config),
        Command::Batch {
            file,
            strict,
            format,
        } => run_batch(file, *strict, *format, config),
        Command::Fields => Ok(render::render_fields()),
        Command::Slabs { fy, regime } => Ok(run_slabs(*fy, *regime, config)),
    }
}
