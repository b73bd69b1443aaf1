//! Plain-text rendering of results for the terminal.
//!
//! Each view is a small `Display` wrapper; the `render_*` functions are
//! shorthands for `to_string()`.

use std::fmt;

use itr_core::calculations::{RegimeComparison, TaxBreakdown};
use itr_core::{DeductionField, IncomeField, RegimeRules, TaxResult};
use rust_decimal::Decimal;

use crate::utils::format_inr;

const LABEL_WIDTH: usize = 28;
const AMOUNT_WIDTH: usize = 16;
const BAR_WIDTH: usize = 40;

fn line(
    out: &mut impl fmt::Write,
    indent: usize,
    label: &str,
    amount: Decimal,
) -> fmt::Result {
    writeln!(
        out,
        "{:indent$}{label:<width$}{:>AMOUNT_WIDTH$}",
        "",
        format_inr(amount),
        width = LABEL_WIDTH - indent,
    )
}

/// Summary cards followed by the exemption/deduction and tax blocks.
pub struct Summary<'a>(pub &'a TaxResult);

impl fmt::Display for Summary<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let result = self.0;
        writeln!(f, "{}, {}", result.regime, result.financial_year)?;
        writeln!(f)?;

        line(f, 0, "Total Income", result.total_income)?;
        line(f, 0, "Taxable Income", result.taxable_income)?;
        writeln!(f)?;

        line(f, 0, "Exemption and Deduction", result.total_deductions())?;
        line(f, 2, "Exempt Allowances", result.exempt_allowances)?;
        line(f, 2, "Standard Deduction", result.standard_deduction)?;
        line(f, 2, "Chapter VI-A", result.chapter_via)?;
        writeln!(f)?;

        line(f, 0, "Tax Payable", result.tax_payable)?;
        if result.rebate_applied() {
            line(f, 2, "Slab Tax", result.slab_tax)?;
            line(f, 2, "Rebate", result.rebate)?;
        }
        line(f, 2, "Income Tax", result.income_tax)?;
        line(f, 2, "Surcharge", result.surcharge)?;
        line(f, 2, "Health & Education Cess", result.health_education_cess)
    }
}

/// Horizontal bar chart of the four headline amounts.
pub struct Breakdown<'a>(pub &'a TaxBreakdown);

impl fmt::Display for Breakdown<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Tax Breakdown")?;
        let lengths = self.0.bar_lengths(BAR_WIDTH);

        for (bar, len) in self.0.bars.iter().zip(lengths) {
            writeln!(
                f,
                "  {:<16}{:<BAR_WIDTH$} {}",
                bar.kind.label(),
                "█".repeat(len),
                format_inr(bar.amount),
            )?;
        }
        Ok(())
    }
}

/// Side-by-side table of both regimes with the recommendation.
pub struct Comparison<'a>(pub &'a RegimeComparison);

impl fmt::Display for Comparison<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let comparison = self.0;
        let (new, old) = (&comparison.new_regime, &comparison.old_regime);

        writeln!(
            f,
            "{:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}{:>AMOUNT_WIDTH$}",
            new.financial_year.label(),
            new.regime.label(),
            old.regime.label(),
        )?;

        let rows: [(&str, fn(&TaxResult) -> Decimal); 6] = [
            ("Total Income", |r| r.total_income),
            ("Deductions", |r| r.total_deductions()),
            ("Taxable Income", |r| r.taxable_income),
            ("Income Tax", |r| r.income_tax),
            ("Health & Education Cess", |r| r.health_education_cess),
            ("Tax Payable", |r| r.tax_payable),
        ];
        for (label, get) in rows {
            writeln!(
                f,
                "{label:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}{:>AMOUNT_WIDTH$}",
                format_inr(get(new)),
                format_inr(get(old)),
            )?;
        }
        writeln!(f)?;

        let recommended = comparison.recommended();
        if comparison.savings().is_zero() {
            writeln!(f, "Recommended: {recommended} (same tax under both)")
        } else {
            writeln!(
                f,
                "Recommended: {recommended} (saves {})",
                format_inr(comparison.savings())
            )
        }
    }
}

/// One line per batch row, numbered from 1 in input order.
pub struct BatchTable<'a>(pub &'a [TaxResult]);

impl fmt::Display for BatchTable<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "{:>4}  {:<12}{:<8}{:>AMOUNT_WIDTH$}{:>AMOUNT_WIDTH$}{:>AMOUNT_WIDTH$}",
            "#", "Year", "Regime", "Total Income", "Taxable", "Tax Payable"
        )?;
        for (i, r) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{:>4}  {:<12}{:<8}{:>AMOUNT_WIDTH$}{:>AMOUNT_WIDTH$}{:>AMOUNT_WIDTH$}",
                i + 1,
                r.financial_year.as_str(),
                r.regime.as_str(),
                format_inr(r.total_income),
                format_inr(r.taxable_income),
                format_inr(r.tax_payable),
            )?;
        }
        Ok(())
    }
}

/// Every input key with its label and help text.
pub struct FieldList;

impl fmt::Display for FieldList {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Income (--income KEY=AMOUNT)")?;
        for field in IncomeField::ALL {
            writeln!(f, "  {:<26}{}", field.key(), field.label())?;
            writeln!(f, "  {:<26}{}", "", field.help())?;
        }

        writeln!(f)?;
        writeln!(f, "Deductions, old regime only (--deduction KEY=AMOUNT)")?;
        for field in DeductionField::ALL {
            writeln!(f, "  {:<26}{}", field.key(), field.label())?;
            writeln!(f, "  {:<26}{}", "", field.help())?;
        }
        Ok(())
    }
}

pub struct SlabTable<'a>(pub &'a RegimeRules);

impl fmt::Display for SlabTable<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let rules = self.0;
        writeln!(f, "{}, {}", rules.regime, rules.financial_year)?;
        writeln!(
            f,
            "{:>AMOUNT_WIDTH$}{:>AMOUNT_WIDTH$}{:>8}{:>AMOUNT_WIDTH$}",
            "From", "To", "Rate", "Base Tax"
        )?;
        for slab in rules.slabs {
            let upper = slab
                .max_income
                .map_or_else(|| "and above".to_string(), format_inr);
            let rate = (slab.tax_rate * Decimal::ONE_HUNDRED).normalize();
            writeln!(
                f,
                "{:>AMOUNT_WIDTH$}{:>AMOUNT_WIDTH$}{:>7}%{:>AMOUNT_WIDTH$}",
                format_inr(slab.min_income),
                upper,
                rate,
                format_inr(slab.base_tax),
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Standard deduction: {}",
            format_inr(rules.standard_deduction)
        )?;
        match rules.rebate_limit {
            Some(limit) => writeln!(f, "Full rebate up to taxable income of {}", format_inr(limit)),
            None => writeln!(f, "No rebate"),
        }
    }
}

pub fn render_summary(result: &TaxResult) -> String {
    Summary(result).to_string()
}

pub fn render_breakdown(breakdown: &TaxBreakdown) -> String {
    Breakdown(breakdown).to_string()
}

pub fn render_comparison(comparison: &RegimeComparison) -> String {
    Comparison(comparison).to_string()
}

pub fn render_batch(results: &[TaxResult]) -> String {
    BatchTable(results).to_string()
}

pub fn render_fields() -> String {
    FieldList.to_string()
}

pub fn render_slabs(rules: &RegimeRules) -> String {
    SlabTable(rules).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itr_core::{FinancialYear, Regime, TaxEngine, TaxInput};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn result_for(
        regime: Regime,
        salary: Decimal,
    ) -> TaxResult {
        TaxEngine::new().compute(
            &TaxInput::new(FinancialYear::Fy2025_26, regime)
                .with_income(IncomeField::Salary, salary),
        )
    }

    #[test]
    fn summary_lists_every_block() {
        let text = render_summary(&result_for(Regime::New, dec!(1500000)));

        assert!(text.starts_with("New regime, FY 2025-2026\n"));
        assert!(text.contains("Total Income"));
        assert!(text.contains("₹15,00,000"));
        assert!(text.contains("₹14,25,000"));
        assert!(text.contains("Tax Payable"));
        assert!(text.contains("₹1,40,400"));
        assert!(text.contains("Health & Education Cess"));
        assert!(!text.contains("Rebate"));
    }

    #[test]
    fn summary_shows_rebate_when_applied() {
        let text = render_summary(&result_for(Regime::New, dec!(1000000)));

        assert!(text.contains("Slab Tax"));
        assert!(text.contains("₹48,750"));
    }

    #[test]
    fn summary_line_is_aligned() {
        let mut out = String::new();
        line(&mut out, 2, "Surcharge", Decimal::ZERO).unwrap();

        assert_eq!(out.chars().count(), LABEL_WIDTH + AMOUNT_WIDTH + 1);
        assert!(out.starts_with("  Surcharge"));
        assert!(out.ends_with("₹0\n"));
    }

    #[test]
    fn breakdown_has_four_labelled_bars() {
        let breakdown = TaxBreakdown::from_result(&result_for(Regime::New, dec!(1500000)));

        let text = render_breakdown(&breakdown);

        assert_eq!(text.lines().count(), 5);
        assert!(text.contains(&format!("Total Income    {}", "█".repeat(BAR_WIDTH))));
        assert!(text.contains("Tax Payable"));
    }

    #[test]
    fn comparison_names_cheaper_regime() {
        let comparison = TaxEngine::new().compare(
            &TaxInput::new(FinancialYear::Fy2025_26, Regime::Old)
                .with_income(IncomeField::Salary, dec!(1000000)),
        );

        let text = render_comparison(&comparison);

        assert!(text.contains("Recommended: New regime (saves "));
    }

    #[test]
    fn batch_numbers_rows_from_one() {
        let results = [
            result_for(Regime::New, dec!(1500000)),
            result_for(Regime::Old, dec!(600000)),
        ];

        let text = render_batch(&results);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].trim_start().starts_with("1  FY2025-2026 new"));
        assert!(lines[2].trim_start().starts_with("2  FY2025-2026 old"));
    }

    #[test]
    fn fields_lists_every_key() {
        let text = render_fields();

        for field in IncomeField::ALL {
            assert!(text.contains(field.key()));
        }
        for field in DeductionField::ALL {
            assert!(text.contains(field.help()));
        }
    }

    #[test]
    fn slab_table_has_one_row_per_slab() {
        let rules = RegimeRules::lookup(Regime::Old, FinancialYear::Fy2024_25);

        let text = SlabTable(&rules).to_string();

        // title, column header, slabs, blank, standard deduction, rebate
        assert_eq!(text.lines().count(), rules.slabs.len() + 5);
        assert_eq!(text, render_slabs(&rules));
    }

    #[test]
    fn slabs_show_open_top_bracket_and_rebate() {
        let text = render_slabs(&RegimeRules::lookup(Regime::New, FinancialYear::Fy2024_25));

        assert!(text.contains("and above"));
        assert!(text.contains("30%"));
        assert!(text.contains("Full rebate up to taxable income of ₹7,00,000"));

        let old = render_slabs(&RegimeRules::lookup(Regime::Old, FinancialYear::Fy2025_26));
        assert!(old.contains("No rebate"));
    }
}
