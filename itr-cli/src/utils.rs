use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Error returned when a string cannot be parsed as a rupee amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

impl ParseAmountError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Trims whitespace and strips the rupee sign, `_` and `,` so `₹1,50,000`
/// and `1_50_000` both parse.
fn normalize_amount_input(s: &str) -> String {
    s.trim()
        .trim_start_matches('₹')
        .chars()
        .filter(|c| !matches!(c, ',' | '_'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Parses a string into a [`Decimal`].
///
/// Empty or whitespace-only input is treated as 0. Scientific notation
/// (`1.5e5`) is accepted.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized
        .parse::<Decimal>()
        .or_else(|e| Decimal::from_scientific(&normalized).map_err(|_| e))
        .map_err(|e| ParseAmountError {
            input: s.to_string(),
            source: e,
        })
}

/// Parses a string into a [`Decimal`], falling back to 0 for anything
/// unparseable (logs a warning).
pub fn coerce_amount(s: &str) -> Decimal {
    parse_amount(s).unwrap_or_else(|e| {
        tracing::warn!(input = %s, "treating invalid amount as 0: {}", e);
        Decimal::ZERO
    })
}

/// Strict mode rejects bad input, permissive mode coerces it to 0.
pub fn read_amount(
    s: &str,
    strict: bool,
) -> Result<Decimal, ParseAmountError> {
    if strict {
        parse_amount(s)
    } else {
        Ok(coerce_amount(s))
    }
}

/// Formats a rupee amount with Indian digit grouping (`₹1,40,400`).
///
/// Whole amounts print without decimals; anything else prints with two.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let text = rounded.abs().to_string();
    match text.split_once('.') {
        Some((whole, fraction)) => format!("{sign}₹{}.{fraction:0<2}", group_indian(whole)),
        None => format!("{sign}₹{}", group_indian(&text)),
    }
}

/// Groups the last three digits, then every two: `12345678` -> `1,23,45,678`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}
