use crate::errors::{BudgetError, Result};

const THOUSAND: f64 = 1000.0;

/// Parses an income figure such as `1200`, `-20`, `12.5` or `5k` (`k`/`K` multiplies by one
/// thousand). The suffix must follow the number directly.
///
/// Empty, non-numeric and non-finite inputs are rejected; the sign is kept as written.
pub fn parse_income(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BudgetError::parse(raw, "value is empty"));
    }

    let (number, multiplier) = match trimmed.strip_suffix(|ch: char| ch.eq_ignore_ascii_case(&'k'))
    {
        Some(prefix) => (prefix, THOUSAND),
        None => (trimmed, 1.0),
    };

    let value: f64 = number
        .parse()
        .map_err(|_| BudgetError::parse(raw, "expected a decimal number, optionally ending in `k`"))?;
    if !value.is_finite() {
        return Err(BudgetError::parse(raw, "value must be finite"));
    }

    Ok(value * multiplier)
}

/// Like [`parse_income`], for prices, targets and expenses, which cannot be negative.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let value = parse_income(raw)?;
    if value < 0.0 {
        return Err(BudgetError::parse(raw, "value cannot be negative"));
    }
    Ok(value)
}
