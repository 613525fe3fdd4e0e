//! Raw field parsing for the presentation boundary
//!
//! Field values arrive as text. Empty or unparseable text means the field is
//! absent; absence is never an error, it degrades the calculation to zero
//! outputs downstream.

/// Parse a monetary or rate field
///
/// Empty and unparseable text are both absent. Non-finite values (inf, NaN
/// spelled out in the field) are treated as unparseable.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a count field (share quantity, term months, horizon years)
///
/// Decimal text truncates toward zero, so "3.7" counts as 3. Negative text is
/// absent; counts cannot go below zero.
pub fn parse_count(raw: &str) -> Option<u32> {
    let value = parse_amount(raw)?;
    if value < 0.0 {
        return None;
    }
    Some(value.trunc() as u32)
}
