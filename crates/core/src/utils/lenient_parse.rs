//! Lenient number parsing for values read out of form fields and page
//! attributes.
//!
//! Both parsers accept a numeric prefix and ignore whatever follows it
//! (`"3 items"` parses as `3`). Leading whitespace is skipped.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Splits an optional sign off the start of `raw` (after leading whitespace).
fn split_sign(raw: &str) -> (bool, &str) {
    let trimmed = raw.trim_start();
    if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else {
        (false, trimmed)
    }
}

/// Parses the leading integer of `raw`.
///
/// Returns `None` when no digit follows the optional sign. Values beyond the
/// `i64` range saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let (negative, rest) = split_sign(raw);
    let digits: Vec<i64> = rest
        .chars()
        .map_while(|c| c.to_digit(10))
        .map(i64::from)
        .collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .into_iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(d));
    Some(if negative {
        magnitude.saturating_neg()
    } else {
        magnitude
    })
}

/// Parses the leading decimal number (`[+-]digits[.digits]`) of `raw`.
///
/// Returns `None` when there is no digit at all, or when the number does not
/// fit in a `Decimal`.
pub fn parse_leading_decimal(raw: &str) -> Option<Decimal> {
    let (negative, rest) = split_sign(raw);
    let int_part: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let after_int = &rest[int_part.len()..];
    let frac_part: String = after_int
        .strip_prefix('.')
        .map(|tail| tail.chars().take_while(|c| c.is_ascii_digit()).collect())
        .unwrap_or_default();

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut normalized = String::with_capacity(int_part.len() + frac_part.len() + 3);
    if negative {
        normalized.push('-');
    }
    if int_part.is_empty() {
        normalized.push('0');
    } else {
        normalized.push_str(&int_part);
    }
    if !frac_part.is_empty() {
        normalized.push('.');
        normalized.push_str(&frac_part);
    }

    Decimal::from_str(&normalized).ok()
}
