//! Display formatting for monetary amounts.
//!
//! Amounts are carried as `Decimal` with full precision; rounding happens
//! only here, at display time.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{CURRENCY_SYMBOL, DISPLAY_DECIMAL_PRECISION};

fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Formats an amount as `$` followed by exactly two decimals, without digit
/// grouping (`$1234.50`). Used for line and grand totals.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = round_for_display(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!(
        "{}{}{:.prec$}",
        sign,
        CURRENCY_SYMBOL,
        rounded.abs(),
        prec = DISPLAY_DECIMAL_PRECISION as usize
    )
}

/// Formats an amount in en-US currency style with thousands grouping
/// (`$1,234.50`, `-$5.00`).
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_for_display(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = format!(
        "{:.prec$}",
        rounded.abs(),
        prec = DISPLAY_DECIMAL_PRECISION as usize
    );
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(CURRENCY_SYMBOL);
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
