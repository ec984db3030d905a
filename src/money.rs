//! Money display helpers.
//!
//! Prices are `rust_decimal::Decimal` end to end; nothing here parses or
//! stores floats.

use rust_decimal::{Decimal, RoundingStrategy};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Format an amount as `{symbol}{thousands-grouped}.{cents}`, e.g. `$17,500.00`.
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut out = String::with_capacity(fixed.len() + symbol.len() + whole.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(symbol);
    out.push_str(&group_thousands(whole));
    out.push('.');
    out.push_str(cents);
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
