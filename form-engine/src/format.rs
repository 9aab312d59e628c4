//! Amount formatting for form fields and printed documents
//!
//! Output is always `-?d{1,3}(,ddd)*.dd`: comma thousands separator, dot
//! decimal separator, exactly two decimals. The strings end up on printed
//! receipts, so they are a fixed format with no locale switch.

use crate::input::number_or_zero;
use crate::money::{DECIMAL_PLACES, round_money};
use rust_decimal::prelude::*;

/// Placeholder shown for missing or invalid amounts
pub const ZERO_AMOUNT: &str = "0.00";

/// Format an amount as `1,234.50`
///
/// Non-finite input formats as `0.00`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return ZERO_AMOUNT.to_string();
    }

    let fixed = match Decimal::from_f64(value) {
        Some(decimal) => {
            let mut rounded = round_money(decimal);
            if rounded.is_zero() {
                // never print -0.00
                rounded = Decimal::ZERO;
            }
            rounded.rescale(DECIMAL_PLACES);
            rounded.to_string()
        }
        // Beyond Decimal range
        None => format!("{:.2}", value),
    };

    group_thousands(&fixed)
}

/// Format a raw form input; unparsable text formats as `0.00`
pub fn format_input(raw: &str) -> String {
    format_amount(number_or_zero(raw))
}

/// Insert comma separators into a `-?\d+\.\d+` string
fn group_thousands(fixed: &str) -> String {
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac_part}")
}
