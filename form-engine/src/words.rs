//! Amount in words for money receipts
//!
//! Lakh-style grouping: units below twenty are irregular, then tens,
//! "Hundred", "Thousand" and "Lakh" (100,000). Only the integer part is
//! spelled; the fraction is dropped without rounding.

use crate::input::parse_number;

/// Returned for negative, non-finite or non-numeric amounts
pub const INVALID_AMOUNT: &str = "Invalid amount";
/// Returned for amounts of ten lakh and above
pub const AMOUNT_TOO_LARGE: &str = "Amount too large";

/// Smallest amount that can no longer be spelled
const WORDS_LIMIT: f64 = 1_000_000.0;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Spell out the integer part of `amount`
///
/// `0` spells as an empty string.
pub fn amount_to_words(amount: f64) -> String {
    if !amount.is_finite() || amount < 0.0 {
        return INVALID_AMOUNT.to_string();
    }
    if amount >= WORDS_LIMIT {
        return AMOUNT_TOO_LARGE.to_string();
    }

    spell(amount.trunc() as u32)
}

/// Spell a raw form input; non-numeric text is an invalid amount
pub fn amount_to_words_input(raw: &str) -> String {
    match parse_number(raw) {
        Some(amount) => amount_to_words(amount),
        None => INVALID_AMOUNT.to_string(),
    }
}

fn spell(n: u32) -> String {
    match n {
        0..20 => ONES[n as usize].to_string(),
        20..100 => join(TENS[(n / 10) as usize], spell(n % 10)),
        100..1_000 => join(
            &format!("{} Hundred", ONES[(n / 100) as usize]),
            spell(n % 100),
        ),
        1_000..100_000 => join(&format!("{} Thousand", spell(n / 1_000)), spell(n % 1_000)),
        _ => join(&format!("{} Lakh", spell(n / 100_000)), spell(n % 100_000)),
    }
}

fn join(head: &str, rest: String) -> String {
    if rest.is_empty() {
        head.to_string()
    } else {
        format!("{head} {rest}")
    }
}
