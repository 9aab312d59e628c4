//! Raw form input coercion
//!
//! Form fields hand over strings, often half typed. These helpers turn
//! them into values the calculators accept.

use chrono::NaiveDate;
use shared::error::{AppError, AppResult};

/// ISO date format used by the date pickers and the API
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a numeric input, accepting comma thousands separators
///
/// Blank, non-numeric and non-finite input yields `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parse a numeric input, treating anything invalid as zero
pub fn number_or_zero(raw: &str) -> f64 {
    parse_number(raw).unwrap_or_else(|| {
        if !raw.trim().is_empty() {
            tracing::debug!("Non-numeric amount input '{}', using 0", raw);
        }
        0.0
    })
}

/// Parse a whole-number input (sequence numbers, day counts)
pub fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map_err(|_| AppError::invalid_format(format!("Invalid date format: {}", date)))
}

/// Parse an optional date input; blank or malformed input yields `None`
pub fn parse_optional_date(date: &str) -> Option<NaiveDate> {
    if date.trim().is_empty() {
        return None;
    }
    parse_date(date)
        .inspect_err(|e| tracing::debug!("{}", e))
        .ok()
}
