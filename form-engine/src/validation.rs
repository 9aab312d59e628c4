//! Input validation helpers
//!
//! Used by the input-change handlers before a value reaches a calculator.
//! The calculators themselves fall back to blank output on bad input; these
//! checks are what tell the user why.

use crate::input::parse_integer;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{MAX_SEQUENCE_NUMBER, MAX_TRAVEL_DAYS, MIN_SEQUENCE_NUMBER, MIN_TRAVEL_DAYS};

/// Office and class codes (`DZO`, `MISC/OMP`, ...)
pub const MAX_CODE_LEN: usize = 32;

/// Validate an OMP / MR sequence number (1..=9999)
pub fn validate_sequence_number(value: i64, field: &str) -> AppResult<u32> {
    if !(MIN_SEQUENCE_NUMBER..=MAX_SEQUENCE_NUMBER).contains(&value) {
        return Err(AppError::with_message(
            ErrorCode::SequenceOutOfRange,
            format!(
                "{field} must be between {MIN_SEQUENCE_NUMBER} and {MAX_SEQUENCE_NUMBER}, got {value}"
            ),
        )
        .with_detail("field", field)
        .with_detail("value", value));
    }
    Ok(value as u32)
}

/// Validate a raw sequence number input
pub fn validate_sequence_input(raw: &str, field: &str) -> AppResult<u32> {
    if raw.trim().is_empty() {
        return Err(AppError::required(field));
    }
    let value = parse_integer(raw).ok_or_else(|| {
        AppError::invalid_format(format!("{field} must be a whole number"))
            .with_detail("field", field)
    })?;
    validate_sequence_number(value, field)
}

/// Validate a travel day count (1..=120)
pub fn validate_travel_days(value: i64) -> AppResult<u32> {
    if !(MIN_TRAVEL_DAYS..=MAX_TRAVEL_DAYS).contains(&value) {
        return Err(AppError::with_message(
            ErrorCode::TravelDaysOutOfRange,
            format!("days must be between {MIN_TRAVEL_DAYS} and {MAX_TRAVEL_DAYS}, got {value}"),
        )
        .with_detail("field", "days")
        .with_detail("value", value));
    }
    Ok(value as u32)
}

/// Validate an office or class code: non-blank and within the length limit
pub fn validate_code(value: &str, field: &str) -> AppResult<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::required(field));
    }
    if trimmed.len() > MAX_CODE_LEN {
        return Err(AppError::with_message(
            ErrorCode::InvalidDocumentCode,
            format!(
                "{field} is too long ({} chars, max {MAX_CODE_LEN})",
                trimmed.len()
            ),
        )
        .with_detail("field", field));
    }
    Ok(())
}
