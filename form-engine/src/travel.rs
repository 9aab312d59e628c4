//! Travel period end date
//!
//! The insured window is inclusive of both ends, so the end date is
//! `start + (days - 1)`.

use crate::input::{DATE_FORMAT, parse_date};
use chrono::{Days, NaiveDate};
use shared::models::{MAX_TRAVEL_DAYS, MIN_TRAVEL_DAYS};

/// End date of a travel window
///
/// `None` when the start date is missing or `days` is outside 1..=120.
pub fn compute_end_date(start_date: Option<NaiveDate>, days: Option<i64>) -> Option<NaiveDate> {
    let start_date = start_date?;
    let days = days.filter(|d| (MIN_TRAVEL_DAYS..=MAX_TRAVEL_DAYS).contains(d))?;
    start_date.checked_add_days(Days::new(days.unsigned_abs() - 1))
}

/// End date for ISO date strings, formatted as `YYYY-MM-DD`
pub fn compute_end_date_str(start_date: Option<&str>, days: i64) -> Option<String> {
    let start_date = match start_date.map(parse_date).transpose() {
        Ok(date) => date,
        Err(e) => {
            tracing::debug!("{}", e);
            return None;
        }
    };

    compute_end_date(start_date, Some(days)).map(|d| d.format(DATE_FORMAT).to_string())
}
