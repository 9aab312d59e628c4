//! Policy and money receipt numbers
//!
//! - Policy: `BGIC/<office>/<class>-<omp>/<MM>/<YYYY>` (month and year of issue)
//! - Money receipt: `<office>-<year>-<mr>`
//!
//! Both builders return an empty string until every component is present,
//! so the read-only field stays blank while the form is being filled.

use chrono::{Datelike, NaiveDate};
use shared::models::{MAX_SEQUENCE_NUMBER, MIN_SEQUENCE_NUMBER};

/// Company prefix of every policy number
pub const POLICY_PREFIX: &str = "BGIC";

/// Sequence numbers outside 1..=9999 are never embedded
#[inline]
fn checked_sequence(sequence: Option<i64>) -> Option<i64> {
    sequence.filter(|n| (MIN_SEQUENCE_NUMBER..=MAX_SEQUENCE_NUMBER).contains(n))
}

/// Build the policy number for an OMP record
pub fn build_policy_number(
    office_code: &str,
    class_code: &str,
    sequence: Option<i64>,
    issue_date: Option<NaiveDate>,
) -> String {
    let office = office_code.trim();
    let class = class_code.trim();
    if office.is_empty() || class.is_empty() {
        return String::new();
    }
    let (Some(sequence), Some(issue_date)) = (checked_sequence(sequence), issue_date) else {
        return String::new();
    };

    format!(
        "{POLICY_PREFIX}/{office}/{class}-{sequence}/{}",
        issue_date.format("%m/%Y")
    )
}

/// Build the money receipt number
pub fn build_mr_number(office_code: &str, year: Option<i32>, sequence: Option<i64>) -> String {
    let office = office_code.trim();
    if office.is_empty() {
        return String::new();
    }
    let (Some(year), Some(sequence)) = (year, checked_sequence(sequence)) else {
        return String::new();
    };

    format!("{office}-{year}-{sequence}")
}

/// Money receipt number from the receipt date
pub fn mr_number_for_date(
    office_code: &str,
    mr_date: Option<NaiveDate>,
    sequence: Option<i64>,
) -> String {
    build_mr_number(office_code, mr_date.map(|d| d.year()), sequence)
}
