//! Money Receipt Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Money Receipt (MR) record as held by the receipt form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyReceiptRecord {
    #[serde(default)]
    pub mr_number: Option<i64>,
    #[serde(default)]
    pub mr_date: Option<NaiveDate>,
    #[serde(default)]
    pub office_code: String,
    /// Derived, read-only: `<office>-<year>-<mr_number>`
    #[serde(default)]
    pub mr_no: String,
    /// Amount received
    #[serde(default)]
    pub amount: f64,
    /// Derived: `amount` as printed on the receipt (`1,234.50`)
    #[serde(default)]
    pub amount_formatted: String,
    /// Derived: `amount` spelled out in words
    #[serde(default)]
    pub amount_in_words: String,
}
