//! Travel Window Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minimum number of travel days on an OMP policy
pub const MIN_TRAVEL_DAYS: i64 = 1;
/// Maximum number of travel days on an OMP policy
pub const MAX_TRAVEL_DAYS: i64 = 120;

/// Insured travel period
///
/// The range is inclusive: a 1-day trip ends on the day it starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelWindow {
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub days: Option<i64>,
    /// Derived from `start_date` and `days`
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}
