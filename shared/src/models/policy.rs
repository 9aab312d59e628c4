//! OMP Policy Model

use super::premium::PremiumBreakdown;
use super::travel::TravelWindow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lowest OMP / MR sequence number
pub const MIN_SEQUENCE_NUMBER: i64 = 1;
/// Highest OMP / MR sequence number
pub const MAX_SEQUENCE_NUMBER: i64 = 9999;

/// Overseas Medical (travel) Policy record as held by the OMP form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OmpRecord {
    #[serde(default)]
    pub omp_number: Option<i64>,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub office_code: String,
    #[serde(default)]
    pub class_code: String,
    /// Derived, read-only: `BGIC/<office>/<class>-<omp>/<MM>/<YYYY>`
    #[serde(default)]
    pub policy_number: String,
    /// Whether the policy is jointly underwritten
    #[serde(default)]
    pub co_insurance: bool,
    #[serde(default)]
    pub premium: PremiumBreakdown,
    #[serde(default)]
    pub travel: TravelWindow,
}
