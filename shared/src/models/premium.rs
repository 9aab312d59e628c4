//! Premium Breakdown Model

use serde::{Deserialize, Serialize};

/// Monetary breakdown of a policy premium
///
/// `total` is derived: `premium + stamp + coins_net + vat`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumBreakdown {
    #[serde(default)]
    pub premium: f64,
    /// Stamp duty, only charged on Marine Cargo policies
    #[serde(default)]
    pub stamp: f64,
    /// Co-insurance net amount, only when the policy is co-insured
    #[serde(default)]
    pub coins_net: f64,
    /// VAT, only charged on Miscellaneous policies
    #[serde(default)]
    pub vat: f64,
    #[serde(default)]
    pub total: f64,
}

impl PremiumBreakdown {
    pub fn new(premium: f64, stamp: f64, coins_net: f64, vat: f64) -> Self {
        Self {
            premium,
            stamp,
            coins_net,
            vat,
            total: 0.0,
        }
    }
}
