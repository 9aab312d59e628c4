//! Premium, stamp, co-insurance and VAT derivation
//!
//! Which charges apply depends on the class of business:
//! - stamp only on Marine Cargo
//! - VAT only on Miscellaneous
//! - co-insurance net only when the policy is co-insured
//!
//! A charge that does not apply is zeroed, overwriting whatever the user
//! typed earlier, and the total is re-summed.

use crate::money::{finite_or_zero, to_decimal, to_f64};
use rust_decimal::Decimal;
use shared::models::PremiumBreakdown;

/// Default class code for Marine Cargo
pub const DEFAULT_MARINE_CARGO_CODE: &str = "MC";
/// Default class code for Miscellaneous
pub const DEFAULT_MISCELLANEOUS_CODE: &str = "MISC";

/// Class of business as far as premium charges are concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessClass {
    MarineCargo,
    Miscellaneous,
    Other,
}

/// Class codes and rates driving the premium rules
#[derive(Debug, Clone, PartialEq)]
pub struct ClassRules {
    pub marine_cargo_code: String,
    pub miscellaneous_code: String,
    /// When set, VAT on Miscellaneous policies is derived from the premium
    /// instead of being typed in
    pub vat_rate_percent: Option<f64>,
}

impl Default for ClassRules {
    fn default() -> Self {
        Self {
            marine_cargo_code: DEFAULT_MARINE_CARGO_CODE.to_string(),
            miscellaneous_code: DEFAULT_MISCELLANEOUS_CODE.to_string(),
            vat_rate_percent: None,
        }
    }
}

impl ClassRules {
    /// Classify a class code
    ///
    /// Codes such as `MISC/OMP` are matched on their first segment, case
    /// insensitively.
    pub fn classify(&self, class_code: &str) -> BusinessClass {
        let code = class_code.trim();
        let head = code.split('/').next().unwrap_or_default().trim();
        let matches = |configured: &str| {
            let configured = configured.trim();
            !configured.is_empty()
                && (code.eq_ignore_ascii_case(configured) || head.eq_ignore_ascii_case(configured))
        };

        if matches(&self.marine_cargo_code) {
            BusinessClass::MarineCargo
        } else if matches(&self.miscellaneous_code) {
            BusinessClass::Miscellaneous
        } else {
            BusinessClass::Other
        }
    }
}

/// Sum of premium, stamp, co-insurance net and VAT
///
/// Non-finite components count as zero.
pub fn compute_total(breakdown: &PremiumBreakdown) -> f64 {
    finite_or_zero(breakdown.premium)
        + finite_or_zero(breakdown.stamp)
        + finite_or_zero(breakdown.coins_net)
        + finite_or_zero(breakdown.vat)
}

/// VAT on a premium at `rate_percent`, rounded to 2 decimal places
pub fn vat_for(premium: f64, rate_percent: f64) -> f64 {
    let amount = to_decimal(finite_or_zero(premium)) * to_decimal(finite_or_zero(rate_percent))
        / Decimal::ONE_HUNDRED;
    to_f64(amount)
}

/// Zero the charges that do not apply to the class and re-sum the total
///
/// Applying the rules twice gives the same result as applying them once.
pub fn apply_class_rules(
    breakdown: &PremiumBreakdown,
    class_code: &str,
    co_insurance: bool,
    rules: &ClassRules,
) -> PremiumBreakdown {
    let class = rules.classify(class_code);
    let premium = finite_or_zero(breakdown.premium);

    let stamp = match class {
        BusinessClass::MarineCargo => finite_or_zero(breakdown.stamp),
        _ => 0.0,
    };
    let vat = match (class, rules.vat_rate_percent) {
        (BusinessClass::Miscellaneous, Some(rate)) => vat_for(premium, rate),
        (BusinessClass::Miscellaneous, None) => finite_or_zero(breakdown.vat),
        _ => 0.0,
    };
    let coins_net = if co_insurance {
        finite_or_zero(breakdown.coins_net)
    } else {
        0.0
    };

    let mut next = PremiumBreakdown::new(premium, stamp, coins_net, vat);
    next.total = compute_total(&next);
    next
}
