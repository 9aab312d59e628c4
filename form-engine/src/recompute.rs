//! Single recompute pass over a form record
//!
//! Every derived field of a record is rebuilt from its inputs in one call,
//! after each edit. Recomputing an already consistent record changes
//! nothing.

use crate::config::Config;
use crate::format::format_amount;
use crate::numbering::{build_policy_number, mr_number_for_date};
use crate::premium::{ClassRules, apply_class_rules};
use crate::travel::compute_end_date;
use crate::words::amount_to_words;
use serde::{Deserialize, Serialize};
use shared::error::AppResult;
use shared::models::{MoneyReceiptRecord, OmpRecord};

/// A record whose derived fields can be rebuilt from its inputs
pub trait Recompute: Sized {
    fn recompute(&self, rules: &ClassRules) -> Self;
}

impl Recompute for OmpRecord {
    fn recompute(&self, rules: &ClassRules) -> Self {
        let mut next = self.clone();
        next.policy_number = build_policy_number(
            &self.office_code,
            &self.class_code,
            self.omp_number,
            self.issue_date,
        );
        next.premium = apply_class_rules(&self.premium, &self.class_code, self.co_insurance, rules);
        next.travel.end_date = compute_end_date(self.travel.start_date, self.travel.days);

        tracing::debug!(
            policy_number = %next.policy_number,
            total = next.premium.total,
            end_date = ?next.travel.end_date,
            "Recomputed OMP record"
        );
        next
    }
}

impl Recompute for MoneyReceiptRecord {
    fn recompute(&self, _rules: &ClassRules) -> Self {
        let mut next = self.clone();
        next.mr_no = mr_number_for_date(&self.office_code, self.mr_date, self.mr_number);
        next.amount_formatted = format_amount(self.amount);
        next.amount_in_words = amount_to_words(self.amount);

        tracing::debug!(mr_no = %next.mr_no, "Recomputed money receipt");
        next
    }
}

/// Form record as exchanged with the front-end, tagged by form kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "record", rename_all = "camelCase")]
pub enum FormPayload {
    Omp(OmpRecord),
    MoneyReceipt(MoneyReceiptRecord),
}

impl Recompute for FormPayload {
    fn recompute(&self, rules: &ClassRules) -> Self {
        match self {
            Self::Omp(record) => Self::Omp(record.recompute(rules)),
            Self::MoneyReceipt(record) => Self::MoneyReceipt(record.recompute(rules)),
        }
    }
}

/// Recompute entry point holding the configured class rules
#[derive(Debug, Clone, Default)]
pub struct FormEngine {
    rules: ClassRules,
}

impl FormEngine {
    pub fn new(rules: ClassRules) -> Self {
        Self { rules }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.class_rules())
    }

    pub fn rules(&self) -> &ClassRules {
        &self.rules
    }

    /// Rebuild every derived field of `record`
    pub fn recompute<R: Recompute>(&self, record: &R) -> R {
        record.recompute(&self.rules)
    }

    /// Recompute a JSON-encoded [`FormPayload`]
    pub fn recompute_json(&self, json: &str) -> AppResult<String> {
        let payload: FormPayload = serde_json::from_str(json)?;
        let next = self.recompute(&payload);
        Ok(serde_json::to_string(&next)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::error::ErrorCode;
    use shared::models::{PremiumBreakdown, TravelWindow};

    fn omp() -> OmpRecord {
        OmpRecord {
            omp_number: Some(1250),
            issue_date: NaiveDate::from_ymd_opt(2025, 5, 19),
            office_code: "DZO".to_string(),
            class_code: "MISC/OMP".to_string(),
            policy_number: "stale".to_string(),
            co_insurance: false,
            premium: PremiumBreakdown::new(2000.0, 10.0, 40.0, 300.0),
            travel: TravelWindow {
                start_date: NaiveDate::from_ymd_opt(2025, 7, 10),
                days: Some(28),
                end_date: None,
            },
        }
    }

    #[test]
    fn test_recompute_omp() {
        let engine = FormEngine::default();
        let next = engine.recompute(&omp());

        assert_eq!(next.policy_number, "BGIC/DZO/MISC/OMP-1250/05/2025");
        assert_eq!(next.premium.stamp, 0.0);
        assert_eq!(next.premium.coins_net, 0.0);
        assert_eq!(next.premium.vat, 300.0);
        assert_eq!(next.premium.total, 2300.0);
        assert_eq!(next.travel.end_date, NaiveDate::from_ymd_opt(2025, 8, 6));
    }

    #[test]
    fn test_recompute_omp_is_stable() {
        let engine = FormEngine::default();
        let once = engine.recompute(&omp());
        assert_eq!(engine.recompute(&once), once);
    }

    #[test]
    fn test_recompute_clears_derived_fields_when_inputs_missing() {
        let mut record = omp();
        record.office_code.clear();
        record.travel.days = None;
        record.travel.end_date = NaiveDate::from_ymd_opt(2025, 1, 1);

        let next = FormEngine::default().recompute(&record);
        assert_eq!(next.policy_number, "");
        assert_eq!(next.travel.end_date, None);
    }

    #[test]
    fn test_recompute_money_receipt() {
        let record = MoneyReceiptRecord {
            mr_number: Some(7),
            mr_date: NaiveDate::from_ymd_opt(2025, 3, 14),
            office_code: "DZO".to_string(),
            amount: 150_000.0,
            ..Default::default()
        };
        let next = FormEngine::default().recompute(&record);
        assert_eq!(next.mr_no, "DZO-2025-7");
        assert_eq!(next.amount_formatted, "150,000.00");
        assert_eq!(next.amount_in_words, "One Lakh Fifty Thousand");
    }

    #[test]
    fn test_recompute_json() {
        let engine = FormEngine::default();
        let json = r#"{"kind":"moneyReceipt","record":{"mrNumber":12,"mrDate":"2025-01-05","officeCode":"CTG","amount":1250}}"#;
        let out: FormPayload = serde_json::from_str(&engine.recompute_json(json).unwrap()).unwrap();
        let FormPayload::MoneyReceipt(record) = out else {
            panic!("expected a money receipt");
        };
        assert_eq!(record.mr_no, "CTG-2025-12");
        assert_eq!(record.amount_in_words, "One Thousand Two Hundred Fifty");
    }

    #[test]
    fn test_recompute_json_rejects_malformed() {
        let err = FormEngine::default().recompute_json("{\"kind\":\"claim\"}").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }
}
