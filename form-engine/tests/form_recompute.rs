//! End-to-end recompute of the OMP and money receipt forms, driven the way
//! an input-change handler would: coerce, validate, merge, recompute.

use chrono::NaiveDate;
use form_engine::input::{number_or_zero, parse_integer, parse_optional_date};
use form_engine::validation::{validate_sequence_input, validate_travel_days};
use form_engine::{ClassRules, Config, FormEngine, FormPayload, Recompute, group_by_category};
use shared::models::{
    FINAL_SURVEY_REPORT, MoneyReceiptRecord, OmpRecord, UNCATEGORIZED, UploadedFile,
};

fn engine_with_vat() -> FormEngine {
    let config = Config::from_lookup(|key| match key {
        "VAT_RATE_PERCENT" => Some("15".to_string()),
        _ => None,
    });
    FormEngine::from_config(&config)
}

#[test]
fn omp_form_edit_sequence() {
    let engine = FormEngine::default();
    let mut record = OmpRecord::default();

    // Nothing filled yet
    record = engine.recompute(&record);
    assert_eq!(record.policy_number, "");
    assert_eq!(record.premium.total, 0.0);

    record.office_code = "DZO".to_string();
    record.class_code = "MISC/OMP".to_string();
    record.omp_number = Some(validate_sequence_input("1250", "ompNumber").unwrap() as i64);
    record = engine.recompute(&record);
    assert_eq!(record.policy_number, "", "issue date still missing");

    record.issue_date = parse_optional_date("2025-05-19");
    record = engine.recompute(&record);
    assert_eq!(record.policy_number, "BGIC/DZO/MISC/OMP-1250/05/2025");

    // User types a stamp on a Miscellaneous policy: it is wiped
    record.premium.premium = number_or_zero("3,000");
    record.premium.stamp = number_or_zero("25");
    record.premium.vat = number_or_zero("450");
    record = engine.recompute(&record);
    assert_eq!(record.premium.stamp, 0.0);
    assert_eq!(record.premium.vat, 450.0);
    assert_eq!(record.premium.total, 3450.0);

    // Co-insurance switched on, then off again
    record.co_insurance = true;
    record.premium.coins_net = 120.0;
    record = engine.recompute(&record);
    assert_eq!(record.premium.total, 3570.0);
    record.co_insurance = false;
    record = engine.recompute(&record);
    assert_eq!(record.premium.coins_net, 0.0);
    assert_eq!(record.premium.total, 3450.0);

    // Travel window
    let days = validate_travel_days(parse_integer("28").unwrap()).unwrap();
    record.travel.start_date = parse_optional_date("2025-07-10");
    record.travel.days = Some(days as i64);
    record = engine.recompute(&record);
    assert_eq!(record.travel.end_date, NaiveDate::from_ymd_opt(2025, 8, 6));

    assert_eq!(engine.recompute(&record), record);
}

#[test]
fn configured_vat_rate_is_applied() {
    let engine = engine_with_vat();
    let record = OmpRecord {
        office_code: "HO".to_string(),
        class_code: "MISC/OMP".to_string(),
        premium: shared::models::PremiumBreakdown::new(2000.0, 0.0, 0.0, 0.0),
        ..Default::default()
    };
    let next = engine.recompute(&record);
    assert_eq!(next.premium.vat, 300.0);
    assert_eq!(next.premium.total, 2300.0);
}

#[test]
fn class_change_to_marine_cargo_drops_vat() {
    let engine = FormEngine::new(ClassRules::default());
    let mut record = OmpRecord {
        class_code: "MISC/OMP".to_string(),
        premium: shared::models::PremiumBreakdown::new(1000.0, 0.0, 0.0, 150.0),
        ..Default::default()
    };
    record = engine.recompute(&record);
    assert_eq!(record.premium.total, 1150.0);

    record.class_code = "MC".to_string();
    record.premium.stamp = 30.0;
    record = engine.recompute(&record);
    assert_eq!(record.premium.vat, 0.0);
    assert_eq!(record.premium.total, 1030.0);
}

#[test]
fn money_receipt_from_json() {
    let engine = FormEngine::default();
    let json = serde_json::json!({
        "kind": "moneyReceipt",
        "record": {
            "mrNumber": 7,
            "mrDate": "2025-06-01",
            "officeCode": "DZO",
            "amount": 1250.75
        }
    })
    .to_string();

    let out: FormPayload = serde_json::from_str(&engine.recompute_json(&json).unwrap()).unwrap();
    let expected = MoneyReceiptRecord {
        mr_number: Some(7),
        mr_date: NaiveDate::from_ymd_opt(2025, 6, 1),
        office_code: "DZO".to_string(),
        mr_no: "DZO-2025-7".to_string(),
        amount: 1250.75,
        amount_formatted: "1,250.75".to_string(),
        amount_in_words: "One Thousand Two Hundred Fifty".to_string(),
    };
    assert_eq!(out, FormPayload::MoneyReceipt(expected));
    assert_eq!(out.recompute(engine.rules()), out);
}

#[test]
fn claim_documents_grouped_for_display() {
    let files: Vec<UploadedFile> = serde_json::from_value(serde_json::json!([
        { "path": "claims/88/fsr.pdf", "categoryName": "Final Survey Report" },
        { "path": "claims/88/scan-1.jpg" },
        { "path": "claims/88/bill-1.pdf", "categoryName": "Hospital Bill" },
        { "path": "claims/88/passport.pdf", "categoryName": "Passport" },
        { "path": "claims/88/bill-2.pdf", "categoryName": "Hospital Bill" },
        { "path": "claims/88/scan-2.jpg", "categoryName": null }
    ]))
    .unwrap();

    let groups = group_by_category(&files);
    let summary: Vec<(&str, usize)> = groups
        .iter()
        .map(|g| (g.category.as_str(), g.files.len()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Hospital Bill", 2),
            ("Passport", 1),
            (UNCATEGORIZED, 2),
            (FINAL_SURVEY_REPORT, 1),
        ]
    );
    assert_eq!(groups[0].files[1].file_name(), "bill-2.pdf");
}
