//! Integration tests for batch validation reporting.
//!
//! Covers the batch contract: input order survives the valid/invalid
//! split, summary counters and frequency tables add up, summaries from
//! sharded runs merge into the single-pass result, and the serialized
//! outcome keeps its wire shape.

use std::collections::BTreeMap;

use intake::{BatchSummary, RawRecord, RecordValidator};
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn validator() -> RecordValidator {
    RecordValidator::new().unwrap()
}

fn record(value: serde_json::Value) -> RawRecord {
    RawRecord::from_json(&value)
}

/// Five records with a known issue profile:
///
/// - three validate (one clean, two with a single warning each),
/// - two are rejected for their name (one short, one missing), and the
///   missing-name record also carries a leverage warning.
fn fleet() -> Vec<RawRecord> {
    vec![
        record(json!({ "name": "Alpha Broker", "rating": 4.5, "platforms": ["mt4"] })),
        record(json!({ "name": "B", "rating": 4.0, "sourceFile": "bravo.html" })),
        record(json!({ "name": "Charlie FX", "rating": 3.8, "regulations": [] })),
        record(json!({ "rating": "9.9", "leverage": "very high", "sourceFile": "delta.html" })),
        record(json!({ "name": "Echo Markets", "rating": 5.0, "platforms": [] })),
    ]
}

// =============================================================================
// Ordering
// =============================================================================

/// Valid and rejected records each keep their input order.
#[test]
fn test_split_preserves_input_order() {
    let outcome = validator().validate_batch(&fleet());

    let valid_names: Vec<&str> = outcome
        .valid
        .iter()
        .map(|record| record.name().unwrap())
        .collect();
    assert_eq!(valid_names, vec!["Alpha Broker", "Charlie FX", "Echo Markets"]);

    let rejected_sources: Vec<&str> = outcome
        .invalid
        .iter()
        .map(|rejected| rejected.original.source_file().unwrap())
        .collect();
    assert_eq!(rejected_sources, vec!["bravo.html", "delta.html"]);
}

/// No record is dropped: both sides of the split add up to the input.
#[test]
fn test_every_record_lands_on_one_side() {
    let records = fleet();
    let outcome = validator().validate_batch(&records);

    assert_eq!(outcome.valid.len() + outcome.invalid.len(), records.len());
    assert_eq!(outcome.summary.valid as usize, outcome.valid.len());
    assert_eq!(outcome.summary.invalid as usize, outcome.invalid.len());
}

// =============================================================================
// Summary Counters
// =============================================================================

/// Counters match the fleet's issue profile.
#[test]
fn test_summary_counters_add_up() {
    let outcome = validator().validate_batch(&fleet());
    let summary = &outcome.summary;

    assert_eq!(summary.total, 5);
    assert_eq!(summary.valid, 3);
    assert_eq!(summary.invalid, 2);
    assert_eq!(summary.total_errors, 2);
    assert_eq!(summary.total_warnings, 3);
}

/// Frequency tables attribute every issue to its field.
#[test]
fn test_frequency_tables_count_fields() {
    let outcome = validator().validate_batch(&fleet());

    assert_eq!(
        outcome.summary.top_errors,
        BTreeMap::from([("name".to_string(), 2)])
    );
    assert_eq!(
        outcome.summary.top_warnings,
        BTreeMap::from([
            ("leverage".to_string(), 1),
            ("platforms".to_string(), 1),
            ("regulations".to_string(), 1),
        ])
    );
}

/// Warnings on records that validated still count toward the tables.
#[test]
fn test_warnings_from_valid_records_are_tallied() {
    let outcome = validator().validate_batch(&[record(json!({
        "name": "Charlie FX",
        "rating": 3.8,
        "regulations": []
    }))]);

    assert_eq!(outcome.summary.valid, 1);
    assert_eq!(outcome.summary.invalid, 0);
    assert_eq!(outcome.summary.total_warnings, 1);
    assert_eq!(outcome.summary.top_warnings.get("regulations"), Some(&1));
}

/// An empty batch reports zeroes and no tables.
#[test]
fn test_empty_batch_reports_zeroes() {
    let outcome = validator().validate_batch(&[]);

    assert!(outcome.all_valid());
    assert_eq!(outcome.summary, BatchSummary::default());
    assert_eq!(
        outcome.summary.to_string(),
        "0 records: 0 valid, 0 invalid (0 errors, 0 warnings)"
    );
}

/// The display line carries every counter an operator triages by.
#[test]
fn test_display_line_matches_counters() {
    let outcome = validator().validate_batch(&fleet());
    assert_eq!(
        outcome.summary.to_string(),
        "5 records: 3 valid, 2 invalid (2 errors, 3 warnings)"
    );
}

// =============================================================================
// Sharded Batches
// =============================================================================

/// Merged per-shard summaries equal the single-pass summary.
#[test]
fn test_merged_shards_match_single_pass() {
    let records = fleet();
    let validator = validator();

    let whole = validator.validate_batch(&records);

    let mut merged = validator.validate_batch(&records[..2]).summary;
    merged.merge(&validator.validate_batch(&records[2..]).summary);

    assert_eq!(merged, whole.summary);
}

// =============================================================================
// Rejected Records
// =============================================================================

/// Rejections keep the untouched original next to the best-effort
/// canonical record.
#[test]
fn test_rejections_keep_original_and_canonical() {
    let records = fleet();
    let outcome = validator().validate_batch(&records);

    let rejected = &outcome.invalid[1];
    assert_eq!(rejected.original, records[3]);
    assert!(!rejected.verdict.is_valid);
    // Normalization still ran: the out-of-range rating text clamped.
    assert_eq!(rejected.verdict.record.rating(), Some(5.0));
    assert_eq!(rejected.verdict.warnings[0].field, "leverage");
}

// =============================================================================
// Wire Shape
// =============================================================================

/// The serialized outcome holds exactly valid/invalid/summary, with
/// camelCase counters and field-keyed frequency tables.
#[test]
fn test_outcome_wire_shape() {
    let outcome = validator().validate_batch(&[
        record(json!({ "name": "Alpha Broker", "rating": 4.5 })),
        record(json!({ "name": "B", "rating": 4.0 })),
    ]);

    let encoded = serde_json::to_value(&outcome).unwrap();
    let object = encoded.as_object().unwrap();
    assert_eq!(object.len(), 3);
    assert!(object.contains_key("valid"));
    assert!(object.contains_key("invalid"));
    assert!(object.contains_key("summary"));

    let summary = &encoded["summary"];
    assert_eq!(summary["total"], json!(2));
    assert_eq!(summary["valid"], json!(1));
    assert_eq!(summary["invalid"], json!(1));
    assert_eq!(summary["totalErrors"], json!(1));
    assert_eq!(summary["totalWarnings"], json!(0));
    assert_eq!(summary["topErrors"], json!({ "name": 1 }));
    assert_eq!(summary["topWarnings"], json!({}));

    let accepted = &encoded["valid"][0];
    assert_eq!(accepted["name"], json!("Alpha Broker"));
    assert_eq!(accepted["slug"], json!("alpha-broker"));
    assert!(accepted.get("validatedAt").is_some());

    let rejected = &encoded["invalid"][0];
    assert_eq!(rejected["original"]["name"], json!("B"));
    assert_eq!(rejected["verdict"]["isValid"], json!(false));
    let issue = &rejected["verdict"]["errors"][0];
    assert_eq!(issue["field"], json!("name"));
    assert!(issue.get("message").is_some());
    assert_eq!(issue["value"], json!("B"));
    assert!(rejected["verdict"]["record"].get("validatedAt").is_some());
}

// =============================================================================
// Determinism
// =============================================================================

/// Two runs over the same input agree on everything but timestamps.
#[test]
fn test_batch_validation_is_deterministic() {
    let records = fleet();
    let validator = validator();

    let first = validator.validate_batch(&records);
    for _ in 0..20 {
        let next = validator.validate_batch(&records);
        assert_eq!(next.summary, first.summary);

        let slugs: Vec<Option<&str>> =
            next.valid.iter().map(|record| record.slug()).collect();
        let first_slugs: Vec<Option<&str>> =
            first.valid.iter().map(|record| record.slug()).collect();
        assert_eq!(slugs, first_slugs);

        for (left, right) in next.invalid.iter().zip(&first.invalid) {
            assert_eq!(left.original, right.original);
            assert_eq!(left.verdict.errors, right.verdict.errors);
            assert_eq!(left.verdict.warnings, right.verdict.warnings);
        }
    }
}
