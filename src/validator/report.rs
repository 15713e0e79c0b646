//! Batch outcomes and summaries.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::{CanonicalRecord, RawRecord};

use super::verdict::ValidationVerdict;

/// A record that failed validation, kept with its untouched input so the
/// source can be re-scraped or fixed by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedRecord {
    pub original: RawRecord,
    pub verdict: ValidationVerdict,
}

/// Aggregate counters for one validated batch.
///
/// The frequency tables are keyed by field name and sorted, so two runs
/// over the same input serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total: u64,
    pub valid: u64,
    pub invalid: u64,
    pub total_errors: u64,
    pub total_warnings: u64,
    pub top_errors: BTreeMap<String, u64>,
    pub top_warnings: BTreeMap<String, u64>,
}

impl BatchSummary {
    /// Fold one verdict into the counters.
    ///
    /// Warnings count even when the record is valid; the whole point of
    /// the warning tables is to show quality drift before it starts
    /// invalidating records.
    pub fn tally(&mut self, verdict: &ValidationVerdict) {
        self.total += 1;
        if verdict.is_valid {
            self.valid += 1;
        } else {
            self.invalid += 1;
        }

        self.total_errors += verdict.errors.len() as u64;
        for issue in &verdict.errors {
            *self.top_errors.entry(issue.field.clone()).or_insert(0) += 1;
        }

        self.total_warnings += verdict.warnings.len() as u64;
        for issue in &verdict.warnings {
            *self.top_warnings.entry(issue.field.clone()).or_insert(0) += 1;
        }
    }

    /// Combine two summaries, for callers that validate in chunks.
    pub fn merge(&mut self, other: &BatchSummary) {
        self.total += other.total;
        self.valid += other.valid;
        self.invalid += other.invalid;
        self.total_errors += other.total_errors;
        self.total_warnings += other.total_warnings;
        for (field, count) in &other.top_errors {
            *self.top_errors.entry(field.clone()).or_insert(0) += count;
        }
        for (field, count) in &other.top_warnings {
            *self.top_warnings.entry(field.clone()).or_insert(0) += count;
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records: {} valid, {} invalid ({} errors, {} warnings)",
            self.total, self.valid, self.invalid, self.total_errors, self.total_warnings
        )
    }
}

/// Everything a batch validation produced.
///
/// Valid canonical records and rejected originals each keep their input
/// order. The summary is derived from the verdicts and nothing else; the
/// validator that produced this outcome holds no state of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub valid: Vec<CanonicalRecord>,
    pub invalid: Vec<RejectedRecord>,
    pub summary: BatchSummary,
}

impl BatchOutcome {
    /// True when every record in the batch validated.
    pub fn all_valid(&self) -> bool {
        self.invalid.is_empty()
    }
}
