//! The record validator.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::normalize::slugify;
use crate::record::{fields, CanonicalRecord, CanonicalValue, RawRecord};
use crate::rules::{FieldRule, RuleKind, RuleSet, RulesetResult};

use super::report::{BatchOutcome, RejectedRecord};
use super::verdict::{FieldIssue, ValidationVerdict};

/// Validates raw records against a compiled rule set.
///
/// The validator owns nothing but the rule set and never mutates it, so
/// one instance can serve any number of batches from any number of
/// threads. Per-batch counters live in the returned [`BatchOutcome`],
/// not in the validator.
#[derive(Debug, Clone)]
pub struct RecordValidator {
    ruleset: RuleSet,
}

impl RecordValidator {
    /// Build a validator with the standard rule catalog.
    ///
    /// # Errors
    ///
    /// Returns [`crate::rules::RulesetError::InvalidPattern`] if a
    /// catalog pattern fails to compile.
    pub fn new() -> RulesetResult<Self> {
        Ok(Self {
            ruleset: RuleSet::standard()?,
        })
    }

    /// Build a validator with a custom rule set.
    pub fn with_ruleset(ruleset: RuleSet) -> Self {
        Self { ruleset }
    }

    pub fn ruleset(&self) -> &RuleSet {
        &self.ruleset
    }

    /// Validate and normalize a single record.
    ///
    /// Never fails: malformed values degrade through their normalizers
    /// and surface as issues, not errors. Rules are evaluated in
    /// registration order against normalized values, each field being
    /// normalized at most once:
    ///
    /// - required rules always run and block validity,
    /// - format rules run when the field arrived in the raw record and
    ///   survived normalization, and only warn,
    /// - business rules run when the field arrived in the raw record,
    ///   cleared or not, and only warn.
    ///
    /// The canonical record keeps every raw key. A field normalization
    /// cleared is serialized as null rather than dropped, and fields no
    /// normalizer claims pass through unchanged.
    pub fn validate_record(&self, raw: &RawRecord) -> ValidationVerdict {
        let mut staged: BTreeMap<String, Option<CanonicalValue>> = BTreeMap::new();
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for rule in self.ruleset.rules() {
            let value = stage(&self.ruleset, &mut staged, raw, &rule.field);
            match rule.kind {
                RuleKind::Required => {
                    if !rule.check.passes(value.as_ref()) {
                        errors.push(issue_for(rule, value));
                    }
                }
                RuleKind::Format => {
                    if raw.contains(&rule.field)
                        && value.is_some()
                        && !rule.check.passes(value.as_ref())
                    {
                        warnings.push(issue_for(rule, value));
                    }
                }
                RuleKind::Business => {
                    if raw.contains(&rule.field) && !rule.check.passes(value.as_ref()) {
                        warnings.push(issue_for(rule, value));
                    }
                }
            }
        }

        // Normalize fields no rule touched, then pass the rest through.
        for (field, _) in self.ruleset.transforms() {
            stage(&self.ruleset, &mut staged, raw, field);
        }
        for (field, value) in raw.fields() {
            if !staged.contains_key(field) {
                staged.insert(field.to_string(), Some(CanonicalValue::from(value.clone())));
            }
        }

        let mut canonical = BTreeMap::new();
        for (field, value) in staged {
            match value {
                Some(value) => {
                    canonical.insert(field, value);
                }
                // Raw key whose value was cleared: keep it as null.
                None => {
                    if raw.contains(&field) {
                        canonical.insert(field, CanonicalValue::Null);
                    }
                }
            }
        }

        let slug = canonical
            .get(fields::NAME)
            .and_then(|value| value.as_text())
            .map(slugify)
            .filter(|slug| !slug.is_empty());

        let record = CanonicalRecord::new(canonical, slug);
        let is_valid = errors.is_empty();
        let verdict = ValidationVerdict {
            is_valid,
            errors,
            warnings,
            record,
        };

        debug!(
            valid = verdict.is_valid,
            slug = verdict.record.slug().unwrap_or(""),
            fields = verdict.record.len(),
            errors = verdict.errors.len(),
            warnings = verdict.warnings.len(),
            "record validated"
        );
        verdict
    }

    /// Validate a batch, splitting it into canonical survivors and
    /// rejected originals and tallying a summary as it goes.
    pub fn validate_batch(&self, records: &[RawRecord]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for raw in records {
            let verdict = self.validate_record(raw);
            outcome.summary.tally(&verdict);

            if verdict.is_valid {
                outcome.valid.push(verdict.record);
            } else {
                let failed = verdict.error_fields().join(",");
                warn!(
                    source = raw.source_file().unwrap_or("unknown"),
                    fields = %failed,
                    "record rejected"
                );
                outcome.invalid.push(RejectedRecord {
                    original: raw.clone(),
                    verdict,
                });
            }
        }

        info!(
            total = outcome.summary.total,
            valid = outcome.summary.valid,
            invalid = outcome.summary.invalid,
            "batch validated"
        );
        outcome
    }
}

/// Normalize `field` once, memoizing into `staged`.
///
/// `None` records "normalized to absent" so later rules on the same
/// field reuse the outcome instead of re-running the normalizer.
fn stage<'a>(
    ruleset: &RuleSet,
    staged: &'a mut BTreeMap<String, Option<CanonicalValue>>,
    raw: &RawRecord,
    field: &str,
) -> &'a Option<CanonicalValue> {
    staged
        .entry(field.to_string())
        .or_insert_with(|| match ruleset.transform_for(field) {
            Some(transform) => transform.apply(raw.get(field)),
            None => raw.get(field).cloned().map(CanonicalValue::from),
        })
}

fn issue_for(rule: &FieldRule, value: &Option<CanonicalValue>) -> FieldIssue {
    FieldIssue::new(
        rule.field.clone(),
        rule.message.clone(),
        value.clone().unwrap_or(CanonicalValue::Null),
    )
}
