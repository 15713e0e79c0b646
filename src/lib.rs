//! intake - A strict, deterministic validation and normalization engine
//! for scraped records.
//!
//! Raw scraper output goes in; canonical records, per-record verdicts,
//! and batch summaries come out. Validation never fails on bad data:
//! normalizers degrade malformed values and rules turn what remains
//! into errors or warnings.

pub mod normalize;
pub mod record;
pub mod rules;
pub mod validator;

pub use normalize::{slugify, JunkFilter, SynonymTable};
pub use record::{CanonicalRecord, CanonicalValue, RawRecord, RawValue};
pub use rules::{
    Check, FieldRule, RuleKind, RuleSet, RuleSetBuilder, RulesetError, RulesetResult, Transform,
};
pub use validator::{
    BatchOutcome, BatchSummary, FieldIssue, RecordValidator, RejectedRecord, ValidationVerdict,
};
