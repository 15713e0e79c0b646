//! Record validation.
//!
//! [`RecordValidator`] drives the whole pipeline: normalize each field
//! once, judge the normalized values against the rule tables, and emit a
//! [`ValidationVerdict`] per record or a [`BatchOutcome`] per batch.
//!
//! # Design Principles
//!
//! - Validation never fails. Bad data produces issues inside a verdict;
//!   the only `Result` in the crate guards rule set construction.
//! - Errors block, warnings inform. A record is valid exactly when it
//!   has no errors.
//! - The validator is immutable and shares across threads; batch
//!   counters are returned, not accumulated.

mod engine;
mod report;
mod verdict;

pub use engine::RecordValidator;
pub use report::{BatchOutcome, BatchSummary, RejectedRecord};
pub use verdict::{FieldIssue, ValidationVerdict};
