//! Rule set construction errors.
//!
//! Building a rule set is the only fallible operation in the crate.
//! Validation itself never errors: malformed records degrade into
//! verdicts, not failures.

use thiserror::Error;

use super::check::RuleKind;

pub type RulesetResult<T> = Result<T, RulesetError>;

#[derive(Debug, Error)]
pub enum RulesetError {
    /// A field already has a rule of this kind registered.
    #[error("rule for field '{field}' ({kind}) is already registered")]
    DuplicateRule { field: String, kind: RuleKind },

    /// A field already has a normalizer registered.
    #[error("normalizer for field '{field}' is already registered")]
    DuplicateTransform { field: String },

    /// A check or normalizer pattern failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
