//! Per-record validation verdicts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::{CanonicalRecord, CanonicalValue};

/// One failed check: the field, the rule's message, and the normalized
/// value the check saw (`Null` when the field was absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
    pub value: CanonicalValue,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>, value: CanonicalValue) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value,
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': {}", self.field, self.message)
    }
}

/// The outcome of validating one record.
///
/// `is_valid` reflects errors alone; a record with nothing but warnings
/// is valid. The canonical record is always populated, even for invalid
/// input, so callers can inspect or quarantine what normalization made
/// of a rejected record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationVerdict {
    pub is_valid: bool,
    pub errors: Vec<FieldIssue>,
    pub warnings: Vec<FieldIssue>,
    pub record: CanonicalRecord,
}

impl ValidationVerdict {
    /// Fields named by errors, in evaluation order. Used for logging.
    pub fn error_fields(&self) -> Vec<&str> {
        self.errors.iter().map(|issue| issue.field.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display_names_field() {
        let issue = FieldIssue::new("name", "must be text longer than 2 characters", CanonicalValue::Null);
        assert_eq!(
            issue.to_string(),
            "field 'name': must be text longer than 2 characters"
        );
    }

    #[test]
    fn test_issue_serializes_value_shape() {
        let issue = FieldIssue::new("rating", "out of range", CanonicalValue::Number(7.0));
        let encoded = serde_json::to_value(&issue).unwrap();
        assert_eq!(encoded["field"], "rating");
        assert_eq!(encoded["value"], 7.0);

        let absent = FieldIssue::new("name", "missing", CanonicalValue::Null);
        let encoded = serde_json::to_value(&absent).unwrap();
        assert!(encoded["value"].is_null());
    }
}
