//! Rule kinds and value checks.

use std::fmt;

use regex::Regex;

use crate::record::CanonicalValue;

/// How a rule's outcome affects the verdict, and when it runs.
///
/// - `Required` rules run unconditionally and block validity.
/// - `Format` rules run only when the field arrived in the raw record and
///   survived normalization; failures are advisory warnings.
/// - `Business` rules run whenever the field arrived in the raw record,
///   even if normalization cleared it; failures are advisory warnings.
///
/// The two gates differ on purpose. A format rule inspects the shape of a
/// value we still have, so it has nothing to say about a cleared field. A
/// business rule asks whether the source delivered usable data at all, so
/// a field that cleaning emptied out is exactly what it exists to flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Required,
    Format,
    Business,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Format => "format",
            Self::Business => "business",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A predicate over a normalized field value.
///
/// Checks receive the post-normalization value, `None` when the field is
/// absent. Every variant fails on absence and on a value of the wrong
/// shape; gating on presence is the rule kind's job, not the check's.
#[derive(Debug, Clone)]
pub enum Check {
    /// Text whose trimmed length exceeds `min_len`.
    PresentText { min_len: usize },
    /// A number within `[min, max]` inclusive.
    BoundedNumber { min: f64, max: f64 },
    /// Text matching a compiled pattern.
    TextMatches(Regex),
    /// Text whose character count lies within `[min, max]` inclusive.
    TextLength { min: usize, max: usize },
    /// A number greater than or equal to zero.
    NonNegativeNumber,
    /// A list with at least one entry.
    NonEmptyList,
}

impl Check {
    /// Evaluate the check against a normalized value.
    pub fn passes(&self, value: Option<&CanonicalValue>) -> bool {
        match (self, value) {
            (Self::PresentText { min_len }, Some(CanonicalValue::Text(text))) => {
                text.trim().chars().count() > *min_len
            }
            (Self::PresentText { .. }, _) => false,

            (Self::BoundedNumber { min, max }, Some(CanonicalValue::Number(number))) => {
                *number >= *min && *number <= *max
            }
            (Self::BoundedNumber { .. }, _) => false,

            (Self::TextMatches(pattern), Some(CanonicalValue::Text(text))) => {
                pattern.is_match(text)
            }
            (Self::TextMatches(_), _) => false,

            (Self::TextLength { min, max }, Some(CanonicalValue::Text(text))) => {
                let count = text.chars().count();
                count >= *min && count <= *max
            }
            (Self::TextLength { .. }, _) => false,

            (Self::NonNegativeNumber, Some(CanonicalValue::Number(number))) => *number >= 0.0,
            (Self::NonNegativeNumber, _) => false,

            (Self::NonEmptyList, Some(CanonicalValue::List(items))) => !items.is_empty(),
            (Self::NonEmptyList, _) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> CanonicalValue {
        CanonicalValue::Text(value.to_string())
    }

    #[test]
    fn test_present_text_requires_trimmed_length() {
        let check = Check::PresentText { min_len: 2 };
        assert!(check.passes(Some(&text("Admirals"))));
        assert!(check.passes(Some(&text("abc"))));
        assert!(!check.passes(Some(&text("ab"))));
        assert!(!check.passes(Some(&text("  ab  "))));
        assert!(!check.passes(Some(&CanonicalValue::Number(5.0))));
        assert!(!check.passes(None));
    }

    #[test]
    fn test_bounded_number_inclusive() {
        let check = Check::BoundedNumber { min: 0.0, max: 5.0 };
        assert!(check.passes(Some(&CanonicalValue::Number(0.0))));
        assert!(check.passes(Some(&CanonicalValue::Number(5.0))));
        assert!(!check.passes(Some(&CanonicalValue::Number(5.1))));
        assert!(!check.passes(Some(&CanonicalValue::Number(f64::NAN))));
        assert!(!check.passes(Some(&text("5"))));
        assert!(!check.passes(None));
    }

    #[test]
    fn test_text_matches() {
        let check = Check::TextMatches(Regex::new(r"^\d+$").unwrap());
        assert!(check.passes(Some(&text("1000"))));
        assert!(!check.passes(Some(&text("10.5"))));
        assert!(!check.passes(Some(&text(""))));
        assert!(!check.passes(Some(&CanonicalValue::Null)));
        assert!(!check.passes(None));
    }

    #[test]
    fn test_text_length_counts_chars() {
        let check = Check::TextLength { min: 2, max: 4 };
        assert!(check.passes(Some(&text("ab"))));
        assert!(check.passes(Some(&text("abcd"))));
        assert!(check.passes(Some(&text("\u{e9}\u{e9}"))));
        assert!(!check.passes(Some(&text("a"))));
        assert!(!check.passes(Some(&text("abcde"))));
        assert!(!check.passes(None));
    }

    #[test]
    fn test_non_negative_number() {
        let check = Check::NonNegativeNumber;
        assert!(check.passes(Some(&CanonicalValue::Number(0.0))));
        assert!(check.passes(Some(&CanonicalValue::Number(1.2))));
        assert!(!check.passes(Some(&CanonicalValue::Number(-0.1))));
        assert!(!check.passes(None));
    }

    #[test]
    fn test_non_empty_list() {
        let check = Check::NonEmptyList;
        assert!(check.passes(Some(&CanonicalValue::List(vec!["FCA".to_string()]))));
        assert!(!check.passes(Some(&CanonicalValue::List(vec![]))));
        assert!(!check.passes(Some(&CanonicalValue::Null)));
        assert!(!check.passes(None));
    }

    #[test]
    fn test_rule_kind_display() {
        assert_eq!(RuleKind::Required.to_string(), "required");
        assert_eq!(RuleKind::Format.to_string(), "format");
        assert_eq!(RuleKind::Business.to_string(), "business");
    }
}
