//! Canonical records produced by validation.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fields;
use super::raw::RawValue;

/// A normalized field value.
///
/// Mirrors [`RawValue`] with one addition: `Null` marks a field that was
/// present in the raw record but cleared by normalization. Keeping the key
/// with an explicit null preserves the full raw key set in the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CanonicalValue {
    Null,
    Text(String),
    Number(f64),
    List(Vec<String>),
}

impl CanonicalValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::List(_) => "list",
        }
    }
}

impl From<RawValue> for CanonicalValue {
    /// Pass-through conversion for fields no normalizer touches.
    fn from(value: RawValue) -> Self {
        match value {
            RawValue::Text(text) => Self::Text(text),
            RawValue::Number(number) => Self::Number(number),
            RawValue::List(items) => Self::List(items),
        }
    }
}

/// A record after normalization, ready for storage or export.
///
/// Serializes flat: normalized fields sit next to the derived `slug` and
/// the `validatedAt` stamp in a single JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    #[serde(flatten)]
    fields: BTreeMap<String, CanonicalValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
    validated_at: DateTime<Utc>,
}

impl CanonicalRecord {
    /// Assemble a canonical record and stamp it with the current time.
    pub(crate) fn new(fields: BTreeMap<String, CanonicalValue>, slug: Option<String>) -> Self {
        Self {
            fields,
            slug,
            validated_at: Utc::now(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&CanonicalValue> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// The normalized display name, when one survived cleaning.
    pub fn name(&self) -> Option<&str> {
        self.get(fields::NAME).and_then(CanonicalValue::as_text)
    }

    /// The clamped star rating, when present.
    pub fn rating(&self) -> Option<f64> {
        self.get(fields::RATING).and_then(CanonicalValue::as_number)
    }

    /// URL-safe identifier derived from the normalized name.
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn validated_at(&self) -> DateTime<Utc> {
        self.validated_at
    }

    /// Iterate normalized fields in deterministic (sorted) order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &CanonicalValue)> {
        self.fields.iter().map(|(field, value)| (field.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
