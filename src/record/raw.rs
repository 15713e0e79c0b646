//! Raw records as delivered by scrapers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields;

/// A single scraped field value before normalization.
///
/// Scraper output is messy but structurally narrow: every field is either
/// a string, a number, or a list of strings. A field that was not scraped
/// is simply absent from the record; there is no null variant here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    Number(f64),
    List(Vec<String>),
}

impl RawValue {
    /// Best-effort conversion from arbitrary JSON.
    ///
    /// Strings and numbers map directly. Arrays keep their string elements
    /// and stringify numeric ones. Nulls, objects, and booleans have no
    /// place in the model and yield `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Self::Text(text.clone())),
            Value::Number(number) => number.as_f64().map(Self::Number),
            Value::Array(items) => {
                let entries = items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(text) => Some(text.clone()),
                        Value::Number(number) => Some(number.to_string()),
                        _ => None,
                    })
                    .collect();
                Some(Self::List(entries))
            }
            Value::Null | Value::Bool(_) | Value::Object(_) => None,
        }
    }

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
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for RawValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i64> for RawValue {
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<Vec<String>> for RawValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for RawValue {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

/// One scraped record: an ordered map of field name to raw value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: BTreeMap<String, RawValue>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lenient import from a JSON object.
    ///
    /// Fields whose values cannot be expressed as a [`RawValue`] are
    /// dropped rather than failing the whole record; scraper dumps
    /// routinely contain nulls and nested objects we do not model.
    pub fn from_json(value: &Value) -> Self {
        let mut record = Self::new();
        if let Some(object) = value.as_object() {
            for (field, item) in object {
                if let Some(raw) = RawValue::from_json(item) {
                    record.insert(field.clone(), raw);
                }
            }
        }
        record
    }

    /// Builder-style insertion, mainly for tests and fixtures.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(field.into(), value.into());
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<RawValue>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&RawValue> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Iterate fields in deterministic (sorted) order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.fields.iter().map(|(field, value)| (field.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The `sourceFile` field, when the scraper recorded one.
    pub fn source_file(&self) -> Option<&str> {
        self.get(fields::SOURCE_FILE).and_then(RawValue::as_text)
    }
}
