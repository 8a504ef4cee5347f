//! Typed variant fields handed over by the extraction step.
//!
//! Values arrive already typed; this module only checks that a field has
//! the type a segment group needs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{EncodeError, EncodeResult};

/// A single extracted field value.
///
/// Deserializes from a JSON string, number, or two-element array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A string value.
    Text(String),
    /// A numeric value.
    Number(f64),
    /// A pair of numbers, such as a start and end position.
    Pair(f64, f64),
}

impl FieldValue {
    /// Returns the type name as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Number(_) => "number",
            FieldValue::Pair(_, _) => "pair",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<(f64, f64)> for FieldValue {
    fn from((first, second): (f64, f64)) -> Self {
        FieldValue::Pair(first, second)
    }
}

/// Field name to value mapping for one variant.
///
/// # Example
///
/// ```
/// use obx_encoder::{FieldValue, VariantFields};
///
/// let fields: VariantFields = serde_json::from_str(
///     r#"{"GENENAME": "BRAF", "ALLELESTART": 140753336, "ALLELEEND": [1, 2]}"#,
/// )
/// .unwrap();
///
/// assert_eq!(fields.require_text("GENENAME").unwrap(), "BRAF");
/// assert_eq!(fields.get("ALLELEEND"), Some(&FieldValue::Pair(1.0, 2.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantFields {
    fields: BTreeMap<String, FieldValue>,
}

impl VariantFields {
    /// Creates an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        self.fields.insert(name.into(), value)
    }

    /// Gets a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Returns true if the field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns a text field if present.
    ///
    /// # Errors
    /// Returns [`EncodeError::FieldType`] if the field is not text.
    pub fn text(&self, name: &str) -> EncodeResult<Option<&str>> {
        match self.fields.get(name) {
            None => Ok(None),
            Some(FieldValue::Text(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(EncodeError::FieldType {
                field: name.to_string(),
                expected: "text",
            }),
        }
    }

    /// Returns a text field that must be present.
    pub fn require_text(&self, name: &str) -> EncodeResult<&str> {
        self.text(name)?.ok_or_else(|| EncodeError::MissingField {
            field: name.to_string(),
        })
    }

    /// Returns a numeric field if present.
    ///
    /// # Errors
    /// Returns [`EncodeError::FieldType`] if the field is not a number.
    pub fn number(&self, name: &str) -> EncodeResult<Option<f64>> {
        match self.fields.get(name) {
            None => Ok(None),
            Some(FieldValue::Number(n)) => Ok(Some(*n)),
            Some(_) => Err(EncodeError::FieldType {
                field: name.to_string(),
                expected: "number",
            }),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for VariantFields {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VariantFields {
        [
            ("GENENAME", FieldValue::from("BRAF")),
            ("ALLELESTART", FieldValue::from(140753336.0)),
            ("RANGE", FieldValue::from((1.0, 2.0))),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_text_field() {
        let fields = sample();
        assert_eq!(fields.text("GENENAME").unwrap(), Some("BRAF"));
        assert_eq!(fields.text("GENEID").unwrap(), None);
        assert!(matches!(
            fields.text("ALLELESTART"),
            Err(EncodeError::FieldType { expected: "text", .. })
        ));
    }

    #[test]
    fn test_require_text_missing() {
        let err = sample().require_text("CLASSIFICATION").unwrap_err();
        assert!(matches!(err, EncodeError::MissingField { field } if field == "CLASSIFICATION"));
    }

    #[test]
    fn test_number_field() {
        let fields = sample();
        assert_eq!(fields.number("ALLELESTART").unwrap(), Some(140753336.0));
        assert_eq!(fields.number("ALLELEEND").unwrap(), None);
        assert!(fields.number("RANGE").is_err());
    }

    #[test]
    fn test_deserialize_json() {
        let fields: VariantFields =
            serde_json::from_str(r#"{"CHROMOSOME": "chr7", "ALLELESTART": [10, 12.5]}"#).unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("CHROMOSOME"), Some(&FieldValue::Text("chr7".to_string())));
        assert_eq!(fields.get("ALLELESTART"), Some(&FieldValue::Pair(10.0, 12.5)));
        assert_eq!(fields.get("ALLELESTART").map(FieldValue::type_name), Some("pair"));
    }
}
