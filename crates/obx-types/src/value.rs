//! Observation value types.
//!
//! Values are grouped by kind in [`GroupValues`](crate::GroupValues); this
//! module provides the payload types for the two structured kinds and the
//! [`Observation`] wrapper that carries the optional sub-line suffix.

/// A numeric range reported as a lower and an upper bound.
///
/// The bounds are not required to be ordered.
///
/// # Examples
///
/// ```
/// use obx_types::NumericRange;
///
/// let range = NumericRange::new(140753336.0, 140753340.0);
/// assert_eq!(range.lower_bound, 140753336.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericRange {
    /// Lower bound of the range.
    pub lower_bound: f64,
    /// Upper bound of the range.
    pub upper_bound: f64,
}

impl NumericRange {
    /// Creates a new range.
    pub fn new(lower_bound: f64, upper_bound: f64) -> Self {
        Self {
            lower_bound,
            upper_bound,
        }
    }
}

impl From<(f64, f64)> for NumericRange {
    fn from((lower_bound, upper_bound): (f64, f64)) -> Self {
        Self::new(lower_bound, upper_bound)
    }
}

/// A coded value (HL7 CWE) made of an optional code, coding system and label.
///
/// Construction never fails. A value is encodable when it has a label, or
/// both a code and a coding system; see [`CodedValue::is_encodable`].
///
/// # Examples
///
/// ```
/// use obx_types::CodedValue;
///
/// let gene = CodedValue::new("123", "BRAF", "HGNC");
/// assert!(gene.has_code_and_system());
///
/// let simple = CodedValue::with_label("Simple");
/// assert!(!simple.has_code_and_system());
/// assert!(simple.is_encodable());
///
/// assert!(!CodedValue::default().is_encodable());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodedValue {
    /// Code within the coding system.
    #[cfg_attr(feature = "serde", serde(default))]
    pub code: Option<String>,
    /// Coding system the code belongs to.
    #[cfg_attr(feature = "serde", serde(default))]
    pub coding_system: Option<String>,
    /// Human-readable label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
}

impl CodedValue {
    /// Creates a fully populated coded value.
    pub fn new(
        code: impl Into<String>,
        label: impl Into<String>,
        coding_system: impl Into<String>,
    ) -> Self {
        Self {
            code: Some(code.into()),
            coding_system: Some(coding_system.into()),
            label: Some(label.into()),
        }
    }

    /// Creates a coded value holding only a label.
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    /// Creates a coded value with a code and coding system but no label.
    pub fn with_code(code: impl Into<String>, coding_system: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            coding_system: Some(coding_system.into()),
            label: None,
        }
    }

    /// Returns true if both the code and the coding system are present.
    pub fn has_code_and_system(&self) -> bool {
        self.code.is_some() && self.coding_system.is_some()
    }

    /// Returns true if this value carries a label or a code with its system.
    pub fn is_encodable(&self) -> bool {
        self.has_code_and_system() || self.label.is_some()
    }
}

/// One value of a segment group together with its optional sub-line suffix.
///
/// The suffix distinguishes several facts reported under the same variant
/// identifier, such as the start and end of an allele.
///
/// # Examples
///
/// ```
/// use obx_types::Observation;
///
/// let start = Observation::new(140753336.0).with_suffix("1");
/// assert_eq!(start.subline_suffix.as_deref(), Some("1"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation<V> {
    /// The reported value.
    pub value: V,
    /// Qualifier appended to the variant identifier of this line.
    #[cfg_attr(feature = "serde", serde(default))]
    pub subline_suffix: Option<String>,
}

impl<V> Observation<V> {
    /// Creates an observation without a sub-line suffix.
    pub fn new(value: V) -> Self {
        Self {
            value,
            subline_suffix: None,
        }
    }

    /// Returns this observation with the given sub-line suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.subline_suffix = Some(suffix.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coded_value_encodable() {
        assert!(CodedValue::new("123", "BRAF", "HGNC").is_encodable());
        assert!(CodedValue::with_label("Detected").is_encodable());
        assert!(CodedValue::with_code("LA6668-3", "LN").is_encodable());
        assert!(!CodedValue::default().is_encodable());
    }

    #[test]
    fn test_coded_value_code_without_system() {
        let value = CodedValue {
            code: Some("123".to_string()),
            ..Default::default()
        };
        assert!(!value.has_code_and_system());
        assert!(!value.is_encodable());
    }

    #[test]
    fn test_numeric_range_from_tuple() {
        let range: NumericRange = (2.0, 1.0).into();
        assert_eq!(range.lower_bound, 2.0);
        assert_eq!(range.upper_bound, 1.0);
    }

    #[test]
    fn test_observation_suffix() {
        let obs = Observation::new("chr7".to_string());
        assert_eq!(obs.subline_suffix, None);

        let obs = obs.with_suffix("2");
        assert_eq!(obs.subline_suffix.as_deref(), Some("2"));
        assert_eq!(obs.value, "chr7");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_coded_value_missing_fields_deserialize() {
        let value: CodedValue = serde_json::from_str(r#"{"label": "Simple"}"#).unwrap();
        assert_eq!(value, CodedValue::with_label("Simple"));
    }
}
