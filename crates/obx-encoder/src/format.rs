//! Field formatting rules for OBX lines.
//!
//! Components within a field are separated by `^`; the sub-line suffix of
//! the observation sub-id is separated by `.`.

use obx_types::{CodedValue, Concept, NumericRange};

/// Separator between components of a field.
pub const COMPONENT_SEPARATOR: char = '^';

/// Separator between a variant identifier and its sub-line suffix.
pub const SUBLINE_SEPARATOR: char = '.';

/// Formats the observation identifier of a concept: `code^display name^coding system`.
pub fn concept_identifier(concept: &Concept) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        concept.code,
        concept.display_name,
        concept.coding_system,
        sep = COMPONENT_SEPARATOR
    )
}

/// Formats the observation sub-id: the variant type code followed by the
/// identifier, and `.suffix` when a sub-line suffix is present.
///
/// ```
/// use obx_encoder::format::observation_sub_id;
///
/// assert_eq!(observation_sub_id(2, "a", None), "2a");
/// assert_eq!(observation_sub_id(2, "a", Some("1")), "2a.1");
/// ```
pub fn observation_sub_id(variant_type_code: u32, identifier: &str, suffix: Option<&str>) -> String {
    match suffix {
        Some(suffix) => format!(
            "{}{}{}{}",
            variant_type_code, identifier, SUBLINE_SEPARATOR, suffix
        ),
        None => format!("{}{}", variant_type_code, identifier),
    }
}

/// Formats a number in its shortest round-trip decimal form (`1.0` as `1`).
pub fn number(value: f64) -> String {
    value.to_string()
}

/// Formats a range as `lower^upper`. Bound order is not checked.
pub fn numeric_range(range: &NumericRange) -> String {
    format!(
        "{}{}{}",
        number(range.lower_bound),
        COMPONENT_SEPARATOR,
        number(range.upper_bound)
    )
}

/// Formats a coded value.
///
/// A value with a code and coding system renders as `code^label^system`
/// (empty label when absent); a label-only value renders as `^label`.
/// Returns `None` when the value has neither.
///
/// ```
/// use obx_encoder::format::coded_value;
/// use obx_types::CodedValue;
///
/// assert_eq!(coded_value(&CodedValue::with_label("Simple")).as_deref(), Some("^Simple"));
/// assert_eq!(coded_value(&CodedValue::default()), None);
/// ```
pub fn coded_value(value: &CodedValue) -> Option<String> {
    match (&value.code, &value.coding_system, &value.label) {
        (Some(code), Some(system), label) => Some(format!(
            "{code}{sep}{}{sep}{system}",
            label.as_deref().unwrap_or(""),
            sep = COMPONENT_SEPARATOR
        )),
        (_, _, Some(label)) => Some(format!("{}{}", COMPONENT_SEPARATOR, label)),
        _ => None,
    }
}
