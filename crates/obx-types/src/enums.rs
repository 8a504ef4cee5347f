//! OBX value type enumeration.
//!
//! This module provides the `ValueKind` enum naming the HL7 v2 data type
//! carried by the values of a segment group.

/// HL7 v2 data type of an observation value.
///
/// Rendered as the value type field of every OBX line.
///
/// # Examples
///
/// ```
/// use obx_types::ValueKind;
///
/// let kind = ValueKind::from_code("CWE");
/// assert_eq!(kind, Some(ValueKind::CodedConcept));
/// assert_eq!(ValueKind::Numeric.code(), "NM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    /// String data (ST).
    Text,
    /// Numeric data (NM).
    Numeric,
    /// Numeric range with lower and upper bound (NR).
    NumericRange,
    /// Coded with exceptions (CWE).
    CodedConcept,
}

impl ValueKind {
    /// HL7 code for string data.
    pub const TEXT_CODE: &'static str = "ST";
    /// HL7 code for numeric data.
    pub const NUMERIC_CODE: &'static str = "NM";
    /// HL7 code for numeric range data.
    pub const NUMERIC_RANGE_CODE: &'static str = "NR";
    /// HL7 code for coded with exceptions data.
    pub const CODED_CONCEPT_CODE: &'static str = "CWE";

    /// Creates a ValueKind from its HL7 data type code.
    ///
    /// Returns `None` if the code doesn't match a supported kind.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            Self::TEXT_CODE => Some(Self::Text),
            Self::NUMERIC_CODE => Some(Self::Numeric),
            Self::NUMERIC_RANGE_CODE => Some(Self::NumericRange),
            Self::CODED_CONCEPT_CODE => Some(Self::CodedConcept),
            _ => None,
        }
    }

    /// Returns the HL7 data type code for this kind.
    pub fn code(self) -> &'static str {
        match self {
            Self::Text => Self::TEXT_CODE,
            Self::Numeric => Self::NUMERIC_CODE,
            Self::NumericRange => Self::NUMERIC_RANGE_CODE,
            Self::CodedConcept => Self::CODED_CONCEPT_CODE,
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
