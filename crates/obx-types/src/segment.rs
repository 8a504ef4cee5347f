//! Segment group types.
//!
//! A segment group binds one or more values of a single kind to a catalog
//! concept and a variant identifier. Each value becomes one OBX line.

use crate::{CodedValue, NumericRange, Observation, ValueKind};

/// Variant type code used when none is given.
pub const DEFAULT_VARIANT_TYPE_CODE: u32 = 2;

/// Error type for segment group construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentGroupError {
    /// The group holds no values.
    Empty {
        /// Concept key of the rejected group.
        concept: String,
    },
}

impl std::fmt::Display for SegmentGroupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { concept } => {
                write!(f, "segment group for concept '{}' has no values", concept)
            }
        }
    }
}

impl std::error::Error for SegmentGroupError {}

/// The values of a segment group, all of one kind.
///
/// The variant fixes the HL7 data type of every line in the group, so a
/// group can never mix kinds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroupValues {
    /// String values (ST).
    Text(Vec<Observation<String>>),
    /// Numeric values (NM).
    Numeric(Vec<Observation<f64>>),
    /// Numeric range values (NR).
    NumericRange(Vec<Observation<NumericRange>>),
    /// Coded values (CWE).
    CodedConcept(Vec<Observation<CodedValue>>),
}

impl GroupValues {
    /// Returns the kind shared by all values.
    pub fn kind(&self) -> ValueKind {
        match self {
            GroupValues::Text(_) => ValueKind::Text,
            GroupValues::Numeric(_) => ValueKind::Numeric,
            GroupValues::NumericRange(_) => ValueKind::NumericRange,
            GroupValues::CodedConcept(_) => ValueKind::CodedConcept,
        }
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        match self {
            GroupValues::Text(v) => v.len(),
            GroupValues::Numeric(v) => v.len(),
            GroupValues::NumericRange(v) => v.len(),
            GroupValues::CodedConcept(v) => v.len(),
        }
    }

    /// Returns true if there are no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One unit of OBX output: a concept, a variant identifier and its values.
///
/// Fields are private so that the non-empty invariant checked by
/// [`SegmentGroup::new`] holds for every instance.
///
/// # Examples
///
/// ```
/// use obx_types::{GroupValues, Observation, SegmentGroup, SegmentGroupError};
///
/// let group = SegmentGroup::new(
///     "chromosome",
///     "a",
///     GroupValues::Text(vec![Observation::new("chr7".to_string())]),
/// )
/// .unwrap()
/// .with_variant_type_code(3);
///
/// assert_eq!(group.len(), 1);
/// assert_eq!(group.variant_type_code(), 3);
///
/// let empty = SegmentGroup::new("chromosome", "a", GroupValues::Text(vec![]));
/// assert!(matches!(empty, Err(SegmentGroupError::Empty { .. })));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSegmentGroup"))]
pub struct SegmentGroup {
    concept: String,
    identifier: String,
    variant_type_code: u32,
    values: GroupValues,
}

impl SegmentGroup {
    /// Creates a group with the default variant type code.
    ///
    /// # Errors
    /// Returns [`SegmentGroupError::Empty`] if `values` holds no values.
    pub fn new(
        concept: impl Into<String>,
        identifier: impl Into<String>,
        values: GroupValues,
    ) -> Result<Self, SegmentGroupError> {
        let concept = concept.into();
        if values.is_empty() {
            return Err(SegmentGroupError::Empty { concept });
        }
        Ok(Self {
            concept,
            identifier: identifier.into(),
            variant_type_code: DEFAULT_VARIANT_TYPE_CODE,
            values,
        })
    }

    /// Returns this group with a different variant type code.
    pub fn with_variant_type_code(mut self, code: u32) -> Self {
        self.variant_type_code = code;
        self
    }

    /// Returns the catalog key of the concept this group reports.
    pub fn concept(&self) -> &str {
        &self.concept
    }

    /// Returns the sample or variant identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the variant type code.
    pub fn variant_type_code(&self) -> u32 {
        self.variant_type_code
    }

    /// Returns the values of this group.
    pub fn values(&self) -> &GroupValues {
        &self.values
    }

    /// Returns the kind shared by all values.
    pub fn kind(&self) -> ValueKind {
        self.values.kind()
    }

    /// Returns the number of values, which is also the number of OBX lines.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed group.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSegmentGroup {
    concept: String,
    identifier: String,
    #[serde(default = "default_variant_type_code")]
    variant_type_code: u32,
    values: GroupValues,
}

#[cfg(feature = "serde")]
fn default_variant_type_code() -> u32 {
    DEFAULT_VARIANT_TYPE_CODE
}

#[cfg(feature = "serde")]
impl TryFrom<RawSegmentGroup> for SegmentGroup {
    type Error = SegmentGroupError;

    fn try_from(raw: RawSegmentGroup) -> Result<Self, Self::Error> {
        Ok(SegmentGroup::new(raw.concept, raw.identifier, raw.values)?
            .with_variant_type_code(raw.variant_type_code))
    }
}
