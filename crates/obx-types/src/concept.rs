//! Catalog concept type.
//!
//! This module provides the `Concept` struct, the coded meaning attached to
//! every line of a segment group.

/// A coded concept as registered in a concept catalog.
///
/// The three fields are rendered, in order, as the observation identifier
/// of every OBX line reporting this concept.
///
/// # Examples
///
/// ```
/// use obx_types::Concept;
///
/// let concept = Concept::new("VAR553", "Variant Classification", "HL7VAR");
/// assert_eq!(concept.code, "VAR553");
/// assert_eq!(concept.display_name, "Variant Classification");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Concept {
    /// Short stable identifier, unique within a catalog.
    pub code: String,
    /// Human-readable label.
    pub display_name: String,
    /// Name of the concept dictionary the code comes from.
    pub coding_system: String,
}

impl Concept {
    /// Creates a new concept.
    pub fn new(
        code: impl Into<String>,
        display_name: impl Into<String>,
        coding_system: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
            coding_system: coding_system.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concept_new() {
        let concept = Concept::new("VAR514", "Variant Gene", "HL7VAR");
        assert_eq!(concept.code, "VAR514");
        assert_eq!(concept.display_name, "Variant Gene");
        assert_eq!(concept.coding_system, "HL7VAR");
    }

    #[test]
    fn test_concept_equality() {
        let a = Concept::new("VAR510", "Chromosome", "HL7VAR");
        let b = Concept::new("VAR510", "Chromosome", "HL7VAR");
        let c = Concept::new("VAR510", "Chromosome", "LOCAL");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
