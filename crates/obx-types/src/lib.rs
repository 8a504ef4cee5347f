//! # obx-types
//!
//! Type definitions for HL7 v2 OBX observations reporting genomic variants.
//!
//! This crate provides the data model consumed by the `obx-encoder` crate:
//! catalog concepts, the four observation value kinds, and segment groups
//! that bind a set of values to one concept and one variant identifier.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use obx_types::{CodedValue, GroupValues, Observation, SegmentGroup, ValueKind};
//! use obx_types::var_concepts;
//!
//! let group = SegmentGroup::new(
//!     var_concepts::VARIANT_GENE,
//!     "a",
//!     GroupValues::CodedConcept(vec![Observation::new(CodedValue::new(
//!         "123", "BRAF", "HGNC",
//!     ))]),
//! )
//! .unwrap();
//!
//! assert_eq!(group.kind(), ValueKind::CodedConcept);
//! assert_eq!(group.variant_type_code(), 2);
//! ```
//!
//! ## Without Serde
//!
//! ```toml
//! [dependencies]
//! obx-types = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

mod concept;
mod enums;
mod segment;
mod value;
pub mod var_concepts;

// Re-export all public types at crate root
pub use concept::Concept;
pub use enums::ValueKind;
pub use segment::{GroupValues, SegmentGroup, SegmentGroupError, DEFAULT_VARIANT_TYPE_CODE};
pub use value::{CodedValue, NumericRange, Observation};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_exported() {
        let _kind = ValueKind::NumericRange;
        let _range = NumericRange::new(1.0, 2.0);
        let _coded = CodedValue::with_label("Simple");
        let _obs = Observation::new("chr7".to_string());
        assert_eq!(DEFAULT_VARIANT_TYPE_CODE, 2);
    }

    #[test]
    fn test_var_concepts_accessible() {
        assert_eq!(var_concepts::VARIANT_CLASSIFICATION, "variant_classification");
        assert_eq!(var_concepts::CODING_SYSTEM, "HL7VAR");
        assert_eq!(var_concepts::BUILTIN.len(), 8);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let group = SegmentGroup::new(
            var_concepts::ALLELE_START_END,
            "a",
            GroupValues::Numeric(vec![
                Observation::new(140753336.0).with_suffix("1"),
                Observation::new(140753336.0).with_suffix("2"),
            ]),
        )
        .unwrap();

        let json = serde_json::to_string(&group).unwrap();
        let parsed: SegmentGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(group, parsed);
    }
}
