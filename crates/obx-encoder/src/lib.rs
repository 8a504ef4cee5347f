//! # obx-encoder
//!
//! Encoder for HL7 v2 OBX segment lines reporting genomic variants.
//!
//! This crate resolves segment groups against a concept catalog and renders
//! every value as one pipe-delimited OBX line, numbered continuously across
//! the whole batch.
//!
//! ## Usage
//!
//! ```rust
//! use obx_encoder::{encode_batch, build_var_groups, ConverterConfig, FieldValue, VariantFields};
//!
//! let mut fields = VariantFields::new();
//! fields.insert("GENENAME", FieldValue::from("BRAF"));
//! fields.insert("GENEID", FieldValue::from("123"));
//! fields.insert("CLASSIFICATION", FieldValue::from("Likely Pathogenic"));
//!
//! let groups = build_var_groups(&fields, "a", &ConverterConfig::default()).unwrap();
//! let lines = encode_batch(&groups).unwrap();
//!
//! assert_eq!(lines.len(), 4);
//! assert!(lines[1].starts_with("OBX|2|CWE|VAR514^Variant Gene^HL7VAR|2a|123^BRAF^HGNC|"));
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): Encodes independent batches in parallel via rayon.

#![warn(missing_docs)]

mod catalog;
mod encoder;
mod fields;
pub mod format;
mod record;
mod types;
mod var_groups;

pub use catalog::ConceptCatalog;
pub use encoder::{encode_batch, encode_batches, write_batch, ObxEncoder};
pub use fields::{FieldValue, VariantFields};
pub use record::{ObxRecord, FIELD_COUNT, SEGMENT_TYPE};
pub use types::{ConverterConfig, EncodeError, EncodeResult};
pub use var_groups::{
    allele_start_end_group, build_var_groups, chromosome_group, field_names,
    variant_assessment_group, variant_classification_group, variant_gene_group,
    variant_name_group, variant_type_group,
};

// Re-export obx-types for convenience
pub use obx_types;
