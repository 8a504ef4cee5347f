//! Error and configuration types for OBX encoding.

use obx_types::{SegmentGroupError, DEFAULT_VARIANT_TYPE_CODE};
use thiserror::Error;

/// Errors that can occur while building or encoding segment groups.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// A segment group references a concept key missing from the catalog.
    #[error("Unknown concept: {key}")]
    UnknownConcept {
        /// The unresolved concept key.
        key: String,
    },

    /// A coded value has neither a label nor a code with its coding system.
    #[error("Coded value for concept '{concept}' at line {line} needs a code and coding system or a label")]
    InvalidCodedConcept {
        /// Concept key of the offending group.
        concept: String,
        /// Line number the value would have been written to.
        line: usize,
    },

    /// A concept key was registered twice.
    #[error("Duplicate concept key: {key}")]
    DuplicateConceptKey {
        /// The repeated key.
        key: String,
    },

    /// A concept code was registered twice.
    #[error("Duplicate concept code: {code}")]
    DuplicateConceptCode {
        /// The repeated code.
        code: String,
    },

    /// A required variant field is absent.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// A variant field holds a value of the wrong type.
    #[error("Field {field} has the wrong type (expected {expected})")]
    FieldType {
        /// The field name.
        field: String,
        /// Description of the expected type.
        expected: &'static str,
    },

    /// Invalid catalog header - column count mismatch.
    #[error("Invalid catalog header: expected {expected} columns, found {found}")]
    InvalidHeader {
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// Unexpected catalog column name.
    #[error("Unexpected column '{found}' at position {position}, expected '{expected}'")]
    UnexpectedColumn {
        /// The column position.
        position: usize,
        /// Expected column name.
        expected: String,
        /// Found column name.
        found: String,
    },

    /// Invalid segment group.
    #[error("Invalid segment group: {0}")]
    Group(#[from] SegmentGroupError),

    /// I/O error reading a catalog or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for OBX encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Configuration for building VAR segment groups from variant fields.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Variant type code prefixed to every variant identifier.
    pub variant_type_code: u32,
    /// Coding system of gene identifiers.
    pub gene_coding_system: String,
    /// Label reported for the variant type.
    pub variant_type_label: String,
    /// Label reported for the variant assessment.
    pub assessment_label: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            variant_type_code: DEFAULT_VARIANT_TYPE_CODE,
            gene_coding_system: "HGNC".to_string(),
            variant_type_label: "Simple".to_string(),
            assessment_label: "Detected".to_string(),
        }
    }
}
