//! Well-known VAR concepts for genetic variant reporting.
//!
//! This module provides the catalog keys of the variant (VAR) concepts used
//! to label OBX segment groups, and the static table they resolve to.
//!
//! # Examples
//!
//! ```
//! use obx_types::var_concepts;
//!
//! let entry = var_concepts::BUILTIN
//!     .iter()
//!     .find(|e| e.key == var_concepts::VARIANT_GENE)
//!     .unwrap();
//! assert_eq!(entry.code, "VAR514");
//! assert_eq!(entry.display_name, "Variant Gene");
//! ```

use crate::Concept;

/// Coding system of every built-in VAR concept.
pub const CODING_SYSTEM: &str = "HL7VAR";

// =============================================================================
// Variant Identity
// =============================================================================

/// Variant type (VAR503), e.g. simple or complex.
pub const VARIANT_TYPE: &str = "variant_type";

/// Variant name (VAR504).
pub const VARIANT_NAME: &str = "variant_name";

/// Discrete genetic variant (VAR505).
pub const DISCRETE_GENETIC_VARIANT: &str = "discrete_genetic_variant";

// =============================================================================
// Genomic Location
// =============================================================================

/// Chromosome (VAR510).
pub const CHROMOSOME: &str = "chromosome";

/// Allele start and end positions (VAR511).
pub const ALLELE_START_END: &str = "allele_start_end";

/// Gene the variant falls in (VAR514).
pub const VARIANT_GENE: &str = "variant_gene";

// =============================================================================
// Interpretation
// =============================================================================

/// Variant assessment (VAR552), e.g. detected.
pub const VARIANT_ASSESSMENT: &str = "variant_assessment";

/// Variant classification (VAR553), e.g. likely pathogenic.
pub const VARIANT_CLASSIFICATION: &str = "variant_classification";

/// One row of the built-in concept table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarConceptEntry {
    /// Catalog key.
    pub key: &'static str,
    /// Concept code.
    pub code: &'static str,
    /// Display name.
    pub display_name: &'static str,
}

impl VarConceptEntry {
    /// Returns the concept this entry registers, in the VAR coding system.
    pub fn to_concept(&self) -> Concept {
        Concept::new(self.code, self.display_name, CODING_SYSTEM)
    }
}

/// The built-in VAR concept table.
pub const BUILTIN: &[VarConceptEntry] = &[
    VarConceptEntry {
        key: VARIANT_TYPE,
        code: "VAR503",
        display_name: "Variant Type",
    },
    VarConceptEntry {
        key: VARIANT_NAME,
        code: "VAR504",
        display_name: "Variant Name",
    },
    VarConceptEntry {
        key: DISCRETE_GENETIC_VARIANT,
        code: "VAR505",
        display_name: "Discrete Genetic Variant",
    },
    VarConceptEntry {
        key: CHROMOSOME,
        code: "VAR510",
        display_name: "Chromosome",
    },
    VarConceptEntry {
        key: ALLELE_START_END,
        code: "VAR511",
        display_name: "Allele Start/End",
    },
    VarConceptEntry {
        key: VARIANT_GENE,
        code: "VAR514",
        display_name: "Variant Gene",
    },
    VarConceptEntry {
        key: VARIANT_ASSESSMENT,
        code: "VAR552",
        display_name: "Variant Assessment",
    },
    VarConceptEntry {
        key: VARIANT_CLASSIFICATION,
        code: "VAR553",
        display_name: "Variant Classification",
    },
];
