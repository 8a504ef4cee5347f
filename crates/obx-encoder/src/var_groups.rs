//! VAR segment group builders.
//!
//! Each builder produces the segment group for one VAR concept of a single
//! variant. [`build_var_groups`] assembles the full ordered set from the
//! extracted variant fields.

use obx_types::{
    var_concepts, CodedValue, GroupValues, NumericRange, Observation, SegmentGroup,
};

use crate::fields::{FieldValue, VariantFields};
use crate::types::{ConverterConfig, EncodeError, EncodeResult};

/// Names of the extracted variant fields.
pub mod field_names {
    /// Gene symbol (required).
    pub const GENE_NAME: &str = "GENENAME";
    /// Gene identifier (required).
    pub const GENE_ID: &str = "GENEID";
    /// Variant classification label (required).
    pub const CLASSIFICATION: &str = "CLASSIFICATION";
    /// Variant name, such as an HGVS expression.
    pub const VARIANT_NAME: &str = "VARIANTNAME";
    /// Chromosome.
    pub const CHROMOSOME: &str = "CHROMOSOME";
    /// Allele start position, or a start/end pair.
    pub const ALLELE_START: &str = "ALLELESTART";
    /// Allele end position.
    pub const ALLELE_END: &str = "ALLELEEND";
}

/// Sub-line suffix of the allele start position.
const ALLELE_START_SUFFIX: &str = "1";
/// Sub-line suffix of the allele end position.
const ALLELE_END_SUFFIX: &str = "2";

fn group(
    concept: &str,
    identifier: &str,
    values: GroupValues,
    config: &ConverterConfig,
) -> EncodeResult<SegmentGroup> {
    Ok(SegmentGroup::new(concept, identifier, values)?
        .with_variant_type_code(config.variant_type_code))
}

fn coded_group(
    concept: &str,
    identifier: &str,
    value: CodedValue,
    config: &ConverterConfig,
) -> EncodeResult<SegmentGroup> {
    group(
        concept,
        identifier,
        GroupValues::CodedConcept(vec![Observation::new(value)]),
        config,
    )
}

fn text_group(
    concept: &str,
    identifier: &str,
    value: &str,
    config: &ConverterConfig,
) -> EncodeResult<SegmentGroup> {
    group(
        concept,
        identifier,
        GroupValues::Text(vec![Observation::new(value.to_string())]),
        config,
    )
}

/// Builds the variant type group (VAR503).
pub fn variant_type_group(identifier: &str, config: &ConverterConfig) -> EncodeResult<SegmentGroup> {
    coded_group(
        var_concepts::VARIANT_TYPE,
        identifier,
        CodedValue::with_label(config.variant_type_label.as_str()),
        config,
    )
}

/// Builds the variant name group (VAR504).
pub fn variant_name_group(
    identifier: &str,
    name: &str,
    config: &ConverterConfig,
) -> EncodeResult<SegmentGroup> {
    text_group(var_concepts::VARIANT_NAME, identifier, name, config)
}

/// Builds the chromosome group (VAR510).
pub fn chromosome_group(
    identifier: &str,
    chromosome: &str,
    config: &ConverterConfig,
) -> EncodeResult<SegmentGroup> {
    text_group(var_concepts::CHROMOSOME, identifier, chromosome, config)
}

/// Builds the allele start/end group (VAR511).
///
/// Start and end become two numeric lines with suffixes `1` and `2`; either
/// may be absent. Returns `None` when both are.
pub fn allele_start_end_group(
    identifier: &str,
    start: Option<f64>,
    end: Option<f64>,
    config: &ConverterConfig,
) -> EncodeResult<Option<SegmentGroup>> {
    let values: Vec<Observation<f64>> = [(start, ALLELE_START_SUFFIX), (end, ALLELE_END_SUFFIX)]
        .into_iter()
        .filter_map(|(position, suffix)| position.map(|p| Observation::new(p).with_suffix(suffix)))
        .collect();

    if values.is_empty() {
        return Ok(None);
    }
    group(
        var_concepts::ALLELE_START_END,
        identifier,
        GroupValues::Numeric(values),
        config,
    )
    .map(Some)
}

/// Builds the variant gene group (VAR514).
pub fn variant_gene_group(
    identifier: &str,
    gene_name: &str,
    gene_id: &str,
    config: &ConverterConfig,
) -> EncodeResult<SegmentGroup> {
    coded_group(
        var_concepts::VARIANT_GENE,
        identifier,
        CodedValue::new(gene_id, gene_name, config.gene_coding_system.as_str()),
        config,
    )
}

/// Builds the variant assessment group (VAR552).
pub fn variant_assessment_group(
    identifier: &str,
    config: &ConverterConfig,
) -> EncodeResult<SegmentGroup> {
    coded_group(
        var_concepts::VARIANT_ASSESSMENT,
        identifier,
        CodedValue::with_label(config.assessment_label.as_str()),
        config,
    )
}

/// Builds the variant classification group (VAR553).
pub fn variant_classification_group(
    identifier: &str,
    classification: &str,
    config: &ConverterConfig,
) -> EncodeResult<SegmentGroup> {
    coded_group(
        var_concepts::VARIANT_CLASSIFICATION,
        identifier,
        CodedValue::with_label(classification),
        config,
    )
}

/// Builds the allele location group from the start/end fields.
///
/// A pair in the start field becomes a single numeric range line.
fn allele_location_group(
    fields: &VariantFields,
    identifier: &str,
    config: &ConverterConfig,
) -> EncodeResult<Option<SegmentGroup>> {
    if let Some(FieldValue::Pair(lower, upper)) = fields.get(field_names::ALLELE_START) {
        if fields.contains(field_names::ALLELE_END) {
            return Err(EncodeError::FieldType {
                field: field_names::ALLELE_START.to_string(),
                expected: "number when an end position is given",
            });
        }
        let range = NumericRange::new(*lower, *upper);
        return group(
            var_concepts::ALLELE_START_END,
            identifier,
            GroupValues::NumericRange(vec![Observation::new(range)]),
            config,
        )
        .map(Some);
    }

    allele_start_end_group(
        identifier,
        fields.number(field_names::ALLELE_START)?,
        fields.number(field_names::ALLELE_END)?,
        config,
    )
}

/// Builds the ordered VAR segment groups for one variant.
///
/// Groups appear in concept order: type, name, chromosome, allele
/// start/end, gene, assessment, classification. Optional fields that are
/// absent produce no group.
///
/// # Errors
/// Returns [`EncodeError::MissingField`] if a required field is absent and
/// [`EncodeError::FieldType`] if a field has the wrong type.
pub fn build_var_groups(
    fields: &VariantFields,
    identifier: &str,
    config: &ConverterConfig,
) -> EncodeResult<Vec<SegmentGroup>> {
    let gene_name = fields.require_text(field_names::GENE_NAME)?;
    let gene_id = fields.require_text(field_names::GENE_ID)?;
    let classification = fields.require_text(field_names::CLASSIFICATION)?;

    let mut groups = vec![variant_type_group(identifier, config)?];

    if let Some(name) = fields.text(field_names::VARIANT_NAME)? {
        groups.push(variant_name_group(identifier, name, config)?);
    }
    if let Some(chromosome) = fields.text(field_names::CHROMOSOME)? {
        groups.push(chromosome_group(identifier, chromosome, config)?);
    }
    if let Some(location) = allele_location_group(fields, identifier, config)? {
        groups.push(location);
    }

    groups.push(variant_gene_group(identifier, gene_name, gene_id, config)?);
    groups.push(variant_assessment_group(identifier, config)?);
    groups.push(variant_classification_group(identifier, classification, config)?);

    tracing::debug!(identifier, groups = groups.len(), "built VAR segment groups");
    Ok(groups)
}
