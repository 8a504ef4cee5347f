//! OBX batch encoder.
//!
//! Turns an ordered list of segment groups into OBX lines. Line numbers
//! start at 1 and run across every group of a batch; each call keeps its
//! own counter, so independent batches never share numbering.

use std::io::Write;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use obx_types::{GroupValues, SegmentGroup};

use crate::catalog::ConceptCatalog;
use crate::format;
use crate::record::ObxRecord;
use crate::types::{EncodeError, EncodeResult};

/// Encodes segment groups against a concept catalog.
///
/// # Example
///
/// ```
/// use obx_encoder::{ConceptCatalog, ObxEncoder};
/// use obx_types::{CodedValue, GroupValues, Observation, SegmentGroup};
///
/// let group = SegmentGroup::new(
///     "variant_type",
///     "a",
///     GroupValues::CodedConcept(vec![Observation::new(CodedValue::with_label("Simple"))]),
/// )
/// .unwrap();
///
/// let encoder = ObxEncoder::new(ConceptCatalog::builtin());
/// let lines = encoder.encode_batch(&[group]).unwrap();
/// assert_eq!(
///     lines[0],
///     "OBX|1|CWE|VAR503^Variant Type^HL7VAR|2a|^Simple||||||||||||||||"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ObxEncoder<'a> {
    catalog: &'a ConceptCatalog,
}

impl<'a> ObxEncoder<'a> {
    /// Creates an encoder resolving concepts in `catalog`.
    pub fn new(catalog: &'a ConceptCatalog) -> Self {
        Self { catalog }
    }

    /// Returns the catalog concepts are resolved against.
    pub fn catalog(&self) -> &'a ConceptCatalog {
        self.catalog
    }

    /// Encodes a batch into one record per value, in input order.
    ///
    /// # Errors
    /// Fails on the first group with an unknown concept or the first coded
    /// value that cannot be encoded. No records are returned in that case.
    pub fn encode_records(&self, groups: &[SegmentGroup]) -> EncodeResult<Vec<ObxRecord>> {
        let total: usize = groups.iter().map(SegmentGroup::len).sum();
        let mut records = Vec::with_capacity(total);
        let mut line_number = 1;

        for group in groups {
            let concept = self.catalog.lookup(group.concept()).map_err(|e| {
                tracing::warn!(
                    concept = group.concept(),
                    "segment group references unknown concept"
                );
                e
            })?;
            let identifier = format::concept_identifier(concept);

            for (value, suffix) in format_values(group, line_number)? {
                records.push(ObxRecord {
                    line_number,
                    value_type: group.kind(),
                    observation_identifier: identifier.clone(),
                    observation_sub_id: format::observation_sub_id(
                        group.variant_type_code(),
                        group.identifier(),
                        suffix,
                    ),
                    observation_value: value,
                });
                line_number += 1;
            }
        }

        tracing::debug!(groups = groups.len(), lines = records.len(), "encoded OBX batch");
        Ok(records)
    }

    /// Encodes a batch into OBX lines, in input order.
    pub fn encode_batch(&self, groups: &[SegmentGroup]) -> EncodeResult<Vec<String>> {
        Ok(self
            .encode_records(groups)?
            .iter()
            .map(ObxRecord::to_string)
            .collect())
    }

    /// Encodes a batch and writes each line followed by a newline.
    ///
    /// Nothing is written unless the whole batch encodes. Returns the number
    /// of lines written.
    pub fn write_batch<W: Write>(&self, groups: &[SegmentGroup], mut writer: W) -> EncodeResult<usize> {
        let lines = self.encode_batch(groups)?;
        for line in &lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(lines.len())
    }

    /// Encodes several independent batches, each numbered from 1.
    ///
    /// Batches are encoded in parallel; results keep input order.
    #[cfg(feature = "parallel")]
    pub fn encode_batches(&self, batches: &[Vec<SegmentGroup>]) -> EncodeResult<Vec<Vec<String>>> {
        batches
            .par_iter()
            .map(|groups| self.encode_batch(groups))
            .collect()
    }

    /// Encodes several independent batches, each numbered from 1.
    #[cfg(not(feature = "parallel"))]
    pub fn encode_batches(&self, batches: &[Vec<SegmentGroup>]) -> EncodeResult<Vec<Vec<String>>> {
        batches
            .iter()
            .map(|groups| self.encode_batch(groups))
            .collect()
    }
}

/// Formats every value of a group together with its sub-line suffix.
///
/// `first_line` is the line number of the group's first value, used to
/// report the position of an invalid coded value.
fn format_values(group: &SegmentGroup, first_line: usize) -> EncodeResult<Vec<(String, Option<&str>)>> {
    let formatted: Vec<(String, Option<&str>)> = match group.values() {
        GroupValues::Text(values) => values
            .iter()
            .map(|o| (o.value.clone(), o.subline_suffix.as_deref()))
            .collect(),
        GroupValues::Numeric(values) => values
            .iter()
            .map(|o| (format::number(o.value), o.subline_suffix.as_deref()))
            .collect(),
        GroupValues::NumericRange(values) => values
            .iter()
            .map(|o| (format::numeric_range(&o.value), o.subline_suffix.as_deref()))
            .collect(),
        GroupValues::CodedConcept(values) => values
            .iter()
            .enumerate()
            .map(|(i, o)| match format::coded_value(&o.value) {
                Some(value) => Ok((value, o.subline_suffix.as_deref())),
                None => {
                    tracing::warn!(
                        concept = group.concept(),
                        line = first_line + i,
                        "coded value has no label or code"
                    );
                    Err(EncodeError::InvalidCodedConcept {
                        concept: group.concept().to_string(),
                        line: first_line + i,
                    })
                }
            })
            .collect::<EncodeResult<Vec<_>>>()?,
    };
    Ok(formatted)
}

/// Encodes a batch against the built-in VAR catalog.
pub fn encode_batch(groups: &[SegmentGroup]) -> EncodeResult<Vec<String>> {
    ObxEncoder::new(ConceptCatalog::builtin()).encode_batch(groups)
}

/// Encodes a batch against the built-in VAR catalog and writes the lines.
pub fn write_batch<W: Write>(groups: &[SegmentGroup], writer: W) -> EncodeResult<usize> {
    ObxEncoder::new(ConceptCatalog::builtin()).write_batch(groups, writer)
}

/// Encodes independent batches against the built-in VAR catalog.
pub fn encode_batches(batches: &[Vec<SegmentGroup>]) -> EncodeResult<Vec<Vec<String>>> {
    ObxEncoder::new(ConceptCatalog::builtin()).encode_batches(batches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use obx_types::{var_concepts, CodedValue, Concept, NumericRange, Observation};

    fn coded_group(concept: &str, value: CodedValue) -> SegmentGroup {
        SegmentGroup::new(
            concept,
            "a",
            GroupValues::CodedConcept(vec![Observation::new(value)]),
        )
        .unwrap()
    }

    fn field(line: &str, index: usize) -> &str {
        line.split('|').nth(index).unwrap()
    }

    #[test]
    fn test_encode_var_batch() {
        let groups = vec![
            coded_group(var_concepts::VARIANT_TYPE, CodedValue::with_label("Simple")),
            coded_group(var_concepts::VARIANT_GENE, CodedValue::new("123", "BRAF", "HGNC")),
            coded_group(var_concepts::VARIANT_ASSESSMENT, CodedValue::with_label("Detected")),
            coded_group(
                var_concepts::VARIANT_CLASSIFICATION,
                CodedValue::with_label("Likely Pathogenic"),
            ),
        ];

        let lines = encode_batch(&groups).unwrap();
        assert_eq!(
            lines,
            vec![
                "OBX|1|CWE|VAR503^Variant Type^HL7VAR|2a|^Simple||||||||||||||||",
                "OBX|2|CWE|VAR514^Variant Gene^HL7VAR|2a|123^BRAF^HGNC||||||||||||||||",
                "OBX|3|CWE|VAR552^Variant Assessment^HL7VAR|2a|^Detected||||||||||||||||",
                "OBX|4|CWE|VAR553^Variant Classification^HL7VAR|2a|^Likely Pathogenic||||||||||||||||",
            ]
        );
    }

    #[test]
    fn test_line_numbers_continue_across_groups() {
        let groups = vec![
            SegmentGroup::new(
                var_concepts::CHROMOSOME,
                "a",
                GroupValues::Text(vec![Observation::new("chr7".to_string())]),
            )
            .unwrap(),
            SegmentGroup::new(
                var_concepts::ALLELE_START_END,
                "a",
                GroupValues::Numeric(vec![
                    Observation::new(140753336.0).with_suffix("1"),
                    Observation::new(140753337.0).with_suffix("2"),
                ]),
            )
            .unwrap(),
        ];

        let lines = encode_batch(&groups).unwrap();
        assert_eq!(lines.len(), 3);
        let numbers: Vec<&str> = lines.iter().map(|l| field(l, 1)).collect();
        assert_eq!(numbers, vec!["1", "2", "3"]);

        assert_eq!(field(&lines[1], 3), field(&lines[2], 3));
        assert_eq!(field(&lines[1], 4), "2a.1");
        assert_eq!(field(&lines[2], 4), "2a.2");
        assert_eq!(field(&lines[1], 5), "140753336");
        assert_eq!(field(&lines[2], 2), "NM");
    }

    #[test]
    fn test_numeric_range_and_text_values() {
        let groups = vec![
            SegmentGroup::new(
                var_concepts::ALLELE_START_END,
                "b",
                GroupValues::NumericRange(vec![Observation::new(NumericRange::new(1.0, 2.0))]),
            )
            .unwrap()
            .with_variant_type_code(3),
            SegmentGroup::new(
                var_concepts::VARIANT_NAME,
                "b",
                GroupValues::Text(vec![Observation::new("NM_004333.6:c.1799T>A".to_string())]),
            )
            .unwrap(),
        ];

        let lines = encode_batch(&groups).unwrap();
        assert_eq!(
            lines[0],
            "OBX|1|NR|VAR511^Allele Start/End^HL7VAR|3b|1^2||||||||||||||||"
        );
        assert_eq!(field(&lines[1], 5), "NM_004333.6:c.1799T>A");
        assert_eq!(field(&lines[1], 2), "ST");
    }

    #[test]
    fn test_every_line_has_fixed_width() {
        let groups = vec![
            coded_group(var_concepts::VARIANT_TYPE, CodedValue::with_label("Simple")),
            coded_group(var_concepts::VARIANT_GENE, CodedValue::new("123", "BRAF", "HGNC")),
        ];
        for line in encode_batch(&groups).unwrap() {
            assert_eq!(line.split('|').count(), crate::FIELD_COUNT);
        }
    }

    #[test]
    fn test_unknown_concept_aborts_batch() {
        let groups = vec![
            coded_group(var_concepts::VARIANT_TYPE, CodedValue::with_label("Simple")),
            coded_group("zygosity", CodedValue::with_label("Heterozygous")),
        ];
        let err = encode_batch(&groups).unwrap_err();
        assert!(matches!(err, EncodeError::UnknownConcept { key } if key == "zygosity"));
    }

    #[test]
    fn test_invalid_coded_value_aborts_batch() {
        let groups = vec![
            coded_group(var_concepts::VARIANT_TYPE, CodedValue::with_label("Simple")),
            SegmentGroup::new(
                var_concepts::VARIANT_GENE,
                "a",
                GroupValues::CodedConcept(vec![
                    Observation::new(CodedValue::new("123", "BRAF", "HGNC")),
                    Observation::new(CodedValue::default()),
                ]),
            )
            .unwrap(),
        ];

        let err = encode_batch(&groups).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::InvalidCodedConcept { ref concept, line: 3 } if concept == "variant_gene"
        ));

        let mut out: Vec<u8> = Vec::new();
        assert!(write_batch(&groups, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_encode_is_deterministic() {
        let groups = vec![
            coded_group(var_concepts::VARIANT_GENE, CodedValue::new("123", "BRAF", "HGNC")),
            coded_group(var_concepts::VARIANT_CLASSIFICATION, CodedValue::with_label("Benign")),
        ];
        assert_eq!(encode_batch(&groups).unwrap(), encode_batch(&groups).unwrap());
    }

    #[test]
    fn test_identifier_matches_catalog() {
        let groups = vec![SegmentGroup::new(
            var_concepts::ALLELE_START_END,
            "a",
            GroupValues::Numeric(vec![
                Observation::new(1.0).with_suffix("1"),
                Observation::new(2.0).with_suffix("2"),
            ]),
        )
        .unwrap()];

        let concept = ConceptCatalog::builtin()
            .lookup(var_concepts::ALLELE_START_END)
            .unwrap();
        let expected = format!(
            "{}^{}^{}",
            concept.code, concept.display_name, concept.coding_system
        );
        for line in encode_batch(&groups).unwrap() {
            assert_eq!(field(&line, 3), expected);
        }
    }

    #[test]
    fn test_custom_catalog() {
        let mut catalog = ConceptCatalog::new();
        catalog
            .insert("zygosity", Concept::new("VAR520", "Zygosity", "99LOCAL"))
            .unwrap();
        let encoder = ObxEncoder::new(&catalog);

        let groups = vec![coded_group("zygosity", CodedValue::with_label("Heterozygous"))];
        let lines = encoder.encode_batch(&groups).unwrap();
        assert_eq!(field(&lines[0], 3), "VAR520^Zygosity^99LOCAL");

        let groups = vec![coded_group(var_concepts::VARIANT_TYPE, CodedValue::with_label("Simple"))];
        assert!(encoder.encode_batch(&groups).is_err());
    }

    #[test]
    fn test_write_batch() {
        let groups = vec![
            coded_group(var_concepts::VARIANT_TYPE, CodedValue::with_label("Simple")),
            coded_group(var_concepts::VARIANT_ASSESSMENT, CodedValue::with_label("Detected")),
        ];
        let mut out: Vec<u8> = Vec::new();
        let written = write_batch(&groups, &mut out).unwrap();
        assert_eq!(written, 2);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(text.ends_with("||||\n"));
        assert_eq!(lines, encode_batch(&groups).unwrap());
    }

    #[test]
    fn test_encode_batches_independent_numbering() {
        let first = vec![
            coded_group(var_concepts::VARIANT_TYPE, CodedValue::with_label("Simple")),
            coded_group(var_concepts::VARIANT_ASSESSMENT, CodedValue::with_label("Detected")),
        ];
        let second = vec![coded_group(
            var_concepts::VARIANT_CLASSIFICATION,
            CodedValue::with_label("Benign"),
        )];

        let results = encode_batches(&[first.clone(), second]).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], encode_batch(&first).unwrap());
        assert_eq!(field(&results[1][0], 1), "1");
    }

    #[test]
    fn test_empty_batch() {
        assert!(encode_batch(&[]).unwrap().is_empty());
    }
}
