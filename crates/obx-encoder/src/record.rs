//! OBX line record.

use std::fmt;

use obx_types::ValueKind;

/// Segment type written as the first field of every line.
pub const SEGMENT_TYPE: &str = "OBX";

/// Number of pipe-delimited fields in every OBX line.
pub const FIELD_COUNT: usize = 22;

/// Number of fields carried by [`ObxRecord`]; the rest are always empty.
const ASSIGNED_FIELDS: usize = 6;

/// One OBX line with its populated fields named by position.
///
/// `Display` renders the full fixed-width line. Fields after the observation
/// value are empty.
///
/// # Example
///
/// ```
/// use obx_encoder::ObxRecord;
/// use obx_types::ValueKind;
///
/// let record = ObxRecord {
///     line_number: 1,
///     value_type: ValueKind::Text,
///     observation_identifier: "VAR510^Chromosome^HL7VAR".to_string(),
///     observation_sub_id: "2a".to_string(),
///     observation_value: "chr7".to_string(),
/// };
///
/// let line = record.to_string();
/// assert!(line.starts_with("OBX|1|ST|VAR510^Chromosome^HL7VAR|2a|chr7|"));
/// assert_eq!(line.split('|').count(), 22);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObxRecord {
    /// Field 2: position of the line within the batch, starting at 1.
    pub line_number: usize,
    /// Field 3: HL7 data type of the value.
    pub value_type: ValueKind,
    /// Field 4: `code^display name^coding system` of the concept.
    pub observation_identifier: String,
    /// Field 5: variant type code, variant identifier and sub-line suffix.
    pub observation_sub_id: String,
    /// Field 6: the formatted value.
    pub observation_value: String,
}

impl fmt::Display for ObxRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}|{}",
            SEGMENT_TYPE,
            self.line_number,
            self.value_type.code(),
            self.observation_identifier,
            self.observation_sub_id,
            self.observation_value
        )?;
        for _ in ASSIGNED_FIELDS..FIELD_COUNT {
            f.write_str("|")?;
        }
        Ok(())
    }
}
