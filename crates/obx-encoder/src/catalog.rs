//! Concept catalog.
//!
//! Maps stable concept keys to the coded concepts rendered in OBX lines.
//! The built-in VAR table is initialized once per process; custom catalogs
//! can be assembled in code or loaded from a tab-delimited file.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::OnceLock;

use csv::{ReaderBuilder, StringRecord};
use obx_types::{var_concepts, Concept};

use crate::types::{EncodeError, EncodeResult};

/// Expected columns in a catalog file.
const CATALOG_COLUMNS: &[&str] = &["key", "code", "displayName", "codingSystem"];

static BUILTIN: OnceLock<ConceptCatalog> = OnceLock::new();

/// Read-only lookup from concept key to [`Concept`].
///
/// Keys and codes are both unique within a catalog. Iteration follows
/// registration order.
///
/// # Example
///
/// ```
/// use obx_encoder::ConceptCatalog;
/// use obx_types::var_concepts;
///
/// let catalog = ConceptCatalog::builtin();
/// let concept = catalog.lookup(var_concepts::CHROMOSOME).unwrap();
/// assert_eq!(concept.code, "VAR510");
///
/// assert!(catalog.lookup("not_a_concept").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConceptCatalog {
    entries: Vec<(String, Concept)>,
    by_key: HashMap<String, usize>,
    by_code: HashMap<String, usize>,
}

impl ConceptCatalog {
    /// Creates a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the built-in VAR concept catalog.
    pub fn builtin() -> &'static ConceptCatalog {
        BUILTIN.get_or_init(|| {
            let mut catalog = ConceptCatalog::new();
            for entry in var_concepts::BUILTIN {
                catalog.push(entry.key.to_string(), entry.to_concept());
            }
            catalog
        })
    }

    /// Registers a concept under `key`.
    ///
    /// # Errors
    /// Returns an error if the key or the concept code is already registered.
    pub fn insert(&mut self, key: impl Into<String>, concept: Concept) -> EncodeResult<()> {
        let key = key.into();
        if self.by_key.contains_key(&key) {
            return Err(EncodeError::DuplicateConceptKey { key });
        }
        if self.by_code.contains_key(&concept.code) {
            return Err(EncodeError::DuplicateConceptCode { code: concept.code });
        }
        self.push(key, concept);
        Ok(())
    }

    fn push(&mut self, key: String, concept: Concept) {
        let index = self.entries.len();
        self.by_key.insert(key.clone(), index);
        self.by_code.insert(concept.code.clone(), index);
        self.entries.push((key, concept));
    }

    /// Resolves a concept key.
    ///
    /// # Errors
    /// Returns [`EncodeError::UnknownConcept`] if the key is not registered.
    pub fn lookup(&self, key: &str) -> EncodeResult<&Concept> {
        self.get(key).ok_or_else(|| EncodeError::UnknownConcept {
            key: key.to_string(),
        })
    }

    /// Gets a concept by key.
    pub fn get(&self, key: &str) -> Option<&Concept> {
        self.by_key.get(key).map(|&i| &self.entries[i].1)
    }

    /// Gets a concept by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&Concept> {
        self.by_code.get(code).map(|&i| &self.entries[i].1)
    }

    /// Returns true if the key is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Returns the number of registered concepts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no concepts are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, concept)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Concept)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), c))
    }

    /// Loads a catalog from a tab-delimited file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, has invalid headers, or
    /// repeats a key or code.
    pub fn from_path<P: AsRef<Path>>(path: P) -> EncodeResult<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads a catalog from tab-delimited data with a
    /// `key, code, displayName, codingSystem` header row.
    pub fn from_reader<R: Read>(reader: R) -> EncodeResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(false)
            .trim(csv::Trim::None)
            .from_reader(reader);

        validate_headers(csv_reader.headers()?)?;

        let mut catalog = ConceptCatalog::new();
        let mut record = StringRecord::new();
        while csv_reader.read_record(&mut record)? {
            // Skip empty records
            if record.iter().all(|f| f.trim().is_empty()) {
                continue;
            }
            let field = |i: usize| record.get(i).unwrap_or("").to_string();
            catalog.insert(field(0), Concept::new(field(1), field(2), field(3)))?;
        }

        tracing::debug!(concepts = catalog.len(), "loaded concept catalog");
        Ok(catalog)
    }
}

/// Validates that the file has the expected column headers.
fn validate_headers(headers: &StringRecord) -> EncodeResult<()> {
    if headers.len() < CATALOG_COLUMNS.len() {
        return Err(EncodeError::InvalidHeader {
            expected: CATALOG_COLUMNS.len(),
            found: headers.len(),
        });
    }

    for (i, expected) in CATALOG_COLUMNS.iter().enumerate() {
        let found = headers.get(i).unwrap_or("");
        // Handle UTF-8 BOM at start of file
        let found = found.trim_start_matches('\u{feff}');
        if found != *expected {
            return Err(EncodeError::UnexpectedColumn {
                position: i,
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
    }

    Ok(())
}
