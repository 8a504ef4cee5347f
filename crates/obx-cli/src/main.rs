//! OBX converter binary.
//!
//! Reads a JSON array of `{ "identifier": ..., "fields": { ... } }` variant
//! records and prints their VAR OBX segments to stdout as one batch.

use std::fs;
use std::io::{self, Read, Write};

use obx_encoder::{build_var_groups, ConceptCatalog, ConverterConfig, ObxEncoder, VariantFields};
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// One variant to convert.
#[derive(Debug, Deserialize)]
struct VariantRecord {
    identifier: String,
    fields: VariantFields,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; stdout is reserved for segments
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let input = match std::env::var("OBX_INPUT_PATH") {
        Ok(path) => {
            tracing::info!("Reading variants from: {}", path);
            fs::read_to_string(path)?
        }
        Err(_) => {
            tracing::info!("Reading variants from stdin");
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let records: Vec<VariantRecord> = serde_json::from_str(&input)?;

    let custom_catalog;
    let catalog = match std::env::var("OBX_CATALOG_PATH") {
        Ok(path) => {
            tracing::info!("Loading concept catalog from: {}", path);
            custom_catalog = ConceptCatalog::from_path(path)?;
            &custom_catalog
        }
        Err(_) => ConceptCatalog::builtin(),
    };
    tracing::info!("Using catalog with {} concepts", catalog.len());

    let mut config = ConverterConfig::default();
    if let Some(code) = std::env::var("OBX_VARIANT_TYPE_CODE")
        .ok()
        .and_then(|c| c.parse().ok())
    {
        config.variant_type_code = code;
    }
    if let Ok(system) = std::env::var("OBX_GENE_CODING_SYSTEM") {
        config.gene_coding_system = system;
    }

    let stdout = io::stdout();
    let written = convert(&records, catalog, &config, stdout.lock())?;
    tracing::info!("Wrote {} OBX segments for {} variants", written, records.len());

    Ok(())
}

/// Builds and encodes the VAR groups of every record as one batch.
fn convert<W: Write>(
    records: &[VariantRecord],
    catalog: &ConceptCatalog,
    config: &ConverterConfig,
    writer: W,
) -> obx_encoder::EncodeResult<usize> {
    let mut groups = Vec::new();
    for record in records {
        groups.extend(build_var_groups(&record.fields, &record.identifier, config)?);
    }
    ObxEncoder::new(catalog).write_batch(&groups, writer)
}
