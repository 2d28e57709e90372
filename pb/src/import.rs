//! Bulk task import from CSV
//!
//! Rows are `target,config` pairs with no header line. Malformed rows are
//! skipped and counted rather than failing the batch, so one bad line never
//! blocks the rest of a large import.

use std::fs::File;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("failed to read import file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Rows accepted from an import source, plus how many were skipped.
#[derive(Debug, Default)]
pub struct ImportBatch {
    pub rows: Vec<(String, String)>,
    pub skipped: usize,
}

/// Read `target,config` rows from a CSV file.
pub fn read_rows_from_path(path: &Path) -> Result<ImportBatch, ImportError> {
    read_rows(File::open(path)?)
}

/// Read `target,config` rows from any CSV source. Rows with fewer than two
/// fields, or with a blank target or config, are skipped with a warning.
/// Quoted fields may span lines, so multi-line configs import intact. A
/// leading UTF-8 BOM, as written by spreadsheet exports, is stripped.
pub fn read_rows(mut reader: impl std::io::Read) -> Result<ImportBatch, ImportError> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;
    let body = raw.strip_prefix(b"\xef\xbb\xbf").unwrap_or(&raw);

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body);

    let mut batch = ImportBatch::default();
    for (index, record) in csv_reader.records().enumerate() {
        let row = index + 1;
        let record = record?;
        let (Some(target), Some(config)) = (record.get(0), record.get(1)) else {
            warn!("skipping row {row}: expected target and config fields");
            batch.skipped += 1;
            continue;
        };
        let target = target.trim();
        let config = config.trim();
        if target.is_empty() || config.is_empty() {
            warn!("skipping row {row}: blank target or config");
            batch.skipped += 1;
            continue;
        }
        batch.rows.push((target.to_string(), config.to_string()));
    }
    Ok(batch)
}
