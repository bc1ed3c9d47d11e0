//! CSV-backed `SourceReader`.
//!
//! Each source id is a path to a CSV file with a header row, resolved
//! against an optional base directory. Cells are trimmed and empty cells
//! load as nulls. The reader is strict about shape: every row must have as
//! many cells as the header, and header names must be non-empty and unique.

use std::{
    collections::HashSet,
    io,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use medreport_contracts::{
    dataset::{Dataset, Field, Record, SourceId},
    error::{MedReportError, MedReportResult},
};
use medreport_core::traits::SourceReader;

/// Reads tabular sources from CSV files on disk.
#[derive(Debug, Clone, Default)]
pub struct CsvSourceReader {
    base_dir: Option<PathBuf>,
}

impl CsvSourceReader {
    /// A reader that resolves source ids relative to the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// A reader that resolves relative source ids against `dir`.
    pub fn with_base_dir(dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: Some(dir.into()) }
    }

    /// The file path a source id refers to.
    pub fn resolve(&self, source: &SourceId) -> PathBuf {
        let path = Path::new(source.as_str());
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl SourceReader for CsvSourceReader {
    fn load(&self, source: &SourceId) -> MedReportResult<Dataset> {
        let path = self.resolve(source);
        if !path.is_file() {
            return Err(MedReportError::SourceNotFound {
                source_id: source.to_string(),
            });
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .flexible(false)
            .from_path(&path)
            .map_err(|e| classify(source, e))?;

        let headers = reader.headers().map_err(|e| classify(source, e))?.clone();
        let columns = validate_headers(source, &headers)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| classify(source, e))?;
            records.push(to_record(&columns, &row));
        }

        debug!(
            source = %source,
            path = %path.display(),
            rows = records.len(),
            columns = columns.len(),
            "csv source parsed"
        );

        Ok(Dataset::with_columns(columns, records))
    }
}

/// Check the header row and return the column names.
fn validate_headers(source: &SourceId, headers: &StringRecord) -> MedReportResult<Vec<String>> {
    if headers.is_empty() {
        return Err(malformed(source, "missing header row".to_string()));
    }

    let mut seen = HashSet::new();
    let mut columns = Vec::with_capacity(headers.len());
    for (idx, name) in headers.iter().enumerate() {
        if name.is_empty() {
            return Err(malformed(source, format!("header column {} has no name", idx + 1)));
        }
        if !seen.insert(name) {
            return Err(malformed(source, format!("duplicate header column '{}'", name)));
        }
        columns.push(name.to_string());
    }
    Ok(columns)
}

fn to_record(columns: &[String], row: &StringRecord) -> Record {
    let fields = columns
        .iter()
        .zip(row.iter())
        .map(|(column, cell)| {
            let value = if cell.is_empty() { None } else { Some(cell.to_string()) };
            Field::new(column.clone(), value)
        })
        .collect();
    Record::new(fields)
}

/// Map a csv error to the loader's error kinds.
///
/// A file that disappears between the existence check and the open is
/// still "not found"; everything else is a malformed source.
fn classify(source: &SourceId, err: csv::Error) -> MedReportError {
    if let csv::ErrorKind::Io(io_err) = err.kind() {
        if io_err.kind() == io::ErrorKind::NotFound {
            return MedReportError::SourceNotFound {
                source_id: source.to_string(),
            };
        }
    }
    malformed(source, err.to_string())
}

fn malformed(source: &SourceId, reason: String) -> MedReportError {
    MedReportError::SourceMalformed {
        source_id: source.to_string(),
        reason,
    }
}
