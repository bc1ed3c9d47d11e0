//! In-memory implementation of `SourceReader`.
//!
//! `InMemorySourceReader` serves pre-built datasets by source id. Sources
//! that were never registered are reported as not found, and a source can be
//! registered as malformed to exercise the loader's skip path.

use std::collections::HashMap;

use medreport_contracts::{
    dataset::{Dataset, SourceId},
    error::{MedReportError, MedReportResult},
};
use medreport_core::traits::SourceReader;

#[derive(Debug, Clone)]
enum Entry {
    Table(Dataset),
    Malformed(String),
}

/// A `SourceReader` backed by a map of source id to dataset.
#[derive(Debug, Clone, Default)]
pub struct InMemorySourceReader {
    entries: HashMap<SourceId, Entry>,
}

impl InMemorySourceReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `dataset` under `id`.
    pub fn with_source(mut self, id: impl Into<String>, dataset: Dataset) -> Self {
        self.entries.insert(SourceId::new(id), Entry::Table(dataset));
        self
    }

    /// Register `id` as a source that exists but fails to parse.
    pub fn with_malformed(mut self, id: impl Into<String>, reason: impl Into<String>) -> Self {
        self.entries.insert(SourceId::new(id), Entry::Malformed(reason.into()));
        self
    }
}

impl SourceReader for InMemorySourceReader {
    fn load(&self, source: &SourceId) -> MedReportResult<Dataset> {
        match self.entries.get(source) {
            Some(Entry::Table(dataset)) => Ok(dataset.clone()),
            Some(Entry::Malformed(reason)) => Err(MedReportError::SourceMalformed {
                source_id: source.to_string(),
                reason: reason.clone(),
            }),
            None => Err(MedReportError::SourceNotFound {
                source_id: source.to_string(),
            }),
        }
    }
}
