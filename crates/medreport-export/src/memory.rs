//! In-memory implementation of `DocumentExporter`.
//!
//! `InMemoryExporter` lays documents out exactly like the text exporter but
//! keeps the rendered contents in a `Vec` behind a `Mutex` instead of
//! writing files. Useful for embedding the pipeline where the caller streams
//! the document itself, and in tests.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use medreport_contracts::{
    error::{MedReportError, MedReportResult},
    report::{ExportReceipt, ReportBody},
};
use medreport_core::traits::DocumentExporter;

use crate::{digest::sha256_hex, layout::PageLayout, text::render_pages};

/// One document held by an `InMemoryExporter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocument {
    pub name: String,
    pub contents: String,
    pub receipt: ExportReceipt,
}

/// Keeps exported documents in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryExporter {
    layout: PageLayout,
    documents: Arc<Mutex<Vec<StoredDocument>>>,
}

impl InMemoryExporter {
    pub fn new(layout: PageLayout) -> Self {
        Self { layout, documents: Arc::new(Mutex::new(Vec::new())) }
    }

    /// Snapshot of every document exported so far, in export order.
    pub fn documents(&self) -> Vec<StoredDocument> {
        self.documents
            .lock()
            .map(|docs| docs.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl DocumentExporter for InMemoryExporter {
    fn export(&self, body: &ReportBody, file_stem: &str) -> MedReportResult<ExportReceipt> {
        let pages = self.layout.layout(&body.text());
        let contents = render_pages(&pages);
        let name = format!("{}.txt", file_stem);

        let receipt = ExportReceipt {
            location: format!("memory://{}", name),
            pages: pages.len(),
            bytes: contents.len(),
            sha256: sha256_hex(contents.as_bytes()),
            exported_at: Utc::now(),
        };

        let mut documents = self.documents.lock().map_err(|e| MedReportError::ExportFailed {
            reason: format!("document store lock poisoned: {}", e),
        })?;
        documents.push(StoredDocument { name, contents, receipt: receipt.clone() });

        Ok(receipt)
    }
}
