//! Plain-text document exporter.
//!
//! `TextDocumentExporter` lays a report out into fixed-width pages and
//! writes them to `<directory>/<stem>.txt`, pages separated by a form feed.
//! The output directory is created on first use. The returned receipt
//! carries the SHA-256 of the written bytes.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use medreport_contracts::{
    error::{MedReportError, MedReportResult},
    report::{ExportReceipt, ReportBody},
};
use medreport_core::traits::DocumentExporter;

use crate::{
    digest::sha256_hex,
    layout::{Page, PageLayout},
};

/// Separates pages in the written file.
pub const PAGE_BREAK: char = '\u{000C}';

/// Writes laid-out reports as text files in one directory.
#[derive(Debug, Clone)]
pub struct TextDocumentExporter {
    directory: PathBuf,
    layout: PageLayout,
}

impl TextDocumentExporter {
    pub fn new(directory: impl Into<PathBuf>, layout: PageLayout) -> Self {
        Self { directory: directory.into(), layout }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The path a document with `file_stem` is written to.
    pub fn path_for(&self, file_stem: &str) -> PathBuf {
        self.directory.join(format!("{}.txt", file_stem))
    }
}

impl DocumentExporter for TextDocumentExporter {
    fn export(&self, body: &ReportBody, file_stem: &str) -> MedReportResult<ExportReceipt> {
        if file_stem.is_empty() || file_stem.contains(['/', '\\']) || file_stem.starts_with('.') {
            return Err(MedReportError::ExportFailed {
                reason: format!("invalid file name stem '{}'", file_stem),
            });
        }

        let pages = self.layout.layout(&body.text());
        let rendered = render_pages(&pages);

        std::fs::create_dir_all(&self.directory).map_err(|e| MedReportError::ExportFailed {
            reason: format!("cannot create export directory '{}': {}", self.directory.display(), e),
        })?;

        let path = self.path_for(file_stem);
        std::fs::write(&path, rendered.as_bytes()).map_err(|e| MedReportError::ExportFailed {
            reason: format!("cannot write '{}': {}", path.display(), e),
        })?;

        let receipt = ExportReceipt {
            location: path.display().to_string(),
            pages: pages.len(),
            bytes: rendered.len(),
            sha256: sha256_hex(rendered.as_bytes()),
            exported_at: Utc::now(),
        };

        info!(
            location = %receipt.location,
            pages = receipt.pages,
            bytes = receipt.bytes,
            sha256 = %receipt.sha256,
            "report written"
        );

        Ok(receipt)
    }
}

/// Join pages into the file contents: lines end with `\n`, pages are
/// separated by a form feed.
pub fn render_pages(pages: &[Page]) -> String {
    let mut out = String::new();
    for (idx, page) in pages.iter().enumerate() {
        if idx > 0 {
            out.push(PAGE_BREAK);
        }
        for line in &page.lines {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}
