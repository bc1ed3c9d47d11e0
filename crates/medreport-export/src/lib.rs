//! # medreport-export
//!
//! Page layout and document export for finished reports.
//!
//! ## Overview
//!
//! Reports are sanitized to Latin-1, word-wrapped to a fixed line width,
//! and paginated ([`layout`]). Exporters implement
//! [`DocumentExporter`](medreport_core::traits::DocumentExporter) and
//! return an `ExportReceipt` carrying the SHA-256 of the written bytes
//! ([`digest`]), so a stored document can be checked later.
//!
//! - [`TextDocumentExporter`] writes `<dir>/<stem>.txt`.
//! - [`InMemoryExporter`] keeps documents in memory.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medreport_export::{PageLayout, TextDocumentExporter};
//!
//! let exporter = TextDocumentExporter::new("reports", PageLayout::new(90, 48));
//! let receipt = exporter.export(&body, "medical_report_asha")?;
//! ```

pub mod digest;
pub mod layout;
pub mod memory;
pub mod text;

pub use digest::{sha256_hex, verify_digest};
pub use layout::{Page, PageLayout};
pub use memory::{InMemoryExporter, StoredDocument};
pub use text::TextDocumentExporter;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use medreport_contracts::{
        error::MedReportError,
        report::{Report, ReportBody},
    };
    use medreport_core::traits::DocumentExporter;

    use super::{verify_digest, InMemoryExporter, PageLayout, TextDocumentExporter};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("medreport-export-{}", uuid::Uuid::new_v4()))
    }

    fn body() -> ReportBody {
        ReportBody::Composed(Report::new([
            "Patient Name: Asha, Age: 34, Mobile: 555-0101.".to_string(),
            "The patient has been diagnosed with Diabetes. This condition may present symptoms \
             requiring close observation and treatment."
                .to_string(),
            "It is recommended to consult a doctor who specializes in Endocrinologist.".to_string(),
            "Dietary recommendations for this condition include: \u{201C}low sugar\u{201D}.".to_string(),
        ]))
    }

    // ── Text exporter ────────────────────────────────────────────────────────

    /// The file lands in a freshly created directory and matches its receipt.
    #[test]
    fn test_text_export_writes_file_and_receipt() {
        let dir = scratch_dir();
        let exporter = TextDocumentExporter::new(&dir, PageLayout::new(40, 100));

        let receipt = exporter.export(&body(), "medical_report_asha").unwrap();

        let path = dir.join("medical_report_asha.txt");
        assert_eq!(receipt.location, path.display().to_string());
        let written = fs::read(&path).unwrap();
        assert_eq!(receipt.bytes, written.len());
        assert!(verify_digest(&written, &receipt.sha256));
        assert_eq!(receipt.pages, 1);

        let text = String::from_utf8(written).unwrap();
        assert!(text.lines().all(|l| l.chars().count() <= 40));
        assert!(text.starts_with("Patient Name: Asha, Age: 34, Mobile:"));
        assert!(text.contains("\"low sugar\""), "typographic quotes must be sanitized");
        assert!(text.contains("\n\n"), "paragraph breaks must survive");

        fs::remove_dir_all(dir).ok();
    }

    /// Small pages produce several form-feed separated pages.
    #[test]
    fn test_text_export_paginates() {
        let dir = scratch_dir();
        let exporter = TextDocumentExporter::new(&dir, PageLayout::new(30, 4));

        let receipt = exporter.export(&body(), "paged").unwrap();
        let text = fs::read_to_string(dir.join("paged.txt")).unwrap();

        assert!(receipt.pages > 1);
        assert_eq!(text.matches('\u{000C}').count(), receipt.pages - 1);

        fs::remove_dir_all(dir).ok();
    }

    /// Generated bodies are exported as-is, wrapped like any other text.
    #[test]
    fn test_text_export_generated_body() {
        let dir = scratch_dir();
        let exporter = TextDocumentExporter::new(&dir, PageLayout::default());

        exporter
            .export(&ReportBody::Generated("Free text from the service.".to_string()), "gen")
            .unwrap();
        let text = fs::read_to_string(dir.join("gen.txt")).unwrap();
        assert_eq!(text, "Free text from the service.\n");

        fs::remove_dir_all(dir).ok();
    }

    /// Path-like stems are refused rather than escaping the directory.
    #[test]
    fn test_text_export_rejects_path_stems() {
        let exporter = TextDocumentExporter::new(scratch_dir(), PageLayout::default());
        for stem in ["", "../evil", "a/b", ".hidden"] {
            let err = exporter.export(&body(), stem).unwrap_err();
            assert!(matches!(err, MedReportError::ExportFailed { .. }), "stem {:?}", stem);
        }
    }

    /// A directory that cannot be created surfaces as ExportFailed.
    #[test]
    fn test_text_export_unwritable_directory() {
        let dir = scratch_dir();
        fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("not-a-dir");
        fs::write(&blocker, "file in the way").unwrap();

        let exporter = TextDocumentExporter::new(blocker.join("reports"), PageLayout::default());
        let err = exporter.export(&body(), "x").unwrap_err();
        assert!(err.to_string().contains("document export failed"));

        fs::remove_dir_all(dir).ok();
    }

    // ── In-memory exporter ───────────────────────────────────────────────────

    #[test]
    fn test_in_memory_exporter_keeps_documents_in_order() {
        let exporter = InMemoryExporter::new(PageLayout::new(50, 10));

        let first = exporter.export(&body(), "one").unwrap();
        exporter.export(&ReportBody::Generated("two".to_string()), "two").unwrap();

        let docs = exporter.documents();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].name, "one.txt");
        assert_eq!(docs[0].receipt, first);
        assert_eq!(first.location, "memory://one.txt");
        assert!(verify_digest(docs[0].contents.as_bytes(), &first.sha256));
        assert_eq!(docs[1].contents, "two\n");
    }
}
