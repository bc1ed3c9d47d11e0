//! Collaborator trait definitions for the report pipeline.
//!
//! The pipeline itself only loads, matches, and composes. Everything that
//! touches the outside world is reached through one of these traits:
//!
//! - `SourceReader`       — reads one tabular source into a `Dataset`
//! - `DatasetSource`      — hands out the combined, load-once dataset
//! - `ReportBodyProvider` — turns patient + matched record into report text
//! - `TextGenerator`      — hosted text-generation service (opaque)
//! - `DocumentExporter`   — writes the finished report somewhere durable
//! - `SpeechSynthesizer`  — speaks the key findings in a chosen language
//!
//! Implementations of the external-facing traits own their own timeout and
//! retry behavior. The pipeline treats each call as a single attempt that
//! either returns a value or fails.

use std::sync::Arc;

use medreport_contracts::{
    dataset::{Dataset, Record, SourceId},
    error::MedReportResult,
    report::{ExportReceipt, ReportBody},
    request::PatientInfo,
    speech::{AudioAsset, SpeechRequest},
};

/// Reads a single tabular source.
pub trait SourceReader: Send + Sync {
    /// Load `source` as a dataset.
    ///
    /// Return `SourceNotFound` when the source cannot be located and
    /// `SourceMalformed` when it exists but cannot be parsed. The loader
    /// skips both and carries on with the remaining sources.
    fn load(&self, source: &SourceId) -> MedReportResult<Dataset>;
}

/// Supplies the combined dataset, loading it on first use.
///
/// After the first load the dataset is an immutable shared value; callers
/// read it through the returned `Arc` without further locking.
pub trait DatasetSource: Send + Sync {
    fn dataset(&self) -> Arc<Dataset>;
}

/// Produces the body of a report.
///
/// Two implementations ship with the workspace: a deterministic
/// four-paragraph template and a passthrough to a hosted text generator.
/// The pipeline depends only on this trait.
pub trait ReportBodyProvider: Send + Sync {
    /// Build the report body.
    ///
    /// `record` is `None` only when the pipeline's no-match policy is
    /// free-text fallback; `query` is then the only clinical input.
    fn provide(
        &self,
        patient: &PatientInfo,
        query: &str,
        record: Option<&Record>,
    ) -> MedReportResult<ReportBody>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// A hosted text-generation service.
///
/// The prompt goes in, free text comes out. Failures are reported as
/// `GenerationFailed`.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> MedReportResult<String>;
}

/// Writes a finished report to durable storage.
pub trait DocumentExporter: Send + Sync {
    /// Export `body` under a file name built from `file_stem`.
    ///
    /// The pipeline never inspects the written document; it only keeps the
    /// returned receipt.
    fn export(&self, body: &ReportBody, file_stem: &str) -> MedReportResult<ExportReceipt>;
}

/// Converts the key findings of a report into spoken audio.
pub trait SpeechSynthesizer: Send + Sync {
    fn synthesize(&self, request: &SpeechRequest) -> MedReportResult<AudioAsset>;
}
