//! Error types for the report pipeline.
//!
//! All fallible operations return `MedReportResult<T>`. A query that matches
//! nothing is not an error; it is reported through `ReportOutcome::NoMatch`.

use thiserror::Error;

/// The unified error type for the medreport crates.
#[derive(Debug, Error)]
pub enum MedReportError {
    /// The tabular source could not be located. Loaders skip these silently.
    #[error("source '{source_id}' not found")]
    SourceNotFound { source_id: String },

    /// The source exists but could not be parsed as a table.
    ///
    /// Loaders log and skip the source; the rest of the batch still loads.
    #[error("source '{source_id}' is malformed: {reason}")]
    SourceMalformed { source_id: String, reason: String },

    /// A required request field was empty after trimming.
    #[error("required field '{field}' is empty")]
    EmptyRequiredField { field: String },

    /// A request field was present but outside its accepted range.
    #[error("invalid value for field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The hosted text-generation collaborator failed or returned nothing usable.
    #[error("report generation failed: {reason}")]
    GenerationFailed { reason: String },

    /// The document exporter could not write the report.
    #[error("document export failed: {reason}")]
    ExportFailed { reason: String },

    /// The speech synthesis collaborator failed.
    #[error("speech synthesis failed: {reason}")]
    SpeechFailed { reason: String },
}

/// Convenience alias used throughout the medreport crates.
pub type MedReportResult<T> = Result<T, MedReportError>;
