//! Report values and pipeline outcomes.
//!
//! `Report` is the four-paragraph output of the template composer.
//! `ReportBody` wraps either that or opaque text from a hosted generator.
//! `ReportOutcome` is what the pipeline hands back for one request.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::speech::AudioAsset;

/// Separator between paragraphs in the canonical text form.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Unique identifier for one pipeline call. Appears in every log line the
/// pipeline emits for that request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub uuid::Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Exactly four paragraphs, in fixed order:
/// identity, condition, referral and medication, diet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    paragraphs: [String; 4],
}

impl Report {
    pub fn new(paragraphs: [String; 4]) -> Self {
        Self { paragraphs }
    }

    pub fn paragraphs(&self) -> &[String; 4] {
        &self.paragraphs
    }

    pub fn identity(&self) -> &str {
        &self.paragraphs[0]
    }

    pub fn condition(&self) -> &str {
        &self.paragraphs[1]
    }

    pub fn referral(&self) -> &str {
        &self.paragraphs[2]
    }

    pub fn diet(&self) -> &str {
        &self.paragraphs[3]
    }

    /// Paragraphs joined by a blank line; the form handed to exporters.
    pub fn text(&self) -> String {
        self.paragraphs.join(PARAGRAPH_SEPARATOR)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// The body of a delivered report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "kebab-case")]
pub enum ReportBody {
    /// Four paragraphs from the deterministic template.
    Composed(Report),
    /// Free text from a hosted generation service, passed through unchanged.
    Generated(String),
}

impl ReportBody {
    pub fn text(&self) -> String {
        match self {
            ReportBody::Composed(report) => report.text(),
            ReportBody::Generated(text) => text.clone(),
        }
    }

    pub fn as_report(&self) -> Option<&Report> {
        match self {
            ReportBody::Composed(report) => Some(report),
            ReportBody::Generated(_) => None,
        }
    }
}

/// Result of a successful document export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReceipt {
    /// Where the document was written, or a logical name for in-memory sinks.
    pub location: String,
    pub pages: usize,
    pub bytes: usize,
    /// Lowercase hex SHA-256 of the written bytes.
    pub sha256: String,
    pub exported_at: DateTime<Utc>,
}

/// What the pipeline returns for one request.
///
/// `NoMatch` is a normal outcome, not an error. Export and speech failures
/// do not turn a delivered report into an error; they are listed in
/// `warnings` so the caller can show them next to the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ReportOutcome {
    Delivered {
        request_id: RequestId,
        body: ReportBody,
        /// False when the body was produced by the free-text fallback.
        matched: bool,
        document: Option<ExportReceipt>,
        audio: Option<AudioAsset>,
        warnings: Vec<String>,
    },
    NoMatch {
        request_id: RequestId,
        query: String,
    },
}

impl ReportOutcome {
    /// Message shown to the user when nothing matched.
    pub const NO_MATCH_MESSAGE: &'static str = "No relevant data found for the query.";

    pub fn request_id(&self) -> RequestId {
        match self {
            ReportOutcome::Delivered { request_id, .. } | ReportOutcome::NoMatch { request_id, .. } => {
                *request_id
            }
        }
    }

    pub fn body(&self) -> Option<&ReportBody> {
        match self {
            ReportOutcome::Delivered { body, .. } => Some(body),
            ReportOutcome::NoMatch { .. } => None,
        }
    }

    pub fn warnings(&self) -> &[String] {
        match self {
            ReportOutcome::Delivered { warnings, .. } => warnings,
            ReportOutcome::NoMatch { .. } => &[],
        }
    }
}
