//! Pipeline policy choices.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::MedReportError;

/// What to do when no record matches the query.
///
/// Expressed in TOML as `on_no_match = "reject"` or
/// `on_no_match = "free-text-fallback"` (`free_text_fallback` is also
/// accepted).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoMatchPolicy {
    /// Return `ReportOutcome::NoMatch` and produce no report.
    #[default]
    Reject,
    /// Ask the report provider to work from the raw query alone.
    #[serde(alias = "free_text_fallback")]
    FreeTextFallback,
}

impl fmt::Display for NoMatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoMatchPolicy::Reject => f.write_str("reject"),
            NoMatchPolicy::FreeTextFallback => f.write_str("free-text-fallback"),
        }
    }
}

impl FromStr for NoMatchPolicy {
    type Err = MedReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "reject" => Ok(NoMatchPolicy::Reject),
            "free-text-fallback" | "free_text_fallback" => Ok(NoMatchPolicy::FreeTextFallback),
            other => Err(MedReportError::ConfigError {
                reason: format!(
                    "unknown no-match policy '{}'; expected 'reject' or 'free-text-fallback'",
                    other
                ),
            }),
        }
    }
}
