//! Patient details and report requests.
//!
//! A `ReportRequest` is built from user-entered form values. The pipeline
//! calls `ReportRequest::normalized()` before anything else runs: it trims
//! the free-text fields and rejects empty required fields and out-of-range
//! ages, so the composer only ever sees well-formed patient data.

use serde::{Deserialize, Serialize};

use crate::{
    error::{MedReportError, MedReportResult},
    speech::SpeechLanguage,
};

/// Highest accepted patient age, inclusive.
pub const MAX_AGE: u8 = 120;

/// Identifying details of the patient a report is written for.
///
/// `name`, `age`, and `mobile` are always required. Anything else (gender,
/// weight, ...) is carried as an ordered list of labelled attributes and
/// rendered after the required fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub name: String,
    pub age: u8,
    pub mobile: String,
    #[serde(default)]
    pub attributes: Vec<(String, String)>,
}

impl PatientInfo {
    pub fn new(name: impl Into<String>, age: u8, mobile: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            mobile: mobile.into(),
            attributes: Vec::new(),
        }
    }

    /// Attach an extra attribute such as `("Gender", "Female")`.
    pub fn with_attribute(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((label.into(), value.into()));
        self
    }

    /// Look up an extra attribute by label (case-insensitive).
    pub fn attribute(&self, label: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(l, _)| l.eq_ignore_ascii_case(label))
            .map(|(_, v)| v.as_str())
    }
}

/// One "generate report" action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub patient: PatientInfo,
    /// Disease or medicine name typed by the user.
    pub query: String,
    /// Language for optional spoken audio of the key findings.
    #[serde(default)]
    pub speech_language: Option<SpeechLanguage>,
    /// Whether to hand the finished report to the document exporter.
    #[serde(default)]
    pub export: bool,
}

impl ReportRequest {
    pub fn new(patient: PatientInfo, query: impl Into<String>) -> Self {
        Self {
            patient,
            query: query.into(),
            speech_language: None,
            export: false,
        }
    }

    pub fn with_export(mut self, export: bool) -> Self {
        self.export = export;
        self
    }

    pub fn with_speech(mut self, language: SpeechLanguage) -> Self {
        self.speech_language = Some(language);
        self
    }

    /// Trim free-text fields and validate the request.
    ///
    /// # Errors
    ///
    /// - `EmptyRequiredField` if name, mobile, or query is blank.
    /// - `InvalidField` if age exceeds [`MAX_AGE`].
    /// - `EmptyRequiredField` if an extra attribute has a blank label.
    pub fn normalized(mut self) -> MedReportResult<Self> {
        self.patient.name = self.patient.name.trim().to_string();
        self.patient.mobile = self.patient.mobile.trim().to_string();
        self.query = self.query.trim().to_string();

        require_non_empty("name", &self.patient.name)?;
        require_non_empty("mobile", &self.patient.mobile)?;
        require_non_empty("query", &self.query)?;

        if self.patient.age > MAX_AGE {
            return Err(MedReportError::InvalidField {
                field: "age".to_string(),
                reason: format!("{} is outside 0..={}", self.patient.age, MAX_AGE),
            });
        }

        // Blank attribute values are dropped; blank labels are a caller bug.
        let mut attributes = Vec::with_capacity(self.patient.attributes.len());
        for (label, value) in self.patient.attributes {
            let label = label.trim().to_string();
            let value = value.trim().to_string();
            require_non_empty("attribute label", &label)?;
            if !value.is_empty() {
                attributes.push((label, value));
            }
        }
        self.patient.attributes = attributes;

        Ok(self)
    }
}

fn require_non_empty(field: &str, value: &str) -> MedReportResult<()> {
    if value.is_empty() {
        return Err(MedReportError::EmptyRequiredField {
            field: field.to_string(),
        });
    }
    Ok(())
}
