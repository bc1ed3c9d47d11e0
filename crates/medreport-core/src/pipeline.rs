//! The report pipeline: validate → load → match → provide → export → speak.
//!
//! Each call to [`ReportPipeline::generate`] handles one user request and is
//! independent of every other call. The only shared state is the dataset,
//! which the `DatasetSource` loads once and then hands out read-only.
//!
//! Export and speech are side effects next to the report, not part of it.
//! When either fails, the failure is logged and returned as a warning on the
//! delivered outcome; the report itself is still delivered.

use std::sync::Arc;

use tracing::{debug, info, warn};

use medreport_contracts::{
    dataset::Record,
    error::MedReportResult,
    policy::NoMatchPolicy,
    report::{ExportReceipt, ReportBody, ReportOutcome, RequestId},
    request::{PatientInfo, ReportRequest},
    speech::{AudioAsset, SpeechLanguage, SpeechRequest},
};

use crate::{
    fields::ClinicalFields,
    matcher::find_first,
    traits::{DatasetSource, DocumentExporter, ReportBodyProvider, SpeechSynthesizer},
};

/// Prefix of every exported document's file name.
pub const REPORT_FILE_PREFIX: &str = "medical_report";

/// Drives one report request through the pipeline.
///
/// Construct once at startup and share; `generate` takes `&self`.
pub struct ReportPipeline {
    dataset: Arc<dyn DatasetSource>,
    provider: Box<dyn ReportBodyProvider>,
    on_no_match: NoMatchPolicy,
    exporter: Option<Box<dyn DocumentExporter>>,
    speech: Option<Box<dyn SpeechSynthesizer>>,
}

impl ReportPipeline {
    /// Create a pipeline with the default `Reject` no-match policy and no
    /// exporter or speech synthesizer.
    pub fn new(dataset: Arc<dyn DatasetSource>, provider: Box<dyn ReportBodyProvider>) -> Self {
        Self {
            dataset,
            provider,
            on_no_match: NoMatchPolicy::default(),
            exporter: None,
            speech: None,
        }
    }

    pub fn with_no_match_policy(mut self, policy: NoMatchPolicy) -> Self {
        self.on_no_match = policy;
        self
    }

    pub fn with_exporter(mut self, exporter: Box<dyn DocumentExporter>) -> Self {
        self.exporter = Some(exporter);
        self
    }

    pub fn with_speech(mut self, speech: Box<dyn SpeechSynthesizer>) -> Self {
        self.speech = Some(speech);
        self
    }

    pub fn no_match_policy(&self) -> NoMatchPolicy {
        self.on_no_match
    }

    /// Generate a report for one request.
    ///
    /// # Pipeline
    ///
    /// 1. Trim and validate the request (rejects blank name/mobile/query and
    ///    out-of-range age before any other work).
    /// 2. Fetch the combined dataset (loaded on first use).
    /// 3. Find the first matching record.
    ///    - No match + `Reject` → `ReportOutcome::NoMatch`
    ///    - No match + `FreeTextFallback` → continue with `record = None`
    /// 4. Ask the provider for the report body.
    /// 5. Export the body if requested (failure → warning).
    /// 6. Synthesize speech if requested (failure → warning).
    ///
    /// # Errors
    ///
    /// Returns `Err` for invalid requests and provider failures. A query
    /// with no match is not an error.
    pub fn generate(&self, request: ReportRequest) -> MedReportResult<ReportOutcome> {
        let request_id = RequestId::new();
        let request = request.normalized()?;

        debug!(
            request_id = %request_id,
            query = %request.query,
            provider = self.provider.name(),
            "report request accepted"
        );

        // ── Load + match ─────────────────────────────────────────────────────
        let dataset = self.dataset.dataset();
        let record = find_first(&dataset, &request.query);

        if record.is_none() {
            match self.on_no_match {
                NoMatchPolicy::Reject => {
                    info!(
                        request_id = %request_id,
                        query = %request.query,
                        rows = dataset.len(),
                        "no record matched query"
                    );
                    return Ok(ReportOutcome::NoMatch {
                        request_id,
                        query: request.query,
                    });
                }
                NoMatchPolicy::FreeTextFallback => {
                    info!(
                        request_id = %request_id,
                        query = %request.query,
                        "no record matched query, falling back to free text"
                    );
                }
            }
        }

        // ── Compose ──────────────────────────────────────────────────────────
        let body = self.provider.provide(&request.patient, &request.query, record)?;

        let mut warnings = Vec::new();

        // ── Export ───────────────────────────────────────────────────────────
        let document = if request.export {
            self.export(request_id, &body, &request.patient, &mut warnings)
        } else {
            None
        };

        // ── Speech ───────────────────────────────────────────────────────────
        let audio = match request.speech_language {
            Some(language) => {
                self.speak(request_id, &request.query, record, language, &mut warnings)
            }
            None => None,
        };

        info!(
            request_id = %request_id,
            matched = record.is_some(),
            exported = document.is_some(),
            audio = audio.is_some(),
            warnings = warnings.len(),
            "report delivered"
        );

        Ok(ReportOutcome::Delivered {
            request_id,
            body,
            matched: record.is_some(),
            document,
            audio,
            warnings,
        })
    }

    fn export(
        &self,
        request_id: RequestId,
        body: &ReportBody,
        patient: &PatientInfo,
        warnings: &mut Vec<String>,
    ) -> Option<ExportReceipt> {
        let Some(exporter) = &self.exporter else {
            warnings.push("export requested but no document exporter is configured".to_string());
            return None;
        };

        let stem = report_file_stem(patient);
        match exporter.export(body, &stem) {
            Ok(receipt) => {
                debug!(
                    request_id = %request_id,
                    location = %receipt.location,
                    sha256 = %receipt.sha256,
                    "report exported"
                );
                Some(receipt)
            }
            Err(e) => {
                warn!(request_id = %request_id, error = %e, "report export failed");
                warnings.push(format!("Could not export the report: {}", e));
                None
            }
        }
    }

    fn speak(
        &self,
        request_id: RequestId,
        query: &str,
        record: Option<&Record>,
        language: SpeechLanguage,
        warnings: &mut Vec<String>,
    ) -> Option<AudioAsset> {
        let Some(speech) = &self.speech else {
            warnings.push("speech requested but no speech synthesizer is configured".to_string());
            return None;
        };

        let speech_request = match record {
            Some(record) => {
                let fields = ClinicalFields::from_record(record);
                SpeechRequest {
                    disease: fields.disease.to_string(),
                    medicine: fields.medicine.to_string(),
                    language,
                }
            }
            None => SpeechRequest {
                disease: query.to_string(),
                medicine: query.to_string(),
                language,
            },
        };

        match speech.synthesize(&speech_request) {
            Ok(asset) => Some(asset),
            Err(e) => {
                warn!(
                    request_id = %request_id,
                    language = %language,
                    error = %e,
                    "speech synthesis failed"
                );
                warnings.push(format!("Could not generate {} audio: {}", language.name(), e));
                None
            }
        }
    }
}

/// File name stem for a patient's exported report.
///
/// `medical_report_<slug>` where the slug is the lower-cased ASCII
/// alphanumerics of the patient name, with every other run of characters
/// collapsed to one underscore. Falls back to `medical_report` when the
/// name has no usable characters.
pub fn report_file_stem(patient: &PatientInfo) -> String {
    let mut slug = String::with_capacity(patient.name.len());
    for c in patient.name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_end_matches('_');

    if slug.is_empty() {
        REPORT_FILE_PREFIX.to_string()
    } else {
        format!("{}_{}", REPORT_FILE_PREFIX, slug)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
