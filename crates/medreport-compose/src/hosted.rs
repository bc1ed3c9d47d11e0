//! Passthrough to a hosted text-generation service.
//!
//! `HostedGenerationProvider` writes a prompt from the patient details and
//! the matched clinical fields (or the raw query when nothing matched),
//! sends it to a `TextGenerator`, and returns whatever comes back as an
//! opaque `ReportBody::Generated`. The four-paragraph template contract does
//! not apply to this body.

use tracing::{debug, warn};

use medreport_contracts::{
    dataset::Record,
    error::{MedReportError, MedReportResult},
    report::ReportBody,
    request::PatientInfo,
};
use medreport_core::{
    fields::ClinicalFields,
    traits::{ReportBodyProvider, TextGenerator},
};

/// A `ReportBodyProvider` that delegates to a hosted `TextGenerator`.
pub struct HostedGenerationProvider {
    generator: Box<dyn TextGenerator>,
}

impl HostedGenerationProvider {
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

impl ReportBodyProvider for HostedGenerationProvider {
    fn provide(
        &self,
        patient: &PatientInfo,
        query: &str,
        record: Option<&Record>,
    ) -> MedReportResult<ReportBody> {
        let prompt = build_prompt(patient, query, record);
        debug!(prompt_chars = prompt.len(), matched = record.is_some(), "sending prompt");

        let text = self.generator.generate(&prompt).map_err(|e| match e {
            MedReportError::GenerationFailed { .. } => e,
            other => MedReportError::GenerationFailed { reason: other.to_string() },
        })?;

        let text = text.trim();
        if text.is_empty() {
            warn!("text generator returned an empty body");
            return Err(MedReportError::GenerationFailed {
                reason: "generator returned no text".to_string(),
            });
        }

        Ok(ReportBody::Generated(text.to_string()))
    }

    fn name(&self) -> &'static str {
        "hosted"
    }
}

/// The prompt sent to the text generator.
///
/// With a record the prompt lists the matched disease, specialist,
/// medicine, and diet; without one it asks the service to work from the
/// query text alone.
pub fn build_prompt(patient: &PatientInfo, query: &str, record: Option<&Record>) -> String {
    let mut prompt = String::from(
        "Write a short, plain-language medical report in four paragraphs: \
         patient details, condition, specialist and medication, diet and lifestyle.\n\n",
    );

    prompt.push_str(&format!(
        "Patient: {}, age {}, mobile {}",
        patient.name, patient.age, patient.mobile
    ));
    for (label, value) in &patient.attributes {
        prompt.push_str(&format!(", {} {}", label.to_lowercase(), value));
    }
    prompt.push_str(".\n");

    match record {
        Some(record) => {
            let fields = ClinicalFields::from_record(record);
            prompt.push_str(&format!(
                "Disease: {}\nSpecialist: {}\nMedicine: {}\nDiet advice: {}\n",
                fields.disease, fields.doctor_type, fields.medicine, fields.diet
            ));
        }
        None => {
            prompt.push_str(&format!(
                "No reference record matched. The patient asked about: {}\n\
                 Answer from general medical knowledge and advise consulting a doctor.\n",
                query
            ));
        }
    }

    prompt
}
