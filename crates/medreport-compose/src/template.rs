//! Deterministic four-paragraph report composer.
//!
//! `compose` is a pure function of the patient, the query, and the matched
//! record. With a record, each clinical field is taken from it through
//! `field_or_default`. Without one, paragraphs 2–4 say that nothing matched
//! and restate the raw query in place of the disease and medicine.

use medreport_contracts::{
    dataset::Record,
    error::MedReportResult,
    report::{Report, ReportBody},
    request::PatientInfo,
};
use medreport_core::{fields::ClinicalFields, traits::ReportBodyProvider};

/// The `ReportBodyProvider` backed by [`compose`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateProvider;

impl TemplateProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ReportBodyProvider for TemplateProvider {
    fn provide(
        &self,
        patient: &PatientInfo,
        query: &str,
        record: Option<&Record>,
    ) -> MedReportResult<ReportBody> {
        Ok(ReportBody::Composed(compose(patient, query, record)))
    }

    fn name(&self) -> &'static str {
        "template"
    }
}

/// Build the four-paragraph report.
///
/// Never fails: the patient has already been validated by the caller and
/// every clinical field has a fixed default.
pub fn compose(patient: &PatientInfo, query: &str, record: Option<&Record>) -> Report {
    let identity = identity_paragraph(patient);

    match record {
        Some(record) => {
            let fields = ClinicalFields::from_record(record);
            Report::new([
                identity,
                format!(
                    "The patient has been diagnosed with {}. This condition may present \
                     symptoms requiring close observation and treatment.",
                    fields.disease
                ),
                format!(
                    "It is recommended to consult a doctor who specializes in {}. The prescribed \
                     medication for this condition is {}. Ensure to follow the dosage and \
                     frequency advised by your doctor.",
                    fields.doctor_type, fields.medicine
                ),
                format!(
                    "Dietary recommendations for this condition include: {}. Maintaining a \
                     balanced diet, avoiding allergens, and staying hydrated are key to recovery.",
                    fields.diet
                ),
            ])
        }
        None => Report::new([
            identity,
            format!(
                "No matching record was found for \"{query}\". The reported condition is noted \
                 as {query} and requires clinical assessment before a diagnosis is recorded."
            ),
            format!(
                "No matching record was found to recommend a specialist for {query}. Please \
                 consult a general physician; any medication for {query} must be prescribed \
                 by your doctor."
            ),
            format!(
                "No matching record was found with dietary guidance for {query}. Maintaining a \
                 balanced diet, avoiding allergens, and staying hydrated are key to recovery."
            ),
        ]),
    }
}

/// `Patient Name: …, Age: …, Mobile: ….` followed by any extra attributes.
fn identity_paragraph(patient: &PatientInfo) -> String {
    let mut line = format!(
        "Patient Name: {}, Age: {}, Mobile: {}",
        patient.name, patient.age, patient.mobile
    );
    for (label, value) in &patient.attributes {
        line.push_str(&format!(", {}: {}", label, value));
    }
    line.push('.');
    line
}
