//! # medreport-contracts
//!
//! Shared types and error contracts for the medical report pipeline.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions, request validation, and error types.

pub mod dataset;
pub mod error;
pub mod policy;
pub mod report;
pub mod request;
pub mod secret;
pub mod speech;

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::{Dataset, Field, Record};
    use error::MedReportError;
    use policy::NoMatchPolicy;
    use report::{Report, ReportBody, ReportOutcome, RequestId};
    use request::{PatientInfo, ReportRequest};
    use secret::ApiKey;
    use speech::{SpeechLanguage, SpeechRequest};

    // ── Record / Dataset ─────────────────────────────────────────────────────

    #[test]
    fn record_get_distinguishes_absent_null_and_present() {
        let record = Record::new(vec![
            Field::new("Disease", Some("Diabetes".to_string())),
            Field::new("Diet Advice", None),
        ]);

        assert_eq!(record.get("Disease"), Some("Diabetes"));
        assert_eq!(record.get("Diet Advice"), None);
        assert!(record.has_column("Diet Advice"));
        assert_eq!(record.get("Doctor Type"), None);
        assert!(!record.has_column("Doctor Type"));
    }

    #[test]
    fn dataset_append_keeps_order_and_unions_columns() {
        let mut first = Dataset::from_records(vec![
            Record::from_pairs([("Disease", "Asthma"), ("Medicine Name", "Salbutamol")]),
            Record::from_pairs([("Disease", "Malaria"), ("Medicine Name", "Artemether")]),
        ]);
        let second = Dataset::from_records(vec![Record::from_pairs([
            ("Disease", "Tuberculosis"),
            ("Doctor Type", "Pulmonologist"),
        ])]);

        first.append(second);

        assert_eq!(first.len(), 3);
        assert_eq!(first.columns(), &["Disease", "Medicine Name", "Doctor Type"]);
        let diseases: Vec<_> = first.iter().map(|r| r.get("Disease").unwrap()).collect();
        assert_eq!(diseases, vec!["Asthma", "Malaria", "Tuberculosis"]);

        // Rows keep their own schema; nothing is filled in.
        assert!(!first.records()[0].has_column("Doctor Type"));
        assert!(!first.records()[2].has_column("Medicine Name"));
    }

    #[test]
    fn dataset_append_does_not_deduplicate() {
        let row = Record::from_pairs([("Disease", "Asthma")]);
        let mut dataset = Dataset::from_records(vec![row.clone()]);
        dataset.append(Dataset::from_records(vec![row]));
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn dataset_with_columns_keeps_header_order() {
        let dataset = Dataset::with_columns(
            vec!["B".to_string(), "A".to_string()],
            vec![Record::from_pairs([("A", "1"), ("B", "2")])],
        );
        assert_eq!(dataset.columns(), &["B", "A"]);
    }

    // ── ReportRequest validation ─────────────────────────────────────────────

    #[test]
    fn normalized_trims_free_text_fields() {
        let request = ReportRequest::new(PatientInfo::new("  Asha ", 34, " 555-0101 "), "  diabetes  ")
            .normalized()
            .unwrap();

        assert_eq!(request.patient.name, "Asha");
        assert_eq!(request.patient.mobile, "555-0101");
        assert_eq!(request.query, "diabetes");
    }

    #[test]
    fn normalized_rejects_blank_required_fields() {
        for (name, mobile, query, field) in [
            ("", "555", "flu", "name"),
            ("Asha", "   ", "flu", "mobile"),
            ("Asha", "555", "\t", "query"),
        ] {
            let err = ReportRequest::new(PatientInfo::new(name, 30, mobile), query)
                .normalized()
                .unwrap_err();
            match err {
                MedReportError::EmptyRequiredField { field: f } => assert_eq!(f, field),
                other => panic!("expected EmptyRequiredField, got {:?}", other),
            }
        }
    }

    #[test]
    fn normalized_bounds_age() {
        assert!(ReportRequest::new(PatientInfo::new("A", 0, "1"), "q").normalized().is_ok());
        assert!(ReportRequest::new(PatientInfo::new("A", 120, "1"), "q").normalized().is_ok());

        let err = ReportRequest::new(PatientInfo::new("A", 121, "1"), "q")
            .normalized()
            .unwrap_err();
        assert!(matches!(err, MedReportError::InvalidField { ref field, .. } if field == "age"));
    }

    #[test]
    fn normalized_drops_blank_attribute_values() {
        let patient = PatientInfo::new("Asha", 34, "555")
            .with_attribute("Gender", " Female ")
            .with_attribute("Weight", "  ");
        let request = ReportRequest::new(patient, "flu").normalized().unwrap();

        assert_eq!(request.patient.attributes, vec![("Gender".to_string(), "Female".to_string())]);
        assert_eq!(request.patient.attribute("gender"), Some("Female"));
    }

    // ── Report ───────────────────────────────────────────────────────────────

    #[test]
    fn report_text_joins_with_blank_line() {
        let report = Report::new([
            "one".to_string(),
            "two".to_string(),
            "three".to_string(),
            "four".to_string(),
        ]);
        assert_eq!(report.text(), "one\n\ntwo\n\nthree\n\nfour");
        assert_eq!(report.referral(), "three");
        assert_eq!(ReportBody::Composed(report.clone()).text(), report.text());
        assert_eq!(ReportBody::Generated("free".to_string()).text(), "free");
    }

    #[test]
    fn no_match_outcome_serializes_with_status_tag() {
        let outcome = ReportOutcome::NoMatch {
            request_id: RequestId::new(),
            query: "zzz".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "no-match");
        assert_eq!(json["query"], "zzz");
        assert!(outcome.body().is_none());
        assert!(outcome.warnings().is_empty());
    }

    // ── Policy / speech ──────────────────────────────────────────────────────

    #[test]
    fn no_match_policy_parses_kebab_case() {
        assert_eq!("reject".parse::<NoMatchPolicy>().unwrap(), NoMatchPolicy::Reject);
        assert_eq!(
            "free-text-fallback".parse::<NoMatchPolicy>().unwrap(),
            NoMatchPolicy::FreeTextFallback
        );
        assert_eq!(
            "free_text_fallback".parse::<NoMatchPolicy>().unwrap(),
            NoMatchPolicy::FreeTextFallback
        );
        assert!(matches!(
            "ask-llm".parse::<NoMatchPolicy>(),
            Err(MedReportError::ConfigError { .. })
        ));
        assert_eq!(NoMatchPolicy::default(), NoMatchPolicy::Reject);
    }

    #[test]
    fn speech_language_parses_code_and_name() {
        assert_eq!("ta".parse::<SpeechLanguage>().unwrap(), SpeechLanguage::Tamil);
        assert_eq!("Hindi".parse::<SpeechLanguage>().unwrap(), SpeechLanguage::Hindi);
        assert!("fr".parse::<SpeechLanguage>().is_err());

        let json = serde_json::to_string(&SpeechLanguage::Tamil).unwrap();
        assert_eq!(json, "\"ta\"");
    }

    #[test]
    fn speech_script_names_disease_and_medicine() {
        let request = SpeechRequest {
            disease: "Diabetes".to_string(),
            medicine: "Metformin".to_string(),
            language: SpeechLanguage::Hindi,
        };
        assert_eq!(request.script(), "Disease: Diabetes. Medicine: Metformin.");
    }

    // ── Secrets / errors ─────────────────────────────────────────────────────

    #[test]
    fn api_key_is_redacted() {
        let key = ApiKey::new("sk-live-123");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
        assert_eq!(key.to_string(), "***");
        assert_eq!(key.expose(), "sk-live-123");
    }

    #[test]
    fn api_key_from_unset_env_is_config_error() {
        let err = ApiKey::from_env("MEDREPORT_TEST_KEY_THAT_IS_NEVER_SET").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("MEDREPORT_TEST_KEY_THAT_IS_NEVER_SET"));
    }

    #[test]
    fn error_source_malformed_display() {
        let err = MedReportError::SourceMalformed {
            source_id: "data/a.csv".to_string(),
            reason: "row 3 has 2 fields, expected 4".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("data/a.csv"));
        assert!(msg.contains("row 3"));
    }

    #[test]
    fn error_empty_required_field_display() {
        let err = MedReportError::EmptyRequiredField { field: "mobile".to_string() };
        assert_eq!(err.to_string(), "required field 'mobile' is empty");
    }
}
