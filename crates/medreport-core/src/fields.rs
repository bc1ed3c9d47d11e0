//! Clinical column names, their defaults, and defaulted field access.
//!
//! Every consumer of record fields goes through [`field_or_default`], so a
//! missing column and an empty cell are handled the same way everywhere.

use medreport_contracts::dataset::Record;

pub const DISEASE: &str = "Disease";
pub const DOCTOR_TYPE: &str = "Doctor Type";
pub const MEDICINE_NAME: &str = "Medicine Name";
pub const DIET_ADVICE: &str = "Diet Advice";

pub const DEFAULT_DISEASE: &str = "an unspecified condition";
pub const DEFAULT_DOCTOR_TYPE: &str = "a general physician";
pub const DEFAULT_MEDICINE: &str = "a prescribed medicine";
pub const DEFAULT_DIET: &str = "a general healthy diet";

/// The value of `column` in `record`, or `default` when the column is
/// absent, null, or blank.
pub fn field_or_default<'a>(record: &'a Record, column: &str, default: &'a str) -> &'a str {
    match record.get(column) {
        Some(value) if !value.trim().is_empty() => value.trim(),
        _ => default,
    }
}

/// The four clinical fields a report is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicalFields<'a> {
    pub disease: &'a str,
    pub doctor_type: &'a str,
    pub medicine: &'a str,
    pub diet: &'a str,
}

impl<'a> ClinicalFields<'a> {
    /// Extract the clinical fields from `record`, defaulting each one.
    pub fn from_record(record: &'a Record) -> Self {
        Self {
            disease: field_or_default(record, DISEASE, DEFAULT_DISEASE),
            doctor_type: field_or_default(record, DOCTOR_TYPE, DEFAULT_DOCTOR_TYPE),
            medicine: field_or_default(record, MEDICINE_NAME, DEFAULT_MEDICINE),
            diet: field_or_default(record, DIET_ADVICE, DEFAULT_DIET),
        }
    }
}

#[cfg(test)]
mod tests {
    use medreport_contracts::dataset::{Field, Record};

    use super::*;

    #[test]
    fn present_value_is_returned_trimmed() {
        let record = Record::from_pairs([(DISEASE, "  Malaria ")]);
        assert_eq!(field_or_default(&record, DISEASE, DEFAULT_DISEASE), "Malaria");
    }

    #[test]
    fn absent_null_and_blank_fall_back() {
        let record = Record::new(vec![
            Field::new(DOCTOR_TYPE, None),
            Field::new(DIET_ADVICE, Some("   ".to_string())),
        ]);
        let fields = ClinicalFields::from_record(&record);

        assert_eq!(fields.disease, "an unspecified condition");
        assert_eq!(fields.doctor_type, "a general physician");
        assert_eq!(fields.medicine, "a prescribed medicine");
        assert_eq!(fields.diet, "a general healthy diet");
    }
}
