//! Past consultations (sample data; there is no persistence layer)

use healthlynk_core::Severity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRecord {
    pub id: String,
    /// Human-readable date label
    pub date: String,
    pub symptom: String,
    pub severity: Severity,
}

pub fn sample_history() -> Vec<ConsultationRecord> {
    [
        ("1", "Today, 10:30 AM", "Tension Headache", Severity::Mild),
        ("2", "Yesterday, 3:15 PM", "Sore Throat", Severity::Moderate),
        ("3", "3 days ago, 9:45 AM", "Lower Back Pain", Severity::Moderate),
        ("4", "1 week ago, 2:00 PM", "High Fever with Rash", Severity::Severe),
        ("5", "2 weeks ago, 11:20 AM", "Seasonal Allergies", Severity::Mild),
    ]
    .into_iter()
    .map(|(id, date, symptom, severity)| ConsultationRecord {
        id: id.to_string(),
        date: date.to_string(),
        symptom: symptom.to_string(),
        severity,
    })
    .collect()
}

/// Consultations that ended with a home remedy
pub fn remedy_history(records: &[ConsultationRecord]) -> Vec<&ConsultationRecord> {
    records
        .iter()
        .filter(|r| r.severity != Severity::Severe)
        .collect()
}

/// Consultations that ended with a doctor referral
pub fn referral_history(records: &[ConsultationRecord]) -> Vec<&ConsultationRecord> {
    records
        .iter()
        .filter(|r| r.severity == Severity::Severe)
        .collect()
}
