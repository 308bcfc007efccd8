//! Condition pattern table used by the classifier

use crate::types::Severity;
use serde::{Deserialize, Serialize};

/// One condition the classifier can detect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionPattern {
    /// Condition identifier, reported as the detected condition
    pub id: String,
    /// Trigger phrases, checked in order (stored lower-case)
    pub keywords: Vec<String>,
    pub severity: Severity,
    /// Follow-up question asked when the condition is detected
    pub follow_up: String,
    /// Display name for the current symptom (defaults to `id`)
    #[serde(default)]
    pub label: Option<String>,
    /// Severity that overrides `severity` for the current symptom
    #[serde(default)]
    pub force_severity: Option<Severity>,
}

impl ConditionPattern {
    pub fn new(id: &str, keywords: &[&str], severity: Severity, follow_up: &str) -> Self {
        Self {
            id: id.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            severity,
            follow_up: follow_up.to_string(),
            label: None,
            force_severity: None,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_forced_severity(mut self, severity: Severity) -> Self {
        self.force_severity = Some(severity);
        self
    }

    /// Name shown for the current symptom
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }

    /// Severity recorded for the current symptom
    pub fn effective_severity(&self) -> Severity {
        self.force_severity.unwrap_or(self.severity)
    }

    /// First keyword contained in already lower-cased text
    pub fn matching_keyword(&self, text_lower: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| text_lower.contains(k.as_str()))
            .map(String::as_str)
    }
}

/// Ordered, immutable set of condition patterns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternTable {
    patterns: Vec<ConditionPattern>,
}

impl PatternTable {
    pub fn new(patterns: Vec<ConditionPattern>) -> Self {
        Self { patterns }
    }

    /// The default table. Declaration order is match priority.
    pub fn builtin() -> Self {
        Self::new(vec![
            ConditionPattern::new(
                "headache",
                &["headache", "head pain", "migraine"],
                Severity::Mild,
                "Can you describe the intensity and location of your headache? Is it throbbing, sharp, or dull?",
            ),
            ConditionPattern::new(
                "fever",
                &["fever", "high temperature", "chills"],
                Severity::Moderate,
                "When did your fever start? Have you taken your temperature? What other symptoms are you experiencing?",
            ),
            ConditionPattern::new(
                "cough",
                &["cough", "coughing", "chest congestion"],
                Severity::Mild,
                "Is your cough dry or productive? How long have you been coughing? Do you have any difficulty breathing?",
            ),
            ConditionPattern::new(
                "stomachPain",
                &["stomach pain", "abdominal pain", "belly ache"],
                Severity::Moderate,
                "Where exactly is the pain located? Is it constant or comes and goes? Have you experienced any nausea or vomiting?",
            ),
            ConditionPattern::new(
                "emergency",
                &["chest pain", "can't breathe", "unconscious", "severe bleeding"],
                Severity::Severe,
                "This sounds serious and requires immediate medical attention. Please contact emergency services or go to the nearest emergency room right away.",
            )
            .with_label("Emergency condition")
            .with_forced_severity(Severity::Severe),
        ])
    }

    pub fn patterns(&self) -> &[ConditionPattern] {
        &self.patterns
    }

    pub fn get(&self, id: &str) -> Option<&ConditionPattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::builtin()
    }
}
