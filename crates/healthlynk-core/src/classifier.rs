//! First-match keyword classifier

use crate::config::{ConditionPattern, PatternTable};
use crate::types::{CurrentSymptom, Severity};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of classifying a message. Both fields are `None` on a miss.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub condition: Option<String>,
    pub severity: Option<Severity>,
}

impl Classification {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_match(&self) -> bool {
        self.condition.is_some()
    }
}

/// Scans text against a pattern table. Declaration order wins; there is no scoring.
#[derive(Debug, Clone)]
pub struct Classifier {
    table: PatternTable,
}

impl Classifier {
    pub fn new(table: PatternTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    /// First pattern with a keyword contained in `text` (case-insensitive)
    pub fn detect(&self, text: &str) -> Option<&ConditionPattern> {
        let text_lower = text.to_lowercase();

        for pattern in self.table.patterns() {
            if let Some(keyword) = pattern.matching_keyword(&text_lower) {
                debug!(condition = %pattern.id, keyword, "condition detected");
                return Some(pattern);
            }
        }
        None
    }

    pub fn classify(&self, text: &str) -> Classification {
        match self.detect(text) {
            Some(pattern) => Classification {
                condition: Some(pattern.id.clone()),
                severity: Some(pattern.severity),
            },
            None => Classification::none(),
        }
    }

    /// Symptom to display for `text`, using the pattern's label and forced severity
    pub fn current_symptom(&self, text: &str) -> Option<CurrentSymptom> {
        self.detect(text).map(|pattern| CurrentSymptom {
            name: pattern.display_name().to_string(),
            severity: pattern.effective_severity(),
        })
    }

    pub fn follow_up(&self, condition: &str) -> Option<&str> {
        self.table.get(condition).map(|p| p.follow_up.as_str())
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(PatternTable::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headache_scenario() {
        let classifier = Classifier::default();
        let result = classifier.classify("I have a headache");
        assert_eq!(result.condition.as_deref(), Some("headache"));
        assert_eq!(result.severity, Some(Severity::Mild));

        let symptom = classifier.current_symptom("I have a headache").unwrap();
        assert_eq!(symptom.name, "headache");
        assert_eq!(symptom.severity, Severity::Mild);
    }

    #[test]
    fn test_emergency_scenario() {
        let classifier = Classifier::default();
        let result = classifier.classify("I can't breathe");
        assert_eq!(result.condition.as_deref(), Some("emergency"));
        assert_eq!(result.severity, Some(Severity::Severe));

        let symptom = classifier.current_symptom("I can't breathe").unwrap();
        assert_eq!(symptom.name, "Emergency condition");
        assert_eq!(symptom.severity, Severity::Severe);
    }

    #[test]
    fn test_case_insensitive() {
        let classifier = Classifier::default();
        let result = classifier.classify("MIGRAINE since this morning");
        assert_eq!(result.condition.as_deref(), Some("headache"));
    }

    #[test]
    fn test_first_declared_pattern_wins() {
        let classifier = Classifier::default();
        // emergency is declared after cough, so cough wins
        let result = classifier.classify("chest pain and a bad cough");
        assert_eq!(result.condition.as_deref(), Some("cough"));

        // fever before stomachPain
        let result = classifier.classify("belly ache with chills");
        assert_eq!(result.condition.as_deref(), Some("fever"));
    }

    #[test]
    fn test_no_match() {
        let classifier = Classifier::default();
        let result = classifier.classify("my knee feels a bit stiff");
        assert_eq!(result, Classification::none());
        assert!(!result.is_match());
        assert!(classifier.current_symptom("my knee feels a bit stiff").is_none());
    }

    #[test]
    fn test_custom_table_injected() {
        let table = PatternTable::new(vec![ConditionPattern::new(
            "rash",
            &["rash", "hives"],
            Severity::Moderate,
            "Is it itchy?",
        )]);
        let classifier = Classifier::new(table);

        assert_eq!(
            classifier.classify("I broke out in hives").condition.as_deref(),
            Some("rash")
        );
        // builtin patterns are not consulted
        assert!(!classifier.classify("headache").is_match());
        assert_eq!(classifier.follow_up("rash"), Some("Is it itchy?"));
    }

    #[test]
    fn test_severity_comes_from_table() {
        let classifier = Classifier::default();
        for pattern in classifier.table().patterns() {
            for keyword in &pattern.keywords {
                let result = classifier.classify(&format!("lately {keyword} again"));
                let matched = classifier.table().get(result.condition.as_deref().unwrap()).unwrap();
                assert_eq!(result.severity, Some(matched.severity));
            }
        }
    }
}
