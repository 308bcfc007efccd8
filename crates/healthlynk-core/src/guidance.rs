//! Home remedies and doctor referrals for the current symptom

use crate::types::{CurrentSymptom, Severity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remedy {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub specialty: String,
    pub distance: String,
    pub address: String,
    pub phone: String,
    pub availability: String,
}

/// What the sidebar shows for a symptom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guidance<'a> {
    HomeRemedy(&'a Remedy),
    SeeDoctor(&'a [Doctor]),
    /// Mild symptom with no remedy on file
    General,
}

#[derive(Debug, Clone)]
pub struct CareGuide {
    remedies: HashMap<String, Remedy>,
    doctors: Vec<Doctor>,
}

impl CareGuide {
    pub fn new(remedies: HashMap<String, Remedy>, doctors: Vec<Doctor>) -> Self {
        Self { remedies, doctors }
    }

    pub fn builtin() -> Self {
        let mut remedies = HashMap::new();
        remedies.insert(
            "headache".to_string(),
            remedy(
                "Headache Relief",
                "Natural remedies for mild headaches",
                &[
                    "Apply a cold or warm compress to your head for 10-15 minutes",
                    "Practice deep breathing and relaxation techniques",
                    "Stay hydrated by drinking plenty of water",
                    "Take a break from screens and bright lights",
                    "Try gentle neck and shoulder stretches",
                    "Consider over-the-counter pain relievers like acetaminophen or ibuprofen if necessary",
                ],
            ),
        );
        remedies.insert(
            "cough".to_string(),
            remedy(
                "Cough Management",
                "Home care for mild coughs",
                &[
                    "Stay hydrated with warm fluids like herbal tea with honey",
                    "Use a humidifier to add moisture to the air",
                    "Try honey (for adults and children over 1 year old)",
                    "Gargle with salt water to soothe a sore throat",
                    "Avoid irritants like smoke and strong fragrances",
                    "Rest and get plenty of sleep",
                ],
            ),
        );

        let doctors = vec![
            Doctor {
                name: "Dr. Sarah Johnson".to_string(),
                specialty: "General Practitioner".to_string(),
                distance: "2.3 miles".to_string(),
                address: "123 Health Street, Medical Center".to_string(),
                phone: "(555) 123-4567".to_string(),
                availability: "Available today".to_string(),
            },
            Doctor {
                name: "Dr. Michael Chen".to_string(),
                specialty: "Internal Medicine".to_string(),
                distance: "3.1 miles".to_string(),
                address: "456 Wellness Avenue, Suite 200".to_string(),
                phone: "(555) 987-6543".to_string(),
                availability: "Next available: Tomorrow".to_string(),
            },
        ];

        Self::new(remedies, doctors)
    }

    pub fn remedy(&self, condition: &str) -> Option<&Remedy> {
        self.remedies.get(condition)
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Mild symptoms get a remedy when one exists; moderate and severe get doctors
    pub fn for_symptom(&self, symptom: &CurrentSymptom) -> Guidance<'_> {
        if symptom.severity.needs_doctor() {
            return Guidance::SeeDoctor(&self.doctors);
        }
        match self.remedies.get(&symptom.name) {
            Some(remedy) => Guidance::HomeRemedy(remedy),
            None => Guidance::General,
        }
    }
}

impl Default for CareGuide {
    fn default() -> Self {
        Self::builtin()
    }
}

fn remedy(title: &str, description: &str, steps: &[&str]) -> Remedy {
    Remedy {
        title: title.to_string(),
        description: description.to_string(),
        severity: Severity::Mild,
        steps: steps.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symptom(name: &str, severity: Severity) -> CurrentSymptom {
        CurrentSymptom {
            name: name.to_string(),
            severity,
        }
    }

    #[test]
    fn test_mild_headache_gets_remedy() {
        let guide = CareGuide::builtin();
        match guide.for_symptom(&symptom("headache", Severity::Mild)) {
            Guidance::HomeRemedy(r) => {
                assert_eq!(r.title, "Headache Relief");
                assert_eq!(r.steps.len(), 6);
            }
            other => panic!("Expected remedy, got {:?}", other),
        }
    }

    #[test]
    fn test_serious_symptoms_get_doctors() {
        let guide = CareGuide::builtin();
        for severity in [Severity::Moderate, Severity::Severe] {
            match guide.for_symptom(&symptom("fever", severity)) {
                Guidance::SeeDoctor(d) => assert_eq!(d.len(), 2),
                other => panic!("Expected doctors, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_mild_without_remedy_is_general() {
        let guide = CareGuide::builtin();
        assert_eq!(
            guide.for_symptom(&symptom("sneezing", Severity::Mild)),
            Guidance::General
        );
    }
}
