//! Who is on the other end of the conversation

use serde::{Deserialize, Serialize};

const DEFAULT_PATIENT: &str = "Patient";

/// Minimal view of the signed-in user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionProfile {
    pub signed_in: bool,
    pub name: Option<String>,
}

impl SessionProfile {
    pub fn guest() -> Self {
        Self::default()
    }

    pub fn signed_in(name: impl Into<String>) -> Self {
        Self {
            signed_in: true,
            name: Some(name.into()),
        }
    }

    /// Name printed on exports; "Patient" unless signed in with a non-blank name
    pub fn patient_name(&self) -> &str {
        match &self.name {
            Some(name) if self.signed_in && !name.trim().is_empty() => name.trim(),
            _ => DEFAULT_PATIENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_name() {
        assert_eq!(SessionProfile::guest().patient_name(), "Patient");
        assert_eq!(SessionProfile::signed_in("Ada ").patient_name(), "Ada");
        assert_eq!(SessionProfile::signed_in("  ").patient_name(), "Patient");

        let signed_out = SessionProfile {
            signed_in: false,
            name: Some("Ada".to_string()),
        };
        assert_eq!(signed_out.patient_name(), "Patient");
    }
}
