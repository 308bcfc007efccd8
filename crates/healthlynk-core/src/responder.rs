//! Rule-based replies for when no AI endpoint is configured

use crate::classifier::Classifier;
use regex::Regex;
use std::sync::OnceLock;

static AGREEMENT_RE: OnceLock<Regex> = OnceLock::new();

const DEFAULT_REPLY: &str =
    "I understand. Can you tell me more about your symptoms so I can provide better assistance?";
const THANKS_REPLY: &str = "You're welcome! Is there anything else I can help you with?";
const HELP_REPLY: &str = "I can help with assessing your symptoms, suggesting home remedies for minor conditions, or recommending when you should see a doctor. What are you experiencing?";
const AGREEMENT_REPLY: &str =
    "Great! To provide the most accurate information, could you describe your symptoms in detail?";

/// Answers with the detected condition's follow-up, overridden by conversational cues
#[derive(Debug, Clone)]
pub struct OfflineResponder {
    classifier: Classifier,
}

impl OfflineResponder {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    pub fn reply(&self, text: &str) -> String {
        let text_lower = text.to_lowercase();
        let agreement =
            AGREEMENT_RE.get_or_init(|| Regex::new(r"(?i)yes|sure|okay|please").unwrap());

        if text_lower.contains("thank") {
            return THANKS_REPLY.to_string();
        }
        if text_lower.contains("help") {
            return HELP_REPLY.to_string();
        }
        if agreement.is_match(&text_lower) {
            return AGREEMENT_REPLY.to_string();
        }

        self.classifier
            .detect(text)
            .map(|p| p.follow_up.clone())
            .unwrap_or_else(|| DEFAULT_REPLY.to_string())
    }
}

impl Default for OfflineResponder {
    fn default() -> Self {
        Self::new(Classifier::default())
    }
}
