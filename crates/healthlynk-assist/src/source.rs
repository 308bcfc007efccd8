//! The seam between the conversation pipeline and whatever produces replies

use crate::error::AssistError;
use async_trait::async_trait;
use healthlynk_core::OfflineResponder;

/// Produces an assistant reply for a user message
#[async_trait]
pub trait ResponseSource: Send + Sync {
    /// `detected_condition` is the classifier's condition id, if any
    async fn fetch_response(
        &self,
        user_text: &str,
        detected_condition: Option<&str>,
    ) -> Result<String, AssistError>;
}

/// Local rule-based replies; never fails
#[derive(Debug, Clone, Default)]
pub struct OfflineSource {
    responder: OfflineResponder,
}

impl OfflineSource {
    pub fn new(responder: OfflineResponder) -> Self {
        Self { responder }
    }
}

#[async_trait]
impl ResponseSource for OfflineSource {
    async fn fetch_response(
        &self,
        user_text: &str,
        _detected_condition: Option<&str>,
    ) -> Result<String, AssistError> {
        Ok(self.responder.reply(user_text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_source_replies() {
        let source = OfflineSource::default();
        let reply = source
            .fetch_response("I keep coughing", Some("cough"))
            .await
            .unwrap();
        assert!(reply.starts_with("Is your cough dry or productive?"));
    }
}
