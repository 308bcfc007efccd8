#![allow(dead_code)]

use async_trait::async_trait;
use healthlynk_assist::{AssistError, ResponseSource};
use healthlynk_chat::Conversation;
use healthlynk_core::Classifier;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Echoes the user text after a delay, or fails
pub struct MockSource {
    delay: Duration,
    fail: bool,
    calls: Mutex<Vec<(String, Option<String>)>>,
}

impl MockSource {
    pub fn echo(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            delay,
            fail: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            delay: Duration::ZERO,
            fail: true,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResponseSource for MockSource {
    async fn fetch_response(
        &self,
        user_text: &str,
        detected_condition: Option<&str>,
    ) -> Result<String, AssistError> {
        self.calls
            .lock()
            .unwrap()
            .push((user_text.to_string(), detected_condition.map(str::to_string)));
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail {
            return Err(AssistError::Status {
                status: 503,
                message: "unavailable".to_string(),
            });
        }
        Ok(format!("re: {user_text}"))
    }
}

pub fn conversation(source: Arc<MockSource>) -> Conversation {
    Conversation::new(Arc::new(Classifier::default()), source)
}
