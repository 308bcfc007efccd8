//! Speech-to-text input boundary

use crate::notify::{Notification, Notifier};
use crate::pipeline::{Conversation, RequestId};
use async_trait::async_trait;
use tracing::warn;

/// Single-shot recognition settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizerOptions {
    pub locale: String,
    pub continuous: bool,
    pub interim_results: bool,
}

impl Default for RecognizerOptions {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            continuous: false,
            interim_results: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VoiceError {
    #[error("voice recognition is not supported on this platform")]
    Unsupported,

    #[error("failed to start voice recognition: {0}")]
    Start(String),

    #[error("speech recognition failed: {0}")]
    Recognition(String),
}

impl VoiceError {
    pub fn notification(&self) -> Notification {
        match self {
            VoiceError::Unsupported => Notification::error(
                "Voice Recognition Not Supported",
                "Your device doesn't support voice recognition. Please type your message instead.",
            ),
            VoiceError::Start(_) => Notification::error(
                "Error",
                "Failed to start voice recognition. Please try again.",
            ),
            VoiceError::Recognition(_) => Notification::error(
                "Voice Recognition Error",
                "Failed to recognize speech. Please try again or type your message.",
            ),
        }
    }
}

#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    fn is_supported(&self) -> bool {
        true
    }

    /// Listen once and return the final transcript
    async fn recognize(&self, options: &RecognizerOptions) -> Result<String, VoiceError>;
}

/// Recognizer for platforms without speech input
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedRecognizer;

#[async_trait]
impl SpeechRecognizer for UnsupportedRecognizer {
    fn is_supported(&self) -> bool {
        false
    }

    async fn recognize(&self, _options: &RecognizerOptions) -> Result<String, VoiceError> {
        Err(VoiceError::Unsupported)
    }
}

/// Capture one utterance and send it. Failures are reported through
/// `notifier` and leave the conversation untouched.
pub async fn listen(
    recognizer: &dyn SpeechRecognizer,
    conversation: &Conversation,
    notifier: &dyn Notifier,
) -> Option<RequestId> {
    if !recognizer.is_supported() {
        notifier.notify(VoiceError::Unsupported.notification());
        return None;
    }

    notifier.notify(Notification::info(
        "Listening...",
        "Say something about your health concern",
    ));

    match recognizer.recognize(&RecognizerOptions::default()).await {
        Ok(transcript) => {
            notifier.notify(Notification::info("Recognized speech", transcript.clone()));
            conversation.send(&transcript)
        }
        Err(e) => {
            warn!(error = %e, "voice input failed");
            notifier.notify(e.notification());
            None
        }
    }
}
