//! Conversation pipeline and the collaborators around it

pub mod export;
pub mod notify;
pub mod pipeline;
pub mod session;
pub mod voice;

pub use export::export_conversation;
pub use notify::{Notification, NotificationLog, Notifier, TracingNotifier};
pub use pipeline::{Conversation, PipelineState, RequestId, FALLBACK_REPLY};
pub use session::SessionProfile;
pub use voice::{listen, RecognizerOptions, SpeechRecognizer, UnsupportedRecognizer, VoiceError};
