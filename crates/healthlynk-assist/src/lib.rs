//! AI response collaborator: hosted generative-language client and offline fallback

mod client;
mod config;
mod error;
mod prompt;
mod source;
mod types;

pub use client::GeminiClient;
pub use config::AssistConfig;
pub use error::AssistError;
pub use prompt::build_prompt;
pub use source::{OfflineSource, ResponseSource};
pub use types::{GenerateRequest, GenerateResponse, NO_CONTENT_REPLY};
