#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("API request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}
