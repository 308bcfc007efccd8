//! HTTP client for the hosted generateContent endpoint

use crate::config::AssistConfig;
use crate::error::AssistError;
use crate::prompt::build_prompt;
use crate::source::ResponseSource;
use crate::types::{GenerateRequest, GenerateResponse};
use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: AssistConfig,
}

impl GeminiClient {
    pub fn new(config: AssistConfig) -> Result<Self, AssistError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &AssistConfig {
        &self.config
    }

    fn endpoint(&self) -> Result<Url, AssistError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AssistError::MissingApiKey)?;
        Url::parse_with_params(&self.config.api_url, &[("key", key)])
            .map_err(|e| AssistError::InvalidUrl(e.to_string()))
    }

    pub async fn generate(
        &self,
        user_text: &str,
        detected_condition: Option<&str>,
    ) -> Result<String, AssistError> {
        let url = self.endpoint()?;
        let request = GenerateRequest::new(
            build_prompt(user_text, detected_condition),
            self.config.temperature,
            self.config.max_output_tokens,
        );

        debug!(condition = ?detected_condition, "sending generateContent request");
        let response = self.http.post(url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = body["error"]["message"]
                .as_str()
                .unwrap_or("Unknown error")
                .to_string();
            warn!(status = status.as_u16(), %message, "generateContent request rejected");
            return Err(AssistError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response.json().await?;
        Ok(body.reply_text())
    }
}

#[async_trait]
impl ResponseSource for GeminiClient {
    async fn fetch_response(
        &self,
        user_text: &str,
        detected_condition: Option<&str>,
    ) -> Result<String, AssistError> {
        self.generate(user_text, detected_condition).await
    }
}
