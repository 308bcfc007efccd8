//! Client configuration

use std::time::Duration;

pub const DEFAULT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

pub const API_URL_ENV: &str = "HEALTHLYNK_API_URL";
pub const API_KEY_ENV: &str = "HEALTHLYNK_API_KEY";

#[derive(Debug, Clone)]
pub struct AssistConfig {
    /// generateContent endpoint
    pub api_url: String,
    /// Sent as the `key` query parameter
    pub api_key: Option<String>,
    pub temperature: f32,
    pub max_output_tokens: u32,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl AssistConfig {
    pub fn new() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            temperature: 0.7,
            max_output_tokens: 500,
            timeout: Duration::from_secs(30),
        }
    }

    /// Defaults overridden by `HEALTHLYNK_API_URL` / `HEALTHLYNK_API_KEY`
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Some(url) = non_empty_env(API_URL_ENV) {
            config.api_url = url;
        }
        config.api_key = non_empty_env(API_KEY_ENV);
        config
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_defaults() {
        let config = AssistConfig::new();
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_output_tokens, 500);
        assert!(!config.has_api_key());
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::set_var(API_URL_ENV, "http://localhost:9999/generate");
        std::env::set_var(API_KEY_ENV, "secret");

        let config = AssistConfig::from_env();
        assert_eq!(config.api_url, "http://localhost:9999/generate");
        assert_eq!(config.api_key.as_deref(), Some("secret"));

        std::env::remove_var(API_URL_ENV);
        std::env::remove_var(API_KEY_ENV);
    }

    #[test]
    #[serial]
    fn test_blank_env_key_ignored() {
        std::env::set_var(API_KEY_ENV, "  ");
        let config = AssistConfig::from_env();
        assert!(!config.has_api_key());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        std::env::remove_var(API_KEY_ENV);
    }
}
