use super::defaults::{
    DEFAULT_BACKEND_URL, DEFAULT_QUICK_QUESTIONS, DEFAULT_WELCOME_TEXT, DEFAULT_WELCOME_TITLE,
};
use super::error::ConfigError;
use crate::constants::BACKEND_URL_ENV;
use reqwest::Url;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Content of the welcome panel shown before the first message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeConfig {
    pub title: String,
    pub text: String,
    pub quick_questions: Vec<String>,
}

impl Default for WelcomeConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_WELCOME_TITLE.to_string(),
            text: DEFAULT_WELCOME_TEXT.to_string(),
            quick_questions: DEFAULT_QUICK_QUESTIONS
                .iter()
                .map(|q| q.to_string())
                .collect(),
        }
    }
}

/// Application configuration loaded from client.toml
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend_url: String,
    /// `None` waits for the backend indefinitely
    pub request_timeout: Option<Duration>,
    pub welcome: WelcomeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: None,
            welcome: WelcomeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        super::loader::parse_config(content, Path::new("<inline>"))
    }

    /// Apply `COUNSEL_CHAT_BACKEND_URL` using `lookup` to read the environment
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BACKEND_URL_ENV).filter(|v| !v.trim().is_empty()) {
            info!(url = %url, "Overriding backend url from environment");
            self.set_backend_url(url)?;
        }
        Ok(())
    }

    /// Replace the backend URL after validating it
    pub fn set_backend_url(&mut self, url: impl Into<String>) -> Result<(), ConfigError> {
        let url = url.into();
        validate_backend_url(&url)?;
        self.backend_url = url;
        Ok(())
    }
}

pub(super) fn validate_backend_url(url: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(url).map_err(|err| ConfigError::InvalidBackendUrl {
        url: url.to_string(),
        reason: err.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidBackendUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
