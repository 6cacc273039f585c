use super::app::{AppConfig, WelcomeConfig, validate_backend_url};
use super::defaults::MAX_QUICK_QUESTIONS;
use super::error::ConfigError;
use crate::constants::{CONFIG_PATH, ENV_PATH};
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use std::time::Duration;
use tracing::{debug, warn};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    pub backend_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub welcome: RawWelcome,
}

#[derive(Debug, Deserialize, Default)]
pub(super) struct RawWelcome {
    pub title: Option<String>,
    pub text: Option<String>,
    pub quick_questions: Option<Vec<String>>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration.
///
/// An explicit `path` must exist. Without one, `config/client.toml` is used
/// when present and built-in defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(path) => read_config(path),
        None => match read_config(Path::new(CONFIG_PATH)) {
            Err(ConfigError::NotFound { path }) => {
                debug!(path = %path.display(), "No configuration file; using defaults");
                Ok(AppConfig::default())
            }
            other => other,
        },
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading client configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_config(&content, path)
}

pub(super) fn parse_config(content: &str, path: &Path) -> Result<AppConfig, ConfigError> {
    let parsed: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();

    let backend_url = match parsed.backend_url {
        Some(url) => {
            validate_backend_url(&url)?;
            url
        }
        None => defaults.backend_url,
    };

    let request_timeout = match parsed.request_timeout_secs {
        Some(0) => return Err(ConfigError::InvalidTimeout),
        Some(secs) => Some(Duration::from_secs(secs)),
        None => None,
    };

    let welcome = build_welcome(parsed.welcome, defaults.welcome);

    Ok(AppConfig {
        backend_url,
        request_timeout,
        welcome,
    })
}

fn build_welcome(raw: RawWelcome, defaults: WelcomeConfig) -> WelcomeConfig {
    let quick_questions = match raw.quick_questions {
        Some(questions) => {
            let mut questions: Vec<String> = questions
                .into_iter()
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty())
                .collect();
            if questions.len() > MAX_QUICK_QUESTIONS {
                warn!(
                    configured = questions.len(),
                    kept = MAX_QUICK_QUESTIONS,
                    "Too many quick questions; extra entries ignored"
                );
                questions.truncate(MAX_QUICK_QUESTIONS);
            }
            questions
        }
        None => defaults.quick_questions,
    };

    WelcomeConfig {
        title: raw.title.unwrap_or(defaults.title),
        text: raw.text.unwrap_or(defaults.text),
        quick_questions,
    }
}
