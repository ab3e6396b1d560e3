//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::Level;

pub const GEMINI_OPENAI_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4o-mini";

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Which OpenAI-compatible backend produces the summaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AiProvider {
    Gemini,
    OpenAi,
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    pub ai_provider: AiProvider,
    pub ai_api_key: String,
    /// `None` means the client library's default OpenAI endpoint.
    pub ai_api_base: Option<String>,
    pub summary_model: String,
    /// Optional HTTP(S) proxy for YouTube requests, for hosts YouTube blocks.
    pub youtube_proxy_url: Option<String>,
    pub transcript_languages: Vec<String>,
    pub transcript_timeout: Duration,
    pub summary_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_vars(&std::env::vars().collect())
    }

    /// Builds the configuration from an explicit variable map.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let var = |name: &str| {
            vars.get(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        // --- Load Server Settings ---
        let bind_address_str = var("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let log_level_str = var("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- Load the AI Provider (Gemini wins when both keys are present) ---
        let (ai_provider, ai_api_key) = match (var("GEMINI_API_KEY"), var("OPENAI_API_KEY")) {
            (Some(key), _) => (AiProvider::Gemini, key),
            (None, Some(key)) => (AiProvider::OpenAi, key),
            (None, None) => return Err(ConfigError::MissingVar("GEMINI_API_KEY".to_string())),
        };

        let ai_api_base = var("AI_API_BASE").or_else(|| match ai_provider {
            AiProvider::Gemini => Some(GEMINI_OPENAI_BASE.to_string()),
            AiProvider::OpenAi => None,
        });

        let summary_model = var("SUMMARY_MODEL").unwrap_or_else(|| match ai_provider {
            AiProvider::Gemini => GEMINI_DEFAULT_MODEL.to_string(),
            AiProvider::OpenAi => OPENAI_DEFAULT_MODEL.to_string(),
        });

        // --- Load Transcript Provider Settings ---
        let youtube_proxy_url = var("YOUTUBE_PROXY_URL");

        let transcript_languages: Vec<String> = var("TRANSCRIPT_LANGUAGES")
            .unwrap_or_else(|| "en".to_string())
            .split(',')
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        if transcript_languages.is_empty() {
            return Err(ConfigError::InvalidValue(
                "TRANSCRIPT_LANGUAGES".to_string(),
                "at least one language code is required".to_string(),
            ));
        }

        // --- Load Timeouts ---
        let transcript_timeout = parse_secs(var("TRANSCRIPT_TIMEOUT_SECS"), "TRANSCRIPT_TIMEOUT_SECS", 30)?;
        let summary_timeout = parse_secs(var("SUMMARY_TIMEOUT_SECS"), "SUMMARY_TIMEOUT_SECS", 60)?;

        Ok(Self {
            bind_address,
            log_level,
            ai_provider,
            ai_api_key,
            ai_api_base,
            summary_model,
            youtube_proxy_url,
            transcript_languages,
            transcript_timeout,
            summary_timeout,
        })
    }
}

fn parse_secs(value: Option<String>, name: &str, default: u64) -> Result<Duration, ConfigError> {
    let Some(value) = value else {
        return Ok(Duration::from_secs(default));
    };
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidValue(
            name.to_string(),
            format!("'{}' is not a positive number of seconds", value),
        )),
    }
}
