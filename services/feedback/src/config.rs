//! Application Configuration Module
//!
//! Centralizes the configuration for the feedback service. Settings are
//! loaded from environment variables once at startup and passed explicitly
//! to the rest of the application.

use std::env;
use tracing::Level;

/// Which end-of-turn strategy the session asks the runtime for.
#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum TurnMode {
    /// Trust the transcription provider's endpoint signal.
    Stt,
    /// Local voice-activity detection tuned for a noisy cafeteria.
    Vad,
}

impl TurnMode {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.to_lowercase().as_str() {
            "stt" => Ok(TurnMode::Stt),
            "vad" => Ok(TurnMode::Vad),
            other => Err(ConfigError::InvalidValue(
                "TURN_DETECTION".to_string(),
                other.to_string(),
            )),
        }
    }
}

/// Holds all configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub sarvam_api_key: String,
    pub gemini_api_key: String,
    pub chat_model: String,
    pub turn_mode: TurnMode,
    pub log_level: Level,
}

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
    #[error("Invalid log level provided for RUST_LOG: {0}")]
    InvalidLogLevel(String),
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    // *   `SARVAM_API_KEY`: Your secret key for the transcription/synthesis provider. Required.
    // *   `GEMINI_API_KEY`: Your secret key for the language-model provider. Required.
    // *   `CHAT_MODEL`: (Optional) The language model generating replies. Defaults to "gemini-2.0-flash".
    // *   `TURN_DETECTION`: (Optional) "stt" or "vad". Defaults to "stt".
    // *   `RUST_LOG`: (Optional) The logging level. Defaults to "INFO".
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file. This is useful for local development and is ignored if not present.
        dotenvy::dotenv().ok();

        let sarvam_api_key = env::var("SARVAM_API_KEY")
            .map_err(|_| ConfigError::MissingVar("SARVAM_API_KEY".to_string()))?;
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| ConfigError::MissingVar("GEMINI_API_KEY".to_string()))?;

        // Provide a default for non-critical variables.
        let chat_model =
            env::var("CHAT_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string());

        let turn_str = env::var("TURN_DETECTION").unwrap_or_else(|_| "stt".to_string());
        let turn_mode = TurnMode::parse(&turn_str)?;

        // Configure logging level from RUST_LOG, with a sensible default.
        let log_level_str = env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(log_level_str))?;

        Ok(Self {
            sarvam_api_key,
            gemini_api_key,
            chat_model,
            turn_mode,
            log_level,
        })
    }
}
