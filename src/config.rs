//! Environment-sourced configuration.

use std::fmt;

/// Env var holding the Telegram bot token.
const TOKEN_VAR: &str = "SCRIBE_BOT_TOKEN";
/// Env var holding the numeric id of the community chat confirmed at startup.
const HOME_CHAT_VAR: &str = "SCRIBE_HOME_CHAT_ID";

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// A required environment variable is absent or empty.
    Missing(&'static str),
    /// Validation error.
    Validation(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(var) => write!(f, "required environment variable {var} is not set"),
            Self::Validation(msg) => write!(f, "config validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

pub struct Config {
    pub bot_token: String,
    /// Community chat whose title is logged once connectivity is confirmed.
    pub home_chat_id: i64,
}

impl Config {
    /// Load from the process environment (after `dotenvy` has run).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::build(
            std::env::var(TOKEN_VAR).ok(),
            std::env::var(HOME_CHAT_VAR).ok(),
        )
    }

    fn build(token: Option<String>, home_chat: Option<String>) -> Result<Self, ConfigError> {
        let bot_token = token
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::Missing(TOKEN_VAR))?;

        // Telegram tokens are formatted as {bot_id}:{secret} where bot_id is numeric
        let token_parts: Vec<&str> = bot_token.split(':').collect();
        if token_parts.len() != 2
            || token_parts[0].parse::<u64>().is_err()
            || token_parts[1].is_empty()
        {
            return Err(ConfigError::Validation(format!(
                "{TOKEN_VAR} appears invalid (expected format: 123456789:ABCdefGHI...)"
            )));
        }

        let home_chat = home_chat
            .filter(|c| !c.is_empty())
            .ok_or(ConfigError::Missing(HOME_CHAT_VAR))?;
        let home_chat_id = home_chat.parse::<i64>().map_err(|_| {
            ConfigError::Validation(format!("{HOME_CHAT_VAR} must be a numeric chat id"))
        })?;

        Ok(Self {
            bot_token,
            home_chat_id,
        })
    }
}
