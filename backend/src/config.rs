//! # Server Configuration
//!
//! Everything the server needs is read once from the environment at startup:
//!
//! | Variable                | Default                    |
//! |-------------------------|----------------------------|
//! | `STOREFRONT_HOST`       | `127.0.0.1`                |
//! | `STOREFRONT_PORT`       | `8080`                     |
//! | `TELEGRAM_BOT_TOKEN`    | none                       |
//! | `TELEGRAM_CHAT_ID`      | none                       |
//! | `TELEGRAM_API_BASE`     | `https://api.telegram.org` |
//! | `TELEGRAM_TIMEOUT_SECS` | `10`                       |
//!
//! The two Telegram secrets may be absent: the server still starts and serves
//! the storefront, and the forwarding endpoint answers `500` until they are
//! provided.

use std::env;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    NotANumber { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub telegram: TelegramConfig,
}

/// Upstream settings for the chat relay.
#[derive(Clone, PartialEq, Eq)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    pub api_base: String,
    pub timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match value("STOREFRONT_PORT") {
            Some(raw) => parse_number("STOREFRONT_PORT", raw)?,
            None => DEFAULT_PORT,
        };
        let timeout_secs = match value("TELEGRAM_TIMEOUT_SECS") {
            Some(raw) => parse_number("TELEGRAM_TIMEOUT_SECS", raw)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            host: value("STOREFRONT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            telegram: TelegramConfig {
                bot_token: value("TELEGRAM_BOT_TOKEN"),
                chat_id: value("TELEGRAM_CHAT_ID"),
                api_base: value("TELEGRAM_API_BASE")
                    .map(|base| base.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl TelegramConfig {
    pub fn has_credentials(&self) -> bool {
        self.bot_token.is_some() && self.chat_id.is_some()
    }
}

// The token is a secret; keep it out of logs.
impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "***"))
            .field("chat_id", &self.chat_id)
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::NotANumber { name, value: raw })
}
