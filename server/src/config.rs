//! Environment-backed server configuration.

use anyhow::Context;

use appsketch_provider::openai::DEFAULT_BASE_URL;

/// Default listening port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5050;

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Completion model identifier (`OPENAI_MODEL`).
    pub model: String,
    /// Upstream API credential (`OPENAI_API_KEY`).
    pub api_key: String,
    /// Upstream API base URL (`OPENAI_BASE_URL`).
    pub base_url: String,
    /// Listening port (`PORT`, default 5050).
    pub port: u16,
}

impl ServerConfig {
    /// Reads the configuration from the environment.
    ///
    /// # Errors
    ///
    /// Fails with a pointed message when a required variable is missing or
    /// `PORT` is not a number.
    pub fn from_env() -> anyhow::Result<Self> {
        let model = std::env::var("OPENAI_MODEL").context("OPENAI_MODEL must be set")?;
        let api_key = std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?;
        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a number, got {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self {
            model,
            api_key,
            base_url,
            port,
        })
    }
}
