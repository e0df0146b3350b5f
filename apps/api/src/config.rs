use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::SamplingConfig;

/// Application configuration loaded from environment variables.
/// Only malformed values are fatal; every key has a default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absent or empty means no generative backend: all questions come from the bank.
    pub anthropic_api_key: Option<String>,
    pub llm_timeout: Duration,
    pub sampling: SamplingConfig,
    /// Conversations not touched for this long are dropped.
    pub session_idle_timeout: Duration,
    pub session_sweep_interval: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = SamplingConfig::default();

        Ok(Config {
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            llm_timeout: Duration::from_secs(parse_env("LLM_TIMEOUT_SECS", 30)?),
            sampling: SamplingConfig {
                max_tokens: parse_env("QUESTION_MAX_TOKENS", defaults.max_tokens)?,
                temperature: parse_env("QUESTION_TEMPERATURE", defaults.temperature)?,
                top_p: parse_env("QUESTION_TOP_P", defaults.top_p)?,
                top_k: parse_env("QUESTION_TOP_K", defaults.top_k)?,
                repetition_penalty: parse_env(
                    "QUESTION_REPETITION_PENALTY",
                    defaults.repetition_penalty,
                )?,
            },
            session_idle_timeout: Duration::from_secs(parse_env(
                "SESSION_IDLE_TIMEOUT_SECS",
                3600,
            )?),
            session_sweep_interval: Duration::from_secs(parse_env(
                "SESSION_SWEEP_INTERVAL_SECS",
                60,
            )?),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads and parses `key`, falling back to `default` when it is unset.
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has an invalid value: '{raw}'"))
}
