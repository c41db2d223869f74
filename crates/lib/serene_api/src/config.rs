//! API server configuration.

use std::path::PathBuf;
use std::time::Duration;

use serene_core::llm::config::LlmConfig;
use serene_core::profile::DEFAULT_PROFILE_PATH;
use serene_core::session::{DEFAULT_IDLE_TTL, DEFAULT_MAX_SESSIONS};

/// Fallback used when `SECRET_KEY` is not set. Fine for local use only.
pub const DEFAULT_SECRET_KEY: &str = "your-secret-key-here";

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:5000").
    pub bind_addr: String,
    /// Location of the persisted profile JSON file.
    pub profile_path: PathBuf,
    /// Secret used to sign the session cookie.
    pub secret_key: String,
    /// Sessions idle for longer than this are dropped.
    pub session_idle_ttl: Duration,
    /// Maximum number of live sessions.
    pub max_sessions: usize,
    /// Model provider settings.
    pub llm: LlmConfig,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                | Default                |
    /// |-------------------------|------------------------|
    /// | `BIND_ADDR`             | `127.0.0.1:5000`       |
    /// | `PROFILE_PATH`          | `user_profile.json`    |
    /// | `SECRET_KEY`            | `your-secret-key-here` |
    /// | `SESSION_IDLE_TTL_SECS` | `3600`                 |
    /// | `MAX_SESSIONS`          | `10000`                |
    ///
    /// Model settings come from [`LlmConfig::from_env`].
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".into()),
            profile_path: std::env::var("PROFILE_PATH")
                .unwrap_or_else(|_| DEFAULT_PROFILE_PATH.into())
                .into(),
            secret_key: std::env::var("SECRET_KEY").unwrap_or_else(|_| DEFAULT_SECRET_KEY.into()),
            session_idle_ttl: parse_var("SESSION_IDLE_TTL_SECS")
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_IDLE_TTL),
            max_sessions: parse_var("MAX_SESSIONS").unwrap_or(DEFAULT_MAX_SESSIONS),
            llm: LlmConfig::from_env(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
