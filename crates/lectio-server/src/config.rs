//! Server configuration loaded from the environment.
//!
//! `dotenvy` is applied in `main` before this runs, so a local `.env`
//! file works in development.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_AUDIO_DIR: &str = "audios";
const DEFAULT_TTS_LANGUAGE: &str = "pt";
const DEFAULT_SCHEDULER_INTERVAL_SECS: u64 = 60;
const DEFAULT_PENDING_WINDOW_DAYS: i64 = 2;

/// Runtime configuration for the API server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: String,
    /// Endpoint of the messaging-channel relay
    pub sender_url: String,
    /// Endpoint of the speech-synthesis service
    pub tts_url: String,
    pub tts_language: String,
    /// Directory audio artifacts are written to
    pub audio_dir: PathBuf,
    /// HS256 secret for session tokens
    pub session_secret: String,
    pub scheduler_interval: Duration,
    pub scheduler_enabled: bool,
    /// Dedup window for pending readings
    pub pending_window_days: i64,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr: optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            sender_url: required("SENDER_URL")?,
            tts_url: required("TTS_URL")?,
            tts_language: optional("TTS_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_TTS_LANGUAGE.to_string()),
            audio_dir: optional("AUDIO_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_AUDIO_DIR)),
            session_secret: required("SECRET_KEY")?,
            scheduler_interval: Duration::from_secs(
                parsed("SCHEDULER_INTERVAL_SECS")?.unwrap_or(DEFAULT_SCHEDULER_INTERVAL_SECS),
            ),
            scheduler_enabled: parsed("SCHEDULER_ENABLED")?.unwrap_or(true),
            pending_window_days: parsed("PENDING_WINDOW_DAYS")?
                .unwrap_or(DEFAULT_PENDING_WINDOW_DAYS),
        })
    }
}

fn required(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{} must be set", name))
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

fn parsed<T: std::str::FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match optional(name) {
        Some(raw) => {
            let value = raw
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid {}: {}", name, e))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}
