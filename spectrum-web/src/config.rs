//! Build-time application configuration
//!
//! Values come from environment variables captured at compile time, since
//! the app runs in a browser with no process environment of its own.

use spectrum_common::fetch::DEFAULT_TRACK_LIMIT;
use thiserror::Error;
use tracing::Level;

/// Used when neither `SPECTRUM_API_BASE` nor a page origin is available
pub const FALLBACK_API_BASE: &str = "http://localhost:8080";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid SPECTRUM_TRACK_LIMIT {0:?}")]
    TrackLimit(String),
    #[error("Invalid SPECTRUM_LOG {0:?}")]
    LogLevel(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin, without a trailing slash
    pub api_base: String,
    /// Maximum tracks requested per plot refresh
    pub track_limit: usize,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: FALLBACK_API_BASE.to_string(),
            track_limit: DEFAULT_TRACK_LIMIT,
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    /// Load from build-time variables and the page origin.
    ///
    /// Invalid values fall back to their defaults and are returned so they
    /// can be logged once the logger is up.
    pub fn load() -> (Self, Vec<ConfigError>) {
        Self::from_values(
            option_env!("SPECTRUM_API_BASE"),
            option_env!("SPECTRUM_TRACK_LIMIT"),
            option_env!("SPECTRUM_LOG"),
            page_origin,
        )
    }

    fn from_values(
        api_base: Option<&str>,
        track_limit: Option<&str>,
        log_level: Option<&str>,
        origin: impl FnOnce() -> Option<String>,
    ) -> (Self, Vec<ConfigError>) {
        let mut problems = Vec::new();
        let defaults = Self::default();

        let api_base = api_base
            .map(str::to_string)
            .filter(|base| !base.trim().is_empty())
            .or_else(origin)
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base);

        let track_limit = match track_limit {
            None => defaults.track_limit,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    problems.push(ConfigError::TrackLimit(raw.to_string()));
                    defaults.track_limit
                }
            },
        };

        let log_level = match log_level {
            None => defaults.log_level,
            Some(raw) => match raw.trim().parse::<Level>() {
                Ok(level) => level,
                Err(_) => {
                    problems.push(ConfigError::LogLevel(raw.to_string()));
                    defaults.log_level
                }
            },
        };

        (
            Self {
                api_base,
                track_limit,
                log_level,
            },
            problems,
        )
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?
        .location()
        .origin()
        .ok()
        .filter(|origin| origin != "null")
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}
