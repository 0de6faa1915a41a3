//! Board configuration resolved at build time.
//!
//! The WASM bundle has no process environment, so overrides are baked in
//! with `option_env!` when the crate is compiled:
//!
//! - `BOARD_API_BASE`: prefix for every endpoint (default: same origin)
//! - `BOARD_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug` or `trace`
//! - `BOARD_SIGNUP_BANNER_MS`: signup banner lifetime, default 5000
//! - `BOARD_UNREGISTER_BANNER_MS`: unregister banner lifetime, default 4000

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::state::mutation::MutationKind;

pub const DEFAULT_SIGNUP_BANNER_MS: u64 = 5_000;
pub const DEFAULT_UNREGISTER_BANNER_MS: u64 = 4_000;

/// Error returned when a configuration value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown {key}: {value} (expected error, warn, info, debug or trace)")]
    LogLevel { key: &'static str, value: String },
    #[error("invalid {key}: {value} (expected milliseconds)")]
    Millis { key: &'static str, value: String },
}

/// Raw override strings, one per setting.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawConfig<'a> {
    pub api_base: Option<&'a str>,
    pub log_level: Option<&'a str>,
    pub signup_banner_ms: Option<&'a str>,
    pub unregister_banner_ms: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub api_base: String,
    pub log_level: log::Level,
    pub signup_banner: Duration,
    pub unregister_banner: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: log::Level::Info,
            signup_banner: Duration::from_millis(DEFAULT_SIGNUP_BANNER_MS),
            unregister_banner: Duration::from_millis(DEFAULT_UNREGISTER_BANNER_MS),
        }
    }
}

impl BoardConfig {
    /// Build config from the overrides captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any override is malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_raw(RawConfig {
            api_base: option_env!("BOARD_API_BASE"),
            log_level: option_env!("BOARD_LOG_LEVEL"),
            signup_banner_ms: option_env!("BOARD_SIGNUP_BANNER_MS"),
            unregister_banner_ms: option_env!("BOARD_UNREGISTER_BANNER_MS"),
        })
    }

    /// Build config from raw override strings. Missing values take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any override is malformed.
    pub fn from_raw(raw: RawConfig<'_>) -> Result<Self, ConfigError> {
        let api_base = raw.api_base.unwrap_or_default().trim().trim_end_matches('/').to_owned();
        let log_level = parse_log_level(raw.log_level)?;
        let signup_banner = parse_millis("BOARD_SIGNUP_BANNER_MS", raw.signup_banner_ms, DEFAULT_SIGNUP_BANNER_MS)?;
        let unregister_banner =
            parse_millis("BOARD_UNREGISTER_BANNER_MS", raw.unregister_banner_ms, DEFAULT_UNREGISTER_BANNER_MS)?;
        Ok(Self { api_base, log_level, signup_banner, unregister_banner })
    }

    /// Absolute URL for a request target such as `/activities`.
    pub fn endpoint(&self, target: &str) -> String {
        format!("{}{target}", self.api_base)
    }

    /// How long the banner stays up after the given action.
    pub fn banner_duration(&self, kind: MutationKind) -> Duration {
        match kind {
            MutationKind::Signup => self.signup_banner,
            MutationKind::Unregister => self.unregister_banner,
        }
    }
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, ConfigError> {
    let Some(value) = raw.map(str::trim) else {
        return Ok(log::Level::Info);
    };
    value
        .parse::<log::Level>()
        .map_err(|_| ConfigError::LogLevel { key: "BOARD_LOG_LEVEL", value: value.to_owned() })
}

fn parse_millis(key: &'static str, raw: Option<&str>, default: u64) -> Result<Duration, ConfigError> {
    let Some(value) = raw.map(str::trim) else {
        return Ok(Duration::from_millis(default));
    };
    value
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::Millis { key, value: value.to_owned() })
}
