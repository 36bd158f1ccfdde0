use std::env;
use std::fmt::Display;
use std::str::FromStr;

use crate::chat::store::{DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_IDLE_SECS};

pub const DEFAULT_GEMINI_HOST: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";
pub const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Credential for the generative language API. When `None` every
    /// chat message is answered from the fallback table.
    pub gemini_api_key: Option<String>,
    pub gemini_api_hostname: String,
    pub gemini_model: String,
    pub gemini_timeout_secs: u64,
    /// Chat sessions idle for this long are dropped
    pub session_idle_secs: u64,
    pub max_sessions: usize,
    /// Prefix the site is mounted under, always starts and ends with `/`
    pub base_path: String,
    pub static_path: String,
}

impl AppConfig {
    /// Build the config from any key lookup. `Default` uses the process
    /// environment, tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // An empty key is the same as no key at all
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        let gemini_api_hostname =
            lookup("SUREFIT_GEMINI_HOST").unwrap_or_else(|| DEFAULT_GEMINI_HOST.to_string());
        let gemini_model =
            lookup("SUREFIT_GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
        let gemini_timeout_secs = positive_or_default(
            &lookup,
            "SUREFIT_GEMINI_TIMEOUT_SECS",
            DEFAULT_GEMINI_TIMEOUT_SECS,
        );
        let session_idle_secs = positive_or_default(
            &lookup,
            "SUREFIT_SESSION_IDLE_SECS",
            DEFAULT_SESSION_IDLE_SECS,
        );
        let max_sessions =
            positive_or_default(&lookup, "SUREFIT_MAX_SESSIONS", DEFAULT_MAX_SESSIONS);
        let base_path = normalize_base_path(
            &lookup("SUREFIT_BASE_PATH").unwrap_or_else(|| "/".to_string()),
        );
        let static_path = lookup("SUREFIT_STATIC_PATH").unwrap_or_else(|| "./static".to_string());

        Self {
            gemini_api_key,
            gemini_api_hostname,
            gemini_model,
            gemini_timeout_secs,
            session_idle_secs,
            max_sessions,
            base_path,
            static_path,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }
}

/// Parse a strictly positive number from `key`. Zero or garbage logs a
/// warning and yields `default`.
fn positive_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + PartialOrd + Default + Display + Copy,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => value,
        _ => {
            tracing::warn!("Invalid {} {:?}, using {}", key, raw, default);
            default
        }
    }
}

/// Normalize a mount prefix so that it always has a leading and
/// trailing slash, e.g. `surefit-gym` becomes `/surefit-gym/`.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}
