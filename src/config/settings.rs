//! Application settings loaded from environment variables.

use std::env;
use std::time::Duration;

use super::constants::{
    DEFAULT_BACKEND_URL, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_PROFILE_GRACE_MS,
    DEFAULT_PROFILE_RETRY_ATTEMPTS, DEFAULT_PROFILE_RETRY_DELAY_MS, DEFAULT_SESSION_FILE,
};

/// Application configuration
#[derive(Clone)]
pub struct Settings {
    /// Base URL of the hosted backend (auth + data API)
    pub backend_url: String,
    /// Public API key sent with every request
    anon_key: String,
    /// Where the current session is persisted between runs
    pub session_file: String,
    /// HTTP request timeout
    pub http_timeout: Duration,
    /// Grace delay before the first profile lookup after sign-up
    pub profile_grace: Duration,
    /// Total profile lookup attempts after sign-up
    pub profile_retry_attempts: u32,
    /// Initial backoff between profile lookup attempts (doubles each retry)
    pub profile_retry_delay: Duration,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("backend_url", &self.backend_url)
            .field("anon_key", &"[REDACTED]")
            .field("session_file", &self.session_file)
            .field("http_timeout", &self.http_timeout)
            .field("profile_grace", &self.profile_grace)
            .field("profile_retry_attempts", &self.profile_retry_attempts)
            .field("profile_retry_delay", &self.profile_retry_delay)
            .finish()
    }
}

impl Settings {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if `HOSTELHUB_ANON_KEY` is not set outside of debug builds —
    /// the backend rejects every request without it.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let anon_key = env::var("HOSTELHUB_ANON_KEY").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                tracing::warn!("HOSTELHUB_ANON_KEY not set, using empty key for development");
                String::new()
            } else {
                panic!("HOSTELHUB_ANON_KEY environment variable must be set");
            }
        });

        Self {
            backend_url: env::var("HOSTELHUB_BACKEND_URL")
                .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string()),
            anon_key,
            session_file: env::var("HOSTELHUB_SESSION_FILE")
                .unwrap_or_else(|_| DEFAULT_SESSION_FILE.to_string()),
            http_timeout: Duration::from_secs(
                env_parsed("HOSTELHUB_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS),
            ),
            profile_grace: Duration::from_millis(
                env_parsed("HOSTELHUB_PROFILE_GRACE_MS", DEFAULT_PROFILE_GRACE_MS),
            ),
            profile_retry_attempts: env_parsed(
                "HOSTELHUB_PROFILE_RETRY_ATTEMPTS",
                DEFAULT_PROFILE_RETRY_ATTEMPTS,
            ),
            profile_retry_delay: Duration::from_millis(env_parsed(
                "HOSTELHUB_PROFILE_RETRY_DELAY_MS",
                DEFAULT_PROFILE_RETRY_DELAY_MS,
            )),
        }
    }

    /// Public API key for the hosted backend
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            anon_key: String::new(),
            session_file: DEFAULT_SESSION_FILE.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            profile_grace: Duration::from_millis(DEFAULT_PROFILE_GRACE_MS),
            profile_retry_attempts: DEFAULT_PROFILE_RETRY_ATTEMPTS,
            profile_retry_delay: Duration::from_millis(DEFAULT_PROFILE_RETRY_DELAY_MS),
        }
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_allow_one_retry_after_grace() {
        let settings = Settings::default();
        assert!(settings.profile_retry_attempts >= 2);
        assert!(settings.profile_grace > Duration::ZERO);
    }

    #[test]
    fn debug_redacts_anon_key() {
        let mut settings = Settings::default();
        settings.anon_key = "super-secret".to_string();
        let printed = format!("{settings:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("[REDACTED]"));
    }
}
