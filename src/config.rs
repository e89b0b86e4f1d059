//! Client configuration resolved once at startup.
//!
//! The only required setting is the base URL of the task backend. It comes
//! from an explicit value (the `--base-url` flag) or from the
//! `TASKDESK_BASE_URL` environment variable, falling back to
//! [`DEFAULT_BASE_URL`].

use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Environment variable selecting the backend base URL.
pub const BASE_URL_ENV: &str = "TASKDESK_BASE_URL";

/// Environment variable overriding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "TASKDESK_TIMEOUT_SECS";

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while resolving client configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL is not a valid URL.
    #[error("invalid base URL '{value}': {source}")]
    InvalidBaseUrl {
        /// Rejected value.
        value: String,
        /// Parse failure.
        #[source]
        source: url::ParseError,
    },

    /// The base URL does not use `http` or `https`.
    #[error("unsupported base URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    /// The timeout is not a positive whole number of seconds.
    #[error("invalid timeout '{0}', expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Settings for the REST task client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    timeout: Duration,
    connect_timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration for `base_url` with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the value does not parse and
    /// [`ConfigError::UnsupportedScheme`] for non-HTTP schemes.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim();
        let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
            value: trimmed.to_owned(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_owned()));
        }
        Ok(Self {
            base_url: parsed,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        })
    }

    /// Resolves configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`Self::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration from a key lookup.
    ///
    /// Reads [`BASE_URL_ENV`] and [`TIMEOUT_ENV`]; blank values count as
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns any [`Self::new`] error for the base URL and
    /// [`ConfigError::InvalidTimeout`] for a malformed timeout.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_url = present(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let config = Self::new(&base_url)?;

        match present(TIMEOUT_ENV) {
            Some(raw) => {
                let seconds = raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|value| *value > 0)
                    .ok_or(ConfigError::InvalidTimeout(raw))?;
                Ok(config.with_timeout(Duration::from_secs(seconds)))
            }
            None => Ok(config),
        }
    }

    /// Overrides the total request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the backend base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the total request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the connection timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }
}
