//! Client configuration.
//!
//! Each [`SubtitleClient`](crate::SubtitleClient) owns a [`Config`]. The flat
//! functions of the crate root (`search_subtitles`, ...) build their client
//! from a process-wide default, which [`configure`] replaces.
use log::debug;
use std::sync::{LazyLock, PoisonError, RwLock};

/// Base URL of the public Wyzie Subs API.
pub const DEFAULT_BASE_URL: &str = "https://sub.wyzie.ru";

static CURRENT: LazyLock<RwLock<Config>> = LazyLock::new(|| RwLock::new(Config::default()));

/// Options of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
}

impl Config {
    /// Create a configuration for the API served at `base_url`.
    /// Trailing slashes are removed.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        base_url.truncate(base_url.trim_end_matches('/').len());
        Self { base_url }
    }

    /// Base URL, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Replace the process-wide configuration.
///
/// Clients built afterwards with [`SubtitleClient::default`](crate::SubtitleClient::default)
/// use it; existing clients keep their own copy. The last call wins.
pub fn configure(config: Config) {
    debug!("Configure base url: {}", config.base_url());
    *CURRENT.write().unwrap_or_else(PoisonError::into_inner) = config;
}

/// Snapshot of the process-wide configuration.
#[must_use]
pub fn current() -> Config {
    CURRENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
