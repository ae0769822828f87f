//! Runtime configuration.
//!
//! Defaults, overridden by environment variables, overridden by CLI flags.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `USERDECK_ENDPOINT` | user list URL |
//! | `USERDECK_TIMEOUT_SECS` | fetch timeout in whole seconds |
//! | `USERDECK_DOWNLOAD_DIR` | where export files are saved |
//! | `USERDECK_LOG` | tracing filter directive (e.g. `userdeck=debug`) |

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{DeckError, DeckResult};
use crate::source::DEFAULT_ENDPOINT;

pub const ENV_ENDPOINT: &str = "USERDECK_ENDPOINT";
pub const ENV_TIMEOUT: &str = "USERDECK_TIMEOUT_SECS";
pub const ENV_DOWNLOAD_DIR: &str = "USERDECK_DOWNLOAD_DIR";
pub const ENV_LOG: &str = "USERDECK_LOG";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration for a userdeck session.
///
/// ```ignore
/// let config = DeckConfig::from_env()?
///     .with_download_dir("/tmp/exports")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    pub endpoint: String,
    pub timeout: Duration,
    /// `None` means the user's download directory.
    pub download_dir: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            download_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl DeckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = Some(dir.into());
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Defaults overridden by the `USERDECK_*` environment variables.
    pub fn from_env() -> DeckResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`DeckConfig::from_env`] with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> DeckResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(endpoint) = value(ENV_ENDPOINT) {
            config.endpoint = endpoint.trim().to_string();
        }
        if let Some(raw) = value(ENV_TIMEOUT) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| DeckError::config(ENV_TIMEOUT, format!("'{}' is not a number", raw)))?;
            if secs == 0 {
                return Err(DeckError::config(ENV_TIMEOUT, "must be at least 1"));
            }
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(dir) = value(ENV_DOWNLOAD_DIR) {
            config.download_dir = Some(PathBuf::from(dir));
        }
        if let Some(filter) = value(ENV_LOG) {
            config.log_filter = filter;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject endpoints that are not http(s) URLs.
    pub fn validate(&self) -> DeckResult<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(DeckError::config(
                ENV_ENDPOINT,
                format!("'{}' is not an http(s) URL", self.endpoint),
            ));
        }
        Ok(())
    }
}
