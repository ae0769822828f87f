//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout, so interactive sessions log to a file in
//! the user's cache directory. Headless commands log to stderr.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{DeckError, DeckResult};

const LOG_FILE_NAME: &str = "userdeck.log";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// `<cache dir>/userdeck/userdeck.log`, falling back to the temp dir.
    pub fn default_file() -> Self {
        let dir = dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("userdeck");
        LogTarget::File(dir.join(LOG_FILE_NAME))
    }
}

/// Build the filter from a directive string, falling back to `info` on
/// invalid input.
pub fn build_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(directives: &str, target: &LogTarget) -> DeckResult<()> {
    let filter = build_filter(directives);

    let result = match target {
        LogTarget::Stderr => fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
    Ok(())
}

fn open_log_file(path: &Path) -> DeckResult<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(DeckError::from)
}
