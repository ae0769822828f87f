//! Errors from best-effort platform capabilities.
//!
//! Clipboard, share, download and notification failures are reported to
//! the user as a transient toast and never abort the session.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The capability does not exist on this system.
    #[error("{capability} is not available")]
    Unavailable { capability: &'static str },

    /// Clipboard access or write failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Native share reported a failure.
    #[error("Share failed: {0}")]
    Share(String),

    /// Opening a link in the browser failed.
    #[error("Failed to open {url}: {message}")]
    Launch { url: String, message: String },

    /// Writing an export file failed.
    #[error("Failed to save '{}': {message}", path.display())]
    Download { path: PathBuf, message: String },
}

impl PlatformError {
    pub fn unavailable(capability: &'static str) -> Self {
        PlatformError::Unavailable { capability }
    }

    /// Short message for a toast.
    pub fn user_message(&self) -> String {
        match self {
            PlatformError::Unavailable { capability } => {
                format!("{} is not available here", capability)
            }
            PlatformError::Clipboard(_) => "Failed to copy".to_string(),
            PlatformError::Share(_) => "Failed to share".to_string(),
            PlatformError::Launch { .. } => "Failed to open link".to_string(),
            PlatformError::Download { path, .. } => {
                format!("Failed to save {}", path.display())
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            PlatformError::Unavailable { .. } => "E_PLAT_UNAVAILABLE",
            PlatformError::Clipboard(_) => "E_PLAT_CLIPBOARD",
            PlatformError::Share(_) => "E_PLAT_SHARE",
            PlatformError::Launch { .. } => "E_PLAT_LAUNCH",
            PlatformError::Download { .. } => "E_PLAT_DOWNLOAD",
        }
    }
}
