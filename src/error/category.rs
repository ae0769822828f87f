//! Error category classification for unified error handling.
//!
//! Categories drive how the application reacts to a failure: whether a
//! retry makes sense, and which hint to show next to the message.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS or timeout problems. Generally transient.
    Network,

    /// The record source answered with a server-side failure (5xx).
    Server,

    /// A best-effort platform capability (clipboard, share, download,
    /// notification) failed or is missing. Never fatal.
    Platform,

    /// Invalid input from the user (unknown flag values, bad shortcut).
    User,

    /// Programming errors or malformed data that should not happen.
    Client,

    /// OS and filesystem errors.
    System,

    /// Invalid configuration values.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Short label suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Platform => "platform",
            ErrorCategory::User => "user",
            ErrorCategory::Client => "client",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Suggested recovery action for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and fetch again",
            ErrorCategory::Server => "The user service may be down. Try again later",
            ErrorCategory::Platform => "This feature is unavailable on this system",
            ErrorCategory::User => "Please check your input and try again",
            ErrorCategory::Client => "This may be a bug. Please report it if it persists",
            ErrorCategory::System => "Check file permissions and available disk space",
            ErrorCategory::Configuration => "Check your USERDECK_* environment settings",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
