//! Unified error type for userdeck.
//!
//! `DeckError` consolidates the domain-specific errors so that callers
//! can categorize, log and present any failure the same way.

use std::fmt;

use super::category::ErrorCategory;
use super::network::NetworkError;
use super::parse::ParseError;
use super::platform::PlatformError;
use crate::export::ExportError;

#[derive(Debug)]
pub enum DeckError {
    /// Fetching the record set failed.
    Network(NetworkError),

    /// A platform capability failed.
    Platform(PlatformError),

    /// Rendering an export failed.
    Export(ExportError),

    /// An option value could not be parsed.
    Parse(ParseError),

    /// Invalid configuration.
    Config { key: String, message: String },

    /// Filesystem / OS error.
    System(std::io::Error),
}

impl DeckError {
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        DeckError::Config {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            DeckError::Network(err) if err.is_server_side() => ErrorCategory::Server,
            DeckError::Network(_) => ErrorCategory::Network,
            DeckError::Platform(_) => ErrorCategory::Platform,
            DeckError::Export(_) => ErrorCategory::Client,
            DeckError::Parse(_) => ErrorCategory::User,
            DeckError::Config { .. } => ErrorCategory::Configuration,
            DeckError::System(_) => ErrorCategory::System,
        }
    }

    /// Whether running the same command again may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            DeckError::Network(err) => err.is_retryable(),
            other => other.category().is_retryable(),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            DeckError::Network(err) => err.user_message(),
            DeckError::Platform(err) => err.user_message(),
            DeckError::Export(err) => format!("Export failed: {}", err),
            DeckError::Parse(err) => err.to_string(),
            DeckError::Config { key, message } => {
                format!("Invalid setting {}: {}", key, message)
            }
            DeckError::System(err) => format!("System error: {}", err),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            DeckError::Network(err) => err.error_code(),
            DeckError::Platform(err) => err.error_code(),
            DeckError::Export(_) => "E_EXPORT",
            DeckError::Parse(_) => "E_PARSE",
            DeckError::Config { .. } => "E_CONFIG",
            DeckError::System(_) => "E_SYSTEM",
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Network(err) => write!(f, "{}", err),
            DeckError::Platform(err) => write!(f, "{}", err),
            DeckError::Export(err) => write!(f, "{}", err),
            DeckError::Parse(err) => write!(f, "{}", err),
            DeckError::Config { key, message } => write!(f, "{}: {}", key, message),
            DeckError::System(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeckError::Network(err) => Some(err),
            DeckError::Platform(err) => Some(err),
            DeckError::Export(err) => Some(err),
            DeckError::Parse(err) => Some(err),
            DeckError::Config { .. } => None,
            DeckError::System(err) => Some(err),
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<NetworkError> for DeckError {
    fn from(err: NetworkError) -> Self {
        DeckError::Network(err)
    }
}

impl From<PlatformError> for DeckError {
    fn from(err: PlatformError) -> Self {
        DeckError::Platform(err)
    }
}

impl From<ExportError> for DeckError {
    fn from(err: ExportError) -> Self {
        DeckError::Export(err)
    }
}

impl From<ParseError> for DeckError {
    fn from(err: ParseError) -> Self {
        DeckError::Parse(err)
    }
}

impl From<std::io::Error> for DeckError {
    fn from(err: std::io::Error) -> Self {
        DeckError::System(err)
    }
}
