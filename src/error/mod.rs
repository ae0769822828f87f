//! Unified error handling for userdeck.
//!
//! - **Error Categories**: high-level classification for handling decisions
//! - **Domain-specific Errors**: network (fetch), platform (clipboard,
//!   share, download), parse (option values)
//! - **Unified Error Type**: [`DeckError`] consolidates all error types
//! - **Result Type Alias**: [`DeckResult<T>`]
//!
//! # Error Categories
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, timeout, 4xx | Sometimes |
//! | Server | Record source 5xx | Yes |
//! | Platform | Clipboard/share/download | No |
//! | User | Bad flag or shortcut value | No |
//! | Client | Unexpected encoder failure | No |
//! | System | OS/filesystem errors | No |
//! | Configuration | Invalid settings | No |
//!
//! The view pipeline and the serializers never produce errors of their
//! own for well-formed records.

mod category;
mod deck_error;
mod network;
mod parse;
mod platform;
mod result;

pub use category::ErrorCategory;
pub use deck_error::DeckError;
pub use network::NetworkError;
pub use parse::ParseError;
pub use platform::PlatformError;
pub use result::DeckResult;
