//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET for the record source
//! - [`Clipboard`] - plain text clipboard writes
//! - [`ShareTarget`] - native share, with [`share_or_copy`] fallback
//! - [`FileDownload`] - saving export files
//! - [`Affordances`] - vibration, notification, wake lock, fullscreen
//! - [`Launcher`] - opening website and map links

pub mod affordances;
pub mod clipboard;
pub mod download;
pub mod http;
pub mod launcher;
pub mod share;

pub use affordances::{Affordances, Silent};
pub use clipboard::{Clipboard, NoClipboard};
pub use download::FileDownload;
pub use http::{Headers, HttpClient, HttpError, Response};
pub use launcher::Launcher;
pub use share::{share_or_copy, NoShare, SharePayload, ShareOutcome, ShareResolution, ShareTarget};
