//! Concrete implementations of the trait abstractions in `crate::traits`.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`ArboardClipboard`] - system clipboard
//! - [`DirectoryDownload`] - export files written to a directory
//! - [`TerminalAffordances`] - bell and desktop notifications
//! - [`SystemLauncher`] - opens links in the default browser
//!
//! The [`mock`] submodule provides test doubles for each of them.

pub mod arboard_clipboard;
pub mod file_download;
pub mod mock;
pub mod reqwest_http;
pub mod system_launcher;
pub mod terminal_affordances;

pub use arboard_clipboard::ArboardClipboard;
pub use file_download::DirectoryDownload;
pub use mock::MockHttpClient;
pub use reqwest_http::ReqwestHttpClient;
pub use system_launcher::SystemLauncher;
pub use terminal_affordances::TerminalAffordances;
