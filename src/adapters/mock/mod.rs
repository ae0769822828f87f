//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MemoryClipboard`] - clipboard recording writes
//! - [`ScriptedShare`] - share target with a fixed outcome
//! - [`MemoryDownload`] - in-memory file saves
//! - [`RecordingAffordances`] - records vibrate/notify calls
//! - [`RecordingLauncher`] - records opened URLs

pub mod http;
pub mod platform;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use platform::{
    AffordanceCall, MemoryClipboard, MemoryDownload, RecordingAffordances, RecordingLauncher,
    SavedFile, ScriptedShare,
};
