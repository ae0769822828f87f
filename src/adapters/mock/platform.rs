//! Recording doubles for the platform capabilities.
//!
//! Each double is a cheap `Clone` handle over shared state so a test can
//! hand one copy to the app and inspect the other.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::PlatformError;
use crate::traits::{
    Affordances, Clipboard, FileDownload, Launcher, SharePayload, ShareOutcome, ShareTarget,
};

/// Clipboard that remembers every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    fail_with: Arc<Mutex<Option<PlatformError>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail with `err`.
    pub fn fail_with(&self, err: PlatformError) {
        *self.fail_with.lock().unwrap() = Some(err);
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.writes.lock().unwrap().last().cloned()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), PlatformError> {
        if let Some(err) = self.fail_with.lock().unwrap().clone() {
            return Err(err);
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Share target returning a fixed outcome and recording payloads.
#[derive(Debug, Clone)]
pub struct ScriptedShare {
    outcome: Arc<Mutex<ShareOutcome>>,
    shared: Arc<Mutex<Vec<SharePayload>>>,
}

impl ScriptedShare {
    pub fn new(outcome: ShareOutcome) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(outcome)),
            shared: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn payloads(&self) -> Vec<SharePayload> {
        self.shared.lock().unwrap().clone()
    }
}

impl ShareTarget for ScriptedShare {
    fn share(&mut self, payload: &SharePayload) -> ShareOutcome {
        self.shared.lock().unwrap().push(payload.clone());
        self.outcome.lock().unwrap().clone()
    }
}

/// A file handed to [`MemoryDownload`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub file_name: String,
    pub mime_type: String,
    pub content: String,
}

/// Download target that keeps files in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDownload {
    files: Arc<Mutex<Vec<SavedFile>>>,
}

impl MemoryDownload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> Vec<SavedFile> {
        self.files.lock().unwrap().clone()
    }
}

impl FileDownload for MemoryDownload {
    fn save(
        &mut self,
        content: &str,
        file_name: &str,
        mime_type: &str,
    ) -> Result<PathBuf, PlatformError> {
        self.files.lock().unwrap().push(SavedFile {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            content: content.to_string(),
        });
        Ok(PathBuf::from("memory").join(file_name))
    }
}

/// Affordance calls observed by [`RecordingAffordances`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffordanceCall {
    Vibrate(Vec<u64>),
    Notify { title: String, body: String },
    WakeLock(bool),
    Fullscreen,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingAffordances {
    calls: Arc<Mutex<Vec<AffordanceCall>>>,
}

impl RecordingAffordances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<AffordanceCall> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, call: AffordanceCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Affordances for RecordingAffordances {
    fn vibrate(&mut self, pattern_ms: &[u64]) {
        self.push(AffordanceCall::Vibrate(pattern_ms.to_vec()));
    }

    fn notify(&mut self, title: &str, body: &str) {
        self.push(AffordanceCall::Notify {
            title: title.to_string(),
            body: body.to_string(),
        });
    }

    fn request_wake_lock(&mut self) {
        self.push(AffordanceCall::WakeLock(true));
    }

    fn release_wake_lock(&mut self) {
        self.push(AffordanceCall::WakeLock(false));
    }

    fn toggle_fullscreen(&mut self) {
        self.push(AffordanceCall::Fullscreen);
    }
}

/// Launcher that records URLs instead of opening them.
#[derive(Debug, Clone, Default)]
pub struct RecordingLauncher {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn open_url(&mut self, url: &str) -> Result<(), PlatformError> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
