//! Clipboard capability.

use crate::error::PlatformError;

/// Write-only access to the system clipboard.
///
/// Only plain text is ever copied: export output and the
/// `"name - email"` share fallback.
pub trait Clipboard: Send {
    fn write_text(&mut self, text: &str) -> Result<(), PlatformError>;
}

/// Clipboard for environments without one. Every write fails with
/// [`PlatformError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), PlatformError> {
        Err(PlatformError::unavailable("Clipboard"))
    }
}
