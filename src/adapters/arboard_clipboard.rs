//! System clipboard through `arboard`.

use crate::error::PlatformError;
use crate::traits::Clipboard;

/// Clipboard backed by the OS pasteboard (NSPasteboard, X11/Wayland,
/// Windows clipboard).
///
/// The handle is opened lazily on first write and kept for the session,
/// since X11 clipboard contents vanish when their owner is dropped.
#[derive(Default)]
pub struct ArboardClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), PlatformError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| {
                tracing::warn!("Clipboard unavailable: {}", e);
                PlatformError::unavailable("Clipboard")
            })?;
            self.inner = Some(clipboard);
        }

        let clipboard = self
            .inner
            .as_mut()
            .ok_or_else(|| PlatformError::unavailable("Clipboard"))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| PlatformError::Clipboard(e.to_string()))?;

        tracing::debug!("Copied {} bytes to clipboard", text.len());
        Ok(())
    }
}
