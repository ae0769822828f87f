//! File download capability.

use std::path::PathBuf;

use crate::error::PlatformError;

/// Saves rendered export content under a fixed file name.
pub trait FileDownload: Send {
    /// Persist `content` and return where it ended up.
    fn save(
        &mut self,
        content: &str,
        file_name: &str,
        mime_type: &str,
    ) -> Result<PathBuf, PlatformError>;
}
