//! Browser launcher through the `open` crate.

use crate::error::PlatformError;
use crate::traits::Launcher;

/// Opens URLs with the platform's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open_url(&mut self, url: &str) -> Result<(), PlatformError> {
        tracing::debug!("Opening {}", url);
        open::that(url).map_err(|e| PlatformError::Launch {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
