//! Opening URLs in the user's browser.

use crate::error::PlatformError;

pub trait Launcher: Send {
    fn open_url(&mut self, url: &str) -> Result<(), PlatformError>;
}
