//! Bundle of platform capabilities handed to the app.

use std::path::Path;

use crate::adapters::{ArboardClipboard, DirectoryDownload, SystemLauncher, TerminalAffordances};
use crate::error::PlatformError;
use crate::traits::{
    Affordances, Clipboard, FileDownload, Launcher, NoClipboard, NoShare, ShareTarget, Silent,
};

/// Capabilities the app calls into. Every slot can be swapped, which is
/// how tests observe clipboard writes, downloads and opened links.
pub struct Platform {
    pub clipboard: Box<dyn Clipboard>,
    pub share: Box<dyn ShareTarget>,
    pub download: Box<dyn FileDownload>,
    pub affordances: Box<dyn Affordances>,
    pub launcher: Box<dyn Launcher>,
}

impl Platform {
    /// Real adapters for an interactive terminal session.
    pub fn system(download_dir: Option<&Path>) -> Self {
        Self {
            clipboard: Box::new(ArboardClipboard::new()),
            share: Box::new(NoShare),
            download: Box::new(DirectoryDownload::resolve(download_dir)),
            affordances: Box::new(TerminalAffordances::new()),
            launcher: Box::new(SystemLauncher),
        }
    }

    /// Nothing works and nothing happens.
    pub fn inert() -> Self {
        Self {
            clipboard: Box::new(NoClipboard),
            share: Box::new(NoShare),
            download: Box::new(NoDownload),
            affordances: Box::new(Silent),
            launcher: Box::new(NoLauncher),
        }
    }

    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    pub fn with_share(mut self, share: impl ShareTarget + 'static) -> Self {
        self.share = Box::new(share);
        self
    }

    pub fn with_download(mut self, download: impl FileDownload + 'static) -> Self {
        self.download = Box::new(download);
        self
    }

    pub fn with_affordances(mut self, affordances: impl Affordances + 'static) -> Self {
        self.affordances = Box::new(affordances);
        self
    }

    pub fn with_launcher(mut self, launcher: impl Launcher + 'static) -> Self {
        self.launcher = Box::new(launcher);
        self
    }
}

struct NoDownload;

impl FileDownload for NoDownload {
    fn save(
        &mut self,
        _content: &str,
        _file_name: &str,
        _mime_type: &str,
    ) -> Result<std::path::PathBuf, PlatformError> {
        Err(PlatformError::unavailable("File download"))
    }
}

struct NoLauncher;

impl Launcher for NoLauncher {
    fn open_url(&mut self, _url: &str) -> Result<(), PlatformError> {
        Err(PlatformError::unavailable("Browser"))
    }
}
