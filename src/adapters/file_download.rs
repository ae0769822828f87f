//! Export "downloads" written into a directory.

use std::path::{Path, PathBuf};

use crate::error::PlatformError;
use crate::traits::FileDownload;

/// Saves export files into a fixed directory, overwriting files of the
/// same name.
#[derive(Debug, Clone)]
pub struct DirectoryDownload {
    dir: PathBuf,
}

impl DirectoryDownload {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The configured directory, else the user's download directory, else
    /// the current directory.
    pub fn resolve(configured: Option<&Path>) -> Self {
        let dir = configured
            .map(Path::to_path_buf)
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileDownload for DirectoryDownload {
    fn save(
        &mut self,
        content: &str,
        file_name: &str,
        mime_type: &str,
    ) -> Result<PathBuf, PlatformError> {
        let path = self.dir.join(file_name);
        let to_error = |e: std::io::Error| PlatformError::Download {
            path: path.clone(),
            message: e.to_string(),
        };

        std::fs::create_dir_all(&self.dir).map_err(to_error)?;
        std::fs::write(&path, content).map_err(to_error)?;

        tracing::info!("Saved {} ({}) to {}", file_name, mime_type, path.display());
        Ok(path)
    }
}
