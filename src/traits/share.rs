//! Native share capability with clipboard fallback.

use super::clipboard::Clipboard;
use crate::error::PlatformError;
use crate::models::UserRecord;

/// What gets handed to a share target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: Option<String>,
}

impl SharePayload {
    /// Payload for sharing a single user.
    pub fn for_user(user: &UserRecord) -> Self {
        Self {
            title: user.name.clone(),
            text: format!("Check out {}", user.share_line()),
            url: user.website_url(),
        }
    }
}

/// Result of asking the platform to share something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// The user dismissed the share sheet. Not an error.
    Cancelled,
    Unavailable,
    Failed(String),
}

pub trait ShareTarget: Send {
    fn share(&mut self, payload: &SharePayload) -> ShareOutcome;
}

/// Share target for terminals, which have no share sheet.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoShare;

impl ShareTarget for NoShare {
    fn share(&mut self, _payload: &SharePayload) -> ShareOutcome {
        ShareOutcome::Unavailable
    }
}

/// How a share request was finally satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareResolution {
    Shared,
    Cancelled,
    /// Native share was missing or failed; `fallback` went to the clipboard.
    Copied,
}

/// Share `user` natively, falling back to copying `"name - email"`.
pub fn share_or_copy(
    user: &UserRecord,
    target: &mut dyn ShareTarget,
    clipboard: &mut dyn Clipboard,
) -> Result<ShareResolution, PlatformError> {
    match target.share(&SharePayload::for_user(user)) {
        ShareOutcome::Shared => Ok(ShareResolution::Shared),
        ShareOutcome::Cancelled => Ok(ShareResolution::Cancelled),
        outcome => {
            if let ShareOutcome::Failed(reason) = &outcome {
                tracing::warn!("Native share failed, copying instead: {}", reason);
            }
            clipboard.write_text(&user.share_line())?;
            Ok(ShareResolution::Copied)
        }
    }
}
