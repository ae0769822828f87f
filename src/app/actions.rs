//! User-triggered actions for the App.
//!
//! Everything here is synchronous except [`App::fetch_users`], which spawns
//! the request and reports back through `message_tx`. Platform failures end
//! up as toasts and never propagate.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::export::ExportRequest;
use crate::traits::{share_or_copy, ShareResolution};
use crate::view_state::ViewAction;

use super::{App, AppMessage, ExportDialog, Overlay, ToastKind};

/// Haptic pulse for favorites and copies.
const PULSE_MS: [u64; 1] = [50];

impl App {
    // ========================================================================
    // Fetch
    // ========================================================================

    /// Start fetching the record set. A fetch already in flight is aborted
    /// and its result, should it still arrive, is discarded.
    pub fn fetch_users(&mut self) {
        let ticket = self.fetch.begin();
        if let Some(previous) = self.fetch_task.take() {
            previous.abort();
        }
        self.users_visible = true;
        self.mark_dirty();

        let source = Arc::clone(&self.source);
        let tx = self.message_tx.clone();
        info!(
            "Fetching users from {} (#{})",
            source.endpoint(),
            ticket.generation()
        );
        self.fetch_task = Some(tokio::spawn(async move {
            let msg = match source.fetch().await {
                Ok(records) => AppMessage::UsersLoaded { ticket, records },
                Err(error) => AppMessage::UsersFailed { ticket, error },
            };
            // Receiver is gone only when the app is shutting down.
            let _ = tx.send(msg);
        }));
    }

    /// Hide the card list. Records and favorites are kept.
    pub fn hide_users(&mut self) {
        self.users_visible = false;
        if matches!(self.overlay, Overlay::Detail(_)) {
            self.overlay = Overlay::None;
        }
        self.mark_dirty();
    }

    // ========================================================================
    // Favorites
    // ========================================================================

    pub fn toggle_favorite(&mut self, id: u64) {
        let added = self.favorites.toggle(id);
        debug!("Favorite {} -> {}", id, added);
        if added {
            self.platform.affordances.vibrate(&PULSE_MS);
            self.show_toast("Added to favorites", ToastKind::Success);
        } else {
            self.show_toast("Removed from favorites", ToastKind::Info);
        }
        self.dispatch(ViewAction::DataChanged);
    }

    pub fn toggle_selected_favorite(&mut self) {
        if let Some(id) = self.focused_user_id() {
            self.toggle_favorite(id);
        }
    }

    // ========================================================================
    // Clipboard and share
    // ========================================================================

    /// Copy `text` and report the outcome as a toast.
    pub fn copy_text(&mut self, text: &str) -> bool {
        match self.platform.clipboard.write_text(text) {
            Ok(()) => {
                self.platform.affordances.vibrate(&PULSE_MS);
                self.show_toast("Copied to clipboard!", ToastKind::Success);
                true
            }
            Err(e) => {
                warn!("Clipboard write failed: {}", e);
                self.show_toast(e.user_message(), ToastKind::Error);
                false
            }
        }
    }

    pub fn copy_email(&mut self) {
        if let Some(email) = self.focused_user().map(|u| u.email.clone()) {
            self.copy_text(&email);
        }
    }

    pub fn copy_phone(&mut self) {
        if let Some(phone) = self.focused_user().map(|u| u.phone.clone()) {
            self.copy_text(&phone);
        }
    }

    /// Share the focused user, copying `"name - email"` when the terminal
    /// has no share target.
    pub fn share_user(&mut self) {
        let Some(user) = self.focused_user().cloned() else {
            return;
        };
        let platform = &mut self.platform;
        let result = share_or_copy(&user, platform.share.as_mut(), platform.clipboard.as_mut());
        match result {
            Ok(ShareResolution::Shared) => {
                self.show_toast("Shared successfully!", ToastKind::Success)
            }
            Ok(ShareResolution::Cancelled) => debug!("Share of {} cancelled", user.id),
            Ok(ShareResolution::Copied) => {
                self.show_toast("Copied to clipboard!", ToastKind::Success)
            }
            Err(e) => {
                warn!("Share fallback failed: {}", e);
                self.show_toast("Failed to share", ToastKind::Error);
            }
        }
    }

    // ========================================================================
    // Links
    // ========================================================================

    pub fn open_website(&mut self) {
        let Some(url) = self.focused_user().and_then(|u| u.website_url()) else {
            self.show_toast("No website listed", ToastKind::Info);
            return;
        };
        self.open_url(&url);
    }

    pub fn open_map(&mut self) {
        if let Some(url) = self.focused_user().map(|u| u.map_url()) {
            self.open_url(&url);
        }
    }

    fn open_url(&mut self, url: &str) {
        info!("Opening {}", url);
        if let Err(e) = self.platform.launcher.open_url(url) {
            warn!("{}", e);
            self.show_toast(e.user_message(), ToastKind::Error);
        }
    }

    // ========================================================================
    // Overlays
    // ========================================================================

    pub fn open_detail(&mut self) {
        if let Some(id) = self.focused_user_id() {
            self.overlay = Overlay::Detail(id);
            self.mark_dirty();
        }
    }

    pub fn open_export_dialog(&mut self) {
        self.overlay = Overlay::Export(ExportDialog::default());
        self.mark_dirty();
    }

    pub fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            Overlay::Help => Overlay::None,
            _ => Overlay::Help,
        };
        self.mark_dirty();
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
        self.mark_dirty();
    }

    // ========================================================================
    // Export
    // ========================================================================

    fn export_request(&self) -> ExportRequest {
        match self.overlay {
            Overlay::Export(dialog) => dialog.request,
            _ => ExportRequest::default(),
        }
    }

    fn render_export(&mut self, request: ExportRequest) -> Option<String> {
        match request.render(&self.records, &self.favorites) {
            Ok(content) => Some(content),
            Err(e) => {
                warn!("Export failed: {}", e);
                self.show_toast("Export failed", ToastKind::Error);
                None
            }
        }
    }

    /// Save the export through the download target and close the dialog.
    pub fn export_download(&mut self) {
        let request = self.export_request();
        let Some(content) = self.render_export(request) else {
            return;
        };
        let format = request.format;
        match self
            .platform
            .download
            .save(&content, format.file_name(), format.mime_type())
        {
            Ok(path) => {
                info!("Exported {} users to {}", self.records.len(), path.display());
                self.platform
                    .affordances
                    .notify("Export saved", &path.display().to_string());
                self.show_toast(
                    format!("Saved {}", path.display()),
                    ToastKind::Success,
                );
                self.close_overlay();
            }
            Err(e) => {
                warn!("{}", e);
                self.show_toast(e.user_message(), ToastKind::Error);
            }
        }
    }

    /// Copy the export to the clipboard and close the dialog.
    pub fn export_copy(&mut self) {
        let request = self.export_request();
        let Some(content) = self.render_export(request) else {
            return;
        };
        if self.copy_text(&content) {
            self.close_overlay();
        }
    }

    // ========================================================================
    // Display
    // ========================================================================

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.mark_dirty();
    }

    pub fn toggle_fullscreen(&mut self) {
        self.platform.affordances.toggle_fullscreen();
    }

    /// Move the selection cursor within the current page.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.view().page_items().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let next = self.selected.min(len - 1) as isize + delta;
        self.selected = next.clamp(0, len as isize - 1) as usize;
        self.mark_dirty();
    }

    /// The user the current action applies to: the detail overlay's user
    /// when open, otherwise the selected card.
    pub(super) fn focused_user(&self) -> Option<&crate::models::UserRecord> {
        self.detail_user().or_else(|| self.selected_user())
    }

    fn focused_user_id(&self) -> Option<u64> {
        self.focused_user().map(|u| u.id)
    }
}
