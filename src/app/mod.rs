//! Application state for the terminal client.
//!
//! [`App`] owns the session: the record set, favorites, the current
//! [`ViewState`], fetch status and UI-only state (focus, overlay, toast).
//! The displayed list is never stored; [`App::view`] derives it on demand.

mod actions;
mod handlers;
mod messages;
mod platform;
mod toast;
mod types;

pub use messages::AppMessage;
pub use platform::Platform;
pub use toast::{Toast, ToastKind, TOAST_TICKS};
pub use types::{ExportDialog, Focus, Overlay};

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::cli::Shortcut;
use crate::models::{RecordSet, UserRecord};
use crate::source::UserSource;
use crate::state::{FavoritesStore, FetchStatus};
use crate::traits::HttpClient;
use crate::view_state::{DerivedView, ViewAction, ViewState};

/// Record source shared with background fetch tasks.
pub type SharedSource = Arc<UserSource<Arc<dyn HttpClient>>>;

/// Main application state
pub struct App {
    /// Current record set (empty until the first fetch succeeds)
    pub records: RecordSet,
    pub favorites: FavoritesStore,
    pub view: ViewState,
    pub fetch: FetchStatus,
    /// Whether the card list is shown ("Hide Users" hides it without
    /// dropping the records)
    pub users_visible: bool,
    pub focus: Focus,
    pub overlay: Overlay,
    /// Selected card within the current page
    pub selected: usize,
    pub toast: Option<Toast>,
    pub dark_mode: bool,
    pub should_quit: bool,
    pub needs_redraw: bool,
    pub tick_count: u64,
    pub platform: Platform,
    source: SharedSource,
    fetch_task: Option<JoinHandle<()>>,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    pub fn new(source: SharedSource, platform: Platform) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            records: RecordSet::default(),
            favorites: FavoritesStore::new(),
            view: ViewState::new(),
            fetch: FetchStatus::new(),
            users_visible: false,
            focus: Focus::default(),
            overlay: Overlay::default(),
            selected: 0,
            toast: None,
            dark_mode: false,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            platform,
            source,
            fetch_task: None,
            message_rx: Some(message_rx),
            message_tx,
        }
    }

    /// Build the shared source from any client.
    pub fn source_from<C: HttpClient + 'static>(client: C, endpoint: &str) -> SharedSource {
        let client: Arc<dyn HttpClient> = Arc::new(client);
        Arc::new(UserSource::new(client, endpoint))
    }

    /// Apply a startup shortcut. Runs once, before the first render.
    pub fn apply_shortcut(&mut self, shortcut: Shortcut) {
        tracing::info!("Applying startup shortcut: {}", shortcut);
        match shortcut {
            Shortcut::Favorites => self.dispatch(ViewAction::SetFavoritesOnly(true)),
            Shortcut::Search => self.focus = Focus::Search,
            Shortcut::Export => self.open_export_dialog(),
        }
    }

    /// The current derived view: filtered, sorted list plus page.
    pub fn view(&self) -> DerivedView<'_> {
        self.view.derive(&self.records, &self.favorites)
    }

    /// Apply a view transition and keep the selection on the page.
    pub fn dispatch(&mut self, action: ViewAction) {
        let filtered_len = self.view().filtered_count();
        let next = self.view.reduce(action, filtered_len);
        if next.page_number != self.view.page_number || next.query != self.view.query {
            self.selected = 0;
        }
        self.view = next;
        self.mark_dirty();
    }

    /// User under the selection cursor on the current page.
    pub fn selected_user(&self) -> Option<&UserRecord> {
        let view = self.view();
        let items = view.page_items();
        let id = items.get(self.selected.min(items.len().saturating_sub(1)))?.id;
        self.records.get(id)
    }

    /// User shown in the detail overlay, if open.
    pub fn detail_user(&self) -> Option<&UserRecord> {
        match self.overlay {
            Overlay::Detail(id) => self.records.get(id),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.fetch.is_loading()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation clock and expire the toast.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self
            .toast
            .as_ref()
            .is_some_and(|t| t.is_expired(self.tick_count))
        {
            self.toast = None;
            self.mark_dirty();
        }
        if self.is_loading() {
            // Spinner frame changes every tick.
            self.mark_dirty();
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toast = Some(Toast::new(message, kind, self.tick_count));
        self.mark_dirty();
    }

    pub fn quit(&mut self) {
        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }
        self.platform.affordances.release_wake_lock();
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::view_state::SortKey;

    pub(crate) fn test_app() -> App {
        let source = App::source_from(MockHttpClient::new(), "https://users.test/users");
        App::new(source, Platform::inert())
    }

    pub(crate) fn users(n: u64) -> Vec<UserRecord> {
        (1..=n)
            .map(|id| UserRecord {
                id,
                name: format!("User {:02}", id),
                username: format!("user{}", id),
                email: format!("user{}@example.com", id),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_new_app_is_empty_and_hidden() {
        let app = test_app();
        assert!(app.records.is_empty());
        assert!(!app.users_visible);
        assert!(!app.fetch.has_loaded());
        assert_eq!(app.view().page.total_pages, 1);
        assert!(app.selected_user().is_none());
        assert!(!app.dark_mode);
    }

    #[test]
    fn test_shortcuts() {
        let mut app = test_app();
        app.apply_shortcut(Shortcut::Favorites);
        assert!(app.view.query.favorites_only);

        let mut app = test_app();
        app.apply_shortcut(Shortcut::Search);
        assert_eq!(app.focus, Focus::Search);

        let mut app = test_app();
        app.apply_shortcut(Shortcut::Export);
        assert!(matches!(app.overlay, Overlay::Export(_)));
    }

    #[test]
    fn test_dispatch_resets_selection_on_page_change() {
        let mut app = test_app();
        app.records = users(12).into();
        app.selected = 3;

        app.dispatch(ViewAction::NextPage);

        assert_eq!(app.view.page_number, 2);
        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_user().map(|u| u.id), Some(6));
    }

    #[test]
    fn test_selected_user_clamps_to_short_page() {
        let mut app = test_app();
        app.records = users(7).into();
        app.dispatch(ViewAction::GoToPage(2));
        app.selected = 4;

        assert_eq!(app.selected_user().map(|u| u.id), Some(7));
    }

    #[test]
    fn test_sort_change_returns_to_first_page() {
        let mut app = test_app();
        app.records = users(12).into();
        app.dispatch(ViewAction::GoToPage(3));

        app.dispatch(ViewAction::SetSortKey(SortKey::Email));

        assert_eq!(app.view.page_number, 1);
    }

    #[test]
    fn test_toast_expires_after_ticks() {
        let mut app = test_app();
        app.show_toast("hello", ToastKind::Info);
        for _ in 0..TOAST_TICKS - 1 {
            app.tick();
        }
        assert!(app.toast.is_some());
        app.tick();
        assert!(app.toast.is_none());
    }
}
