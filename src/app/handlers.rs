//! Message and key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use crate::view_state::ViewAction;

use super::{App, AppMessage, Focus, Overlay, ToastKind};

impl App {
    /// Handle an incoming async message.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::UsersLoaded { ticket, records } => {
                if !self.fetch.succeed(ticket) {
                    debug!("Dropping stale fetch result #{}", ticket.generation());
                    return;
                }
                info!("Loaded {} users", records.len());
                self.fetch_task = None;
                self.records = records;
                self.selected = 0;
                if matches!(self.overlay, Overlay::Detail(id) if self.records.get(id).is_none()) {
                    self.overlay = Overlay::None;
                }
                self.dispatch(ViewAction::DataChanged);
                self.show_toast("Users loaded successfully!", ToastKind::Success);
            }
            AppMessage::UsersFailed { ticket, error } => {
                if !self.fetch.fail(ticket, error.clone()) {
                    debug!("Dropping stale fetch error #{}", ticket.generation());
                    return;
                }
                warn!("Fetch failed [{}]: {}", error.error_code(), error);
                self.fetch_task = None;
                self.show_toast("Failed to load users", ToastKind::Error);
            }
        }
        self.mark_dirty();
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }
        self.mark_dirty();

        match self.overlay {
            Overlay::Export(_) => self.handle_export_key(key),
            Overlay::Detail(_) => self.handle_detail_key(key),
            Overlay::Help => self.close_overlay(),
            Overlay::None => match self.focus {
                Focus::Search => self.handle_search_key(key),
                Focus::Cards => self.handle_cards_key(key),
            },
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => self.dispatch(ViewAction::ClearSearch),
            KeyCode::Char(c) if !ctrl => self.dispatch(ViewAction::PushSearchChar(c)),
            KeyCode::Backspace => self.dispatch(ViewAction::PopSearchChar),
            KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => self.focus = Focus::Cards,
            _ => {}
        }
    }

    fn handle_cards_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('f') => self.fetch_users(),
            KeyCode::Char('h') => self.hide_users(),
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('F') => self.toggle_fullscreen(),
            KeyCode::Char('?') => self.toggle_help(),
            KeyCode::Char('e') => self.open_export_dialog(),
            KeyCode::Char('s') => self.dispatch(ViewAction::CycleSortKey),
            KeyCode::Char('o') => self.dispatch(ViewAction::ToggleSortDirection),
            KeyCode::Char('v') => self.dispatch(ViewAction::ToggleFavoritesOnly),
            KeyCode::Esc => {
                if !self.view.query.search_term.is_empty() {
                    self.dispatch(ViewAction::ClearSearch);
                }
            }
            // Everything below needs the card list on screen.
            _ if !self.users_visible => {}
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Left | KeyCode::Char('[') => self.dispatch(ViewAction::PrevPage),
            KeyCode::Right | KeyCode::Char(']') => self.dispatch(ViewAction::NextPage),
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap_or(1) as usize;
                self.dispatch(ViewAction::GoToPage(n));
            }
            KeyCode::Char(' ') => self.toggle_selected_favorite(),
            KeyCode::Enter => self.open_detail(),
            KeyCode::Char('c') => self.copy_email(),
            KeyCode::Char('S') => self.share_user(),
            KeyCode::Char('w') => self.open_website(),
            KeyCode::Char('m') => self.open_map(),
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.close_overlay(),
            KeyCode::Char(' ') => self.toggle_selected_favorite(),
            KeyCode::Char('c') => self.copy_email(),
            KeyCode::Char('p') => self.copy_phone(),
            KeyCode::Char('S') => self.share_user(),
            KeyCode::Char('w') => self.open_website(),
            KeyCode::Char('m') => self.open_map(),
            _ => {}
        }
    }

    fn handle_export_key(&mut self, key: KeyEvent) {
        let Overlay::Export(mut dialog) = self.overlay else {
            return;
        };
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.close_overlay();
                return;
            }
            KeyCode::Enter | KeyCode::Char('d') => {
                self.export_download();
                return;
            }
            KeyCode::Char('c') => {
                self.export_copy();
                return;
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => {
                dialog.next_format()
            }
            KeyCode::BackTab | KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => {
                dialog.previous_format()
            }
            KeyCode::Char(' ') => dialog.toggle_favorites_only(),
            _ => return,
        }
        self.overlay = Overlay::Export(dialog);
    }
}
