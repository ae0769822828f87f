//! Immutable view state and its reducer.
//!
//! All user inputs that affect the displayed list go through
//! [`ViewState::reduce`], which is the single place enforcing the page
//! reset rule: any change to the query, records or favorites puts the
//! user back on page one.

use crate::models::UserRecord;
use crate::state::FavoritesStore;

use super::page::{page, Page, PAGE_SIZE};
use super::pipeline::compute;
use super::query::{SortDirection, SortKey, ViewQuery};

/// Transition applied to a [`ViewState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SetSearch(String),
    PushSearchChar(char),
    PopSearchChar,
    ClearSearch,
    SetSortKey(SortKey),
    CycleSortKey,
    SetSortDirection(SortDirection),
    ToggleSortDirection,
    SetFavoritesOnly(bool),
    ToggleFavoritesOnly,
    GoToPage(usize),
    NextPage,
    PrevPage,
    /// Records were replaced or the favorites set changed.
    DataChanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub query: ViewQuery,
    pub page_number: usize,
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: ViewQuery::default(),
            page_number: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: ViewQuery) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }

    /// Next state after `action`. `filtered_len` is the size of the
    /// current filtered list and bounds page navigation.
    pub fn reduce(&self, action: ViewAction, filtered_len: usize) -> ViewState {
        let mut next = self.clone();
        match action {
            ViewAction::SetSearch(term) => next.query.search_term = term,
            ViewAction::PushSearchChar(c) => next.query.search_term.push(c),
            ViewAction::PopSearchChar => {
                next.query.search_term.pop();
            }
            ViewAction::ClearSearch => next.query.search_term.clear(),
            ViewAction::SetSortKey(key) => next.query.sort_key = key,
            ViewAction::CycleSortKey => next.query.sort_key = next.query.sort_key.next(),
            ViewAction::SetSortDirection(direction) => next.query.sort_direction = direction,
            ViewAction::ToggleSortDirection => {
                next.query.sort_direction = next.query.sort_direction.toggled()
            }
            ViewAction::SetFavoritesOnly(on) => next.query.favorites_only = on,
            ViewAction::ToggleFavoritesOnly => {
                next.query.favorites_only = !next.query.favorites_only
            }
            ViewAction::GoToPage(n) => {
                next.page_number = Page::resolve(n, self.page_size, filtered_len).number;
                return next;
            }
            ViewAction::NextPage => {
                let target = self.page_number.saturating_add(1);
                next.page_number = Page::resolve(target, self.page_size, filtered_len).number;
                return next;
            }
            ViewAction::PrevPage => {
                let target = self.page_number.saturating_sub(1);
                next.page_number = Page::resolve(target, self.page_size, filtered_len).number;
                return next;
            }
            ViewAction::DataChanged => {}
        }
        next.page_number = 1;
        next
    }

    /// Run the pipeline for the current state.
    pub fn derive<'a>(
        &self,
        records: &'a [UserRecord],
        favorites: &FavoritesStore,
    ) -> DerivedView<'a> {
        let filtered = compute(records, &self.query, favorites);
        let page = Page::resolve(self.page_number, self.page_size, filtered.len());
        DerivedView {
            filtered,
            page,
            total_count: records.len(),
        }
    }
}

/// Result of running the pipeline for one render.
#[derive(Debug, Clone)]
pub struct DerivedView<'a> {
    /// Complete filtered and ordered list.
    pub filtered: Vec<&'a UserRecord>,
    pub page: Page,
    /// Size of the unfiltered record set.
    pub total_count: usize,
}

impl<'a> DerivedView<'a> {
    /// Records on the current page.
    pub fn page_items(&self) -> &[&'a UserRecord] {
        page(&self.filtered, self.page.number, self.page.size)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// "`N` of `M` users" summary.
    pub fn summary(&self) -> String {
        format!("{} of {} users", self.filtered.len(), self.total_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users(n: u64) -> Vec<UserRecord> {
        (1..=n)
            .map(|id| UserRecord {
                id,
                name: format!("User {:02}", id),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_default_state() {
        let state = ViewState::new();
        assert_eq!(state.page_number, 1);
        assert_eq!(state.page_size, PAGE_SIZE);
        assert_eq!(state.query, ViewQuery::default());
    }

    #[test]
    fn test_query_changes_reset_page() {
        let state = ViewState {
            page_number: 3,
            ..ViewState::default()
        };
        let actions = vec![
            ViewAction::SetSearch("a".to_string()),
            ViewAction::PushSearchChar('b'),
            ViewAction::PopSearchChar,
            ViewAction::ClearSearch,
            ViewAction::SetSortKey(SortKey::Email),
            ViewAction::CycleSortKey,
            ViewAction::SetSortDirection(SortDirection::Descending),
            ViewAction::ToggleSortDirection,
            ViewAction::SetFavoritesOnly(true),
            ViewAction::ToggleFavoritesOnly,
            ViewAction::DataChanged,
        ];
        for action in actions {
            let next = state.reduce(action.clone(), 12);
            assert_eq!(next.page_number, 1, "{:?} should reset the page", action);
        }
    }

    #[test]
    fn test_reduce_does_not_mutate_original() {
        let state = ViewState::new();
        let next = state.reduce(ViewAction::PushSearchChar('x'), 0);
        assert_eq!(state.query.search_term, "");
        assert_eq!(next.query.search_term, "x");
    }

    #[test]
    fn test_search_editing() {
        let state = ViewState::new()
            .reduce(ViewAction::PushSearchChar('a'), 0)
            .reduce(ViewAction::PushSearchChar('b'), 0)
            .reduce(ViewAction::PopSearchChar, 0);
        assert_eq!(state.query.search_term, "a");
        let cleared = state.reduce(ViewAction::ClearSearch, 0);
        assert!(cleared.query.search_term.is_empty());
    }

    #[test]
    fn test_go_to_page_clamps() {
        let state = ViewState::new().reduce(ViewAction::GoToPage(5), 12);
        assert_eq!(state.page_number, 3);
        let state = state.reduce(ViewAction::GoToPage(0), 12);
        assert_eq!(state.page_number, 1);
    }

    #[test]
    fn test_next_and_prev_page_stay_in_range() {
        let mut state = ViewState::new();
        for _ in 0..5 {
            state = state.reduce(ViewAction::NextPage, 12);
        }
        assert_eq!(state.page_number, 3);
        for _ in 0..5 {
            state = state.reduce(ViewAction::PrevPage, 12);
        }
        assert_eq!(state.page_number, 1);
    }

    #[test]
    fn test_derive_pages_and_summary() {
        let records = users(12);
        let state = ViewState::new().reduce(ViewAction::GoToPage(3), 12);
        let view = state.derive(&records, &FavoritesStore::new());
        assert_eq!(view.page.total_pages, 3);
        assert_eq!(view.page.number, 3);
        let ids: Vec<u64> = view.page_items().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![11, 12]);
        assert_eq!(view.summary(), "12 of 12 users");
    }

    #[test]
    fn test_derive_clamps_stale_page_number() {
        let records = users(12);
        let state = ViewState {
            page_number: 3,
            ..ViewState::default()
        };
        let state = state.reduce(ViewAction::SetSearch("User 01".to_string()), 12);
        let view = state.derive(&records, &FavoritesStore::new());
        assert_eq!(view.page.number, 1);
        assert_eq!(view.filtered_count(), 1);
    }

    #[test]
    fn test_derive_empty_records() {
        let view = ViewState::new().derive(&[], &FavoritesStore::new());
        assert!(view.filtered.is_empty());
        assert!(view.page_items().is_empty());
        assert_eq!(view.page.total_pages, 1);
        assert_eq!(view.summary(), "0 of 0 users");
    }
}
