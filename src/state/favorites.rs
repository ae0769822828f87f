//! In-memory favorites set.

use std::collections::HashSet;

/// Set of record ids the user marked as favorite.
///
/// Lives for the session only. Ids left over from a previous fetch are
/// kept; they simply never match a record of the new set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesStore {
    ids: HashSet<u64>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id` and return the resulting state
    /// (`true` when the id is now a favorite).
    pub fn toggle(&mut self, id: u64) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorite ids in ascending order.
    pub fn ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl FromIterator<u64> for FavoritesStore {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_returns_new_membership() {
        let mut favorites = FavoritesStore::new();
        assert!(favorites.toggle(3));
        assert!(favorites.contains(3));
        assert!(!favorites.toggle(3));
        assert!(!favorites.contains(3));
    }

    #[test]
    fn test_toggle_pair_restores_state() {
        let mut favorites: FavoritesStore = [1, 2].into_iter().collect();
        for id in [1, 2, 5] {
            let before = favorites.contains(id);
            favorites.toggle(id);
            favorites.toggle(id);
            assert_eq!(favorites.contains(id), before, "id {}", id);
        }
        assert_eq!(favorites.count(), 2);
    }

    #[test]
    fn test_count_and_empty() {
        let mut favorites = FavoritesStore::new();
        assert!(favorites.is_empty());
        favorites.toggle(7);
        favorites.toggle(3);
        assert_eq!(favorites.count(), 2);
        assert!(!favorites.is_empty());
    }

    #[test]
    fn test_ids_sorted() {
        let favorites: FavoritesStore = [9, 1, 4].into_iter().collect();
        assert_eq!(favorites.ids(), vec![1, 4, 9]);
    }
}
