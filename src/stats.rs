//! Dashboard counters shown above the card list.

use std::collections::HashSet;

use crate::models::UserRecord;
use crate::state::FavoritesStore;

/// Aggregate numbers over the whole record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeckStats {
    pub total: usize,
    pub favorites: usize,
    pub cities: usize,
    pub companies: usize,
}

impl DeckStats {
    pub fn collect(records: &[UserRecord], favorites: &FavoritesStore) -> Self {
        let cities: HashSet<&str> = records.iter().map(|r| r.address.city.as_str()).collect();
        let companies: HashSet<&str> = records.iter().map(|r| r.company.name.as_str()).collect();

        Self {
            total: records.len(),
            favorites: favorites.count(),
            cities: cities.len(),
            companies: companies.len(),
        }
    }

    /// Label/value pairs in display order.
    pub fn tiles(&self) -> [(&'static str, usize); 4] {
        [
            ("Total Users", self.total),
            ("Favorites", self.favorites),
            ("Cities", self.cities),
            ("Companies", self.companies),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, Company};

    fn user(id: u64, city: &str, company: &str) -> UserRecord {
        UserRecord {
            id,
            address: Address {
                city: city.to_string(),
                ..Default::default()
            },
            company: Company {
                name: company.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_collect_counts_distinct_values() {
        let records = vec![
            user(1, "Gwenborough", "Romaguera-Crona"),
            user(2, "Wisokyburgh", "Deckow-Crist"),
            user(3, "Gwenborough", "Romaguera-Jacobson"),
        ];
        let favorites: FavoritesStore = [2].into_iter().collect();

        let stats = DeckStats::collect(&records, &favorites);

        assert_eq!(
            stats,
            DeckStats {
                total: 3,
                favorites: 1,
                cities: 2,
                companies: 3,
            }
        );
    }

    #[test]
    fn test_empty_set() {
        let stats = DeckStats::collect(&[], &FavoritesStore::new());
        assert_eq!(stats, DeckStats::default());
        assert_eq!(stats.tiles()[0], ("Total Users", 0));
    }
}
