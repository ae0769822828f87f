//! View pipeline properties: search, favorites filter, ordering and
//! pagination over realistic record sets.

mod common;

use common::{favorites, ten_users, users};
use userdeck::models::UserRecord;
use userdeck::state::FavoritesStore;
use userdeck::view_state::{
    compute, matches_search, page, total_pages, SortDirection, SortKey, ViewAction, ViewQuery,
    ViewState,
};

fn ids(list: &[&UserRecord]) -> Vec<u64> {
    list.iter().map(|r| r.id).collect()
}

#[test]
fn test_search_is_sound_and_complete() {
    let records = ten_users();
    let none = FavoritesStore::new();

    for term in ["an", "BIZ", "kurtis", "elwyn", "zzz", ""] {
        let query = ViewQuery::new().with_search(term);
        let result = compute(&records, &query, &none);
        let needle = term.to_lowercase();

        for record in &records {
            let hit = record.name.to_lowercase().contains(&needle)
                || record.email.to_lowercase().contains(&needle)
                || record.username.to_lowercase().contains(&needle);
            assert_eq!(
                result.iter().any(|r| r.id == record.id),
                hit,
                "term {:?} vs {}",
                term,
                record.name
            );
        }
    }
}

#[test]
fn test_search_ignores_other_fields() {
    let records = ten_users();
    // City only, never matched.
    let result = compute(
        &records,
        &ViewQuery::new().with_search("Gwenborough"),
        &FavoritesStore::new(),
    );
    assert!(result.is_empty());
}

#[test]
fn test_clearing_search_restores_full_list() {
    let records = ten_users();
    let none = FavoritesStore::new();
    let before = ids(&compute(&records, &ViewQuery::new(), &none));

    let state = ViewState::new()
        .reduce(ViewAction::SetSearch("clem".to_string()), 10)
        .reduce(ViewAction::ClearSearch, 2);
    let after = ids(&state.derive(&records, &none).filtered);

    assert_eq!(before, after);
}

#[test]
fn test_sort_orders_each_key() {
    let records = ten_users();
    let none = FavoritesStore::new();

    for key in [SortKey::Name, SortKey::Email, SortKey::Username, SortKey::City] {
        let asc = compute(
            &records,
            &ViewQuery::new().with_sort(key, SortDirection::Ascending),
            &none,
        );
        for pair in asc.windows(2) {
            assert!(
                key.field(pair[0]).to_lowercase() <= key.field(pair[1]).to_lowercase(),
                "{:?} ascending",
                key
            );
        }

        let desc = compute(
            &records,
            &ViewQuery::new().with_sort(key, SortDirection::Descending),
            &none,
        );
        for pair in desc.windows(2) {
            assert!(
                key.field(pair[0]).to_lowercase() >= key.field(pair[1]).to_lowercase(),
                "{:?} descending",
                key
            );
        }
    }
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    // Users 1, 11 and 12 share a city.
    let records = users(12);
    let result = compute(
        &records,
        &ViewQuery::new().with_sort(SortKey::City, SortDirection::Ascending),
        &FavoritesStore::new(),
    );
    let gwenborough: Vec<u64> = result
        .iter()
        .filter(|r| r.address.city == "Gwenborough")
        .map(|r| r.id)
        .collect();
    assert_eq!(gwenborough, vec![1, 11, 12]);
}

#[test]
fn test_sort_ignores_case() {
    let mut records = users(2);
    records[0].name = "bravo".to_string();
    records[1].name = "Alpha".to_string();
    let result = compute(&records, &ViewQuery::new(), &FavoritesStore::new());
    assert_eq!(ids(&result), vec![2, 1]);
}

#[test]
fn test_favorites_only_filter() {
    let records = ten_users();
    let favs = favorites(&[3, 7]);
    let query = ViewQuery::new().with_favorites_only(true);

    let all = ViewState::new().derive(&records, &favs);
    assert_eq!(all.filtered[0].name, "Chelsey Dietrich");
    assert_eq!(all.page.total_pages, 2);

    let view = ViewState::with_query(query).derive(&records, &favs);

    assert_eq!(view.filtered_count(), 2);
    assert!(view.filtered.iter().all(|r| favs.contains(r.id)));
    assert_eq!(ids(&view.filtered), vec![3, 7]);
    assert_eq!(view.page.total_pages, 1);
    assert_eq!(view.page_items().len(), 2);
}

#[test]
fn test_stale_favorite_ids_are_harmless() {
    let records = users(3);
    let favs = favorites(&[2, 99]);
    let result = compute(
        &records,
        &ViewQuery::new().with_favorites_only(true),
        &favs,
    );
    assert_eq!(ids(&result), vec![2]);
}

#[test]
fn test_toggle_twice_restores_membership() {
    let mut favs = favorites(&[1]);
    for id in [1, 5] {
        let before = favs.contains(id);
        favs.toggle(id);
        favs.toggle(id);
        assert_eq!(favs.contains(id), before);
    }
    assert_eq!(favs.count(), 1);
}

#[test]
fn test_pages_cover_filtered_list_exactly_once() {
    let records = users(12);
    let filtered = compute(&records, &ViewQuery::new(), &FavoritesStore::new());
    let pages = total_pages(filtered.len(), 5);

    let mut seen = Vec::new();
    for n in 1..=pages {
        let slice = page(&filtered, n, 5);
        assert!(slice.len() <= 5);
        seen.extend(ids(slice));
    }
    assert_eq!(seen, ids(&filtered));
}

#[test]
fn test_twelve_items_make_three_pages_and_clamp() {
    let records = users(12);
    let none = FavoritesStore::new();

    let view = ViewState::new().derive(&records, &none);
    assert_eq!(view.page.total_pages, 3);

    let state = ViewState::new().reduce(ViewAction::GoToPage(5), view.filtered_count());
    let view = state.derive(&records, &none);
    assert_eq!(view.page.number, 3);
    assert_eq!(view.page_items().len(), 2);
}

#[test]
fn test_query_change_resets_to_first_page() {
    let records = users(12);
    let none = FavoritesStore::new();
    let state = ViewState::new().reduce(ViewAction::GoToPage(3), 12);
    assert_eq!(state.page_number, 3);

    let state = state.reduce(ViewAction::ToggleSortDirection, 12);
    assert_eq!(state.derive(&records, &none).page.number, 1);
}

#[test]
fn test_empty_records_yield_single_empty_page() {
    let view = ViewState::new().derive(&[], &FavoritesStore::new());
    assert!(view.filtered.is_empty());
    assert!(view.page_items().is_empty());
    assert_eq!(view.page.total_pages, 1);
}

#[test]
fn test_matches_search_helper() {
    let records = ten_users();
    assert!(matches_search(&records[0], "bret"));
    assert!(matches_search(&records[0], "APRIL"));
    assert!(!matches_search(&records[0], "Howell"));
}
