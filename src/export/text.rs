use std::fmt::Write;

use super::yes_no;
use crate::models::UserRecord;
use crate::state::FavoritesStore;

const RULE_WIDTH: usize = 50;

/// One block per record, each closed by a rule line of dashes.
pub(super) fn render(records: &[&UserRecord], favorites: &FavoritesStore) -> String {
    records
        .iter()
        .map(|record| block(record, favorites.contains(record.id)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn block(record: &UserRecord, favorite: bool) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{} (@{})", record.name, record.username);
    let _ = writeln!(out, "Email: {}", record.email);
    let _ = writeln!(out, "Phone: {}", record.phone);
    let _ = writeln!(out, "Website: {}", record.website);
    let _ = writeln!(out, "Location: {}", location(record));
    let _ = writeln!(out, "Company: {}", record.company.name);
    let _ = writeln!(out, "Favorite: {}", yes_no(favorite));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out
}

fn location(record: &UserRecord) -> String {
    let address = &record.address;
    if address.country.is_empty() {
        address.city.clone()
    } else {
        format!("{}, {}", address.city, address.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Address;

    fn clementine() -> UserRecord {
        UserRecord {
            id: 3,
            name: "Clementine Bauch".to_string(),
            username: "Samantha".to_string(),
            email: "Nathan@yesenia.net".to_string(),
            phone: "1-463-123-4447".to_string(),
            website: "ramiro.info".to_string(),
            address: Address {
                city: "McKenziehaven".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_block_layout() {
        let mut favorites = FavoritesStore::new();
        favorites.toggle(3);

        let text = render(&[&clementine()], &favorites);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Clementine Bauch (@Samantha)",
                "Email: Nathan@yesenia.net",
                "Phone: 1-463-123-4447",
                "Website: ramiro.info",
                "Location: McKenziehaven",
                "Company: ",
                "Favorite: Yes",
                "--------------------------------------------------",
            ]
        );
    }

    #[test]
    fn test_location_includes_country_when_known() {
        let mut record = clementine();
        record.address.country = "Norway".to_string();
        assert_eq!(location(&record), "McKenziehaven, Norway");
    }

    #[test]
    fn test_blocks_separated_by_rule() {
        let a = clementine();
        let mut b = clementine();
        b.id = 4;
        b.name = "Patricia Lebsack".to_string();

        let text = render(&[&a, &b], &FavoritesStore::new());
        let rules = text.lines().filter(|l| *l == "-".repeat(50)).count();

        assert_eq!(rules, 2);
        assert!(text.contains("-\nPatricia Lebsack (@Samantha)"));
        assert!(text.ends_with(&"-".repeat(50)));
    }
}
