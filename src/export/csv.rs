use super::yes_no;
use crate::models::UserRecord;
use crate::state::FavoritesStore;

const HEADER: [&str; 8] = [
    "Name", "Username", "Email", "Phone", "Website", "City", "Company", "Favorite",
];

/// Header plus one row per record. Every field is quoted; rows are joined
/// with `\n` and there is no trailing newline.
pub(super) fn render(records: &[&UserRecord], favorites: &FavoritesStore) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(row(&HEADER));
    for record in records {
        lines.push(row(&[
            record.name.as_str(),
            record.username.as_str(),
            record.email.as_str(),
            record.phone.as_str(),
            record.website.as_str(),
            record.address.city.as_str(),
            record.company.name.as_str(),
            yes_no(favorites.contains(record.id)),
        ]));
    }
    lines.join("\n")
}

fn row(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| quote(field))
        .collect::<Vec<_>>()
        .join(",")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_doubles_embedded_quotes() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(quote(""), "\"\"");
    }

    #[test]
    fn test_row_layout() {
        let record = UserRecord {
            id: 7,
            name: "Kurtis Weissnat".to_string(),
            username: "Elwyn.Skiles".to_string(),
            email: "Telly.Hoeger@billy.biz".to_string(),
            phone: "210.067.6132".to_string(),
            website: "elvis.io".to_string(),
            ..Default::default()
        };
        let mut favorites = FavoritesStore::new();
        favorites.toggle(7);

        let csv = render(&[&record], &favorites);
        let lines: Vec<&str> = csv.split('\n').collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "\"Kurtis Weissnat\",\"Elwyn.Skiles\",\"Telly.Hoeger@billy.biz\",\"210.067.6132\",\"elvis.io\",\"\",\"\",\"Yes\""
        );
    }

    #[test]
    fn test_favorite_column_follows_store() {
        let record = UserRecord {
            id: 1,
            ..Default::default()
        };
        let csv = render(&[&record], &FavoritesStore::new());
        assert!(csv.ends_with(",\"No\""));
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_comma_inside_field_stays_in_one_column() {
        let record = UserRecord {
            id: 1,
            name: "Graham, Leanne".to_string(),
            ..Default::default()
        };
        let csv = render(&[&record], &FavoritesStore::new());
        assert!(csv.contains("\"Graham, Leanne\","));
    }
}
