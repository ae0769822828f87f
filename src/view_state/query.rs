//! Search, sort and filter inputs of the view pipeline.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::models::UserRecord;

/// Field the record list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Name,
    Email,
    Username,
    /// Orders by `address.city`.
    City,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::Email,
        SortKey::Username,
        SortKey::City,
    ];

    /// The raw field value this key compares on.
    pub fn field<'a>(&self, record: &'a UserRecord) -> &'a str {
        match self {
            SortKey::Name => &record.name,
            SortKey::Email => &record.email,
            SortKey::Username => &record.username,
            SortKey::City => &record.address.city,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Email => "Email",
            SortKey::Username => "Username",
            SortKey::City => "City",
        }
    }

    /// Next key in selector order, wrapping around.
    pub fn next(&self) -> SortKey {
        match self {
            SortKey::Name => SortKey::Email,
            SortKey::Email => SortKey::Username,
            SortKey::Username => SortKey::City,
            SortKey::City => SortKey::Name,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "email" => Ok(SortKey::Email),
            "username" => Ok(SortKey::Username),
            // the web selector labelled the city option "address"
            "city" | "address" => Ok(SortKey::City),
            _ => Err(ParseError::new("sort key", s, "name, email, username, city")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(&self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ParseError::new("sort direction", s, "asc, desc")),
        }
    }
}

/// Transient view inputs. Defaults: no search, name ascending, all users.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub search_term: String,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    pub favorites_only: bool,
}

impl ViewQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_sort(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = key;
        self.sort_direction = direction;
        self
    }

    pub fn with_favorites_only(mut self, favorites_only: bool) -> Self {
        self.favorites_only = favorites_only;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = ViewQuery::default();
        assert!(query.search_term.is_empty());
        assert_eq!(query.sort_key, SortKey::Name);
        assert_eq!(query.sort_direction, SortDirection::Ascending);
        assert!(!query.favorites_only);
    }

    #[test]
    fn test_city_key_reads_address() {
        let mut record = UserRecord::default();
        record.address.city = "Gwenborough".to_string();
        assert_eq!(SortKey::City.field(&record), "Gwenborough");
    }

    #[test]
    fn test_next_cycles_all_keys() {
        let mut key = SortKey::Name;
        let mut seen = Vec::new();
        for _ in 0..SortKey::ALL.len() {
            seen.push(key);
            key = key.next();
        }
        assert_eq!(key, SortKey::Name);
        assert_eq!(seen, SortKey::ALL.to_vec());
    }

    #[test]
    fn test_parse_sort_key() {
        assert_eq!("Email".parse::<SortKey>().unwrap(), SortKey::Email);
        assert_eq!("address".parse::<SortKey>().unwrap(), SortKey::City);
        assert!("phone".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_parse_sort_direction() {
        assert_eq!(
            "desc".parse::<SortDirection>().unwrap(),
            SortDirection::Descending
        );
        assert_eq!(
            "Ascending".parse::<SortDirection>().unwrap(),
            SortDirection::Ascending
        );
        assert!("up".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_direction_toggle() {
        assert_eq!(
            SortDirection::Ascending.toggled(),
            SortDirection::Descending
        );
        assert_eq!(
            SortDirection::Descending.toggled().toggled(),
            SortDirection::Descending
        );
    }
}
