use serde::{Deserialize, Serialize};

/// Postal address attached to a user record.
///
/// The upstream endpoint also ships a `geo` object which is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    /// Not provided by every source; empty when missing.
    pub country: String,
}

impl Address {
    /// Single-line address used for map lookups.
    pub fn map_query(&self) -> String {
        format!("{}, {}, {}", self.street, self.city, self.zipcode)
    }
}

/// Employer attached to a user record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    /// Business slogan.
    pub bs: String,
}

/// A single user as returned by the record source.
///
/// Records are immutable once decoded; identity is the numeric `id`.
/// Missing string fields default to empty so that the view pipeline and
/// the exporters never have to deal with absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub company: Company,
}

impl UserRecord {
    /// Short "name - email" line used for quick sharing.
    pub fn share_line(&self) -> String {
        format!("{} - {}", self.name, self.email)
    }

    /// Website as an absolute URL.
    pub fn website_url(&self) -> Option<String> {
        let site = self.website.trim();
        if site.is_empty() {
            return None;
        }
        if site.starts_with("http://") || site.starts_with("https://") {
            Some(site.to_string())
        } else {
            Some(format!("https://{}", site))
        }
    }

    /// Maps search URL for the record's address.
    pub fn map_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={}",
            urlencoding::encode(&self.address.map_query())
        )
    }
}
