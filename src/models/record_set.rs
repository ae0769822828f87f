use std::ops::Deref;
use std::sync::Arc;

use super::UserRecord;

/// Number of records kept from a fetch response.
pub const RECORD_LIMIT: usize = 10;

/// The canonical, ordered collection of fetched users for a session.
///
/// Storage is shared and immutable: replacing the set is a single
/// assignment, so readers never see a half-applied fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Arc<[UserRecord]>,
}

impl RecordSet {
    /// Build a set from records in their original order.
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Build a set from a full fetch response, keeping the first
    /// [`RECORD_LIMIT`] entries.
    pub fn from_response(mut records: Vec<UserRecord>) -> Self {
        records.truncate(RECORD_LIMIT);
        Self::new(records)
    }

    /// Look up a record by id.
    pub fn get(&self, id: u64) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn as_slice(&self) -> &[UserRecord] {
        &self.records
    }
}

impl Deref for RecordSet {
    type Target = [UserRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl From<Vec<UserRecord>> for RecordSet {
    fn from(records: Vec<UserRecord>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64) -> UserRecord {
        UserRecord {
            id,
            name: format!("User {}", id),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_is_empty() {
        let set = RecordSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_from_response_keeps_first_ten_in_order() {
        let set = RecordSet::from_response((1..=15).map(user).collect());
        assert_eq!(set.len(), RECORD_LIMIT);
        let ids: Vec<u64> = set.iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_from_response_short_response() {
        let set = RecordSet::from_response((1..=3).map(user).collect());
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_get_by_id() {
        let set = RecordSet::new(vec![user(4), user(9)]);
        assert_eq!(set.get(9).map(|r| r.name.as_str()), Some("User 9"));
        assert!(set.get(1).is_none());
    }

    #[test]
    fn test_clone_shares_storage() {
        let set = RecordSet::new(vec![user(1)]);
        let cloned = set.clone();
        assert!(std::ptr::eq(set.as_slice(), cloned.as_slice()));
    }
}
