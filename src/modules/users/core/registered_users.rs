use crate::modules::users::core::user_record::UserRecord;
use serde::{Deserialize, Serialize};

/// The ordered, append-only collection of registered users. This is the
/// whole persisted state of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegisteredUsers {
    records: Vec<UserRecord>,
}

impl RegisteredUsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: UserRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UserRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Id for a record created at `now_millis`. Falls forward past the
    /// highest existing id so two records made within the same millisecond
    /// (or after a clock step backwards) stay unique and increasing.
    /// `None` once the highest id is `i64::MAX`.
    pub fn next_id(&self, now_millis: i64) -> Option<i64> {
        match self.records.iter().map(|r| r.id).max() {
            Some(max) if now_millis <= max => max.checked_add(1),
            _ => Some(now_millis),
        }
    }
}

impl From<Vec<UserRecord>> for RegisteredUsers {
    fn from(records: Vec<UserRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a RegisteredUsers {
    type Item = &'a UserRecord;
    type IntoIter = std::slice::Iter<'a, UserRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
