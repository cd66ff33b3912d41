use crate::modules::users::core::user_record::UserRecord;

/// Stored value as written by the form before any record was re-saved by this crate.
pub const STORED_REGISTERED_USERS: &str = include_str!("json/registered_users.json");

pub fn make_user_record(id: i64, name: &str) -> UserRecord {
    UserRecord {
        id,
        name: name.to_string(),
        email: format!("{}@x.com", name.to_lowercase()),
        phone: String::new(),
    }
}
