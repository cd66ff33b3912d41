use crate::modules::users::core::user_record::UserRecord;

pub const EMPTY_PHONE_PLACEHOLDER: &str = "-";

/// Read model for one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<&UserRecord> for UserRow {
    fn from(record: &UserRecord) -> Self {
        let phone = if record.phone.is_empty() {
            EMPTY_PHONE_PLACEHOLDER.to_string()
        } else {
            record.phone.clone()
        };
        Self {
            id: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
            phone,
        }
    }
}
