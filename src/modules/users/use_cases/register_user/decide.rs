// Pure decision function for registration.
//
// Responsibilities
// - Enforce the presence rule: name and email must be non-empty. Nothing is trimmed
//   and the email format is not checked.
// - Build the new record with an id derived from the given time.
// - Never perform input or output.

use crate::modules::users::core::registered_users::RegisteredUsers;
use crate::modules::users::core::user_record::UserRecord;
use crate::modules::users::use_cases::register_user::draft::Draft;

#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name and Email are required!")]
    MissingRequiredFields,

    #[error("No record id is left after {0}")]
    IdsExhausted(i64),
}

pub fn decide_register(
    users: &RegisteredUsers,
    draft: &Draft,
    now_millis: i64,
) -> Result<UserRecord, ValidationError> {
    if draft.name.is_empty() || draft.email.is_empty() {
        return Err(ValidationError::MissingRequiredFields);
    }
    let id = users
        .next_id(now_millis)
        .ok_or(ValidationError::IdsExhausted(i64::MAX))?;
    Ok(UserRecord {
        id,
        name: draft.name.clone(),
        email: draft.email.clone(),
        phone: draft.phone.clone(),
    })
}
