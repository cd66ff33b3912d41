use crate::modules::users::core::notification::Notification;
use crate::modules::users::core::registered_users::RegisteredUsers;
use crate::modules::users::use_cases::register_user::draft::Draft;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Register,
    RegisteredUsers,
}

/// Everything the form screen shows, owned by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub tab: Tab,
    pub draft: Draft,
    pub notification: Option<Notification>,
    pub users: RegisteredUsers,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MissingFields {
    pub name: bool,
    pub email: bool,
}

impl FormState {
    /// Required fields to highlight: only while an error is showing and the field is empty.
    pub fn missing_fields(&self) -> MissingFields {
        let showing_error = self.notification.as_ref().is_some_and(Notification::is_error);
        MissingFields {
            name: showing_error && self.draft.name.is_empty(),
            email: showing_error && self.draft.email.is_empty(),
        }
    }
}
