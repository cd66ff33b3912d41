// The single user facing feedback message. A new notification always
// replaces the previous one; there is no queue or history.

pub const REGISTERED_MESSAGE: &str = "User registered successfully!";
pub const LOAD_FAILED_MESSAGE: &str = "Error loading saved data.";
pub const SAVE_FAILED_MESSAGE: &str = "Error saving data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn registered() -> Self {
        Self::success(REGISTERED_MESSAGE)
    }

    pub fn load_failed() -> Self {
        Self::error(LOAD_FAILED_MESSAGE)
    }

    pub fn save_failed() -> Self {
        Self::error(SAVE_FAILED_MESSAGE)
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}
