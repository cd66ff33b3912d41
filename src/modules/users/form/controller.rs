// Form controller orchestrates the registration flow.
//
// Responsibilities
// - Load the stored collection once, at start.
// - Keep the draft, tab and notification in an explicit FormState.
// - On submit, call the decider, append on success and save the full collection right away.
// - Turn every error into the current notification. None of them stop the controller.

use crate::modules::users::adapters::outbound::registered_users_store::RegisteredUsersStore;
use crate::modules::users::core::notification::Notification;
use crate::modules::users::core::registered_users::RegisteredUsers;
use crate::modules::users::core::user_record::UserRecord;
use crate::modules::users::form::state::{FormState, Tab};
use crate::modules::users::use_cases::list_registered_users::handler::list_registered_users;
use crate::modules::users::use_cases::list_registered_users::projection::UserRow;
use crate::modules::users::use_cases::register_user::decide::{ValidationError, decide_register};
use crate::modules::users::use_cases::register_user::draft::Draft;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use tracing::{info, warn};

pub struct FormController<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    state: FormState,
    store: RegisteredUsersStore<S>,
    clock: C,
}

impl<S, C> FormController<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    pub fn start(store: RegisteredUsersStore<S>, clock: C) -> Self {
        let mut state = FormState::default();
        match store.load() {
            Ok(users) => {
                info!(count = users.len(), "loaded registered users");
                state.users = users;
            }
            Err(err) => {
                warn!(error = %err, "failed to load registered users, starting empty");
                state.notification = Some(Notification::load_failed());
            }
        }
        Self {
            state,
            store,
            clock,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn users(&self) -> &RegisteredUsers {
        &self.state.users
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.state.notification.as_ref()
    }

    pub fn store(&self) -> &RegisteredUsersStore<S> {
        &self.store
    }

    pub fn rows(&self) -> Vec<UserRow> {
        list_registered_users(&self.state.users)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state.draft.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.state.draft.email = email.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.state.draft.phone = phone.into();
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.state.tab = tab;
        self.state.notification = None;
    }

    pub fn dismiss_notification(&mut self) {
        self.state.notification = None;
    }

    /// Submits the draft currently held in the form.
    pub fn submit_form(&mut self) -> Result<UserRecord, ValidationError> {
        let draft = std::mem::take(&mut self.state.draft);
        self.submit(draft)
    }

    /// On rejection the draft stays in the form; on success the form is cleared.
    /// A failed save replaces the success notification but keeps the record.
    pub fn submit(&mut self, draft: Draft) -> Result<UserRecord, ValidationError> {
        match decide_register(&self.state.users, &draft, self.clock.now_millis()) {
            Ok(record) => {
                self.state.users.append(record.clone());
                self.state.draft = Draft::default();
                self.state.notification = Some(Notification::registered());
                info!(id = record.id, total = self.state.users.len(), "registered user");
                self.persist();
                Ok(record)
            }
            Err(reason) => {
                warn!(error = %reason, "rejected registration");
                self.state.draft = draft;
                self.state.notification = Some(Notification::error(reason.to_string()));
                Err(reason)
            }
        }
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.save(&self.state.users) {
            warn!(error = %err, "failed to save registered users, keeping them in memory");
            self.state.notification = Some(Notification::save_failed());
        }
    }
}
