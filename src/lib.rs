pub mod shared {
    pub mod core {
        pub mod clock;
    }
    pub mod infrastructure {
        pub mod key_value_store;
    }
}

pub mod modules {
    pub mod users {
        pub mod core {
            pub mod notification;
            pub mod registered_users;
            pub mod user_record;
        }
        pub mod use_cases {
            pub mod register_user {
                pub mod decide;
                pub mod draft;
            }
            pub mod list_registered_users {
                pub mod handler;
                pub mod projection;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod registered_users_store;
            }
        }
        pub mod form {
            pub mod controller;
            pub mod state;
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod test_support {
    pub mod fixtures {
        pub mod drafts;
        pub mod records;
    }
}
