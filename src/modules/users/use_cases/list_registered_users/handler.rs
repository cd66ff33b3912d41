use crate::modules::users::core::registered_users::RegisteredUsers;
use crate::modules::users::use_cases::list_registered_users::projection::UserRow;

pub const EMPTY_LIST_MESSAGE: &str = "No users registered yet.";

/// Rows in insertion order. The collection is only read.
pub fn list_registered_users(users: &RegisteredUsers) -> Vec<UserRow> {
    users.iter().map(UserRow::from).collect()
}

#[cfg(test)]
mod list_registered_users_tests {
    use super::*;
    use crate::modules::users::core::user_record::UserRecord;
    use crate::test_support::fixtures::records::make_user_record;
    use rstest::rstest;

    #[rstest]
    fn it_should_return_no_rows_for_an_empty_collection() {
        assert!(list_registered_users(&RegisteredUsers::new()).is_empty());
    }

    #[rstest]
    fn it_should_keep_insertion_order_and_fill_missing_phones() {
        let users: RegisteredUsers = vec![
            make_user_record(2, "Bruno"),
            UserRecord {
                phone: "555-0101".into(),
                ..make_user_record(1, "Ana")
            },
        ]
        .into();

        let rows = list_registered_users(&users);

        assert_eq!(
            rows,
            vec![
                UserRow {
                    id: 2,
                    name: "Bruno".into(),
                    email: "bruno@x.com".into(),
                    phone: "-".into(),
                },
                UserRow {
                    id: 1,
                    name: "Ana".into(),
                    email: "ana@x.com".into(),
                    phone: "555-0101".into(),
                },
            ]
        );
    }
}
