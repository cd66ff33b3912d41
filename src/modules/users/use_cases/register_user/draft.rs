// Values currently bound to the registration form, not yet submitted.
//
// Independent of how they were entered (terminal flags, a future UI).

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Draft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

#[cfg(test)]
mod draft_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_default_to_empty_fields() {
        let draft = Draft::default();
        assert_eq!(draft, Draft::new("", "", ""));
    }
}
