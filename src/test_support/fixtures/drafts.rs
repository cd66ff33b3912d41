// Shared test fixture for registration drafts.
// Defaults come from json/draft.json; setters override single fields.

use crate::modules::users::use_cases::register_user::draft::Draft;
use serde::Deserialize;
use std::fs;

const DRAFT_JSON: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/test_support/fixtures/json/draft.json"
);

#[derive(Debug, Clone, Deserialize)]
pub struct DraftDto {
    pub name: String,
    pub email: String,
    pub phone: String,
}

pub struct DraftBuilder {
    inner: Draft,
}

impl Default for DraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl DraftBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(DRAFT_JSON).unwrap();
        let dto: DraftDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: Draft {
                name: dto.name,
                email: dto.email,
                phone: dto.phone,
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn phone(mut self, v: impl Into<String>) -> Self {
        self.inner.phone = v.into();
        self
    }

    pub fn build(self) -> Draft {
        self.inner
    }
}
