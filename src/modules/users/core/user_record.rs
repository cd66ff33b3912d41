use serde::{Deserialize, Deserializer, Serialize};

/// One registered user. Field names on the wire follow the stored format
/// written by the first version of the form (`nome`, `telefone`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone", default, deserialize_with = "empty_if_null")]
    pub phone: String,
}

fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
