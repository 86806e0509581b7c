//! Presence rules shared by request inputs and query parameters.

use serde::{de, Deserialize, Deserializer};

use crate::types::DbId;

/// Treat empty strings the same as an absent value.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Borrowing variant of [`present`].
pub fn present_ref(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(DbId),
    Text(String),
}

/// Deserialize an optional id given either as a number or a numeric string.
///
/// `null` and `""` both yield `None`. Use with
/// `#[serde(default, deserialize_with = "optional_id")]`.
pub fn optional_id<'de, D>(de: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawId>::deserialize(de)? {
        None => Ok(None),
        Some(RawId::Number(id)) => Ok(Some(id)),
        Some(RawId::Text(text)) => match text.trim() {
            "" => Ok(None),
            digits => digits
                .parse()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid id '{digits}'"))),
        },
    }
}
