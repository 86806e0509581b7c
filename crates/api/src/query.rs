//! Shared query parameter types for API handlers.

use std::fmt;
use std::str::FromStr;

use gallery_core::pagination::PageRequest;
use gallery_core::types::DbId;
use gallery_core::validation::present_ref;
use serde::{de, Deserialize, Deserializer};

/// Query parameters for `GET /api/gallery`.
///
/// Empty values (`?search=`) are treated as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryListParams {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub category_id: Option<DbId>,
    #[serde(default, deserialize_with = "text_without_nul")]
    pub category_name: Option<String>,
    #[serde(default, deserialize_with = "text_without_nul")]
    pub search: Option<String>,
}

impl GalleryListParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }

    pub fn category_name(&self) -> Option<&str> {
        present_ref(&self.category_name)
    }

    pub fn search(&self) -> Option<&str> {
        present_ref(&self.search)
    }
}

/// Parse an optional value, mapping an empty string to `None`.
fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => FromStr::from_str(s).map(Some).map_err(de::Error::custom),
    }
}

/// Text filters end up in SQL parameters, which cannot carry NUL.
fn text_without_nul<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(de)?;
    if opt.as_deref().is_some_and(|s| s.contains('\0')) {
        return Err(de::Error::custom("text filters must not contain NUL characters"));
    }
    Ok(opt)
}
