//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Writes add a
//! human-readable `message`; paginated listings add `pagination`.

use gallery_core::pagination::PageMeta;
use serde::Serialize;

/// Standard `{ "data": T, "message"?: string }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::new(items)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: &'static str) -> Self {
        Self {
            data,
            message: Some(message),
        }
    }
}

/// `{ "data": [T], "pagination": {...} }` envelope for paginated listings.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T: Serialize> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}
