//! Gallery image model.
//!
//! Images reference a category by id. Reads return [`GalleryImageDetail`],
//! which carries the referenced [`Category`] in place of the bare id.

use gallery_core::error::CoreError;
use gallery_core::types::{DbId, Timestamp};
use gallery_core::validation::{optional_id, present};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::category::Category;

/// Returned when a create is missing any of its three fields.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title, URL and category ID are required";

/// Returned when an update supplies nothing to change.
pub const EMPTY_UPDATE_MESSAGE: &str = "No valid fields to update";

/// A row from the `gallery_images` table, with the category as a bare id.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: DbId,
    pub title: String,
    pub url: String,
    #[serde(rename = "category")]
    pub category_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A gallery image with its category expanded.
///
/// `category` is `None` when the referenced category has been deleted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImageDetail {
    pub id: DbId,
    pub title: String,
    pub url: String,
    pub category: Option<Category>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Flat row produced by the `gallery_images LEFT JOIN categories` queries.
#[derive(Debug, FromRow)]
pub struct GalleryImageRow {
    pub id: DbId,
    pub title: String,
    pub url: String,
    pub category_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub cat_id: Option<DbId>,
    pub cat_name: Option<String>,
    pub cat_description: Option<String>,
    pub cat_image: Option<String>,
    pub cat_created_at: Option<Timestamp>,
    pub cat_updated_at: Option<Timestamp>,
}

impl From<GalleryImageRow> for GalleryImageDetail {
    fn from(row: GalleryImageRow) -> Self {
        let category = match (
            row.cat_id,
            row.cat_name,
            row.cat_description,
            row.cat_created_at,
            row.cat_updated_at,
        ) {
            (Some(id), Some(name), Some(description), Some(created_at), Some(updated_at)) => {
                Some(Category {
                    id,
                    name,
                    description,
                    image: row.cat_image,
                    created_at,
                    updated_at,
                })
            }
            _ => None,
        };

        Self {
            id: row.id,
            title: row.title,
            url: row.url,
            category,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Request body accepted by both `POST` and `PUT` on gallery images.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImageInput {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "optional_id")]
    #[validate(required)]
    pub category_id: Option<DbId>,
}

/// Validated DTO for creating a gallery image.
#[derive(Debug, Clone)]
pub struct CreateGalleryImage {
    pub title: String,
    pub url: String,
    pub category_id: DbId,
}

/// Partial update; only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateGalleryImage {
    pub title: Option<String>,
    pub url: Option<String>,
    pub category_id: Option<DbId>,
}

impl UpdateGalleryImage {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.url.is_none() && self.category_id.is_none()
    }
}

impl GalleryImageInput {
    /// Validate the body for a create.
    pub fn into_create(self) -> Result<CreateGalleryImage, CoreError> {
        self.validate()
            .map_err(|_| CoreError::Validation(REQUIRED_FIELDS_MESSAGE.into()))?;
        let (Some(title), Some(url), Some(category_id)) = (self.title, self.url, self.category_id)
        else {
            return Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.into()));
        };
        Ok(CreateGalleryImage {
            title,
            url,
            category_id,
        })
    }

    /// Keep whichever fields were supplied. Empty strings are dropped.
    ///
    /// The result may be empty; callers decide when to reject that, since the
    /// category reference has to be checked first.
    pub fn into_update(self) -> UpdateGalleryImage {
        UpdateGalleryImage {
            title: present(self.title),
            url: present(self.url),
            category_id: self.category_id,
        }
    }
}

/// One page of a gallery listing plus the total number of matches.
#[derive(Debug, Clone)]
pub struct GalleryImagePage {
    pub items: Vec<GalleryImageDetail>,
    pub total: i64,
}

/// Filter for gallery listings. All conditions are ANDed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryFilter {
    /// Exact match on the referenced category.
    pub category_id: Option<DbId>,
    /// Case-insensitive literal substring of the title.
    pub title_contains: Option<String>,
}
