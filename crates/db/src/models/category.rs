//! Category model.

use gallery_core::error::CoreError;
use gallery_core::types::{DbId, Timestamp};
use gallery_core::validation::present;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Returned when `name` or `description` is missing on a write.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name and description are required";

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body accepted by both `POST` and `PUT` on categories.
///
/// Fields are optional at the wire level so that a missing field surfaces as
/// a validation error rather than a deserialization failure.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CategoryInput {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Validated DTO for creating a category.
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
}

/// Validated DTO for updating a category.
///
/// Only `name` and `description` are written on update; `image` is accepted
/// on the wire but never applied.
#[derive(Debug, Clone)]
pub struct UpdateCategory {
    pub name: String,
    pub description: String,
}

impl CategoryInput {
    fn required(self) -> Result<(String, String, Option<String>), CoreError> {
        self.validate()
            .map_err(|_| CoreError::Validation(REQUIRED_FIELDS_MESSAGE.into()))?;
        let (Some(name), Some(description)) = (self.name, self.description) else {
            return Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.into()));
        };
        Ok((name, description, present(self.image)))
    }

    /// Validate the body for a create.
    pub fn into_create(self) -> Result<CreateCategory, CoreError> {
        let (name, description, image) = self.required()?;
        Ok(CreateCategory {
            name,
            description,
            image,
        })
    }

    /// Validate the body for an update.
    pub fn into_update(self) -> Result<UpdateCategory, CoreError> {
        let (name, description, _image) = self.required()?;
        Ok(UpdateCategory { name, description })
    }
}
