//! Handlers for the `/categories` resource.
//!
//! Reads are public. Writes require [`RequireSecret`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use gallery_core::error::CoreError;
use gallery_core::types::DbId;
use gallery_db::models::category::{Category, CategoryInput};
use gallery_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::RequireSecret;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

/// GET /api/categories
///
/// All categories, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(categories)))
}

/// GET /api/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Category>>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse::new(category)))
}

/// POST /api/categories
pub async fn create(
    _gate: RequireSecret,
    State(state): State<AppState>,
    AppJson(input): AppJson<CategoryInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Category>>)> {
    let input = input.into_create()?;
    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = category.id, name = %category.name, "Category created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::with_message(
            category,
            "Category created successfully",
        )),
    ))
}

/// PUT /api/categories/{id}
///
/// Rewrites `name` and `description`. An `image` in the body is accepted but
/// not applied.
pub async fn update(
    _gate: RequireSecret,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<CategoryInput>,
) -> AppResult<Json<DataResponse<Category>>> {
    if input.image.is_some() {
        tracing::debug!(category_id = id, "Ignoring image on category update");
    }
    let input = input.into_update()?;

    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(category_id = id, "Category updated");

    Ok(Json(DataResponse::with_message(
        category,
        "Category updated successfully",
    )))
}

/// DELETE /api/categories/{id}
///
/// Returns the deleted row. Images that reference it are left in place.
pub async fn delete(
    _gate: RequireSecret,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Category>>> {
    let category = CategoryRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(category_id = id, "Category deleted");

    Ok(Json(DataResponse::with_message(
        category,
        "Category deleted successfully",
    )))
}
