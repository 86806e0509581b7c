//! Handlers for the `/gallery` resource.
//!
//! Every image returned from a read or write has its category expanded,
//! except the delete snapshot which carries the bare category id.
//! Writes require [`RequireSecret`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use gallery_core::error::CoreError;
use gallery_core::pagination::PageMeta;
use gallery_core::types::DbId;
use gallery_db::models::gallery_image::{
    GalleryFilter, GalleryImage, GalleryImageDetail, GalleryImageInput, EMPTY_UPDATE_MESSAGE,
};
use gallery_db::repositories::{CategoryRepo, GalleryImageRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::RequireSecret;
use crate::query::GalleryListParams;
use crate::response::{DataResponse, PaginatedResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Gallery image",
        id,
    })
}

/// Fail with 404 unless the referenced category exists.
async fn ensure_category_exists(state: &AppState, category_id: DbId) -> AppResult<()> {
    if !CategoryRepo::exists(&state.pool, category_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }));
    }
    Ok(())
}

/// Build the listing filter, resolving `categoryName` to a category id.
///
/// A name match replaces any `categoryId`. A name that matches nothing adds
/// no constraint at all.
async fn build_filter(state: &AppState, params: &GalleryListParams) -> AppResult<GalleryFilter> {
    let mut filter = GalleryFilter {
        category_id: params.category_id,
        title_contains: params.search().map(str::to_string),
    };

    if let Some(name) = params.category_name() {
        match CategoryRepo::find_first_by_name(&state.pool, name).await? {
            Some(category) => filter.category_id = Some(category.id),
            None => tracing::debug!(category_name = name, "No category matches name filter"),
        }
    }

    Ok(filter)
}

/// GET /api/gallery
///
/// One page of images, newest first, with pagination metadata.
/// Supports `?page=&limit=&categoryId=&categoryName=&search=`.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<GalleryListParams>,
) -> AppResult<Json<PaginatedResponse<GalleryImageDetail>>> {
    let filter = build_filter(&state, &params).await?;
    let page = params.page_request();

    let result = GalleryImageRepo::list(&state.pool, &filter, page).await?;

    Ok(Json(PaginatedResponse {
        data: result.items,
        pagination: PageMeta::new(result.total, page),
    }))
}

/// GET /api/gallery/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<GalleryImageDetail>>> {
    let image = GalleryImageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse::new(image)))
}

/// POST /api/gallery
///
/// Requires `title`, `url` and `categoryId`; the category must exist.
pub async fn create(
    _gate: RequireSecret,
    State(state): State<AppState>,
    AppJson(input): AppJson<GalleryImageInput>,
) -> AppResult<(StatusCode, Json<DataResponse<GalleryImageDetail>>)> {
    let input = input.into_create()?;
    ensure_category_exists(&state, input.category_id).await?;

    let image = GalleryImageRepo::create(&state.pool, &input).await?;

    tracing::info!(
        image_id = image.id,
        category_id = input.category_id,
        "Gallery image created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::with_message(
            image,
            "Gallery image created successfully",
        )),
    ))
}

/// PUT /api/gallery/{id}
///
/// Partial update of `title`, `url` and `categoryId`. A supplied category
/// must exist. At least one field is required.
pub async fn update(
    _gate: RequireSecret,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<GalleryImageInput>,
) -> AppResult<Json<DataResponse<GalleryImageDetail>>> {
    let input = input.into_update();

    if let Some(category_id) = input.category_id {
        ensure_category_exists(&state, category_id).await?;
    }
    if input.is_empty() {
        return Err(CoreError::Validation(EMPTY_UPDATE_MESSAGE.into()).into());
    }

    let image = GalleryImageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(image_id = id, "Gallery image updated");

    Ok(Json(DataResponse::with_message(
        image,
        "Gallery image updated successfully",
    )))
}

/// DELETE /api/gallery/{id}
pub async fn delete(
    _gate: RequireSecret,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<GalleryImage>>> {
    let image = GalleryImageRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(image_id = id, "Gallery image deleted");

    Ok(Json(DataResponse::with_message(
        image,
        "Gallery image deleted successfully",
    )))
}
