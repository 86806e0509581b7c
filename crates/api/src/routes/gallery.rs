//! Route definitions for the `/gallery` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Routes mounted at `/gallery`.
///
/// ```text
/// GET    /        -> list (?page, limit, categoryId, categoryName, search)
/// POST   /        -> create (secret)
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update (secret)
/// DELETE /{id}    -> delete (secret)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::list).post(gallery::create))
        .route(
            "/{id}",
            get(gallery::get_by_id)
                .put(gallery::update)
                .delete(gallery::delete),
        )
}
