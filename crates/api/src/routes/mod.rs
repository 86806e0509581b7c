pub mod category;
pub mod gallery;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /categories         list, create
/// /categories/{id}    get, update, delete
///
/// /gallery            list (paginated), create
/// /gallery/{id}       get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/gallery", gallery::router())
}
