//! Root-level health endpoint.
//!
//! Reports whether the database answers and, when it does, how many
//! categories and gallery images it holds.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Payload of `GET /health`. Counts are `null` when the database is down.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub categories: Option<i64>,
    pub gallery_images: Option<i64>,
}

impl HealthResponse {
    fn from_stats(stats: Option<gallery_db::StoreStats>) -> Self {
        Self {
            status: if stats.is_some() { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy: stats.is_some(),
            categories: stats.map(|s| s.categories),
            gallery_images: stats.map(|s| s.gallery_images),
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = match gallery_db::store_stats(&state.pool).await {
        Ok(stats) => Some(stats),
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            None
        }
    };
    Json(HealthResponse::from_stats(stats))
}

/// Routes mounted at the root, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
