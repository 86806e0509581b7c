#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use gallery_api::app::build_app;
use gallery_api::config::{CorsOrigins, ServerConfig};
use gallery_api::state::AppState;
use gallery_core::auth::SharedSecret;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

/// Secret configured for every test app.
pub const SECRET: &str = "test-secret";

/// `Authorization` header value carrying [`SECRET`].
pub fn bearer() -> String {
    format!("Bearer {SECRET}")
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://localhost/gallery_test".to_string(),
        db_max_connections: 1,
        secret: SharedSecret::new(SECRET),
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

/// Build an app whose pool never connects.
///
/// Suitable for requests that are rejected before any query runs.
pub fn build_offline_app() -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/unreachable")
        .expect("lazy pool");
    build_test_app(pool)
}

/// Send a request with an optional JSON body and optional `Authorization`.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    auth: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(AUTHORIZATION, auth);
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

/// POST with the valid secret.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body), Some(&bearer())).await
}

/// PUT with the valid secret.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body), Some(&bearer())).await
}

/// DELETE with the valid secret.
pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None, Some(&bearer())).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
