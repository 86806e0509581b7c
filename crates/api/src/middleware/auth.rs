//! Shared-secret authorization extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use gallery_core::auth::authorize;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried `Authorization: Bearer <APP_SECRET>`.
///
/// List it as the FIRST extractor of every mutating handler so the check
/// runs before the body is parsed or the database is touched:
///
/// ```ignore
/// async fn delete(_gate: RequireSecret, State(state): State<AppState>) -> AppResult<()> {
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireSecret;

impl FromRequestParts<AppState> for RequireSecret {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        authorize(header, &state.config.secret).map_err(|err| {
            tracing::warn!(
                method = %parts.method,
                path = %parts.uri.path(),
                "Rejected write request",
            );
            AppError::Core(err)
        })?;

        Ok(RequireSecret)
    }
}
