//! `CronAuth` extractor — validates the sweep trigger's shared secret.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use visadesk_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Proof that the caller presented the configured sweep secret.
///
/// Rejection happens before the handler body runs, so an unauthorized
/// trigger performs zero data reads or writes.
#[derive(Debug, Clone, Copy)]
pub struct CronAuth;

#[async_trait]
impl FromRequestParts<AppState> for CronAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let secret = state.config.sweep.cron_secret.as_str();
        if secret.is_empty() {
            return Err(AppError::configuration("sweep.cron_secret is not configured").into());
        }

        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        if token != secret {
            return Err(AppError::unauthorized("Invalid sweep secret").into());
        }

        Ok(CronAuth)
    }
}
