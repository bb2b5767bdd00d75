use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::warn;

use crate::error::ApiError;
use crate::models::AppState;

/// Caller identity for authenticated routes. The bearer token is the
/// opaque player id handed out at registration; possession of the id is
/// the whole authentication scheme.
#[derive(Debug, Clone)]
pub struct AuthenticatedPlayer {
    pub player_id: String,
}

impl FromRequestParts<AppState> for AuthenticatedPlayer {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .ok_or(ApiError::Unauthorized)?
            .to_str()
            .map_err(|_| ApiError::Unauthorized)?;

        if !auth_header.starts_with("Bearer ") {
            warn!("invalid Authorization header format");
            return Err(ApiError::Unauthorized);
        }

        let token = &auth_header[7..];

        let player = state.player_service.resolve(token).await.map_err(|_| {
            warn!("bearer token does not resolve to a registered player");
            ApiError::Unauthorized
        })?;

        Ok(AuthenticatedPlayer {
            player_id: player.id,
        })
    }
}
