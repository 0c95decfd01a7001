//! Bearer-token authentication middleware.
//!
//! Stateless per call: extract the token, verify it through the codec,
//! attach the claims to the request. No user lookup happens here - the
//! gate trusts the token's claims as of issuance, so a deleted user's
//! still-valid token is accepted until it expires.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::AppError;

/// Authenticated user extracted from the verified token claims.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i32,
}

/// Authentication middleware for protected routes.
///
/// The `Authorization` header must be exactly `Bearer <token>`; a missing
/// header, any other scheme, or an empty token value is `Unauthorized`,
/// as is any token the codec rejects (bad signature, malformed, expired).
/// On success a [`CurrentUser`] is injected into the request extensions
/// for downstream handlers.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .filter(|t| !t.is_empty())
        .ok_or(AppError::Unauthorized)?;

    let claims = state.token_codec.decode(token)?;

    request.extensions_mut().insert(CurrentUser {
        id: claims.user_id,
    });

    Ok(next.run(request).await)
}
