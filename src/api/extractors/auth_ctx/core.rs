use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::ClaimSet;
use crate::state::AppState;

use super::AuthorizationContext;

/// Extractor handing the AuthorizationContext to a handler.
/// Expects a role gate to have inserted it into request.extensions().
/// Missing context means the route has no gate in front of it: 401.
pub struct Authorized(pub AuthorizationContext);

impl FromRequestParts<AppState> for Authorized
where
    AppState: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthorizationContext>()
            .cloned()
            .map(Authorized)
            .ok_or_else(|| AppError::Unauthorized("request did not pass a role gate".into()))
    }
}

/// Claims of any parseable bearer token; no role requirement.
pub struct Claims(pub ClaimSet);

impl FromRequestParts<AppState> for Claims {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match state.tokens.claims(&parts.headers) {
            Ok(claims) => Ok(Claims(claims)),
            Err(err) => {
                tracing::warn!(
                    source = state.tokens.name(),
                    error = %err,
                    "bearer token rejected"
                );
                Err(err.into())
            }
        }
    }
}
