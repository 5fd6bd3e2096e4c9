/*
 * Responsibility
 * - GET /profile: any parseable bearer token (no role requirement)
 * - Echo display name / subject / issue time / raw roles claim
 * - A missing or malformed roles claim does NOT block this route
 */
use axum::Json;

use crate::api::{dto::responses::ProfileResponse, extractors::Claims};
use crate::services::auth::ROLES_CLAIM;

pub async fn profile(Claims(claims): Claims) -> Json<ProfileResponse> {
    let username = claims.get_str("preferred_username").unwrap_or_default();

    Json(ProfileResponse {
        message: format!("Hello, {username}"),
        roles: claims.get(ROLES_CLAIM).cloned(),
        subject: claims.get("sub").cloned(),
        issued_at: claims.get("iat").cloned(),
    })
}
