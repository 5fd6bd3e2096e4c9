/*
 * Responsibility
 * - GET /user (behind the "user" role gate)
 */
use axum::Json;

use crate::api::{dto::responses::MessageResponse, extractors::Authorized};

pub async fn user(Authorized(ctx): Authorized) -> Json<MessageResponse> {
    tracing::debug!(
        subject = ?ctx.subject(),
        roles = ?ctx.roles.iter().collect::<Vec<_>>(),
        "user endpoint"
    );

    Json(MessageResponse {
        message: "Hello, user-level endpoint!",
    })
}
