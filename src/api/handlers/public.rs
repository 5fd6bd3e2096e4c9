/*
 * Responsibility
 * - GET /public: fixed payload, no gate, no claim parsing
 */
use axum::Json;

use crate::api::dto::responses::MessageResponse;

pub async fn public() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "This is a public endpoint.",
    })
}
