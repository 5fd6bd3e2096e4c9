/*
 * Responsibility
 * - GET /admin (behind the "admin" role gate)
 * - Adds the record count of the configured collection; store failure → 500
 */
use axum::{Json, extract::State};

use crate::{
    api::{dto::responses::AdminResponse, extractors::Authorized},
    error::AppError,
    state::AppState,
};

pub async fn admin(
    State(state): State<AppState>,
    Authorized(ctx): Authorized,
) -> Result<Json<AdminResponse>, AppError> {
    let count = state
        .store
        .count_records(&state.items_collection)
        .await
        .map_err(|err| {
            tracing::error!(
                error = ?err,
                backend = state.store.backend_name(),
                collection = %state.items_collection,
                subject = ?ctx.subject(),
                "count query failed"
            );
            AppError::from(err)
        })?;

    Ok(Json(AdminResponse {
        message: "Hello, admin-level endpoint!",
        item_count_db: count,
    }))
}
