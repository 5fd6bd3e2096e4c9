/*
 * Responsibility
 * - URL layout of the service
 * - Which routes sit behind which role gate
 */
use axum::{Router, routing::get};

use crate::api::handlers::{
    admin::admin, health::health, profile::profile, public::public, user::user,
};
use crate::middleware::auth::require_role;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let open = Router::new()
        .route("/health", get(health))
        .route("/public", get(public))
        .route("/profile", get(profile));

    let user_only = require_role(Router::new().route("/user", get(user)), state.clone(), "user");
    let admin_only = require_role(Router::new().route("/admin", get(admin)), state, "admin");

    open.merge(user_only).merge(admin_only)
}
