//! Role gate: bearer claims → roles → required role check → AuthorizationContext in extensions.
//!
//! Chain (each step short-circuits):
//! - token source / claim extractor fails → 401 with the extractor's reason
//! - roles claim absent or not an array → 403 "cannot determine roles"
//! - required role not in the RoleSet → 403 "missing role: <role>"
//!
//! Signature, issuer, audience and expiry were checked by the API gateway.
//! Nothing here re-verifies them.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::{self, Next},
    response::Response,
};
use thiserror::Error;

use crate::api::extractors::AuthorizationContext;
use crate::error::AppError;
use crate::services::auth::{ClaimsError, RoleError, RoleSet, ValidatedTokenSource};
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error(transparent)]
    Unauthenticated(#[from] ClaimsError),
    #[error("cannot determine roles")]
    CannotDetermineRoles(#[source] RoleError),
    #[error("missing role: {0}")]
    InsufficientRole(String),
}

/// Guard parameterized by one required role. Stateless across requests.
#[derive(Clone)]
pub struct RoleGate {
    state: AppState,
    required: &'static str,
}

impl RoleGate {
    pub fn new(state: AppState, required: &'static str) -> Self {
        Self { state, required }
    }

    pub fn required(&self) -> &'static str {
        self.required
    }

    /// Run the whole chain against one request's headers.
    pub fn evaluate(&self, headers: &HeaderMap) -> Result<AuthorizationContext, GateError> {
        evaluate(self.state.tokens.as_ref(), headers, self.required)
    }
}

pub fn evaluate(
    tokens: &dyn ValidatedTokenSource,
    headers: &HeaderMap,
    required: &str,
) -> Result<AuthorizationContext, GateError> {
    let claims = tokens.claims(headers)?;
    let roles = RoleSet::from_claims(&claims).map_err(GateError::CannotDetermineRoles)?;

    if !roles.contains(required) {
        return Err(GateError::InsufficientRole(required.to_string()));
    }

    Ok(AuthorizationContext::new(claims, roles))
}

/// Put `required` in front of every route of `router`.
///
/// Example:
/// ```ignore
/// let admin = Router::new().route("/admin", get(admin));
/// let admin = middleware::auth::role_gate::require_role(admin, state.clone(), "admin");
/// ```
pub fn require_role(
    router: Router<AppState>,
    state: AppState,
    required: &'static str,
) -> Router<AppState> {
    // route_layer: unmatched paths still fall through to 404 instead of hitting the gate
    router.route_layer(middleware::from_fn_with_state(
        RoleGate::new(state, required),
        role_gate_middleware,
    ))
}

async fn role_gate_middleware(
    State(gate): State<RoleGate>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let ctx = match gate.evaluate(req.headers()) {
        Ok(ctx) => ctx,
        Err(err) => {
            tracing::warn!(
                required_role = gate.required(),
                error = %err,
                "role gate rejected request"
            );
            return Err(err.into());
        }
    };

    // handed to the Authorized extractor
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::GatewayBearerSource;
    use crate::services::auth::claims::test_tokens::bearer;
    use axum::http::{HeaderValue, header};
    use serde_json::json;

    fn headers_for(payload: serde_json::Value) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&bearer(&payload)).unwrap(),
        );
        headers
    }

    fn gate(headers: &HeaderMap, role: &str) -> Result<AuthorizationContext, GateError> {
        evaluate(&GatewayBearerSource, headers, role)
    }

    #[test]
    fn no_header_is_unauthenticated() {
        let err = gate(&HeaderMap::new(), "user").unwrap_err();
        assert_eq!(err, GateError::Unauthenticated(ClaimsError::missing_header()));
    }

    #[test]
    fn missing_roles_claim_cannot_determine_roles() {
        let err = gate(&headers_for(json!({"sub": "abc"})), "user").unwrap_err();
        assert_eq!(err, GateError::CannotDetermineRoles(RoleError::RolesClaimMissing));

        let err = gate(&headers_for(json!({"roles": "user"})), "user").unwrap_err();
        assert_eq!(err, GateError::CannotDetermineRoles(RoleError::RolesClaimMissing));
    }

    #[test]
    fn required_role_among_mixed_elements_passes() {
        let headers = headers_for(json!({"sub": "abc", "roles": [1, "viewer", null, "user"]}));
        let ctx = gate(&headers, "user").unwrap();
        assert_eq!(ctx.subject(), Some("abc"));
        assert!(ctx.roles.contains("viewer"));
    }

    #[test]
    fn user_and_admin_tokens_are_inverse() {
        let user = headers_for(json!({"roles": ["user"]}));
        let admin = headers_for(json!({"roles": ["admin"]}));

        assert!(gate(&user, "user").is_ok());
        assert_eq!(
            gate(&user, "admin").unwrap_err(),
            GateError::InsufficientRole("admin".into())
        );

        assert!(gate(&admin, "admin").is_ok());
        assert_eq!(
            gate(&admin, "user").unwrap_err(),
            GateError::InsufficientRole("user".into())
        );
    }

    #[test]
    fn empty_roles_names_the_missing_role() {
        let err = gate(&headers_for(json!({"roles": []})), "admin").unwrap_err();
        assert_eq!(err.to_string(), "missing role: admin");
    }
}
