/*
 * Responsibility
 * - The authorized-request context type handlers see
 * - The role gate builds it and stores it in request extensions; handlers
 *   only ever receive this type
 *
 * Notes
 * - Request-scoped: built once per request, dropped with the response
 */
use crate::services::auth::{ClaimSet, RoleSet};

/// Claims of a request that passed a role gate.
#[derive(Debug, Clone)]
pub struct AuthorizationContext {
    pub claims: ClaimSet,
    pub roles: RoleSet,
}

impl AuthorizationContext {
    pub fn new(claims: ClaimSet, roles: RoleSet) -> Self {
        Self { claims, roles }
    }

    pub fn subject(&self) -> Option<&str> {
        self.claims.get_str("sub")
    }
}
