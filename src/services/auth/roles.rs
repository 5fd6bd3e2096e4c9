/*
 * Responsibility
 * - ClaimSet → RoleSet (provider-specific shape → canonical role names)
 * - Pure: no lookups, same claims always give the same roles
 */
use std::collections::BTreeSet;

use thiserror::Error;

use super::claims::ClaimSet;

/// Top-level, array-valued claim the identity provider flattens roles into.
/// Pointing at another provider means changing this constant only.
pub const ROLES_CLAIM: &str = "roles";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoleError {
    /// The roles claim is absent or is not an array.
    #[error("roles claim missing or not an array")]
    RolesClaimMissing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(BTreeSet<String>);

impl RoleSet {
    pub fn from_claims(claims: &ClaimSet) -> Result<Self, RoleError> {
        let items = claims
            .get(ROLES_CLAIM)
            .and_then(|v| v.as_array().ok())
            .ok_or(RoleError::RolesClaimMissing)?;

        // non-string entries are dropped, not errors
        Ok(Self(
            items
                .iter()
                .filter_map(|v| v.as_str().ok())
                .map(str::to_owned)
                .collect(),
        ))
    }

    pub fn contains(&self, role: &str) -> bool {
        self.0.contains(role)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::claims::{ClaimValue, decode_claims, test_tokens::token_with};
    use serde_json::json;

    fn roles_of(payload: serde_json::Value) -> Result<RoleSet, RoleError> {
        RoleSet::from_claims(&decode_claims(&token_with(&payload)).unwrap())
    }

    #[test]
    fn keeps_string_roles_and_drops_the_rest() {
        let roles = roles_of(json!({"roles": ["user", 1, null, {"x": 1}, "admin", true]})).unwrap();
        assert_eq!(roles.iter().collect::<Vec<_>>(), vec!["admin", "user"]);
    }

    #[test]
    fn absent_claim_differs_from_empty_array() {
        assert_eq!(roles_of(json!({"sub": "abc"})), Err(RoleError::RolesClaimMissing));

        let empty = roles_of(json!({"roles": []})).unwrap();
        assert_eq!(empty, RoleSet::default());
    }

    #[test]
    fn non_array_claim_is_missing() {
        assert_eq!(roles_of(json!({"roles": "admin"})), Err(RoleError::RolesClaimMissing));
        assert_eq!(roles_of(json!({"roles": {"admin": true}})), Err(RoleError::RolesClaimMissing));
    }

    #[test]
    fn nested_provider_shape_is_not_read() {
        assert_eq!(
            roles_of(json!({"realm_access": {"roles": ["admin"]}})),
            Err(RoleError::RolesClaimMissing)
        );
    }

    #[test]
    fn normalizing_is_pure() {
        let claims: ClaimSet = [(
            ROLES_CLAIM.to_string(),
            ClaimValue::Array(vec![ClaimValue::String("user".into())]),
        )]
        .into_iter()
        .collect();

        assert_eq!(RoleSet::from_claims(&claims), RoleSet::from_claims(&claims));
        assert_eq!(RoleSet::from_claims(&claims).unwrap().iter().count(), 1);
    }
}
