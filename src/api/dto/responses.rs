/*
 * Responsibility
 * - JSON bodies returned by the handlers
 * - Field names are part of the public contract (camelCase where clients expect it)
 */
use serde::Serialize;

use crate::services::auth::ClaimValue;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Raw claim values are echoed back; an absent claim becomes `null`.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub message: String,
    pub roles: Option<ClaimValue>,
    pub subject: Option<ClaimValue>,
    #[serde(rename = "issuedAt")]
    pub issued_at: Option<ClaimValue>,
}

#[derive(Debug, Serialize)]
pub struct AdminResponse {
    pub message: &'static str,
    #[serde(rename = "itemCountDB")]
    pub item_count_db: u64,
}
