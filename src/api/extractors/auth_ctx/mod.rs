/*!
 * Authentication context extractors
 *
 * Responsibility:
 * - Hand the per-request identity (ClaimSet / AuthorizationContext) to handlers
 * - axum glue stays in core, the context type lives in types
 *
 * Public API:
 * - AuthorizationContext
 * - Authorized (after a role gate)
 * - Claims (any parseable token)
 */

mod core;
mod types;

pub use self::core::{Authorized, Claims};
pub use self::types::AuthorizationContext;
