pub mod claims;
pub mod roles;
pub mod token_source;

pub use claims::{ClaimSet, ClaimValue, ClaimsError};
pub use roles::{ROLES_CLAIM, RoleError, RoleSet};
pub use token_source::{GatewayBearerSource, ValidatedTokenSource};
