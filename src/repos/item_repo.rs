/*
 * Responsibility
 * - Data store seam used by the admin endpoint (count records in a collection)
 * - PostgreSQL implementation on a shared PgPool
 *
 * Notes
 * - The pool is opened once at startup and cloned into every request.
 *   Concurrent access is serialized by the pool, not by callers.
 */
use std::time::Duration;

use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::repos::error::RepoError;

/// Read-only view of the external store.
#[async_trait]
pub trait ItemStore: Send + Sync + 'static {
    // Returns the backend name (for logging).
    fn backend_name(&self) -> &'static str;

    // Connectivity check.
    async fn ping(&self) -> Result<(), RepoError>;

    // Number of records in `collection`. Never negative.
    async fn count_records(&self, collection: &str) -> Result<u64, RepoError>;
}

/// Collection names are spliced into SQL, so only plain identifiers pass.
pub fn validate_collection(name: &str) -> Result<&str, RepoError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(name)
    } else {
        Err(RepoError::InvalidCollection(name.to_string()))
    }
}

#[derive(Clone, Debug)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open the pool and ping it. Both steps share `timeout`.
    pub async fn connect(url: &str, timeout: Duration) -> Result<Self, RepoError> {
        let connect = async {
            let pool = PgPoolOptions::new()
                .acquire_timeout(timeout)
                .connect(url)
                .await?;
            let store = Self::new(pool);
            store.ping().await?;
            Ok::<_, RepoError>(store)
        };

        tokio::time::timeout(timeout, connect)
            .await
            .map_err(|_| RepoError::Timeout(timeout))?
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> Result<(), RepoError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn count_records(&self, collection: &str) -> Result<u64, RepoError> {
        let collection = validate_collection(collection)?;
        let sql = format!(r#"SELECT COUNT(*) FROM "{collection}""#);

        let count = sqlx::query_scalar::<_, i64>(&sql).fetch_one(&self.pool).await?;

        u64::try_from(count).map_err(|_| RepoError::NegativeCount(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        for name in ["items", "_items", "items_2024", "Items"] {
            assert_eq!(validate_collection(name).unwrap(), name);
        }
    }

    #[test]
    fn rejects_anything_that_needs_quoting() {
        for name in ["", "2items", "items; DROP TABLE items", "it\"ems", "items-archive", "ítems"] {
            assert!(
                matches!(validate_collection(name), Err(RepoError::InvalidCollection(_))),
                "{name}"
            );
        }
    }

    #[tokio::test]
    async fn connect_to_unreachable_store_fails() {
        let res = PgItemStore::connect(
            "postgres://nobody@127.0.0.1:1/none",
            Duration::from_millis(500),
        )
        .await;
        assert!(res.is_err());
    }
}
