/*
 * Responsibility
 * - What a store failure means to callers (handlers map all of these to 500)
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("db error")]
    Db(#[from] sqlx::Error),
    #[error("db did not answer within {0:?}")]
    Timeout(std::time::Duration),
    #[error("invalid collection name: {0:?}")]
    InvalidCollection(String),
    #[error("db returned a negative count: {0}")]
    NegativeCount(i64),
}
