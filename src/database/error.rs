use actix_web::error::BlockingError;
use thiserror::Error;

/// Failures talking to the backing store. A missing row is not one of them:
/// lookups report absence as `None` or an empty `Vec`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("DB connection: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("DB error: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("DB worker: {0}")]
    Blocking(#[from] BlockingError),
}
