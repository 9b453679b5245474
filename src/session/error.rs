use crate::api::ApiError;
use crate::storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Session storage failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Stored user record is invalid: {0}")]
    InvalidRecord(#[from] serde_json::Error),
}
