use thiserror::Error;

use okra_api::ApiError;
use okra_core::types::ObjectiveId;
use okra_core::ValidationError;
use okra_store::StoreError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no objective with id {0}")]
    UnknownObjective(ObjectiveId),
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("api error: {0}")]
    Api(#[from] ApiError),
}

impl ClientError {
    /// Transport-level failures can be retried as-is; validation errors
    /// and server-rejected requests cannot.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ClientError::Api(
                ApiError::ConnectionFailed(_) | ApiError::RequestFailed(_) | ApiError::Http(_)
            )
        )
    }
}
