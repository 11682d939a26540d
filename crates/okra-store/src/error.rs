use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cache payload corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
