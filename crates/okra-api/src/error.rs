use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("request failed: {0}")]
    RequestFailed(String),
    /// The server answered `success: false`; the message is surfaced
    /// verbatim to the user.
    #[error("{0}")]
    Rejected(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
