use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid month abbreviation: {0}")]
    InvalidMonth(String),
    #[error("invalid view role: {0} (expected Assignee or Owner)")]
    InvalidViewRole(String),
    #[error("invalid status: {0} (expected Open, In Progress or Closed)")]
    InvalidStatus(String),
    #[error("invalid RAG: {0} (expected Red, Amber or Green)")]
    InvalidRag(String),
    #[error("invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
}
