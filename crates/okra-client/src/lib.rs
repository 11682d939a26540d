pub mod error;
pub mod repository;

pub use error::ClientError;
pub use repository::ObjectiveRepository;
