pub mod error;
pub mod http_client;
pub mod transport;
pub mod wire;

pub use error::ApiError;
pub use http_client::HttpApiClient;
pub use transport::ObjectiveTransport;
