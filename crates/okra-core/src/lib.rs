pub mod datefmt;
pub mod error;
pub mod month;
pub mod page;
pub mod types;
pub mod validate;

pub use error::CoreError;
pub use month::Month;
pub use page::{paginate, Page};
pub use validate::ValidationError;
