pub mod error;
pub mod models;
pub mod validation;

pub use error::{HttpError, ErrorCode};
pub use models::*;
pub use validation::*;
