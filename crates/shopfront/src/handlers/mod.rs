pub mod echo;
pub mod error;
pub mod products;

pub use error::{AppError, RequestError};
