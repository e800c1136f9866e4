//! Structured errors carrying HTTP details, and collections of them

pub mod body;
pub mod codes;
pub mod collection;
pub mod entry;
#[cfg(feature = "axum")]
pub mod response;

pub use body::ErrorBody;
pub use codes::ErrorKind;
pub use collection::{ErrorCollection, DEFAULT_CAPACITY};
pub use entry::{ApiError, ExtError};
