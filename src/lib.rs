//! Extended errors for HTTP services.
//!
//! [`ApiError`] wraps an underlying cause together with the status code,
//! short message and offending field a service wants to report.
//! [`ErrorCollection`] groups several of them, e.g. for validation that
//! reports every failed field at once. Both serialize to the response body;
//! the status code stays out of it and is read with
//! [`ExtError::status_code`].

pub mod errors;
pub mod json;

pub use errors::{ApiError, ErrorBody, ErrorCollection, ErrorKind, ExtError};
pub use json::JsonError;
