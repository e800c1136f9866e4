use serde::{Deserialize, Serialize};
use std::fmt;

use super::body::ErrorBody;
use super::codes::ErrorKind;
use crate::json;

/// Extended error: a regular Rust error that also carries the details an
/// HTTP layer needs to answer a request.
pub trait ExtError: std::error::Error + Send + Sync + 'static {
    /// HTTP status that could be sent in the response status line.
    fn status_code(&self) -> u16;

    /// Short human label, e.g. "Bad Request".
    fn short_message(&self) -> &str;

    /// Detailed information, typically the underlying cause's text.
    fn detailed_description(&self) -> &str;

    /// Input field the error refers to, e.g. a JSON field of the request
    /// body that failed validation. Empty when not field specific.
    fn offending_field(&self) -> &str;

    /// JSON projection. The status code is never part of it.
    fn body(&self) -> ErrorBody<'_> {
        ErrorBody {
            message: self.short_message(),
            description: self.detailed_description(),
            field: self.offending_field(),
        }
    }

    fn to_json(&self) -> json::Result<String> {
        json::to_string(&self.body())
    }
}

/// Default [`ExtError`] implementation.
///
/// Immutable once built. Deserializing yields status code `0` since the
/// code does not travel in the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiError {
    #[serde(skip)]
    code: u16,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    field: String,
}

impl ApiError {
    /// Wrap `cause` with a status, message and field.
    ///
    /// Returns `None` when there is no cause, so callers can pass a possibly
    /// absent error straight through and skip handling when nothing failed.
    pub fn new<E: fmt::Display>(
        cause: Option<E>,
        code: u16,
        message: impl Into<String>,
        field: impl Into<String>,
    ) -> Option<Self> {
        let cause = cause?;
        Some(Self {
            code,
            message: message.into(),
            description: cause.to_string(),
            field: field.into(),
        })
    }

    pub fn from_kind<E: fmt::Display>(
        kind: ErrorKind,
        cause: Option<E>,
        field: impl Into<String>,
    ) -> Option<Self> {
        Self::new(cause, kind.status_code(), kind.label(), field)
    }

    pub fn bad_request<E: fmt::Display>(cause: Option<E>) -> Option<Self> {
        Self::from_kind(ErrorKind::BadRequest, cause, "")
    }

    pub fn unauthorized<E: fmt::Display>(cause: Option<E>) -> Option<Self> {
        Self::from_kind(ErrorKind::Unauthorized, cause, "")
    }

    pub fn forbidden<E: fmt::Display>(cause: Option<E>) -> Option<Self> {
        Self::from_kind(ErrorKind::Forbidden, cause, "")
    }

    pub fn not_found<E: fmt::Display>(cause: Option<E>, field: impl Into<String>) -> Option<Self> {
        Self::from_kind(ErrorKind::NotFound, cause, field)
    }

    pub fn unprocessable_entity<E: fmt::Display>(
        cause: Option<E>,
        field: impl Into<String>,
    ) -> Option<Self> {
        Self::from_kind(ErrorKind::UnprocessableEntity, cause, field)
    }

    pub fn internal_server_error<E: fmt::Display>(cause: Option<E>) -> Option<Self> {
        Self::from_kind(ErrorKind::InternalServerError, cause, "")
    }

    /// Kind matching the status code, if it is one of the known ones
    pub fn kind(&self) -> Option<ErrorKind> {
        ErrorKind::from_status(self.code)
    }
}

impl ExtError for ApiError {
    fn status_code(&self) -> u16 {
        self.code
    }

    fn short_message(&self) -> &str {
        &self.message
    }

    fn detailed_description(&self) -> &str {
        &self.description
    }

    fn offending_field(&self) -> &str {
        &self.field
    }
}

/// `"{message}: {description}"`, or whichever half is non-empty.
impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.message.is_empty(), self.description.is_empty()) {
            (false, false) => write!(f, "{}: {}", self.message, self.description),
            (false, true) => f.write_str(&self.message),
            (true, _) => f.write_str(&self.description),
        }
    }
}

impl std::error::Error for ApiError {}
