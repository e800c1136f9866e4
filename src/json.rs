//! JSON encoding helpers and the crate's own failure type

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, JsonError>;

/// Failure to encode or decode an error payload.
///
/// Kept apart from the errors being represented: a `JsonError` means the
/// payload itself could not be produced or read.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("deserialization failed: {0}")]
    Deserialize(#[source] serde_json::Error),
}

pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(JsonError::Serialize)
}

pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(JsonError::Serialize)
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T> {
    serde_json::from_str(input).map_err(JsonError::Deserialize)
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T> {
    serde_json::from_slice(input).map_err(JsonError::Deserialize)
}
