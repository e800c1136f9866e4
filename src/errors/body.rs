use serde::Serialize;

/// Wire projection of a single error.
///
/// Shared by [`ApiError`](super::ApiError) and
/// [`ErrorCollection`](super::ErrorCollection) so every [`ExtError`](super::ExtError)
/// implementation serializes to the same object shape. Empty fields are left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorBody<'a> {
    #[serde(skip_serializing_if = "is_empty")]
    pub message: &'a str,
    #[serde(skip_serializing_if = "is_empty")]
    pub description: &'a str,
    #[serde(skip_serializing_if = "is_empty")]
    pub field: &'a str,
}

fn is_empty(value: &&str) -> bool {
    value.is_empty()
}
