use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use super::collection::ErrorCollection;
use super::entry::{ApiError, ExtError};

/// Status line for an entry; anything that is not a valid HTTP status
/// becomes 500.
pub fn status_of(err: &dyn ExtError) -> StatusCode {
    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Highest status among the entries, 500 when there are none
pub fn collection_status(errs: &ErrorCollection) -> StatusCode {
    errs.iter()
        .map(|entry| status_of(&**entry))
        .max_by_key(|status| status.as_u16())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn log_response(status: StatusCode, count: usize, text: &dyn std::fmt::Display) {
    if status.is_server_error() {
        error!(
            status = %status.as_u16(),
            errors = count,
            error = %text,
            "Responding with server error"
        );
    } else if status.is_client_error() {
        warn!(
            status = %status.as_u16(),
            errors = count,
            error = %text,
            "Responding with client error"
        );
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_of(&self);
        log_response(status, 1, &self);

        (status, Json(self)).into_response()
    }
}

impl IntoResponse for ErrorCollection {
    fn into_response(self) -> Response {
        let status = collection_status(&self);
        log_response(status, self.len(), &self);

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(err: Option<ApiError>) -> Box<dyn ExtError> {
        Box::new(err.unwrap())
    }

    #[test]
    fn test_into_response_status_bad_request() {
        let response = ApiError::bad_request(Some("bad json")).unwrap().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_into_response_status_unauthorized() {
        let response = ApiError::unauthorized(Some("no token")).unwrap().into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_into_response_status_forbidden() {
        let response = ApiError::forbidden(Some("admin only")).unwrap().into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_into_response_status_not_found() {
        let response = ApiError::not_found(Some("user 42"), "user_id")
            .unwrap()
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_into_response_status_unprocessable_entity() {
        let response = ApiError::unprocessable_entity(Some("too short"), "password")
            .unwrap()
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_into_response_status_internal_error() {
        let response = ApiError::internal_server_error(Some("db down"))
            .unwrap()
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_code_falls_back_to_500() {
        let err = ApiError::new(Some("odd"), 42, "Odd", "").unwrap();
        assert_eq!(status_of(&err), StatusCode::INTERNAL_SERVER_ERROR);

        // deserialized entries carry code 0
        let err: ApiError = serde_json::from_str(r#"{"message":"x"}"#).unwrap();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_collection_uses_highest_status() {
        let mut errs = ErrorCollection::new();
        errs.add(vec![
            boxed(ApiError::unprocessable_entity(Some("too short"), "password")),
            boxed(ApiError::not_found(Some("no such team"), "team_id")),
        ]);
        assert_eq!(collection_status(&errs), StatusCode::UNPROCESSABLE_ENTITY);

        errs.push_opt(ApiError::internal_server_error(Some("db down")));
        assert_eq!(
            errs.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_empty_collection_is_500() {
        let response = ErrorCollection::new().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_response_is_json() {
        let response = ApiError::bad_request(Some("x")).unwrap().into_response();
        assert_eq!(response.headers()["content-type"], "application/json");
    }
}
