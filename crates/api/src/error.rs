//! API error type.
//!
//! Every handler failure, including rejected bodies and query strings, becomes an `ApiError`, rendered as an
//! `ActionResponse { error: true, message }` body with a status code chosen
//! from the `DomainError` kind.
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use netbridge_domain::DomainError;
use tracing::error;

use crate::dto::ActionResponse;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = match &err {
            DomainError::InvalidNetwork(_)
            | DomainError::InvalidNetworkId(_)
            | DomainError::InvalidPagination(_)
            | DomainError::UpdateNotAllowed => StatusCode::BAD_REQUEST,
            DomainError::NetworkNotFound(_) => StatusCode::NOT_FOUND,
            DomainError::NetworkConflict(_) => StatusCode::CONFLICT,
            DomainError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error!(status = status.as_u16(), error = %err, "Request failed");

        // Store details stay in the log.
        let message = match err {
            DomainError::DatabaseError(_) => "internal server error".to_string(),
            DomainError::InvalidNetwork(msg)
            | DomainError::InvalidNetworkId(msg)
            | DomainError::InvalidPagination(msg)
            | DomainError::NetworkNotFound(msg)
            | DomainError::NetworkConflict(msg) => msg,
            DomainError::UpdateNotAllowed => DomainError::UpdateNotAllowed.to_string(),
        };

        Self::new(status, message)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        error!(error = %rejection, "Rejected request body");
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        error!(error = %rejection, "Rejected query string");
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ActionResponse::failure(self.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_status_codes() {
        let cases = [
            (DomainError::InvalidNetwork("x".into()), StatusCode::BAD_REQUEST),
            (DomainError::InvalidNetworkId("x".into()), StatusCode::BAD_REQUEST),
            (DomainError::InvalidPagination("x".into()), StatusCode::BAD_REQUEST),
            (DomainError::UpdateNotAllowed, StatusCode::BAD_REQUEST),
            (DomainError::NetworkNotFound("x".into()), StatusCode::NOT_FOUND),
            (DomainError::NetworkConflict("x".into()), StatusCode::CONFLICT),
            (
                DomainError::DatabaseError("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn test_database_details_are_not_exposed() {
        let api = ApiError::from(DomainError::DatabaseError("disk I/O error at page 7".into()));
        assert_eq!(api.message, "internal server error");
    }

    #[test]
    fn test_update_not_allowed_message() {
        let api = ApiError::from(DomainError::UpdateNotAllowed);
        assert_eq!(api.message, "only DisplayName can be changed");
    }
}
