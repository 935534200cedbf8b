//! HTTP error types for the Folio server.
//!
//! Maps domain errors from `folio-core` into HTTP responses. Two body shapes
//! are in use: the token guard and the data route answer with
//! `{"error": ...}`, while login and update answer with
//! `{"success": false, "message": ...}`. Internal failures are logged with
//! their detail and reach the client only as a fixed generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use folio_core::error::{AuthError, TokenError, ValidationError};

/// Application-level error returned from HTTP handlers and middleware.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The bearer token guard refused the request.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A submitted portfolio document was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Client sent invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Login failed.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Reading the document for `/data` failed.
    #[error("fetch failed: {0}")]
    FetchFailed(String),

    /// Any other internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

/// `{"error": ...}` body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// `{"success": false, "message": ...}` body.
#[derive(Serialize)]
struct FailureBody {
    success: bool,
    message: String,
}

fn error_body(status: StatusCode, error: String) -> Response {
    (status, axum::Json(ErrorBody { error })).into_response()
}

fn failure_body(status: StatusCode, message: String) -> Response {
    let body = FailureBody {
        success: false,
        message,
    };
    (status, axum::Json(body)).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Auth(err) => error_body(StatusCode::UNAUTHORIZED, err.to_string()),
            Self::Validation(err) => failure_body(StatusCode::BAD_REQUEST, err.to_string()),
            Self::BadRequest(msg) => failure_body(StatusCode::BAD_REQUEST, msg),
            Self::Unauthorized(msg) => failure_body(StatusCode::UNAUTHORIZED, msg),
            Self::FetchFailed(detail) => {
                tracing::error!(error = %detail, "error fetching data");
                error_body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch data".to_owned(),
                )
            }
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "internal error");
                failure_body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_owned(),
                )
            }
        }
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        Self::Internal(err.to_string())
    }
}
