use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::AuthError;

/// ApiError
///
/// The single error type returned by every handler. Each variant maps to one
/// HTTP status code, and all of them serialize into the same JSON envelope:
/// `{"success": false, "error": <status>, "message": <string>}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body was malformed or a required field was missing/empty.
    #[error("bad request")]
    BadRequest,

    /// The requested record does not exist, or the collection is empty.
    #[error("resource not found")]
    NotFound,

    /// The store rejected the mutation (constraint violation or driver error).
    #[error("unprocessable")]
    Unprocessable,

    /// Token or permission failure. The status (401 or 403) is carried on the
    /// inner error.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Auth(err) => err.status(),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("store error: {:?}", err);
        ApiError::Unprocessable
    }
}

/// ErrorBody
///
/// The JSON envelope shared by every failed response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    /// The HTTP status code, repeated in the body.
    pub error: u16,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
